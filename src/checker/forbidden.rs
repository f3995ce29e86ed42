use regex::Regex;

use crate::config::ForbiddenConfig;
use crate::error::{Result, StyleGuardError};

use super::problem::{Problem, ProblemKind, pad};
use super::{Checker, SourceFile};

/// Flags lines matching any configured pattern, such as leftover console
/// output or debug-only includes.
pub struct ForbiddenChecker {
    patterns: Vec<Regex>,
}

impl ForbiddenChecker {
    /// # Errors
    /// Returns an error if a pattern is not a valid regular expression.
    pub fn new(config: &ForbiddenConfig) -> Result<Self> {
        let patterns = config
            .patterns
            .iter()
            .map(|pattern| {
                Regex::new(pattern).map_err(|source| StyleGuardError::InvalidRegex {
                    pattern: pattern.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl Checker for ForbiddenChecker {
    fn name(&self) -> &'static str {
        "forbidden"
    }

    fn check(&self, file: &SourceFile<'_>) -> Vec<Problem> {
        let mut problems = Vec::new();

        for (i, line) in file.lines.iter().enumerate() {
            // One finding per line, for the first pattern that hits.
            if let Some(pattern) = self.patterns.iter().find(|p| p.is_match(line)) {
                let detail = format!(
                    "{} {} {}",
                    pad(i + 1, 4),
                    pad(pattern.as_str(), 20),
                    line.trim()
                );
                problems.push(Problem::new(
                    file.path,
                    ProblemKind::ForbiddenToken,
                    i + 1,
                    detail,
                ));
            }
        }

        problems
    }
}

#[cfg(test)]
#[path = "forbidden_tests.rs"]
mod tests;
