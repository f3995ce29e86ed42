use crate::config::LineLengthConfig;

use super::problem::{Problem, ProblemKind, pad};
use super::{Checker, SourceFile};

/// Flags lines wider than the configured character count.
pub struct LineLengthChecker {
    max: usize,
}

impl LineLengthChecker {
    #[must_use]
    pub const fn new(config: &LineLengthConfig) -> Self {
        Self { max: config.max }
    }
}

impl Checker for LineLengthChecker {
    fn name(&self) -> &'static str {
        "line-length"
    }

    fn check(&self, file: &SourceFile<'_>) -> Vec<Problem> {
        file.lines
            .iter()
            .enumerate()
            .filter_map(|(i, line)| {
                // Characters, not bytes.
                let length = line.chars().count();
                (length > self.max).then(|| {
                    let detail = format!("{} ({length} characters)", pad(i + 1, 4));
                    Problem::new(file.path, ProblemKind::LongLine, i + 1, detail)
                })
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "line_length_tests.rs"]
mod tests;
