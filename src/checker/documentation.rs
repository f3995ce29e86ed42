use indexmap::IndexSet;
use regex::Regex;

use crate::config::DocumentationConfig;
use crate::error::{Result, StyleGuardError};
use crate::extractor::Function;

use super::problem::{Problem, ProblemKind, pad};
use super::{Checker, SourceFile};

/// Checks that every function has a doc block above it that documents
/// exactly its parameters.
pub struct DocumentationChecker {
    block_start: String,
    param_pattern: Regex,
}

impl DocumentationChecker {
    /// # Errors
    /// Returns an error if the configured parameter tag does not form a valid pattern.
    pub fn new(config: &DocumentationConfig) -> Result<Self> {
        let pattern = format!(
            r"{}(?:\[[a-zA-Z, ]*\])?\s+([A-Za-z_][A-Za-z0-9_]*)",
            regex::escape(config.param_tag.trim())
        );
        let param_pattern =
            Regex::new(&pattern).map_err(|source| StyleGuardError::InvalidRegex {
                pattern,
                source,
            })?;

        Ok(Self {
            block_start: config.block_start.trim().to_string(),
            param_pattern,
        })
    }

    /// Index of the line that opens the doc block above `function`.
    ///
    /// Walks upward from the line above the declaration; a blank line ends
    /// the search without a block.
    #[must_use]
    pub fn find_block_start(&self, lines: &[&str], function: &Function) -> Option<usize> {
        let declaration = function.line.saturating_sub(1).min(lines.len());
        for index in (0..declaration).rev() {
            let line = lines[index];
            if line.trim_start().starts_with(&self.block_start) {
                return Some(index);
            }
            if line.trim().is_empty() {
                return None;
            }
        }
        None
    }

    /// Parameter names documented between the block start and the declaration.
    #[must_use]
    pub fn documented_params(&self, block: &[&str]) -> IndexSet<String> {
        block
            .iter()
            .flat_map(|line| self.param_pattern.captures_iter(line))
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .collect()
    }

    fn check_function(&self, file: &SourceFile<'_>, function: &Function) -> Vec<Problem> {
        let path = file.path;
        let full_name = function.full_name();

        let Some(start) = self.find_block_start(&file.lines, function) else {
            let detail = format!("{} {}", pad(function.line, 4), full_name);
            return vec![Problem::new(
                path,
                ProblemKind::MissingDocumentation,
                function.line,
                detail,
            )];
        };

        let end = function.line.saturating_sub(1).min(file.lines.len());
        let documented = self.documented_params(&file.lines[start..end]);
        let mut problems = Vec::new();

        for param in function
            .parameters
            .iter()
            .filter(|param| !documented.contains(param.as_str()))
        {
            let detail = format!("{} {} {}", pad(function.line, 4), pad(&full_name, 40), param);
            problems.push(Problem::new(
                path,
                ProblemKind::UndocumentedParameter,
                function.line,
                detail,
            ));
        }

        for name in documented
            .iter()
            .filter(|name| !function.parameters.contains(name))
        {
            let detail = format!("{} {} {}", pad(function.line, 4), pad(&full_name, 40), name);
            problems.push(Problem::new(
                path,
                ProblemKind::UnknownDocumentedParameter,
                function.line,
                detail,
            ));
        }

        problems
    }
}

impl Checker for DocumentationChecker {
    fn name(&self) -> &'static str {
        "documentation"
    }

    fn check(&self, file: &SourceFile<'_>) -> Vec<Problem> {
        let Some(model) = &file.symbols else {
            return Vec::new();
        };

        model
            .functions
            .iter()
            .flat_map(|function| self.check_function(file, function))
            .collect()
    }
}

#[cfg(test)]
#[path = "documentation_tests.rs"]
mod tests;
