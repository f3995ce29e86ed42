mod documentation;
mod forbidden;
mod line_length;
mod ordering;
mod problem;
mod spacing;

pub use documentation::DocumentationChecker;
pub use forbidden::ForbiddenChecker;
pub use line_length::LineLengthChecker;
pub use ordering::{
    OrderingChecker, are_constants_ordered, are_includes_ordered, are_namespaces_ordered,
};
pub use problem::{Problem, ProblemKind, pad};
pub use spacing::{BlockTrigger, SpacingChecker};

use std::path::Path;

use crate::config::Config;
use crate::error::Result;
use crate::extractor::SymbolModel;

/// One file as the checkers see it.
pub struct SourceFile<'a> {
    pub path: &'a Path,
    /// Physical lines without terminators.
    pub lines: Vec<&'a str>,
    /// Present only for files that get symbol extraction.
    pub symbols: Option<SymbolModel>,
}

impl<'a> SourceFile<'a> {
    #[must_use]
    pub fn new(path: &'a Path, content: &'a str, symbols: Option<SymbolModel>) -> Self {
        Self {
            path,
            lines: content.lines().collect(),
            symbols,
        }
    }
}

pub trait Checker {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Findings for one file, in the order they were found.
    fn check(&self, file: &SourceFile<'_>) -> Vec<Problem>;
}

/// Build the enabled checkers in report order: line length, ordering,
/// spacing, documentation, forbidden tokens.
///
/// # Errors
/// Returns an error if a configured pattern does not compile.
pub fn build_checkers(config: &Config) -> Result<Vec<Box<dyn Checker>>> {
    let mut checkers: Vec<Box<dyn Checker>> = Vec::new();

    if config.line_length.enabled {
        checkers.push(Box::new(LineLengthChecker::new(&config.line_length)));
    }
    if config.ordering.enabled {
        checkers.push(Box::new(OrderingChecker::new(&config.ordering)));
    }
    if config.spacing.enabled {
        checkers.push(Box::new(SpacingChecker::new(&config.spacing)));
    }
    if config.documentation.enabled {
        checkers.push(Box::new(DocumentationChecker::new(&config.documentation)?));
    }

    let forbidden = ForbiddenChecker::new(&config.forbidden)?;
    if !forbidden.is_empty() {
        checkers.push(Box::new(forbidden));
    }

    Ok(checkers)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
