//! Heuristic symbol extraction.
//!
//! Builds an approximate model of a source file (functions, includes and
//! namespace constants) from line-oriented patterns. It assumes the house
//! style: definitions start at column 0 and signatures end at the body brace.
//! Lines that fit no pattern are silently skipped.

mod constants;
mod functions;
mod includes;
mod params;
mod types;

pub use constants::ConstantScanner;
pub use functions::FunctionScanner;
pub use includes::IncludeScanner;
pub use params::{ParamParser, strip_enclosed};
pub use types::{Function, Include, IncludeCategory, NamespaceConstant, SymbolModel};

use crate::config::SymbolsConfig;

/// Runs every scanner over one file's text.
pub struct SymbolExtractor {
    functions: FunctionScanner,
    includes: IncludeScanner,
    constants: ConstantScanner,
}

impl Default for SymbolExtractor {
    fn default() -> Self {
        Self::new(&SymbolsConfig::default())
    }
}

impl SymbolExtractor {
    #[must_use]
    pub fn new(config: &SymbolsConfig) -> Self {
        Self {
            functions: FunctionScanner::new(),
            includes: IncludeScanner::new(&config.framework_prefixes),
            constants: ConstantScanner::new(),
        }
    }

    #[must_use]
    pub fn extract(&self, content: &str) -> SymbolModel {
        let lines: Vec<&str> = content.lines().collect();
        self.extract_lines(&lines)
    }

    #[must_use]
    pub fn extract_lines(&self, lines: &[&str]) -> SymbolModel {
        SymbolModel {
            functions: self.functions.scan(lines),
            includes: self.includes.scan(lines),
            constants: self.constants.scan(lines),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
