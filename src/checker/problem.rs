use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// Category of a style problem. The label is what the report prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProblemKind {
    LongLine,
    UnorderedFunctions,
    UnorderedNamespaces,
    UnorderedIncludes,
    UnorderedConstants,
    CrampedCloseBrace,
    CrampedIncludes,
    CrampedUsings,
    MissingDocumentation,
    UndocumentedParameter,
    UnknownDocumentedParameter,
    ForbiddenToken,
    UnreadableFile,
}

impl ProblemKind {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::LongLine => "Long line",
            Self::UnorderedFunctions => "Unordered functions",
            Self::UnorderedNamespaces => "Unordered namespaces",
            Self::UnorderedIncludes => "Unordered includes",
            Self::UnorderedConstants => "Unordered namespace constants",
            Self::CrampedCloseBrace => "Missing blank lines after close brace",
            Self::CrampedIncludes => "Missing blank lines after includes",
            Self::CrampedUsings => "Missing blank lines after usings",
            Self::MissingDocumentation => "Function without documentation",
            Self::UndocumentedParameter => "Undocumented parameter",
            Self::UnknownDocumentedParameter => "Unknown documented parameter",
            Self::ForbiddenToken => "Forbidden token",
            Self::UnreadableFile => "Unreadable file",
        }
    }
}

impl fmt::Display for ProblemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One diagnostic: file, category and a column-aligned detail string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Problem {
    pub path: PathBuf,
    pub kind: ProblemKind,
    /// Line the problem is anchored at (1-indexed, 0 when not line-specific).
    pub line: usize,
    pub detail: String,
}

impl Problem {
    #[must_use]
    pub fn new(path: &Path, kind: ProblemKind, line: usize, detail: String) -> Self {
        Self {
            path: path.to_path_buf(),
            kind,
            line,
            detail,
        }
    }
}

/// Truncates `value` to `width` characters and left-justifies it to that width.
#[must_use]
pub fn pad(value: impl fmt::Display, width: usize) -> String {
    format!("{:<width$.width$}", value.to_string())
}

#[cfg(test)]
#[path = "problem_tests.rs"]
mod tests;
