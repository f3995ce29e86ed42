use std::fmt;

use serde::Serialize;

/// A function or method definition found at column 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Function {
    /// Scope the function belongs to (`Class`, `ns::Class`); empty for free functions.
    pub namespace: String,
    pub name: String,
    /// Declaration line (1-indexed)
    pub line: usize,
    /// Bare parameter names, in declaration order.
    pub parameters: Vec<String>,
}

impl Function {
    #[must_use]
    pub const fn new(namespace: String, name: String, line: usize, parameters: Vec<String>) -> Self {
        Self {
            namespace,
            name,
            line,
            parameters,
        }
    }

    /// Name qualified with its namespace, e.g. `Mob::tick`.
    #[must_use]
    pub fn full_name(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{}::{}", self.namespace, self.name)
        }
    }

    #[must_use]
    pub fn is_method(&self) -> bool {
        !self.namespace.is_empty()
    }

    /// Whether this is a constructor or destructor.
    ///
    /// Matches a name equal to the last scope segment, a `~` anywhere in the name,
    /// or a name that swallowed an initializer list (`Foo() : bar`).
    #[must_use]
    pub fn is_constructor_or_destructor(&self) -> bool {
        let last_segment = self.namespace.rsplit("::").next().unwrap_or_default();
        if last_segment == self.name || self.name.contains('~') {
            return true;
        }
        looks_like_initializer_list(&self.name)
    }

    /// Name used when comparing function order: every operator overload is `operator`.
    #[must_use]
    pub fn ordering_name(&self) -> &str {
        if self.name.len() > "operator".len() && self.name.starts_with("operator") {
            "operator"
        } else {
            &self.name
        }
    }
}

/// `.+ : .+`
fn looks_like_initializer_list(name: &str) -> bool {
    name.match_indices(" : ")
        .any(|(i, _)| i > 0 && i + 3 < name.len())
}

/// Include classification tier, in required order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IncludeCategory {
    System,
    FrameworkLibrary,
    Local,
}

impl fmt::Display for IncludeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::System => "system",
            Self::FrameworkLibrary => "framework",
            Self::Local => "local",
        };
        f.write_str(label)
    }
}

/// An `#include` directive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Include {
    /// Include target as written, brackets or quotes included.
    pub name: String,
    pub line: usize,
    pub category: IncludeCategory,
}

/// A constant declared directly inside an all-caps namespace block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamespaceConstant {
    pub name: String,
    pub namespace: String,
    pub line: usize,
}

/// Approximate symbol model of one source file, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SymbolModel {
    pub functions: Vec<Function>,
    pub includes: Vec<Include>,
    pub constants: Vec<NamespaceConstant>,
}

impl SymbolModel {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty() && self.includes.is_empty() && self.constants.is_empty()
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
