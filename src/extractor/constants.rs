use regex::Regex;

use super::types::NamespaceConstant;

/// Finds constants declared directly inside an all-caps namespace block.
///
/// Only one namespace is tracked at a time; any line starting with `}` closes it.
pub struct ConstantScanner {
    namespace_pattern: Regex,
    constant_pattern: Regex,
}

impl Default for ConstantScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl ConstantScanner {
    #[must_use]
    pub fn new() -> Self {
        Self {
            namespace_pattern: Regex::new(r"^namespace ([A-Z_][A-Z0-9_]*) ?\{")
                .expect("Invalid regex"),
            constant_pattern: Regex::new(r"^.*const [^=]+ ([A-Z_][A-Z0-9_]*)(;|[^)]+;)")
                .expect("Invalid regex"),
        }
    }

    #[must_use]
    pub fn scan(&self, lines: &[&str]) -> Vec<NamespaceConstant> {
        let mut constants = Vec::new();
        let mut open_namespace: Option<String> = None;

        for (i, line) in lines.iter().enumerate() {
            if let Some(caps) = self.namespace_pattern.captures(line) {
                open_namespace = caps.get(1).map(|m| m.as_str().to_string());
                continue;
            }

            if line.starts_with('}') {
                open_namespace = None;
                continue;
            }

            let Some(namespace) = &open_namespace else {
                continue;
            };

            if let Some(name) = self
                .constant_pattern
                .captures(line)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str())
            {
                constants.push(NamespaceConstant {
                    name: name.to_string(),
                    namespace: namespace.clone(),
                    line: i + 1,
                });
            }
        }

        constants
    }
}

#[cfg(test)]
#[path = "constants_tests.rs"]
mod tests;
