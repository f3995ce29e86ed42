use regex::Regex;

use super::types::{Include, IncludeCategory};

/// Finds `#include` directives and classifies them lexically.
pub struct IncludeScanner {
    include_pattern: Regex,
    framework_markers: Vec<String>,
}

impl IncludeScanner {
    /// `framework_prefixes` are path prefixes like `allegro` that mark a
    /// bracketed include as a framework include.
    #[must_use]
    pub fn new(framework_prefixes: &[String]) -> Self {
        Self {
            include_pattern: Regex::new(r"^#include (.+)").expect("Invalid regex"),
            framework_markers: framework_prefixes
                .iter()
                .map(|prefix| format!("<{prefix}"))
                .collect(),
        }
    }

    #[must_use]
    pub fn scan(&self, lines: &[&str]) -> Vec<Include> {
        lines
            .iter()
            .enumerate()
            .filter(|(_, line)| !line.starts_with('/'))
            .filter_map(|(i, line)| {
                let caps = self.include_pattern.captures(line)?;
                let name = caps.get(1)?.as_str().trim().to_string();
                let category = self.categorize(&name);
                Some(Include {
                    name,
                    line: i + 1,
                    category,
                })
            })
            .collect()
    }

    #[must_use]
    pub fn categorize(&self, name: &str) -> IncludeCategory {
        if self
            .framework_markers
            .iter()
            .any(|marker| name.contains(marker.as_str()))
        {
            IncludeCategory::FrameworkLibrary
        } else if name.starts_with('<') {
            IncludeCategory::System
        } else {
            IncludeCategory::Local
        }
    }
}

#[cfg(test)]
#[path = "includes_tests.rs"]
mod tests;
