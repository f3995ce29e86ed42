use regex::Regex;

use super::params::ParamParser;
use super::types::Function;

/// Finds function definitions that start at column 0.
pub struct FunctionScanner {
    scoped_pattern: Regex,
    free_pattern: Regex,
    params: ParamParser,
}

impl Default for FunctionScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl FunctionScanner {
    #[must_use]
    pub fn new() -> Self {
        Self {
            // `<qualifier> <Scope>::<Name>(`
            scoped_pattern: Regex::new(r"^(.+)::([^(]+)\(").expect("Invalid regex"),
            // `<qualifier> <Name>(`
            free_pattern: Regex::new(r"^[^(]+ ([^(]+)\(").expect("Invalid regex"),
            params: ParamParser::new(),
        }
    }

    #[must_use]
    pub fn scan(&self, lines: &[&str]) -> Vec<Function> {
        lines
            .iter()
            .enumerate()
            .filter_map(|(i, line)| self.detect(lines, i, line))
            .collect()
    }

    fn detect(&self, lines: &[&str], index: usize, line: &str) -> Option<Function> {
        if !could_be_definition(line) {
            return None;
        }

        let simplified = line.replace("std::", "");
        let (namespace, name) = self
            .match_scoped(&simplified)
            .or_else(|| self.match_free(&simplified))?;
        if name.is_empty() {
            return None;
        }

        let parameters = self.params.parse_at(lines, index);
        Some(Function::new(namespace, name, index + 1, parameters))
    }

    fn match_scoped(&self, line: &str) -> Option<(String, String)> {
        let caps = self.scoped_pattern.captures(line)?;
        let qualifier = caps.get(1)?.as_str().trim().replace(['&', '*'], "");
        let namespace = qualifier
            .rsplit(' ')
            .next()
            .unwrap_or_default()
            .to_string();
        let name = caps.get(2)?.as_str().trim().to_string();
        Some((namespace, name))
    }

    fn match_free(&self, line: &str) -> Option<(String, String)> {
        let caps = self.free_pattern.captures(line)?;
        let name = caps.get(1)?.as_str().trim().to_string();
        Some((String::new(), name))
    }
}

/// Rejects indented lines, directives, comments and assignments.
///
/// Only an `=` ahead of the parameter list marks an assignment; default
/// values inside the list and `operator=` style names are fine.
fn could_be_definition(line: &str) -> bool {
    let Some(first) = line.chars().next() else {
        return false;
    };
    if first.is_whitespace() || first == '#' || first == '/' {
        return false;
    }
    let head = line.split_once('(').map_or(line, |(head, _)| head);
    !head.contains('=') || head.contains("operator")
}

#[cfg(test)]
#[path = "functions_tests.rs"]
mod tests;
