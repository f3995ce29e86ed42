use std::fmt::Write;
use std::path::Path;

use crate::checker::{Problem, pad};
use crate::error::Result;
use crate::extractor::SymbolModel;
use crate::report::Report;

use super::OutputFormatter;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    Always,
    Never,
}

/// ANSI color codes
mod ansi {
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const RESET: &str = "\x1b[0m";
}

pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                if std::env::var_os("NO_COLOR").is_some() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }

    fn format_problem(&self, problem: &Problem, output: &mut String) {
        let label = self.colorize(problem.kind.label(), ansi::YELLOW);
        let _ = writeln!(output, "  {label}: {}", problem.detail);
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        if !report.has_problems() {
            return Ok("No problems found.\n".to_string());
        }

        let mut output = String::new();
        for (path, problems) in &report.files {
            let _ = writeln!(
                output,
                "{}",
                self.colorize(&path.display().to_string(), ansi::CYAN)
            );
            for problem in problems {
                self.format_problem(problem, &mut output);
            }
        }

        Ok(output)
    }

    fn format_symbols(&self, path: &Path, model: &SymbolModel) -> Result<String> {
        let mut output = String::new();
        let _ = writeln!(
            output,
            "{}",
            self.colorize(&path.display().to_string(), ansi::CYAN)
        );

        let _ = writeln!(output, "Functions ({}):", model.functions.len());
        for function in &model.functions {
            let _ = writeln!(
                output,
                "  {} {}({})",
                pad(function.line, 6),
                function.full_name(),
                function.parameters.join(", ")
            );
        }

        let _ = writeln!(output, "Includes ({}):", model.includes.len());
        for include in &model.includes {
            let _ = writeln!(
                output,
                "  {} {} [{}]",
                pad(include.line, 6),
                include.name,
                include.category
            );
        }

        let _ = writeln!(output, "Constants ({}):", model.constants.len());
        for constant in &model.constants {
            let _ = writeln!(
                output,
                "  {} {}::{}",
                pad(constant.line, 6),
                constant.namespace,
                constant.name
            );
        }

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
