use crate::config::SpacingConfig;

use super::problem::{Problem, ProblemKind, pad};
use super::{Checker, SourceFile};

/// Structural line that must be followed by vertical space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockTrigger {
    CloseBrace,
    Include,
    Using,
}

impl BlockTrigger {
    #[must_use]
    pub fn classify(line: &str) -> Option<Self> {
        if line.starts_with('}') {
            Some(Self::CloseBrace)
        } else if line.starts_with("#include") {
            Some(Self::Include)
        } else if line.starts_with("using ") {
            Some(Self::Using)
        } else {
            None
        }
    }

    const fn problem_kind(self) -> ProblemKind {
        match self {
            Self::CloseBrace => ProblemKind::CrampedCloseBrace,
            Self::Include => ProblemKind::CrampedIncludes,
            Self::Using => ProblemKind::CrampedUsings,
        }
    }
}

/// A trigger block waiting for its trailing blank lines.
struct OpenBlock {
    trigger: BlockTrigger,
    last_line: usize,
    blank_lines: usize,
}

/// Requires blank lines after closing braces, include blocks and using blocks.
pub struct SpacingChecker {
    min_blank_lines: usize,
}

impl SpacingChecker {
    #[must_use]
    pub const fn new(config: &SpacingConfig) -> Self {
        Self {
            min_blank_lines: config.min_blank_lines,
        }
    }

    fn cramped(&self, file: &SourceFile<'_>, block: &OpenBlock) -> Problem {
        let detail = format!(
            "{} ({} of {} blank lines)",
            pad(block.last_line, 4),
            block.blank_lines,
            self.min_blank_lines
        );
        Problem::new(
            file.path,
            block.trigger.problem_kind(),
            block.last_line,
            detail,
        )
    }
}

impl Checker for SpacingChecker {
    fn name(&self) -> &'static str {
        "spacing"
    }

    fn check(&self, file: &SourceFile<'_>) -> Vec<Problem> {
        let mut problems = Vec::new();
        let mut open: Option<OpenBlock> = None;

        for (i, line) in file.lines.iter().enumerate() {
            let line_nr = i + 1;

            if line.trim().is_empty() {
                if let Some(block) = open.as_mut() {
                    block.blank_lines += 1;
                }
                continue;
            }

            let trigger = BlockTrigger::classify(line);

            if let Some(block) = open.take() {
                if trigger == Some(block.trigger) {
                    // Same kind again: the block continues.
                    open = Some(OpenBlock {
                        trigger: block.trigger,
                        last_line: line_nr,
                        blank_lines: 0,
                    });
                    continue;
                }
                if block.blank_lines < self.min_blank_lines {
                    problems.push(self.cramped(file, &block));
                }
            }

            open = trigger.map(|trigger| OpenBlock {
                trigger,
                last_line: line_nr,
                blank_lines: 0,
            });
        }

        problems
    }
}

#[cfg(test)]
#[path = "spacing_tests.rs"]
mod tests;
