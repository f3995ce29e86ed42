use std::path::Path;

use serde::Serialize;

use crate::checker::{Problem, ProblemKind};
use crate::error::Result;
use crate::extractor::SymbolModel;
use crate::report::Report;

use super::OutputFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: Summary,
    files: Vec<FileProblems<'a>>,
}

#[derive(Serialize)]
struct Summary {
    files_scanned: usize,
    files_with_problems: usize,
    problem_count: usize,
}

#[derive(Serialize)]
struct FileProblems<'a> {
    path: String,
    problems: Vec<JsonProblem<'a>>,
}

#[derive(Serialize)]
struct JsonProblem<'a> {
    kind: ProblemKind,
    label: &'static str,
    line: usize,
    detail: &'a str,
}

#[derive(Serialize)]
struct JsonSymbols<'a> {
    path: String,
    #[serde(flatten)]
    model: &'a SymbolModel,
}

fn convert_problem(problem: &Problem) -> JsonProblem<'_> {
    JsonProblem {
        kind: problem.kind,
        label: problem.kind.label(),
        line: problem.line,
        detail: &problem.detail,
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let output = JsonOutput {
            summary: Summary {
                files_scanned: report.files_scanned,
                files_with_problems: report.files.len(),
                problem_count: report.problem_count(),
            },
            files: report
                .files
                .iter()
                .map(|(path, problems)| FileProblems {
                    path: path.display().to_string(),
                    problems: problems.iter().map(convert_problem).collect(),
                })
                .collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }

    fn format_symbols(&self, path: &Path, model: &SymbolModel) -> Result<String> {
        let output = JsonSymbols {
            path: path.display().to_string(),
            model,
        };
        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
