//! Runs the extractor and every checker over a directory tree and collects
//! the findings per file.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::checker::{Checker, Problem, ProblemKind, SourceFile, build_checkers};
use crate::config::Config;
use crate::error::Result;
use crate::extractor::SymbolExtractor;
use crate::scanner::{FileScanner, has_extension, normalize_extension};

/// Problems grouped by file, in path order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub files_scanned: usize,
    pub files: BTreeMap<PathBuf, Vec<Problem>>,
}

impl Report {
    #[must_use]
    pub fn has_problems(&self) -> bool {
        self.files.values().any(|problems| !problems.is_empty())
    }

    #[must_use]
    pub fn problem_count(&self) -> usize {
        self.files.values().map(Vec::len).sum()
    }

    /// Add a file's findings; files without findings are not recorded.
    pub fn add(&mut self, path: &Path, problems: Vec<Problem>) {
        if !problems.is_empty() {
            self.files
                .entry(path.to_path_buf())
                .or_default()
                .extend(problems);
        }
    }
}

pub struct Aggregator {
    extractor: SymbolExtractor,
    checkers: Vec<Box<dyn Checker>>,
    symbol_extensions: Vec<String>,
    report_exclude: Vec<String>,
}

impl Aggregator {
    /// # Errors
    /// Returns an error if a configured pattern does not compile.
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            extractor: SymbolExtractor::new(&config.symbols),
            checkers: build_checkers(config)?,
            symbol_extensions: config
                .symbols
                .extensions
                .iter()
                .map(|ext| normalize_extension(ext))
                .collect(),
            report_exclude: config.report.exclude.clone(),
        })
    }

    fn wants_symbols(&self, path: &Path) -> bool {
        has_extension(path, &self.symbol_extensions)
    }

    /// Whether problems for `path` belong in the report.
    #[must_use]
    pub fn is_reported(&self, path: &Path) -> bool {
        let normalized = path.to_string_lossy().replace('\\', "/");
        !self
            .report_exclude
            .iter()
            .any(|fragment| normalized.contains(fragment.as_str()))
    }

    /// Run every checker over one file's text.
    #[must_use]
    pub fn check_source(&self, path: &Path, content: &str) -> Vec<Problem> {
        let symbols = self
            .wants_symbols(path)
            .then(|| self.extractor.extract(content));
        let file = SourceFile::new(path, content, symbols);

        let mut problems = Vec::new();
        for checker in &self.checkers {
            let found = checker.check(&file);
            if !found.is_empty() {
                tracing::trace!(
                    path = %path.display(),
                    checker = checker.name(),
                    count = found.len(),
                    "checker findings"
                );
            }
            problems.extend(found);
        }
        problems
    }

    fn check_path(&self, path: &Path) -> Vec<Problem> {
        match fs::read_to_string(path) {
            Ok(content) => self.check_source(path, &content),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "skipping unreadable file");
                vec![Problem::new(
                    path,
                    ProblemKind::UnreadableFile,
                    0,
                    err.to_string(),
                )]
            }
        }
    }

    /// Scan `root`, check each file in turn and build the report.
    ///
    /// # Errors
    /// Returns an error if the root cannot be scanned.
    pub fn run<S: FileScanner>(&self, scanner: &S, root: &Path) -> Result<Report> {
        let files = scanner.scan(root)?;
        tracing::info!(root = %root.display(), files = files.len(), "checking files");

        let mut report = Report {
            files_scanned: files.len(),
            ..Report::default()
        };

        for path in &files {
            tracing::debug!(path = %path.display(), "checking file");
            let problems = self.check_path(path);
            if problems.is_empty() {
                continue;
            }
            if !self.is_reported(path) {
                tracing::debug!(
                    path = %path.display(),
                    count = problems.len(),
                    "dropping problems for excluded path"
                );
                continue;
            }
            report.add(path, problems);
        }

        tracing::info!(
            files = report.files.len(),
            problems = report.problem_count(),
            "check finished"
        );
        Ok(report)
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
