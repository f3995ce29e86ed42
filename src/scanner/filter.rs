use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{Result, StyleGuardError};

pub trait FileFilter {
    fn should_include(&self, path: &Path) -> bool;
}

/// Canonical form of a configured extension: `.CPP`, ` cpp` and `cpp` all
/// become `cpp`.
#[must_use]
pub fn normalize_extension(ext: &str) -> String {
    ext.trim().trim_start_matches('.').to_ascii_lowercase()
}

/// Whether `path` ends in one of the (normalized) `extensions`.
#[must_use]
pub fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            let ext = ext.to_ascii_lowercase();
            extensions.iter().any(|e| *e == ext)
        })
}

/// Accepts implementation and header files by extension, minus anything an
/// exclude glob matches.
pub struct GlobFilter {
    extensions: Vec<String>,
    excludes: GlobSet,
}

impl GlobFilter {
    /// # Errors
    /// Returns an error naming the first exclude pattern that is not a valid glob.
    pub fn new(extensions: Vec<String>, exclude_patterns: &[String]) -> Result<Self> {
        let extensions = extensions
            .iter()
            .map(|ext| normalize_extension(ext))
            .filter(|ext| !ext.is_empty())
            .collect();

        let mut builder = GlobSetBuilder::new();
        for pattern in exclude_patterns {
            builder.add(compile_glob(pattern)?);
        }
        let excludes = builder
            .build()
            .map_err(|source| StyleGuardError::InvalidPattern {
                pattern: exclude_patterns.join(", "),
                source,
            })?;

        Ok(Self {
            extensions,
            excludes,
        })
    }

    #[must_use]
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }
}

fn compile_glob(pattern: &str) -> Result<Glob> {
    Glob::new(pattern).map_err(|source| StyleGuardError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

impl FileFilter for GlobFilter {
    fn should_include(&self, path: &Path) -> bool {
        has_extension(path, &self.extensions) && !self.excludes.is_match(path)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
