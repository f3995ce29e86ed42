mod directory;
mod filter;

pub use directory::DirectoryScanner;
pub use filter::{FileFilter, GlobFilter, has_extension, normalize_extension};

use std::path::{Path, PathBuf};

use crate::config::ScannerConfig;
use crate::error::Result;

/// Trait for scanning directories and finding files.
pub trait FileScanner {
    /// Scan a directory and return all matching file paths, sorted.
    ///
    /// # Errors
    /// Returns an error if the root directory does not exist.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

/// Scanner for the configured extensions and exclude globs.
///
/// # Errors
/// Returns an error if an exclude pattern is invalid.
pub fn scanner_from_config(config: &ScannerConfig) -> Result<DirectoryScanner<GlobFilter>> {
    let filter = GlobFilter::new(config.extensions.clone(), &config.exclude)?;
    Ok(DirectoryScanner::with_gitignore(filter, config.gitignore))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
