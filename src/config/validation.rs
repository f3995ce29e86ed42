//! Configuration semantic validation.
//!
//! Validates that configuration values are usable after parsing: range checks
//! and pattern compilation.

use globset::Glob;
use regex::Regex;

use crate::config::Config;
use crate::scanner::normalize_extension;
use crate::{Result, StyleGuardError};

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error if a limit is zero, a marker is empty, or a glob/regex
/// pattern does not compile.
pub fn validate_config_semantics(config: &Config) -> Result<()> {
    validate_scanner_section(config)?;
    validate_checker_sections(config)?;
    validate_forbidden_patterns(config)?;
    Ok(())
}

fn validate_scanner_section(config: &Config) -> Result<()> {
    if config.scanner.extensions.is_empty() {
        return Err(StyleGuardError::Config(
            "scanner.extensions cannot be empty".to_string(),
        ));
    }

    for pattern in &config.scanner.exclude {
        Glob::new(pattern).map_err(|source| StyleGuardError::InvalidPattern {
            pattern: pattern.clone(),
            source,
        })?;
    }

    if let Some(ext) = config
        .symbols
        .extensions
        .iter()
        .find(|ext| {
            !config
                .scanner
                .extensions
                .iter()
                .any(|scanned| normalize_extension(scanned) == normalize_extension(ext))
        })
    {
        return Err(StyleGuardError::Config(format!(
            "symbols.extensions contains '{ext}', which is not in scanner.extensions"
        )));
    }

    Ok(())
}

fn validate_checker_sections(config: &Config) -> Result<()> {
    if config.line_length.max == 0 {
        return Err(StyleGuardError::Config(
            "line_length.max must be greater than 0".to_string(),
        ));
    }

    if config.documentation.block_start.trim().is_empty() {
        return Err(StyleGuardError::Config(
            "documentation.block_start cannot be empty".to_string(),
        ));
    }

    if config.documentation.param_tag.trim().is_empty() {
        return Err(StyleGuardError::Config(
            "documentation.param_tag cannot be empty".to_string(),
        ));
    }

    if config.report.output.trim().is_empty() {
        return Err(StyleGuardError::Config(
            "report.output cannot be empty".to_string(),
        ));
    }

    Ok(())
}

fn validate_forbidden_patterns(config: &Config) -> Result<()> {
    for pattern in &config.forbidden.patterns {
        Regex::new(pattern).map_err(|source| StyleGuardError::InvalidRegex {
            pattern: pattern.clone(),
            source,
        })?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
