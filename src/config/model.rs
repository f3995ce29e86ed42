use serde::{Deserialize, Serialize};

/// Top-level configuration, threaded explicitly into every component.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub scanner: ScannerConfig,

    #[serde(default)]
    pub symbols: SymbolsConfig,

    #[serde(default)]
    pub ordering: OrderingConfig,

    #[serde(default)]
    pub documentation: DocumentationConfig,

    #[serde(default)]
    pub spacing: SpacingConfig,

    #[serde(default)]
    pub line_length: LineLengthConfig,

    #[serde(default)]
    pub forbidden: ForbiddenConfig,

    #[serde(default)]
    pub report: ReportConfig,
}

/// File discovery settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ScannerConfig {
    /// Root directory to scan when none is given on the command line.
    #[serde(default = "default_root")]
    pub root: String,

    /// Extensions of every file that gets checked (implementation and header files).
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Glob patterns pruned during the directory walk.
    #[serde(default = "default_scan_exclude")]
    pub exclude: Vec<String>,

    /// Respect .gitignore rules while walking.
    #[serde(default)]
    pub gitignore: bool,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            extensions: default_extensions(),
            exclude: default_scan_exclude(),
            gitignore: false,
        }
    }
}

/// Where constructors and destructors go relative to regular functions.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SpecialPlacement {
    First,
    #[default]
    Last,
}

/// Symbol extraction settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SymbolsConfig {
    /// Extensions whose files get a symbol model (ordering and documentation checks).
    #[serde(default = "default_symbol_extensions")]
    pub extensions: Vec<String>,

    /// Bracketed include paths starting with one of these are framework includes.
    #[serde(default = "default_framework_prefixes")]
    pub framework_prefixes: Vec<String>,
}

impl Default for SymbolsConfig {
    fn default() -> Self {
        Self {
            extensions: default_symbol_extensions(),
            framework_prefixes: default_framework_prefixes(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct OrderingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Function names exempt from ordering.
    #[serde(default = "default_exceptions")]
    pub exceptions: Vec<String>,

    #[serde(default)]
    pub constructors: SpecialPlacement,
}

impl Default for OrderingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            exceptions: default_exceptions(),
            constructors: SpecialPlacement::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DocumentationConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Text a documentation block's first line starts with.
    #[serde(default = "default_block_start")]
    pub block_start: String,

    /// Tag that precedes a documented parameter name.
    #[serde(default = "default_param_tag")]
    pub param_tag: String,
}

impl Default for DocumentationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            block_start: default_block_start(),
            param_tag: default_param_tag(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SpacingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_min_blank_lines")]
    pub min_blank_lines: usize,
}

impl Default for SpacingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            min_blank_lines: default_min_blank_lines(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LineLengthConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_max_line_length")]
    pub max: usize,
}

impl Default for LineLengthConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max: default_max_line_length(),
        }
    }
}

/// Regex patterns that must not appear in source lines.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ForbiddenConfig {
    #[serde(default)]
    pub patterns: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ReportConfig {
    /// Path substrings whose problems are dropped from the report (vendored/generated files).
    #[serde(default = "default_report_exclude")]
    pub exclude: Vec<String>,

    /// Report file written on every run.
    #[serde(default = "default_report_output")]
    pub output: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            exclude: default_report_exclude(),
            output: default_report_output(),
        }
    }
}

const fn default_true() -> bool {
    true
}

fn default_root() -> String {
    ".".to_string()
}

fn default_extensions() -> Vec<String> {
    vec!["cpp".to_string(), "h".to_string()]
}

fn default_scan_exclude() -> Vec<String> {
    vec!["**/.git/**".to_string()]
}

fn default_symbol_extensions() -> Vec<String> {
    vec!["cpp".to_string()]
}

fn default_framework_prefixes() -> Vec<String> {
    vec!["allegro".to_string()]
}

fn default_exceptions() -> Vec<String> {
    vec!["create_fsm".to_string()]
}

fn default_block_start() -> String {
    "/**".to_string()
}

fn default_param_tag() -> String {
    "@param".to_string()
}

const fn default_min_blank_lines() -> usize {
    2
}

const fn default_max_line_length() -> usize {
    80
}

fn default_report_exclude() -> Vec<String> {
    vec![
        "imgui/".to_string(),
        "shaders_source.cpp".to_string(),
        "code_debug.cpp".to_string(),
    ]
}

fn default_report_output() -> String {
    "problems.txt".to_string()
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
