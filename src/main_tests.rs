use std::path::{Path, PathBuf};

use clap::Parser;
use style_guard::cli::{CheckArgs, Cli, Commands};
use style_guard::config::{Config, validate_config_semantics};
use style_guard::output::OutputFormat;

use crate::{CONFIG_TEMPLATE, apply_cli_overrides, load_config, run_config_show_impl};

fn check_args(argv: &[&str]) -> CheckArgs {
    let mut full = vec!["style-guard", "check"];
    full.extend_from_slice(argv);
    match Cli::parse_from(full).command {
        Commands::Check(args) => args,
        _ => panic!("Expected Check command"),
    }
}

#[test]
fn load_config_no_config_returns_default() {
    let config = load_config(None, true).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn load_config_with_nonexistent_path_returns_error() {
    let result = load_config(Some(Path::new("nonexistent.toml")), false);
    assert!(result.is_err());
}

#[test]
fn cli_overrides_replace_config_values() {
    let mut config = Config::default();
    let args = check_args(&[
        "game/source",
        "--ext",
        "cpp",
        "--max-line-length",
        "120",
        "-x",
        "**/lib/**",
        "-o",
        "out/report.txt",
    ]);

    apply_cli_overrides(&mut config, &args);

    assert_eq!(config.scanner.root, "game/source");
    assert_eq!(config.scanner.extensions, vec!["cpp"]);
    assert_eq!(config.line_length.max, 120);
    assert_eq!(config.scanner.exclude, vec!["**/.git/**", "**/lib/**"]);
    assert_eq!(PathBuf::from(&config.report.output), PathBuf::from("out/report.txt"));
}

#[test]
fn no_overrides_keep_config() {
    let mut config = Config::default();

    apply_cli_overrides(&mut config, &check_args(&[]));

    assert_eq!(config, Config::default());
}

#[test]
fn config_template_matches_defaults() {
    let config: Config = toml::from_str(CONFIG_TEMPLATE).unwrap();

    assert_eq!(config, Config::default());
    assert!(validate_config_semantics(&config).is_ok());
}

#[test]
fn config_show_text_is_round_trippable_toml() {
    let output = run_config_show_impl(None, OutputFormat::Text, true).unwrap();
    let parsed: Config = toml::from_str(&output).unwrap();

    assert_eq!(parsed, Config::default());
}

#[test]
fn config_show_json() {
    let output = run_config_show_impl(None, OutputFormat::Json, true).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["line_length"]["max"], 80);
    assert_eq!(value["ordering"]["constructors"], "last");
}

#[test]
fn ext_override_narrows_symbol_extensions() {
    let mut config = Config::default();

    apply_cli_overrides(&mut config, &check_args(&["--ext", "h"]));

    assert_eq!(config.scanner.extensions, vec!["h"]);
    assert!(config.symbols.extensions.is_empty());
    assert!(validate_config_semantics(&config).is_ok());
}

#[test]
fn ext_override_keeps_symbol_extensions_case_insensitively() {
    let mut config = Config::default();

    apply_cli_overrides(&mut config, &check_args(&["--ext", "CPP,H"]));

    assert_eq!(config.symbols.extensions, vec!["cpp"]);
    assert!(validate_config_semantics(&config).is_ok());
}

#[test]
fn ext_override_accepts_dotted_extensions() {
    let mut config = Config::default();

    apply_cli_overrides(&mut config, &check_args(&["--ext", ".cpp"]));

    assert_eq!(config.symbols.extensions, vec!["cpp"]);
    assert!(validate_config_semantics(&config).is_ok());
}
