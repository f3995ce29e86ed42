use std::path::PathBuf;

use clap::CommandFactory;

use super::*;

fn check_args(args: &[&str]) -> CheckArgs {
    let mut argv = vec!["style-guard", "check"];
    argv.extend_from_slice(args);
    match Cli::parse_from(argv).command {
        Commands::Check(args) => args,
        _ => panic!("Expected Check command"),
    }
}

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn cli_check_defaults() {
    let args = check_args(&[]);

    assert_eq!(args.root, None);
    assert_eq!(args.config, None);
    assert_eq!(args.ext, None);
    assert_eq!(args.max_line_length, None);
    assert!(args.exclude.is_empty());
    assert_eq!(args.format, OutputFormat::Text);
    assert_eq!(args.output, None);
    assert!(!args.no_report);
}

#[test]
fn cli_check_with_root_and_overrides() {
    let args = check_args(&[
        "source",
        "--ext",
        "cpp,h,hpp",
        "--max-line-length",
        "100",
        "-x",
        "**/imgui/**",
        "--exclude",
        "**/gen/**",
        "--format",
        "json",
        "-o",
        "out.txt",
    ]);

    assert_eq!(args.root, Some(PathBuf::from("source")));
    assert_eq!(
        args.ext,
        Some(vec!["cpp".to_string(), "h".to_string(), "hpp".to_string()])
    );
    assert_eq!(args.max_line_length, Some(100));
    assert_eq!(args.exclude, vec!["**/imgui/**", "**/gen/**"]);
    assert_eq!(args.format, OutputFormat::Json);
    assert_eq!(args.output, Some(PathBuf::from("out.txt")));
}

#[test]
fn cli_check_no_report_conflicts_with_output() {
    let result = Cli::try_parse_from(["style-guard", "check", "--no-report", "-o", "x.txt"]);
    assert!(result.is_err());
}

#[test]
fn cli_check_rejects_unknown_format() {
    let result = Cli::try_parse_from(["style-guard", "check", "--format", "sarif"]);
    assert!(result.is_err());
}

#[test]
fn cli_global_flags() {
    let cli = Cli::parse_from(["style-guard", "check", "-vv", "--quiet", "--color", "never", "--no-config"]);

    assert_eq!(cli.verbose, 2);
    assert!(cli.quiet);
    assert!(matches!(cli.color, ColorChoice::Never));
    assert!(cli.no_config);
}

#[test]
fn cli_symbols_command() {
    let cli = Cli::parse_from(["style-guard", "symbols", "source/mob.cpp", "-f", "json"]);
    match cli.command {
        Commands::Symbols(args) => {
            assert_eq!(args.file, PathBuf::from("source/mob.cpp"));
            assert_eq!(args.format, OutputFormat::Json);
        }
        _ => panic!("Expected Symbols command"),
    }
}

#[test]
fn cli_init_defaults() {
    let cli = Cli::parse_from(["style-guard", "init"]);
    match cli.command {
        Commands::Init(args) => {
            assert_eq!(args.output, PathBuf::from(".style-guard.toml"));
            assert!(!args.force);
        }
        _ => panic!("Expected Init command"),
    }
}

#[test]
fn cli_config_validate_default_path() {
    let cli = Cli::parse_from(["style-guard", "config", "validate"]);
    match cli.command {
        Commands::Config(ConfigArgs {
            action: ConfigAction::Validate { config },
        }) => assert_eq!(config, PathBuf::from(".style-guard.toml")),
        _ => panic!("Expected Config Validate command"),
    }
}

#[test]
fn cli_config_show_json() {
    let cli = Cli::parse_from(["style-guard", "config", "show", "--format", "json"]);
    match cli.command {
        Commands::Config(ConfigArgs {
            action: ConfigAction::Show { config, format },
        }) => {
            assert_eq!(config, None);
            assert_eq!(format, OutputFormat::Json);
        }
        _ => panic!("Expected Config Show command"),
    }
}

#[test]
fn color_choice_maps_to_color_mode() {
    assert_eq!(ColorMode::from(ColorChoice::Auto), ColorMode::Auto);
    assert_eq!(ColorMode::from(ColorChoice::Always), ColorMode::Always);
    assert_eq!(ColorMode::from(ColorChoice::Never), ColorMode::Never);
}
