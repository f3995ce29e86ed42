use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use style_guard::cli::{CheckArgs, Cli, Commands, ConfigAction, ConfigArgs, InitArgs, SymbolsArgs};
use style_guard::config::{Config, ConfigLoader, FileConfigLoader, validate_config_semantics};
use style_guard::extractor::SymbolExtractor;
use style_guard::output::{ColorMode, OutputFormat};
use style_guard::report::Aggregator;
use style_guard::scanner::{normalize_extension, scanner_from_config};
use style_guard::{EXIT_CONFIG_ERROR, EXIT_PROBLEMS_FOUND, EXIT_SUCCESS, StyleGuardError};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check(args, &cli),
        Commands::Symbols(args) => run_symbols(args, &cli),
        Commands::Init(args) => run_init(args),
        Commands::Config(args) => run_config(args, &cli),
    };

    std::process::exit(exit_code);
}

/// Stderr logging; `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(config_path: Option<&Path>, no_config: bool) -> style_guard::Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    match config_path {
        Some(path) => loader.load_from_path(path),
        None => loader.load(),
    }
}

fn apply_cli_overrides(config: &mut Config, args: &CheckArgs) {
    if let Some(ext) = &args.ext {
        config.scanner.extensions.clone_from(ext);
        // Symbol extraction only applies to files that are still scanned.
        config
            .symbols
            .extensions
            .retain(|symbol_ext| {
                let symbol_ext = normalize_extension(symbol_ext);
                ext.iter().any(|e| normalize_extension(e) == symbol_ext)
            });
    }
    if let Some(max) = args.max_line_length {
        config.line_length.max = max;
    }
    config.scanner.exclude.extend(args.exclude.iter().cloned());
    if let Some(root) = &args.root {
        config.scanner.root = root.display().to_string();
    }
    if let Some(output) = &args.output {
        config.report.output = output.display().to_string();
    }
}

fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_check_impl(args: &CheckArgs, cli: &Cli) -> style_guard::Result<i32> {
    // 1. Load configuration and apply CLI overrides
    let mut config = load_config(args.config.as_deref(), cli.no_config)?;
    apply_cli_overrides(&mut config, args);
    validate_config_semantics(&config)?;

    // 2. Scan and check every file
    let root = PathBuf::from(&config.scanner.root);
    let scanner = scanner_from_config(&config.scanner)?;
    let report = Aggregator::new(&config)?.run(&scanner, &root)?;

    // 3. Print and persist the report
    if !cli.quiet {
        let output = args.format.formatter(cli.color.into()).format(&report)?;
        print!("{output}");
    }
    if !args.no_report {
        let output = args.format.formatter(ColorMode::Never).format(&report)?;
        let path = PathBuf::from(&config.report.output);
        fs::write(&path, output).map_err(|source| StyleGuardError::ReportWrite {
            path: path.clone(),
            source,
        })?;
        tracing::info!(path = %path.display(), "wrote report");
    }

    Ok(if report.has_problems() {
        EXIT_PROBLEMS_FOUND
    } else {
        EXIT_SUCCESS
    })
}

fn run_symbols(args: &SymbolsArgs, cli: &Cli) -> i32 {
    match run_symbols_impl(args, cli) {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_symbols_impl(args: &SymbolsArgs, cli: &Cli) -> style_guard::Result<String> {
    let config = load_config(args.config.as_deref(), cli.no_config)?;
    let content = fs::read_to_string(&args.file).map_err(|source| StyleGuardError::FileRead {
        path: args.file.clone(),
        source,
    })?;

    let model = SymbolExtractor::new(&config.symbols).extract(&content);
    tracing::debug!(
        path = %args.file.display(),
        functions = model.functions.len(),
        includes = model.includes.len(),
        constants = model.constants.len(),
        "extracted symbols"
    );

    let mut output = args
        .format
        .formatter(cli.color.into())
        .format_symbols(&args.file, &model)?;
    if !output.ends_with('\n') {
        output.push('\n');
    }
    Ok(output)
}

fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_init_impl(args: &InitArgs) -> style_guard::Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(StyleGuardError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, CONFIG_TEMPLATE)?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

const CONFIG_TEMPLATE: &str = r#"# style-guard configuration file

[scanner]
# Source folder checked when no root is given on the command line
root = "."
# Extensions of every checked file
extensions = ["cpp", "h"]
# Glob patterns skipped while walking
exclude = ["**/.git/**"]
# Respect .gitignore rules
gitignore = false

[symbols]
# Files that get ordering and documentation checks
extensions = ["cpp"]
# <prefix...> includes are framework includes, ordered after system includes
framework_prefixes = ["allegro"]

[ordering]
enabled = true
# Functions exempt from alphabetical ordering
exceptions = ["create_fsm"]
# Constructors and destructors go "first" or "last"
constructors = "last"

[documentation]
enabled = true
# First line of a documentation block starts with this
block_start = "/**"
# Tag preceding each documented parameter
param_tag = "@param"

[spacing]
enabled = true
# Blank lines required after close braces, include blocks and using blocks
min_blank_lines = 2

[line_length]
enabled = true
max = 80

[forbidden]
# Regular expressions that must not match any line
# patterns = ['\bcout\b', '<iostream>']
patterns = []

[report]
# Problems in paths containing any of these are not reported
exclude = ["imgui/", "shaders_source.cpp", "code_debug.cpp"]
# Report file overwritten on every check
output = "problems.txt"
"#;

fn run_config(args: &ConfigArgs, cli: &Cli) -> i32 {
    match &args.action {
        ConfigAction::Validate { config } => run_config_validate(config),
        ConfigAction::Show { config, format } => {
            run_config_show(config.as_deref(), *format, cli.no_config)
        }
    }
}

fn run_config_validate(config_path: &Path) -> i32 {
    match run_config_validate_impl(config_path) {
        Ok(()) => {
            println!("Configuration is valid: {}", config_path.display());
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Configuration error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_config_validate_impl(config_path: &Path) -> style_guard::Result<()> {
    let config = FileConfigLoader::new().load_from_path(config_path)?;
    validate_config_semantics(&config)
}

fn run_config_show(config_path: Option<&Path>, format: OutputFormat, no_config: bool) -> i32 {
    match run_config_show_impl(config_path, format, no_config) {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_config_show_impl(
    config_path: Option<&Path>,
    format: OutputFormat,
    no_config: bool,
) -> style_guard::Result<String> {
    let config = load_config(config_path, no_config)?;

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&config)?;
            Ok(format!("{json}\n"))
        }
        OutputFormat::Text => Ok(toml::to_string_pretty(&config)?),
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
