//! api-compat: API snapshot comparison and version classification
//!
//! Compares the published API surface of a library build against the previous
//! release and derives the next version number.

#![allow(clippy::struct_excessive_bools, clippy::needless_pass_by_value)]

use anyhow::{Context, Result};
use api_compat::{
    cli,
    config::{AppConfig, DiffConfig, DiffPaths},
    pipeline::exit_codes,
    reports::ReportFormat,
    version::Compatibility,
};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "api-compat")]
#[command(version)]
#[command(about = "API snapshot comparison and version classification", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success (changes below the --fail-on level)
    1  Changes at or above the --fail-on level
    3  Error occurred

EXAMPLES:
    # Build step: compare against the published snapshot and write build/api/
    api-compat check --new target/api-snapshot.json --baseline published/api-snapshot.json

    # Re-baseline at an explicit version
    api-compat check --new target/api-snapshot.json --reference-version 2.0.0

    # CI gate on breaking changes
    api-compat diff old.json new.json -o summary --fail-on major")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

// ============================================================================
// Command argument structs
// ============================================================================

/// Arguments for the `check` subcommand
#[derive(Parser)]
struct CheckArgs {
    /// Snapshot produced by the collector for this build
    #[arg(long)]
    new: PathBuf,

    /// Previously published snapshot (defaults to `baseline.snapshot_file`)
    #[arg(long)]
    baseline: Option<PathBuf>,

    /// Skip the comparison and publish at this version
    #[arg(long, value_name = "X.Y.Z", env = "API_COMPAT_REFERENCE_VERSION")]
    reference_version: Option<String>,

    /// Directory receiving api-snapshot.json, version.txt and message.txt
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Console output format
    #[arg(short, long)]
    output: Option<ReportFormat>,

    /// Write the console report to a file instead of stdout
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Exit with code 1 when changes reach this level
    #[arg(long)]
    fail_on: Option<Compatibility>,

    /// Replace emoji with ASCII in console output
    #[arg(long)]
    ascii: bool,

    /// Skip validation of the new snapshot
    #[arg(long)]
    no_validate: bool,

    /// Write this to version.txt instead of the version when the API changed
    #[arg(long)]
    publish_marker: Option<String>,
}

/// Arguments for the `diff` subcommand
#[derive(Parser)]
struct DiffArgs {
    /// Path to the old/baseline snapshot
    old: PathBuf,

    /// Path to the new snapshot
    new: PathBuf,

    /// Output format
    #[arg(short, long)]
    output: Option<ReportFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Exit with code 1 when changes reach this level
    #[arg(long)]
    fail_on: Option<Compatibility>,

    /// Replace emoji with ASCII in console output
    #[arg(long)]
    ascii: bool,
}

/// Arguments for the `diff-multi` subcommand
#[derive(Parser)]
struct DiffMultiArgs {
    /// Snapshot to compare
    new: PathBuf,

    /// Historical baseline snapshots
    #[arg(required = true)]
    baselines: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare a new snapshot with the published baseline and write release outputs
    Check(CheckArgs),

    /// Compare two snapshot files
    Diff(DiffArgs),

    /// Compare one snapshot against several historical baselines
    DiffMulti(DiffMultiArgs),

    /// Print an example config file or its JSON schema
    Config {
        /// Print the fully commented example
        #[arg(long)]
        full: bool,

        /// Print the JSON schema instead
        #[arg(long, conflicts_with = "full")]
        schema: bool,

        /// Print the effective configuration (defaults merged with the config file)
        #[arg(long, conflicts_with_all = ["full", "schema"])]
        show: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(io::stderr))
        .init();

    match run(cli) {
        Ok(code) => {
            if code != exit_codes::SUCCESS {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(exit_codes::ERROR);
        }
    }
}

/// Dispatch to command handlers, returning the exit code.
fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Check(args) => {
            let overrides = AppConfig::builder()
                .reference_version(args.reference_version)
                .output_dir(args.output_dir.unwrap_or_else(|| PathBuf::from(api_compat::config::DEFAULT_OUTPUT_DIR)))
                .output_format(args.output.unwrap_or_default())
                .output_file(args.output_file)
                .ascii_only(args.ascii)
                .no_color(cli.no_color)
                .fail_on(args.fail_on)
                .quiet(cli.quiet)
                .validate_snapshot(!args.no_validate)
                .publish_marker(args.publish_marker)
                .build();
            let (config, loaded_from) = AppConfig::from_file_with_overrides(cli.config.as_deref(), &overrides);
            if let Some(path) = loaded_from {
                tracing::debug!("Using config file {}", path.display());
            }

            cli::run_check(config.to_check_config(args.new, args.baseline))
        }

        Commands::Diff(args) => {
            let overrides = AppConfig::builder()
                .output_format(args.output.unwrap_or_default())
                .output_file(args.output_file)
                .ascii_only(args.ascii)
                .no_color(cli.no_color)
                .fail_on(args.fail_on)
                .quiet(cli.quiet)
                .build();
            let (config, _) = AppConfig::from_file_with_overrides(cli.config.as_deref(), &overrides);

            cli::run_diff(DiffConfig {
                paths: DiffPaths {
                    old: args.old,
                    new: args.new,
                },
                output: config.output,
                behavior: config.behavior,
            })
        }

        Commands::DiffMulti(args) => {
            cli::run_diff_multi(args.new, args.baselines, args.output, args.output_file, cli.quiet)?;
            Ok(exit_codes::SUCCESS)
        }

        Commands::Config { full, schema, show } => {
            if schema {
                println!("{}", api_compat::config::generate_json_schema());
            } else if full {
                print!("{}", api_compat::config::generate_full_example_config());
            } else if show {
                let (config, loaded_from) = api_compat::config::load_or_default(cli.config.as_deref());
                match &loaded_from {
                    Some(path) => eprintln!("# Loaded from: {}", path.display()),
                    None => eprintln!("# No config file found; showing defaults"),
                }
                let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
                print!("{yaml}");
            } else {
                print!("{}", api_compat::config::generate_example_config());
            }
            Ok(exit_codes::SUCCESS)
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "api-compat", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }
    }
}
