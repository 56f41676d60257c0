//! # tagcheck CLI entry point
//!
//! Parses command-line arguments, initializes logging and dispatches to
//! subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use tagcheck_cli::check::{run_check, CheckArgs};
use tagcheck_cli::rules::run_rules;

/// Validate documents against annotated record schemas.
///
/// Each schema field carries an annotation such as `len:36` or
/// `min:18|max:50`; every violation in a document is reported.
#[derive(Parser, Debug)]
#[command(name = "tagcheck", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Log output format.
    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate documents against a record schema.
    Check(CheckArgs),

    /// List the rules recognised in annotations.
    Rules,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.log_format);

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "tagcheck starting");

    let result = match cli.command {
        Commands::Check(args) => run_check(&args),
        Commands::Rules => run_rules(),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}

fn init_tracing(verbose: u8, format: LogFormat) {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}
