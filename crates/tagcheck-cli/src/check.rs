//! # Check Subcommand
//!
//! Validates documents against a record schema and prints one outcome per
//! document followed by a summary.
//!
//! Exit code: 0 when every document passes, 1 when any document fails its
//! rules, 2 when any document could not be checked.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use tagcheck_schema::{DocumentValidator, Status, ValidationReport};

/// Arguments for the `tagcheck check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Record schema file (YAML or JSON).
    #[arg(long, short)]
    pub schema: PathBuf,

    /// Report format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Documents to validate (YAML or JSON).
    #[arg(value_name = "DOCUMENT", required = true)]
    pub documents: Vec<PathBuf>,
}

/// Report formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per document, indented violations, summary line.
    Text,
    /// The full report as a JSON object.
    Json,
}

/// Execute the check subcommand.
pub fn run_check(args: &CheckArgs) -> Result<u8> {
    let validator = DocumentValidator::load(&args.schema)
        .with_context(|| format!("failed to load record schema {}", args.schema.display()))?;

    let report = validator.validate_files(&args.documents);

    match args.format {
        OutputFormat::Text => print!("{}", render_text(&report)),
        OutputFormat::Json => println!("{}", render_json(&report)?),
    }

    Ok(report.exit_code())
}

/// Render a report as pretty-printed JSON.
pub fn render_json(report: &ValidationReport) -> Result<String> {
    serde_json::to_string_pretty(report).context("failed to serialize report")
}

/// Render a report in the text format.
pub fn render_text(report: &ValidationReport) -> String {
    let mut out = String::new();

    for document in &report.documents {
        let label = match document.status {
            Status::Passed => "PASS",
            Status::Failed => "FAIL",
            Status::Error => "ERROR",
        };
        out.push_str(&format!("{label}: {}\n", document.path.display()));
        if let Some(message) = &document.message {
            out.push_str(&format!("  {message}\n"));
        }
        for violation in &document.violations {
            out.push_str(&format!("  {violation}\n"));
        }
    }

    out.push_str(&format!(
        "\n{}: {}/{} documents passed\n",
        report.schema,
        report.count(Status::Passed),
        report.total()
    ));
    out
}
