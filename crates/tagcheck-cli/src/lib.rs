//! # tagcheck-cli — Command-Line Validator
//!
//! Provides the `tagcheck` command-line interface over `tagcheck-schema`.
//!
//! ## Subcommands
//!
//! - `tagcheck check` — validate JSON/YAML documents against a record schema.
//! - `tagcheck rules` — list the rules recognised in annotations.
//!
//! ```bash
//! tagcheck check --schema user.schema.yaml users/*.json
//! tagcheck -v check --schema user.schema.yaml --format json user.yaml
//! ```
//!
//! Handlers return the process exit code: `0` all documents passed, `1`
//! at least one document failed, `2` at least one could not be checked.

pub mod check;
pub mod rules;
