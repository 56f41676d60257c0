//! # Rules Subcommand
//!
//! Lists the rule names recognised in annotations.

use anyhow::Result;

use tagcheck_core::RULE_KINDS;

/// Execute the rules subcommand.
pub fn run_rules() -> Result<u8> {
    print!("{}", render_rules());
    Ok(0)
}

/// One line per rule: token, padded, then description.
pub fn render_rules() -> String {
    RULE_KINDS
        .iter()
        .map(|kind| format!("{:<8}{}\n", kind.token(), kind.description()))
        .collect()
}
