use super::{Rule, RuleKind};
use crate::error::RuleError;
use crate::value::Value;

/// Separates entries of an `in` allow-list.
const ALLOW_LIST_SEPARATOR: char = ',';

/// `in:A,B,C` — the rendered value must equal one entry byte for byte.
#[derive(Debug, Clone, Copy, Default)]
pub struct MembershipRule;

impl Rule for MembershipRule {
    fn kind(&self) -> RuleKind {
        RuleKind::In
    }

    fn check(&self, value: &Value<'_>, argument: &str) -> Result<(), RuleError> {
        let rendered = value.to_string();
        let mut allowed = argument.split(ALLOW_LIST_SEPARATOR);
        if allowed.any(|entry| entry == rendered) {
            return Ok(());
        }
        Err(RuleError::NotInAllowList {
            value: rendered,
            allowed: argument
                .split(ALLOW_LIST_SEPARATOR)
                .map(str::to_string)
                .collect(),
        })
    }
}
