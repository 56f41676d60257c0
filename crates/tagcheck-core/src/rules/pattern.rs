use regex::Regex;

use super::{Rule, RuleKind};
use crate::error::RuleError;
use crate::value::Value;

/// `regexp:PATTERN` — non-empty text must match.
///
/// The pattern is compiled before the value is looked at, so a malformed
/// pattern is reported even for empty or non-text values. Empty text and
/// non-text values otherwise pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternRule;

impl Rule for PatternRule {
    fn kind(&self) -> RuleKind {
        RuleKind::Regexp
    }

    fn check(&self, value: &Value<'_>, argument: &str) -> Result<(), RuleError> {
        let pattern = Regex::new(argument).map_err(|source| RuleError::InvalidPattern {
            pattern: argument.to_string(),
            source,
        })?;

        match value {
            Value::Str(text) if !text.is_empty() && !pattern.is_match(text) => {
                Err(RuleError::PatternMismatch {
                    value: text.to_string(),
                    pattern: argument.to_string(),
                })
            }
            _ => Ok(()),
        }
    }
}
