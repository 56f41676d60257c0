use super::{parse_argument, Rule, RuleKind};
use crate::error::RuleError;
use crate::value::Value;

/// `min:N` — integer must be at least `N`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinRule;

/// `max:N` — integer must be at most `N`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxRule;

impl Rule for MinRule {
    fn kind(&self) -> RuleKind {
        RuleKind::Min
    }

    fn check(&self, value: &Value<'_>, argument: &str) -> Result<(), RuleError> {
        let (value, min) = integer_and_bound(RuleKind::Min, value, argument)?;
        if value < i128::from(min) {
            return Err(RuleError::BelowMinimum { value, min });
        }
        Ok(())
    }
}

impl Rule for MaxRule {
    fn kind(&self) -> RuleKind {
        RuleKind::Max
    }

    fn check(&self, value: &Value<'_>, argument: &str) -> Result<(), RuleError> {
        let (value, max) = integer_and_bound(RuleKind::Max, value, argument)?;
        if value > i128::from(max) {
            return Err(RuleError::AboveMaximum { value, max });
        }
        Ok(())
    }
}

/// The kind is checked before the bound is parsed.
fn integer_and_bound(
    rule: RuleKind,
    value: &Value<'_>,
    argument: &str,
) -> Result<(i128, i64), RuleError> {
    let value = value.as_integer().ok_or(RuleError::NotAnInteger {
        rule,
        kind: value.kind(),
    })?;
    let bound = parse_argument(rule, argument)?;
    Ok((value, bound))
}
