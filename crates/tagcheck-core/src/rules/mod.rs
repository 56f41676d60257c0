//! # Rule Registry
//!
//! The closed set of validation rules. Each rule-name token maps to one
//! [`RuleKind`] and one static [`Rule`] implementation.
//!
//! Unknown tokens resolve to `None` from [`lookup`]. The field walker
//! ignores them; annotations can carry tokens meant for other tools.
//!
//! | Token | Rule |
//! |---|---|
//! | `len` | [`LengthRule`] |
//! | `regexp` | [`PatternRule`] |
//! | `min` | [`MinRule`] |
//! | `max` | [`MaxRule`] |
//! | `in` | [`MembershipRule`] |

mod bounds;
mod length;
mod membership;
mod pattern;

use std::fmt;
use std::str::FromStr;

use crate::error::RuleError;
use crate::value::Value;

pub use bounds::{MaxRule, MinRule};
pub use length::LengthRule;
pub use membership::MembershipRule;
pub use pattern::PatternRule;

/// A validator that checks one value against one annotation argument.
///
/// Implementations are stateless; the registry hands out `&'static`
/// references shared across threads.
pub trait Rule: Send + Sync {
    /// The kind this rule implements.
    fn kind(&self) -> RuleKind;

    /// Check `value` against `argument`.
    ///
    /// # Errors
    ///
    /// Returns the rule failure. [`RuleError::InvalidPattern`] aborts the
    /// calling validation pass; every other failure is recorded.
    fn check(&self, value: &Value<'_>, argument: &str) -> Result<(), RuleError>;
}

/// Every recognised rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    /// `len:N`
    Len,
    /// `regexp:PATTERN`
    Regexp,
    /// `min:N`
    Min,
    /// `max:N`
    Max,
    /// `in:A,B,C`
    In,
}

/// All rule kinds, in registry order.
pub const RULE_KINDS: [RuleKind; 5] = [
    RuleKind::Len,
    RuleKind::Regexp,
    RuleKind::Min,
    RuleKind::Max,
    RuleKind::In,
];

impl RuleKind {
    /// Resolve a rule-name token. Matching is exact and case-sensitive.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "len" => Some(RuleKind::Len),
            "regexp" => Some(RuleKind::Regexp),
            "min" => Some(RuleKind::Min),
            "max" => Some(RuleKind::Max),
            "in" => Some(RuleKind::In),
            _ => None,
        }
    }

    /// The token that names this rule in annotations.
    pub fn token(&self) -> &'static str {
        match self {
            RuleKind::Len => "len",
            RuleKind::Regexp => "regexp",
            RuleKind::Min => "min",
            RuleKind::Max => "max",
            RuleKind::In => "in",
        }
    }

    /// One-line summary of what the rule checks.
    pub fn description(&self) -> &'static str {
        match self {
            RuleKind::Len => "exact character count of text, of each text element, or element count of a list",
            RuleKind::Regexp => "non-empty text must match the regular expression",
            RuleKind::Min => "integer must be greater than or equal to the bound",
            RuleKind::Max => "integer must be less than or equal to the bound",
            RuleKind::In => "rendered value must equal one of the comma-separated entries",
        }
    }

    /// The validator implementing this rule.
    pub fn rule(&self) -> &'static dyn Rule {
        match self {
            RuleKind::Len => &LengthRule,
            RuleKind::Regexp => &PatternRule,
            RuleKind::Min => &MinRule,
            RuleKind::Max => &MaxRule,
            RuleKind::In => &MembershipRule,
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Look up the validator registered under `token`.
pub fn lookup(token: &str) -> Option<&'static dyn Rule> {
    RuleKind::from_token(token).map(|kind| kind.rule())
}

/// Parse a numeric rule argument, attributing failures to `rule`.
fn parse_argument<T>(rule: RuleKind, argument: &str) -> Result<T, RuleError>
where
    T: FromStr<Err = std::num::ParseIntError>,
{
    argument
        .parse()
        .map_err(|source| RuleError::InvalidArgument {
            rule,
            argument: argument.to_string(),
            source,
        })
}
