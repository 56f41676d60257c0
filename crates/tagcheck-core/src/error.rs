//! # Error Types — Rule Failures and Aggregated Reports
//!
//! Three tiers, all surfaced through [`ValidateError`]:
//!
//! - **Structural**: the input is not a record. Returned before any field
//!   is looked at.
//! - **Violations**: every per-field rule failure, collected in evaluation
//!   order into [`ValidationErrors`]. Never fails fast.
//! - **Configuration**: a rule whose pattern cannot be compiled. The call is
//!   aborted with the offending field and pattern.

use std::fmt;
use std::num::ParseIntError;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::rules::RuleKind;
use crate::value::Kind;

/// Failure reported by a single rule against a single value.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RuleError {
    /// Text, element, or collection length differs from the expected length.
    #[error("length of value is {found} but expected {expected}")]
    LengthMismatch {
        /// Length found.
        found: usize,
        /// Length required by the rule.
        expected: usize,
    },

    /// The rule does not apply to this kind of value.
    #[error("unsupported kind: {kind}")]
    UnsupportedKind {
        /// Kind of the offending value.
        kind: Kind,
    },

    /// Non-empty text that does not match the rule's pattern.
    #[error("value {value} does not match pattern {pattern}")]
    PatternMismatch {
        /// Rendered value.
        value: String,
        /// Pattern source as written in the annotation.
        pattern: String,
    },

    /// A numeric bound applied to a non-integer value.
    #[error("{rule} validation expects an int but got {kind}")]
    NotAnInteger {
        /// The bound rule (`min` or `max`).
        rule: RuleKind,
        /// Kind of the offending value.
        kind: Kind,
    },

    /// Integer below the `min` bound.
    #[error("value {value} is less than minimum {min}")]
    BelowMinimum {
        /// Offending value.
        value: i128,
        /// Bound from the annotation.
        min: i64,
    },

    /// Integer above the `max` bound.
    #[error("value {value} is greater than maximum {max}")]
    AboveMaximum {
        /// Offending value.
        value: i128,
        /// Bound from the annotation.
        max: i64,
    },

    /// Rendered value not present in the `in` allow-list.
    #[error("value {value} is not in the allowed list [{}]", .allowed.join(","))]
    NotInAllowList {
        /// Rendered value.
        value: String,
        /// Allow-list entries, in annotation order.
        allowed: Vec<String>,
    },

    /// A numeric rule argument that does not parse.
    #[error("invalid argument {argument:?} for rule {rule}: {source}")]
    InvalidArgument {
        /// Rule whose argument is malformed.
        rule: RuleKind,
        /// Argument text as written.
        argument: String,
        /// Parse failure.
        source: ParseIntError,
    },

    /// A `regexp` argument that does not compile.
    #[error("invalid regexp pattern {pattern:?}: {source}")]
    InvalidPattern {
        /// Pattern source as written.
        pattern: String,
        /// Compilation failure.
        source: regex::Error,
    },
}

/// A rule failure attributed to the field it was evaluated on.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Name of the failing field.
    pub field: String,
    /// The underlying rule failure.
    pub error: RuleError,
}

impl ValidationError {
    /// Attribute `error` to `field`.
    pub fn new(field: impl Into<String>, error: RuleError) -> Self {
        Self {
            field: field.into(),
            error,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.error)
    }
}

impl std::error::Error for ValidationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// Serialized as `{"field": .., "message": ..}`.
impl Serialize for ValidationError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ValidationError", 2)?;
        state.serialize_field("field", &self.field)?;
        state.serialize_field("message", &self.error.to_string())?;
        state.end()
    }
}

/// Every violation found in one validation call, in evaluation order.
///
/// Renders as `"<field>: <message>; "` per entry, concatenated.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    /// Create an empty aggregate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a violation.
    pub fn push(&mut self, field: impl Into<String>, error: RuleError) {
        self.0.push(ValidationError::new(field, error));
    }

    /// Returns the number of violations.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the violations as a slice.
    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    /// Iterate over the violations in order.
    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.0.iter()
    }

    /// Consumes self and returns the inner Vec.
    pub fn into_inner(self) -> Vec<ValidationError> {
        self.0
    }

    /// `Ok(())` when empty, otherwise `Err(self)`. An empty aggregate is
    /// never a failure.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for violation in &self.0 {
            write!(f, "{violation}; ")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Outcome of a failed [`validate`](crate::validate) call.
#[derive(Error, Debug)]
pub enum ValidateError {
    /// The input is not a record. No field was validated.
    #[error("input is not a structured record: found {kind}")]
    NotARecord {
        /// Kind of the input.
        kind: Kind,
    },

    /// One or more fields violated their rules.
    #[error("{0}")]
    Invalid(#[from] ValidationErrors),

    /// A field's `regexp` pattern does not compile.
    #[error("field {field}: invalid regexp pattern {pattern:?}: {source}")]
    InvalidPattern {
        /// Field carrying the pattern.
        field: String,
        /// Pattern source as written.
        pattern: String,
        /// Compilation failure.
        source: regex::Error,
    },
}

impl ValidateError {
    /// Returns the violations if this is [`ValidateError::Invalid`].
    pub fn violations(&self) -> Option<&ValidationErrors> {
        match self {
            ValidateError::Invalid(violations) => Some(violations),
            _ => None,
        }
    }

    /// Returns true if the input was rejected for its shape, not its data.
    pub fn is_structural(&self) -> bool {
        matches!(self, ValidateError::NotARecord { .. })
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// The aggregate is the in-order concatenation of `"field: message; "`.
        #[test]
        fn rendering_concatenates_entries_in_order(
            entries in prop::collection::vec(("[A-Za-z]{1,8}", 0usize..100, 0usize..100), 1..10)
        ) {
            let mut errors = ValidationErrors::new();
            let mut expected = String::new();
            for (field, found, wanted) in &entries {
                errors.push(field.as_str(), RuleError::LengthMismatch { found: *found, expected: *wanted });
                expected.push_str(&format!(
                    "{field}: length of value is {found} but expected {wanted}; "
                ));
            }
            prop_assert_eq!(errors.len(), entries.len());
            prop_assert_eq!(errors.to_string(), expected);
        }
    }
}
