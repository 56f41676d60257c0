//! # Field Walker
//!
//! One linear pass over a record: every public, annotated field has every
//! one of its rules evaluated, in declaration order then annotation order.
//! Failures are collected, never short-circuited, so a single call reports
//! everything wrong with the record.

use crate::error::{RuleError, ValidateError, ValidationErrors};
use crate::inspect::Inspect;
use crate::rules;
use crate::tag;
use crate::value::{FieldDescriptor, Value};

/// Validate a record against the annotations on its fields.
///
/// # Errors
///
/// - [`ValidateError::NotARecord`] if `record` does not inspect as a record.
/// - [`ValidateError::InvalidPattern`] if a `regexp` pattern does not compile.
/// - [`ValidateError::Invalid`] with every violation otherwise.
pub fn validate<T: Inspect + ?Sized>(record: &T) -> Result<(), ValidateError> {
    let fields = match record.to_value() {
        Value::Record(fields) => fields,
        other => {
            let kind = other.kind();
            tracing::debug!(%kind, "rejecting non-record input");
            return Err(ValidateError::NotARecord { kind });
        }
    };

    let mut violations = ValidationErrors::new();
    for field in &fields {
        check_field(field, &mut violations)?;
    }

    tracing::debug!(
        fields = fields.len(),
        violations = violations.len(),
        "record validated"
    );
    violations.into_result().map_err(ValidateError::Invalid)
}

/// Evaluate one field's rules, appending failures to `violations`.
fn check_field(
    field: &FieldDescriptor<'_>,
    violations: &mut ValidationErrors,
) -> Result<(), ValidateError> {
    if !field.is_public() || field.annotation.is_empty() {
        return Ok(());
    }

    for invocation in tag::parse(field.annotation) {
        let Some(rule) = rules::lookup(invocation.name) else {
            tracing::debug!(
                field = field.name,
                rule = invocation.name,
                "ignoring unknown rule"
            );
            continue;
        };

        tracing::trace!(
            field = field.name,
            rule = invocation.name,
            argument = invocation.argument,
            "evaluating rule"
        );

        match rule.check(&field.value, invocation.argument) {
            Ok(()) => {}
            Err(RuleError::InvalidPattern { pattern, source }) => {
                return Err(ValidateError::InvalidPattern {
                    field: field.name.to_string(),
                    pattern,
                    source,
                });
            }
            Err(error) => violations.push(field.name, error),
        }
    }
    Ok(())
}

/// Method-call form of [`validate`], available on every [`Inspect`] type.
pub trait Validate {
    /// See [`validate`].
    ///
    /// # Errors
    ///
    /// As [`validate`].
    fn validate(&self) -> Result<(), ValidateError>;
}

impl<T: Inspect + ?Sized> Validate for T {
    fn validate(&self) -> Result<(), ValidateError> {
        validate(self)
    }
}
