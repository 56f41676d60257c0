//! # Schema Errors
//!
//! Loading failures are kept apart from validation outcomes so callers can
//! tell "this document is wrong" from "this document could not be checked".

use tagcheck_core::ValidateError;
use thiserror::Error;

/// Error while loading schemas or documents, or validating documents.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// The schema file could not be read or parsed.
    #[error("schema load error for '{path}': {reason}")]
    SchemaLoad {
        /// Schema path or origin.
        path: String,
        /// Reason the schema could not be loaded.
        reason: String,
    },

    /// The document file could not be read or parsed.
    #[error("document load error for '{path}': {reason}")]
    DocumentLoad {
        /// Path to the document that failed to load.
        path: String,
        /// Reason the document could not be loaded.
        reason: String,
    },

    /// A schema lists the same field name twice.
    #[error("schema '{schema}' declares field '{field}' more than once")]
    DuplicateField {
        /// Schema name.
        schema: String,
        /// Repeated field name.
        field: String,
    },

    /// The document was checked and rejected, or a rule was misconfigured.
    #[error(transparent)]
    Validate(#[from] ValidateError),

    /// IO error reading a schema or document.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl SchemaError {
    /// Returns true when the document itself was at fault: it is not a
    /// record, or it violates its rules.
    pub fn is_violation(&self) -> bool {
        matches!(
            self,
            SchemaError::Validate(ValidateError::NotARecord { .. } | ValidateError::Invalid(_))
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tagcheck_core::Kind;

    #[test]
    fn structural_and_rule_failures_are_violations() {
        let err = SchemaError::from(ValidateError::NotARecord { kind: Kind::List });
        assert!(err.is_violation());
        assert_eq!(err.to_string(), "input is not a structured record: found list");
    }

    #[test]
    fn load_failures_are_not_violations() {
        let err = SchemaError::DocumentLoad {
            path: "user.json".into(),
            reason: "invalid JSON: EOF".into(),
        };
        assert!(!err.is_violation());
        assert_eq!(
            err.to_string(),
            "document load error for 'user.json': invalid JSON: EOF"
        );
    }
}
