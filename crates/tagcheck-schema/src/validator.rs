//! # Document Validation
//!
//! [`DocumentValidator`] owns one [`RecordSchema`] and validates documents
//! against it, singly or in batches. Batches never stop at the first bad
//! document; every outcome lands in the [`ValidationReport`].

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value as JsonValue;
use tagcheck_core::{ValidateError, ValidationError};

use crate::document::load_document;
use crate::error::SchemaError;
use crate::schema::RecordSchema;

/// Validates documents against a single record schema.
#[derive(Debug, Clone)]
pub struct DocumentValidator {
    schema: RecordSchema,
}

impl DocumentValidator {
    /// Create a validator for `schema`.
    pub fn new(schema: RecordSchema) -> Self {
        Self { schema }
    }

    /// Load the schema at `path` and create a validator for it.
    ///
    /// # Errors
    ///
    /// As [`RecordSchema::load`].
    pub fn load(path: &Path) -> Result<Self, SchemaError> {
        let schema = RecordSchema::load(path)?;
        tracing::info!(
            schema = %schema.name,
            fields = schema.fields.len(),
            path = %path.display(),
            "loaded record schema"
        );
        Ok(Self::new(schema))
    }

    /// The schema documents are validated against.
    pub fn schema(&self) -> &RecordSchema {
        &self.schema
    }

    /// Validate a parsed document.
    ///
    /// # Errors
    ///
    /// As [`tagcheck_core::validate`].
    pub fn validate_value(&self, document: &JsonValue) -> Result<(), ValidateError> {
        tagcheck_core::validate(&self.schema.bind(document))
    }

    /// Load and validate one document file.
    ///
    /// # Errors
    ///
    /// `DocumentLoad` if the file cannot be read or parsed, `Validate` if it
    /// is rejected.
    pub fn validate_file(&self, path: &Path) -> Result<(), SchemaError> {
        let document = load_document(path)?;
        self.validate_value(&document)?;
        Ok(())
    }

    /// Validate every file in `paths`, in order.
    pub fn validate_files<P: AsRef<Path>>(&self, paths: &[P]) -> ValidationReport {
        let documents = paths
            .iter()
            .map(|path| {
                let path = path.as_ref();
                let outcome = DocumentOutcome::new(path, self.validate_file(path));
                tracing::debug!(path = %path.display(), status = ?outcome.status, "document checked");
                outcome
            })
            .collect();

        ValidationReport {
            schema: self.schema.name.clone(),
            documents,
        }
    }
}

/// Result category of one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Every rule held.
    Passed,
    /// The document is not a record or violates its rules.
    Failed,
    /// The document could not be checked.
    Error,
}

/// Outcome of validating one document.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentOutcome {
    /// Document path as given.
    pub path: PathBuf,
    /// Result category.
    pub status: Status,
    /// Error text for structural failures and operational errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Rule violations, in evaluation order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub violations: Vec<ValidationError>,
}

impl DocumentOutcome {
    fn new(path: &Path, result: Result<(), SchemaError>) -> Self {
        let (status, message, violations) = match result {
            Ok(()) => (Status::Passed, None, Vec::new()),
            Err(SchemaError::Validate(ValidateError::Invalid(violations))) => {
                (Status::Failed, None, violations.into_inner())
            }
            Err(err) if err.is_violation() => (Status::Failed, Some(err.to_string()), Vec::new()),
            Err(err) => (Status::Error, Some(err.to_string()), Vec::new()),
        };
        Self {
            path: path.to_path_buf(),
            status,
            message,
            violations,
        }
    }
}

/// Outcomes of a batch of documents validated against one schema.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    /// Schema name.
    pub schema: String,
    /// Per-document outcomes, in input order.
    pub documents: Vec<DocumentOutcome>,
}

impl ValidationReport {
    /// Number of documents checked.
    pub fn total(&self) -> usize {
        self.documents.len()
    }

    /// Number of documents with the given status.
    pub fn count(&self, status: Status) -> usize {
        self.documents.iter().filter(|d| d.status == status).count()
    }

    /// Process exit code: `2` if any document could not be checked, `1` if
    /// any failed, `0` otherwise.
    pub fn exit_code(&self) -> u8 {
        if self.count(Status::Error) > 0 {
            2
        } else if self.count(Status::Failed) > 0 {
            1
        } else {
            0
        }
    }
}
