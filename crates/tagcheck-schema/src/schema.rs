//! # Record Schemas
//!
//! A record schema names the fields of a document record, in order, with
//! the annotation and visibility each field would carry on a Rust struct:
//!
//! ```yaml
//! name: User
//! fields:
//!   - name: ID
//!     validate: "len:36"
//!   - name: Name
//!   - name: Phones
//!     validate: "len:11"
//!     elements: string
//!   - name: meta
//!     public: false
//! ```
//!
//! Field order in the file is the validation order. `elements` fixes the
//! element kind of an array field the way `Vec<String>` does on a Rust
//! record, so `len` measures each element even when the array is empty.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tagcheck_core::Kind;

use crate::document::{Document, Format};
use crate::error::SchemaError;

/// Field layout and annotations of one record type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecordSchema {
    /// Record type name, used in reports.
    pub name: String,
    /// Fields in declaration order.
    #[serde(default)]
    pub fields: Vec<FieldSpec>,
}

/// One field of a [`RecordSchema`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldSpec {
    /// Document key and reported field name.
    pub name: String,
    /// Rule annotation; empty means unchecked.
    #[serde(default)]
    pub validate: String,
    /// Whether the field is part of the public contract.
    #[serde(default = "default_public")]
    pub public: bool,
    /// Element kind of an array field. Without it, an array declares text
    /// elements only when it is non-empty and all strings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elements: Option<Kind>,
}

fn default_public() -> bool {
    true
}

impl RecordSchema {
    /// Parse a schema from YAML text.
    ///
    /// # Errors
    ///
    /// `SchemaLoad` if the text is not a valid schema, `DuplicateField` if a
    /// field name repeats.
    pub fn from_yaml(content: &str) -> Result<Self, SchemaError> {
        Self::parse(content, Format::Yaml, "<inline>")
    }

    /// Parse a schema from JSON text.
    ///
    /// # Errors
    ///
    /// As [`RecordSchema::from_yaml`].
    pub fn from_json(content: &str) -> Result<Self, SchemaError> {
        Self::parse(content, Format::Json, "<inline>")
    }

    /// Load a schema file, choosing the format from its extension.
    ///
    /// # Errors
    ///
    /// `SchemaLoad` if the file cannot be read or parsed, `DuplicateField` if
    /// a field name repeats.
    pub fn load(path: &Path) -> Result<Self, SchemaError> {
        let content = std::fs::read_to_string(path).map_err(|e| SchemaError::SchemaLoad {
            path: path.display().to_string(),
            reason: format!("cannot read file: {e}"),
        })?;
        Self::parse(&content, Format::from_path(path), &path.display().to_string())
    }

    fn parse(content: &str, format: Format, origin: &str) -> Result<Self, SchemaError> {
        let schema: Self = match format {
            Format::Yaml => serde_yaml::from_str(content).map_err(|e| SchemaError::SchemaLoad {
                path: origin.to_string(),
                reason: format!("invalid YAML: {e}"),
            })?,
            Format::Json => serde_json::from_str(content).map_err(|e| SchemaError::SchemaLoad {
                path: origin.to_string(),
                reason: format!("invalid JSON: {e}"),
            })?,
        };
        schema.check_unique_fields()?;
        Ok(schema)
    }

    fn check_unique_fields(&self) -> Result<(), SchemaError> {
        let mut seen = HashSet::new();
        for field in &self.fields {
            if !seen.insert(field.name.as_str()) {
                return Err(SchemaError::DuplicateField {
                    schema: self.name.clone(),
                    field: field.name.clone(),
                });
            }
        }
        Ok(())
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Pair this schema with a document, producing an inspectable record.
    pub fn bind<'a>(&'a self, document: &'a serde_json::Value) -> Document<'a> {
        Document::new(self, document)
    }
}
