//! # tagcheck-schema — Record Schemas for Documents
//!
//! Applies the `tagcheck-core` engine to JSON and YAML documents. Field
//! annotations that a Rust type would carry in its declaration are read from
//! a schema file instead, and each document is viewed as a record of that
//! schema.
//!
//! ## Key Types
//!
//! - [`RecordSchema`] — field order, annotations and visibility, loaded
//!   from YAML or JSON.
//! - [`Document`] — a document bound to a schema; implements
//!   [`tagcheck_core::Inspect`].
//! - [`DocumentValidator`] — validates files and builds a
//!   [`ValidationReport`].
//!
//! ## Crate Policy
//!
//! - Depends only on `tagcheck-core` internally.
//! - Load failures ([`SchemaError::SchemaLoad`], [`SchemaError::DocumentLoad`])
//!   are never reported as validation failures.

pub mod document;
pub mod error;
pub mod schema;
pub mod validator;

pub use document::{load_document, parse_document, Document, Format};
pub use error::SchemaError;
pub use schema::{FieldSpec, RecordSchema};
pub use validator::{DocumentOutcome, DocumentValidator, Status, ValidationReport};
