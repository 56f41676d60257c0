//! # tagcheck-core — Declarative Record Validation
//!
//! Validates a record against rule annotations attached to its fields and
//! reports every violation in one pass.
//!
//! ```
//! use tagcheck_core::{record, validate};
//!
//! record! {
//!     #[derive(Debug)]
//!     pub struct User {
//!         pub id: String = "len:36",
//!         pub age: i64 = "min:18|max:50",
//!         pub role: String = "in:admin,stuff",
//!         pub name: String,
//!     }
//! }
//!
//! let user = User { id: "123".into(), age: 17, role: "guest".into(), name: String::new() };
//! let err = validate(&user).unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "id: length of value is 3 but expected 36; \
//!      age: value 17 is less than minimum 18; \
//!      role: value guest is not in the allowed list [admin,stuff]; "
//! );
//! ```
//!
//! ## Annotation Syntax
//!
//! `rule:argument|rule:argument|...`. Recognised rules: `len`, `regexp`,
//! `min`, `max`, `in` (see [`rules`]). Unknown rule names are ignored.
//!
//! ## Components
//!
//! - [`value`] / [`inspect`] — runtime view of a record and its fields.
//! - [`tag`] — annotation parser.
//! - [`rules`] — the rule registry and validators.
//! - [`walker`] — the validation pass.
//! - [`error`] — rule failures, the aggregate, and the call-level error.
//!
//! ## Crate Policy
//!
//! - No I/O. No shared mutable state: each call owns its aggregate.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod inspect;
pub mod rules;
pub mod tag;
pub mod value;
pub mod walker;

pub use error::{RuleError, ValidateError, ValidationError, ValidationErrors};
pub use inspect::Inspect;
pub use rules::{lookup, Rule, RuleKind, RULE_KINDS};
pub use tag::RuleInvocation;
pub use value::{FieldDescriptor, Kind, Value, Visibility};
pub use walker::{validate, Validate};
