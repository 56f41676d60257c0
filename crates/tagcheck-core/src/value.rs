//! # Runtime Value Model
//!
//! A borrowed, kind-tagged view of a value, produced by [`Inspect`] and
//! consumed by the rule validators. Rules never see the caller's concrete
//! types; they only see a [`Value`] and its [`Kind`].
//!
//! ## Rendering
//!
//! `Display` on [`Value`] is the textual form used by the `in` rule and in
//! violation messages: text verbatim, numbers in decimal, lists as
//! `[a b c]`, maps as `map[k:v]`, records as `{v1 v2}`, null as `<nil>`.
//!
//! [`Inspect`]: crate::Inspect

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of a runtime value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// Absent value (`None`, JSON `null`, missing document key).
    Null,
    /// Boolean.
    Bool,
    /// Signed integer of any width.
    Int,
    /// Unsigned integer of any width.
    Uint,
    /// Floating point number.
    Float,
    /// Text.
    String,
    /// Ordered collection.
    List,
    /// Keyed collection without field annotations.
    Map,
    /// Structured record with named, annotated fields.
    Record,
}

impl Kind {
    /// Returns the lowercase name used in violation messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Bool => "bool",
            Kind::Int => "int",
            Kind::Uint => "uint",
            Kind::Float => "float",
            Kind::String => "string",
            Kind::List => "list",
            Kind::Map => "map",
            Kind::Record => "record",
        }
    }

    /// Returns true for signed and unsigned integer kinds.
    pub fn is_integer(&self) -> bool {
        matches!(self, Kind::Int | Kind::Uint)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a field is part of its record's public contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// Declared `pub`; subject to validation.
    Public,
    /// Anything narrower than `pub`; invisible to validation.
    Private,
}

impl Visibility {
    /// Classify a visibility qualifier as written in source.
    ///
    /// Only a bare `pub` is public. `pub(crate)`, `pub(super)`, `pub(in ..)`
    /// and the empty qualifier are all private.
    pub fn from_token(token: &str) -> Self {
        if token == "pub" {
            Visibility::Public
        } else {
            Visibility::Private
        }
    }

    /// Returns true for [`Visibility::Public`].
    pub fn is_public(self) -> bool {
        self == Visibility::Public
    }
}

/// One field of a record, as seen by the field walker.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor<'a> {
    /// Field name, reported in violations.
    pub name: &'a str,
    /// Current value of the field.
    pub value: Value<'a>,
    /// Raw rule annotation, e.g. `"min:18|max:50"`. Empty means unchecked.
    pub annotation: &'a str,
    /// Visibility of the field.
    pub visibility: Visibility,
}

impl<'a> FieldDescriptor<'a> {
    /// Create a public field descriptor.
    pub fn new(name: &'a str, value: Value<'a>, annotation: &'a str) -> Self {
        Self {
            name,
            value,
            annotation,
            visibility: Visibility::Public,
        }
    }

    /// Replace the visibility of this descriptor.
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Returns true if the field is part of the public contract.
    pub fn is_public(&self) -> bool {
        self.visibility.is_public()
    }
}

/// A borrowed runtime view of a value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    /// Absent value.
    Null,
    /// Boolean.
    Bool(bool),
    /// Signed integer.
    Int(i64),
    /// Unsigned integer.
    Uint(u64),
    /// Double-precision floating point number.
    Float(f64),
    /// Single-precision floating point number, rendered at its own
    /// precision (`0.1f32` renders as `0.1`).
    Float32(f32),
    /// Text.
    Str(Cow<'a, str>),
    /// Ordered collection.
    List {
        /// Kind every element has by construction, when the source type
        /// fixes it (e.g. `Vec<String>` declares [`Kind::String`]).
        element: Option<Kind>,
        /// Elements in order.
        items: Vec<Value<'a>>,
    },
    /// Keyed collection, in key order.
    Map(Vec<(Cow<'a, str>, Value<'a>)>),
    /// Structured record, fields in declaration order.
    Record(Vec<FieldDescriptor<'a>>),
}

impl<'a> Value<'a> {
    /// Build a list value.
    pub fn list(element: Option<Kind>, items: Vec<Value<'a>>) -> Self {
        Value::List { element, items }
    }

    /// Returns the kind of this value.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Int(_) => Kind::Int,
            Value::Uint(_) => Kind::Uint,
            Value::Float(_) | Value::Float32(_) => Kind::Float,
            Value::Str(_) => Kind::String,
            Value::List { .. } => Kind::List,
            Value::Map(_) => Kind::Map,
            Value::Record(_) => Kind::Record,
        }
    }

    /// Returns the text if this is a [`Value::Str`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the integer widened to `i128` if this is an integer kind.
    pub fn as_integer(&self) -> Option<i128> {
        match self {
            Value::Int(n) => Some(i128::from(*n)),
            Value::Uint(n) => Some(i128::from(*n)),
            _ => None,
        }
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("<nil>"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Uint(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Float32(x) => write!(f, "{x}"),
            Value::Str(text) => f.write_str(text),
            Value::List { items, .. } => {
                f.write_str("[")?;
                write_spaced(f, items.iter())?;
                f.write_str("]")
            }
            Value::Map(entries) => {
                f.write_str("map[")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{key}:{value}")?;
                }
                f.write_str("]")
            }
            Value::Record(fields) => {
                f.write_str("{")?;
                write_spaced(f, fields.iter().map(|field| &field.value))?;
                f.write_str("}")
            }
        }
    }
}

fn write_spaced<'v, 'a: 'v>(
    f: &mut fmt::Formatter<'_>,
    values: impl Iterator<Item = &'v Value<'a>>,
) -> fmt::Result {
    for (i, value) in values.enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{value}")?;
    }
    Ok(())
}
