//! # Field Introspection
//!
//! [`Inspect`] turns a concrete value into a [`Value`] the validators can
//! read. Records expose their fields as [`Value::Record`], in declaration
//! order, each with its rule annotation and visibility.
//!
//! Two ways to make a type validatable:
//!
//! - Declare it with [`record!`](crate::record), which emits the struct and
//!   its `Inspect` impl together.
//! - Implement `Inspect` by hand, returning `Value::Record` with one
//!   [`FieldDescriptor`](crate::FieldDescriptor) per field.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

use crate::value::{Kind, Value};

/// Produces the runtime view of a value.
pub trait Inspect {
    /// Borrowed view of `self`.
    fn to_value(&self) -> Value<'_>;

    /// The kind every value of this type inspects to, when the type fixes it.
    ///
    /// Collections report it as their element kind, which decides whether
    /// the `len` rule measures each element or the collection itself.
    fn declared_kind() -> Option<Kind> {
        None
    }
}

impl<T: Inspect + ?Sized> Inspect for &T {
    fn to_value(&self) -> Value<'_> {
        (**self).to_value()
    }

    fn declared_kind() -> Option<Kind> {
        T::declared_kind()
    }
}

impl<T: Inspect + ?Sized> Inspect for Box<T> {
    fn to_value(&self) -> Value<'_> {
        (**self).to_value()
    }

    fn declared_kind() -> Option<Kind> {
        T::declared_kind()
    }
}

impl<T: Inspect + ?Sized> Inspect for Rc<T> {
    fn to_value(&self) -> Value<'_> {
        (**self).to_value()
    }

    fn declared_kind() -> Option<Kind> {
        T::declared_kind()
    }
}

impl<T: Inspect + ?Sized> Inspect for Arc<T> {
    fn to_value(&self) -> Value<'_> {
        (**self).to_value()
    }

    fn declared_kind() -> Option<Kind> {
        T::declared_kind()
    }
}

impl Inspect for str {
    fn to_value(&self) -> Value<'_> {
        Value::Str(Cow::Borrowed(self))
    }

    fn declared_kind() -> Option<Kind> {
        Some(Kind::String)
    }
}

impl Inspect for String {
    fn to_value(&self) -> Value<'_> {
        Value::Str(Cow::Borrowed(self.as_str()))
    }

    fn declared_kind() -> Option<Kind> {
        Some(Kind::String)
    }
}

impl Inspect for Cow<'_, str> {
    fn to_value(&self) -> Value<'_> {
        Value::Str(Cow::Borrowed(self.as_ref()))
    }

    fn declared_kind() -> Option<Kind> {
        Some(Kind::String)
    }
}

impl Inspect for char {
    fn to_value(&self) -> Value<'_> {
        Value::Str(Cow::Owned(self.to_string()))
    }

    fn declared_kind() -> Option<Kind> {
        Some(Kind::String)
    }
}

impl Inspect for bool {
    fn to_value(&self) -> Value<'_> {
        Value::Bool(*self)
    }

    fn declared_kind() -> Option<Kind> {
        Some(Kind::Bool)
    }
}

macro_rules! impl_inspect_int {
    ($variant:ident, $kind:ident, $wide:ty => $($ty:ty),+) => {
        $(
            impl Inspect for $ty {
                fn to_value(&self) -> Value<'_> {
                    Value::$variant(<$wide>::from(*self))
                }

                fn declared_kind() -> Option<Kind> {
                    Some(Kind::$kind)
                }
            }
        )+
    };
}

impl_inspect_int!(Int, Int, i64 => i8, i16, i32, i64);
impl_inspect_int!(Uint, Uint, u64 => u8, u16, u32, u64);

impl Inspect for isize {
    fn to_value(&self) -> Value<'_> {
        // isize is at most 64 bits on every supported target.
        Value::Int(*self as i64)
    }

    fn declared_kind() -> Option<Kind> {
        Some(Kind::Int)
    }
}

impl Inspect for usize {
    fn to_value(&self) -> Value<'_> {
        Value::Uint(*self as u64)
    }

    fn declared_kind() -> Option<Kind> {
        Some(Kind::Uint)
    }
}

impl Inspect for f32 {
    fn to_value(&self) -> Value<'_> {
        Value::Float32(*self)
    }

    fn declared_kind() -> Option<Kind> {
        Some(Kind::Float)
    }
}

impl Inspect for f64 {
    fn to_value(&self) -> Value<'_> {
        Value::Float(*self)
    }

    fn declared_kind() -> Option<Kind> {
        Some(Kind::Float)
    }
}

impl<T: Inspect> Inspect for Option<T> {
    fn to_value(&self) -> Value<'_> {
        match self {
            Some(inner) => inner.to_value(),
            None => Value::Null,
        }
    }
}

impl<T: Inspect> Inspect for [T] {
    fn to_value(&self) -> Value<'_> {
        Value::list(T::declared_kind(), self.iter().map(Inspect::to_value).collect())
    }

    fn declared_kind() -> Option<Kind> {
        Some(Kind::List)
    }
}

impl<T: Inspect, const N: usize> Inspect for [T; N] {
    fn to_value(&self) -> Value<'_> {
        self.as_slice().to_value()
    }

    fn declared_kind() -> Option<Kind> {
        Some(Kind::List)
    }
}

impl<T: Inspect> Inspect for Vec<T> {
    fn to_value(&self) -> Value<'_> {
        self.as_slice().to_value()
    }

    fn declared_kind() -> Option<Kind> {
        Some(Kind::List)
    }
}

impl<T: Inspect> Inspect for VecDeque<T> {
    fn to_value(&self) -> Value<'_> {
        Value::list(T::declared_kind(), self.iter().map(Inspect::to_value).collect())
    }

    fn declared_kind() -> Option<Kind> {
        Some(Kind::List)
    }
}

impl<K: AsRef<str>, V: Inspect> Inspect for BTreeMap<K, V> {
    fn to_value(&self) -> Value<'_> {
        Value::Map(
            self.iter()
                .map(|(key, value)| (Cow::Borrowed(key.as_ref()), value.to_value()))
                .collect(),
        )
    }

    fn declared_kind() -> Option<Kind> {
        Some(Kind::Map)
    }
}

impl<K: AsRef<str>, V: Inspect, S> Inspect for HashMap<K, V, S> {
    fn to_value(&self) -> Value<'_> {
        let mut entries: Vec<(Cow<'_, str>, Value<'_>)> = self
            .iter()
            .map(|(key, value)| (Cow::Borrowed(key.as_ref()), value.to_value()))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        Value::Map(entries)
    }

    fn declared_kind() -> Option<Kind> {
        Some(Kind::Map)
    }
}

/// JSON objects inspect as maps, not records: they carry no annotations.
/// Arrays declare a text element kind only when non-empty and all text.
impl Inspect for serde_json::Value {
    fn to_value(&self) -> Value<'_> {
        use serde_json::Value as Json;

        match self {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Bool(*b),
            Json::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else if let Some(u) = n.as_u64() {
                    Value::Uint(u)
                } else {
                    Value::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            Json::String(s) => Value::Str(Cow::Borrowed(s.as_str())),
            Json::Array(items) => {
                let all_text = !items.is_empty() && items.iter().all(Json::is_string);
                Value::list(
                    all_text.then_some(Kind::String),
                    items.iter().map(Inspect::to_value).collect(),
                )
            }
            Json::Object(map) => Value::Map(
                map.iter()
                    .map(|(key, value)| (Cow::Borrowed(key.as_str()), value.to_value()))
                    .collect(),
            ),
        }
    }
}

/// Declare a struct together with its [`Inspect`] impl.
///
/// Each field may carry a rule annotation after its type. Fields are
/// reported in declaration order; only fields declared exactly `pub` are
/// part of the public contract.
///
/// ```
/// use tagcheck_core::{record, validate};
///
/// record! {
///     #[derive(Debug, Clone)]
///     pub struct App {
///         pub version: String = "len:5",
///         pub build: u32,
///     }
/// }
///
/// let app = App { version: "1.0.0".into(), build: 7 };
/// assert!(validate(&app).is_ok());
/// ```
#[macro_export]
macro_rules! record {
    (@annotation) => { "" };
    (@annotation $rules:literal) => { $rules };
    (
        $(#[$struct_meta:meta])*
        $struct_vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $field_ty:ty $(= $rules:literal)?
            ),* $(,)?
        }
    ) => {
        $(#[$struct_meta])*
        $struct_vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $field_ty,
            )*
        }

        impl $crate::Inspect for $name {
            fn to_value(&self) -> $crate::Value<'_> {
                $crate::Value::Record(::std::vec![
                    $(
                        $crate::FieldDescriptor {
                            name: ::core::stringify!($field),
                            value: $crate::Inspect::to_value(&self.$field),
                            annotation: $crate::record!(@annotation $($rules)?),
                            visibility: $crate::Visibility::from_token(
                                ::core::stringify!($field_vis),
                            ),
                        },
                    )*
                ])
            }

            fn declared_kind() -> ::core::option::Option<$crate::Kind> {
                ::core::option::Option::Some($crate::Kind::Record)
            }
        }
    };
}
