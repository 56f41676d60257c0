//! # Documents as Records
//!
//! A JSON or YAML document becomes a record by pairing it with a
//! [`RecordSchema`]: the schema supplies field order, annotations and
//! visibility, the document supplies values.
//!
//! - A document that is not a JSON object is not a record.
//! - A schema field missing from the document inspects as `null`.
//! - Document keys the schema does not name are not validated.
//! - An array field takes its element kind from the schema when declared.

use std::borrow::Cow;
use std::path::Path;

use serde_json::Value as JsonValue;
use tagcheck_core::{FieldDescriptor, Inspect, Value, Visibility};

use crate::error::SchemaError;
use crate::schema::RecordSchema;

/// Serialization format of a schema or document file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// `.yaml` / `.yml`
    Yaml,
    /// Anything else.
    Json,
}

impl Format {
    /// Choose the format from a file extension.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml" | "yml") => Format::Yaml,
            _ => Format::Json,
        }
    }
}

/// A document viewed through a schema.
#[derive(Debug, Clone, Copy)]
pub struct Document<'a> {
    schema: &'a RecordSchema,
    value: &'a JsonValue,
}

impl<'a> Document<'a> {
    /// Pair `schema` with `value`.
    pub fn new(schema: &'a RecordSchema, value: &'a JsonValue) -> Self {
        Self { schema, value }
    }

    /// The schema this document is viewed through.
    pub fn schema(&self) -> &'a RecordSchema {
        self.schema
    }
}

impl Inspect for Document<'_> {
    fn to_value(&self) -> Value<'_> {
        let Some(object) = self.value.as_object() else {
            return self.value.to_value();
        };

        Value::Record(
            self.schema
                .fields
                .iter()
                .map(|spec| {
                    let value = match (object.get(&spec.name), spec.elements) {
                        (Some(JsonValue::Array(items)), Some(element)) => Value::list(
                            Some(element),
                            items.iter().map(Inspect::to_value).collect(),
                        ),
                        (field, _) => field.map_or(Value::Null, Inspect::to_value),
                    };
                    let visibility = if spec.public {
                        Visibility::Public
                    } else {
                        Visibility::Private
                    };
                    FieldDescriptor::new(&spec.name, value, &spec.validate)
                        .with_visibility(visibility)
                })
                .collect(),
        )
    }
}

/// Read and parse a document file, choosing the format from its extension.
///
/// # Errors
///
/// `DocumentLoad` if the file cannot be read or parsed.
pub fn load_document(path: &Path) -> Result<JsonValue, SchemaError> {
    let content = std::fs::read_to_string(path).map_err(|e| SchemaError::DocumentLoad {
        path: path.display().to_string(),
        reason: format!("cannot read file: {e}"),
    })?;
    parse_document(&content, Format::from_path(path)).map_err(|reason| {
        SchemaError::DocumentLoad {
            path: path.display().to_string(),
            reason,
        }
    })
}

/// Parse document text in the given format into a JSON value tree.
///
/// # Errors
///
/// Returns a human-readable reason if the text does not parse.
pub fn parse_document(content: &str, format: Format) -> Result<JsonValue, String> {
    match format {
        Format::Json => serde_json::from_str(content).map_err(|e| format!("invalid JSON: {e}")),
        Format::Yaml => {
            let yaml: serde_yaml::Value =
                serde_yaml::from_str(content).map_err(|e| format!("invalid YAML: {e}"))?;
            yaml_to_json(&yaml).map_err(|e| format!("YAML-to-JSON conversion failed: {e}"))
        }
    }
}

/// Convert a `serde_yaml::Value` tree into the equivalent JSON tree.
///
/// Tags are dropped. Scalar map keys are stringified; sequence and mapping
/// keys are rejected.
fn yaml_to_json(yaml: &serde_yaml::Value) -> Result<JsonValue, String> {
    match yaml {
        serde_yaml::Value::Null => Ok(JsonValue::Null),
        serde_yaml::Value::Bool(b) => Ok(JsonValue::Bool(*b)),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(JsonValue::from(i))
            } else if let Some(u) = n.as_u64() {
                Ok(JsonValue::from(u))
            } else if let Some(f) = n.as_f64() {
                serde_json::Number::from_f64(f)
                    .map(JsonValue::Number)
                    .ok_or_else(|| format!("cannot represent float {f} in JSON"))
            } else {
                Err(format!("unsupported YAML number: {n:?}"))
            }
        }
        serde_yaml::Value::String(s) => Ok(JsonValue::String(s.clone())),
        serde_yaml::Value::Sequence(seq) => seq
            .iter()
            .map(yaml_to_json)
            .collect::<Result<Vec<_>, _>>()
            .map(JsonValue::Array),
        serde_yaml::Value::Mapping(map) => {
            let mut object = serde_json::Map::new();
            for (k, v) in map {
                object.insert(yaml_key(k)?.into_owned(), yaml_to_json(v)?);
            }
            Ok(JsonValue::Object(object))
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_json(&tagged.value),
    }
}

fn yaml_key(key: &serde_yaml::Value) -> Result<Cow<'_, str>, String> {
    match key {
        serde_yaml::Value::String(s) => Ok(Cow::Borrowed(s)),
        serde_yaml::Value::Number(n) => Ok(Cow::Owned(n.to_string())),
        serde_yaml::Value::Bool(b) => Ok(Cow::Owned(b.to_string())),
        other => Err(format!("unsupported YAML map key type: {other:?}")),
    }
}
