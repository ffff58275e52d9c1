// Typed model of the Swagger 2.0 document sections the cleanup rules touch.
// Anything not modelled here is carried through untouched in the `extra` maps.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// HTTP method name (`get`, `post`, ...) mapped to its operation.
pub type PathItem = BTreeMap<String, Operation>;

/// Root of a specification document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Path templates (e.g. "/api/v2/operations/{id}") mapped to their path items
    #[serde(default)]
    pub paths: BTreeMap<String, PathItem>,

    /// Reusable named schemas
    #[serde(default)]
    pub definitions: BTreeMap<String, Definition>,

    /// Every other top-level key (`swagger`, `info`, `host`, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Document {
    /// Total number of operations across all paths
    pub fn operation_count(&self) -> usize {
        self.paths.values().map(|item| item.len()).sum()
    }
}

/// A single HTTP operation under a path
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    /// Status code mapped to response object. Absent, `null` or any other
    /// falsy value is read as empty.
    #[serde(default, deserialize_with = "responses_or_empty")]
    pub responses: Map<String, Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<Parameter>>,

    /// MIME types the operation accepts. `Some` whenever the key is present,
    /// including an explicit `null`.
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub consumes: Option<Value>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

fn responses_or_empty<'de, D>(deserializer: D) -> Result<Map<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Object(responses) => Ok(responses),
        value if is_falsy(&value) => Ok(Map::new()),
        other => Err(de::Error::custom(format!(
            "invalid responses: {}, expected a map",
            other
        ))),
    }
}

// Keeps a present key as `Some`, even when its value is `null`
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// A parameter attached to an operation.
///
/// Kept as a raw JSON object: flattening an inline `schema` can bring any key
/// up onto the parameter, so a fixed set of fields would lose data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Parameter(pub Map<String, Value>);

impl Parameter {
    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(Value::as_str)
    }

    /// The inline `schema` object, if there is one
    pub fn schema(&self) -> Option<&Map<String, Value>> {
        self.0.get("schema").and_then(Value::as_object)
    }

    /// True when the inline schema is a `$ref` wrapper
    pub fn is_reference(&self) -> bool {
        self.schema().map_or(false, |schema| schema.contains_key("$ref"))
    }

    pub fn param_type(&self) -> Option<&str> {
        self.0.get("type").and_then(Value::as_str)
    }

    pub fn is_file(&self) -> bool {
        self.param_type() == Some("file")
    }

    pub fn has_required(&self) -> bool {
        self.0.contains_key("required")
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }
}

/// A named schema under `definitions`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Definition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<String, Property>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A single property of a definition. `null` constraints read as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Property {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
