//! Raw values entering the normalizer.

use country_model::NormalizedValue;
use serde_json::Value;

/// A field value as stored, submitted, or already normalized.
///
/// Raw values cover every shape a field can hold: `null`, a plain or
/// JSON-encoded string, a scalar code, a list of codes, or a list of
/// `{ "label": ..., "value": ... }` pairs.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldInput {
    /// Returned unchanged by the normalizer.
    Normalized(NormalizedValue),
    Raw(Value),
}

impl FieldInput {
    /// The empty value.
    pub const fn null() -> Self {
        Self::Raw(Value::Null)
    }
}

impl Default for FieldInput {
    fn default() -> Self {
        Self::null()
    }
}

impl From<NormalizedValue> for FieldInput {
    fn from(value: NormalizedValue) -> Self {
        Self::Normalized(value)
    }
}

impl From<Value> for FieldInput {
    fn from(value: Value) -> Self {
        Self::Raw(value)
    }
}

impl From<&str> for FieldInput {
    fn from(value: &str) -> Self {
        Self::Raw(Value::String(value.to_string()))
    }
}

impl From<String> for FieldInput {
    fn from(value: String) -> Self {
        Self::Raw(Value::String(value))
    }
}

impl From<Option<&str>> for FieldInput {
    fn from(value: Option<&str>) -> Self {
        value.map_or_else(Self::null, Self::from)
    }
}

impl From<Vec<&str>> for FieldInput {
    fn from(codes: Vec<&str>) -> Self {
        Self::Raw(Value::Array(
            codes
                .into_iter()
                .map(|code| Value::String(code.to_string()))
                .collect(),
        ))
    }
}

impl From<Vec<String>> for FieldInput {
    fn from(codes: Vec<String>) -> Self {
        Self::Raw(Value::Array(codes.into_iter().map(Value::String).collect()))
    }
}
