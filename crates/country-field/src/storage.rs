//! Persisted form of a value and storage column sizing.
//!
//! Multi-select fields persist a JSON array of codes; single-select fields
//! persist the bare code (or nothing).

use country_catalog::Catalog;
use country_model::{ColumnType, NormalizedValue, Selection, SelectionMode};
use serde_json::Value;

/// JSON overhead per encoded code: two quotes and a comma.
const PER_CODE_OVERHEAD: usize = 3;

/// Bytes needed to store every catalog code as one JSON array.
///
/// Each code costs its length plus quotes and comma; the enclosing brackets
/// add two and the absent trailing comma takes one back.
///
/// # Example
///
/// ```
/// use country_catalog::Catalog;
/// use country_field::max_encoded_len;
///
/// // 251 two-letter codes: 251 * 5 + 1
/// assert_eq!(max_encoded_len(Catalog::builtin()), 1_256);
/// ```
pub fn max_encoded_len(catalog: &Catalog) -> usize {
    let codes: usize = catalog
        .codes()
        .filter(|code| !code.is_empty())
        .map(|code| code.len() + PER_CODE_OVERHEAD)
        .sum();
    codes + 1
}

/// Column class for a field of the given mode.
pub fn column_type(catalog: &Catalog, mode: SelectionMode) -> ColumnType {
    match mode {
        SelectionMode::Single => ColumnType::String,
        SelectionMode::Multi => ColumnType::for_content_length(max_encoded_len(catalog)),
    }
}

/// The value handed to the persistence layer.
///
/// - multi: array of selected codes in order
/// - single: the code, or `null`
pub fn serialize_value(value: &NormalizedValue) -> Value {
    match &value.selection {
        Selection::Single(Some(entry)) => Value::String(entry.code.clone()),
        Selection::Single(None) => Value::Null,
        Selection::Multi(entries) => Value::Array(
            entries
                .iter()
                .map(|entry| Value::String(entry.code.clone()))
                .collect(),
        ),
    }
}

/// Column text for the value: JSON text for multi, the bare code for single.
pub fn to_column_text(value: &NormalizedValue) -> Option<String> {
    match serialize_value(value) {
        Value::Null => None,
        Value::String(code) => Some(code),
        other => Some(other.to_string()),
    }
}
