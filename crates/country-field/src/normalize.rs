//! Value normalization.
//!
//! Turns any raw field value into a [`NormalizedValue`] consistent with the
//! catalog. Normalization never fails:
//!
//! - a code missing from the catalog uses the code itself as its label
//! - a string that looks like JSON but does not parse is one literal code
//! - empty input yields the null selection (single) or an empty list (multi)
//!
//! # Input shapes
//!
//! | Raw value                         | Entries                         |
//! |-----------------------------------|---------------------------------|
//! | `null`, `""`, `true`/`false`      | none                            |
//! | `"US"`, `42`                      | one code                        |
//! | `'["US","GB"]'` (JSON text)       | decoded, then as below          |
//! | `["US", "GB"]`                    | codes in order                  |
//! | `[{"label": .., "value": ..}]`    | label/value pairs in order      |
//! | `{"label": .., "value": ..}`      | one pair                        |
//! | `{"0": "US", "1": "GB"}`          | the object's values             |
//! | serialized [`NormalizedValue`]    | passed through unchanged        |

use country_catalog::Catalog;
use country_model::{NormalizedValue, SelectedOption, Selection, SelectionMode};
use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::input::FieldInput;

/// One selected entry gathered from the raw value.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Entry {
    Code(String),
    /// Submitted label/value pair. A missing label resolves through the catalog.
    Pair {
        label: Option<String>,
        value: String,
    },
}

impl Entry {
    fn code(&self) -> &str {
        match self {
            Self::Code(code) => code,
            Self::Pair { value, .. } => value,
        }
    }

    fn resolve(&self, catalog: &Catalog) -> SelectedOption {
        match self {
            Self::Pair {
                label: Some(label),
                value,
            } => SelectedOption::chosen(value.as_str(), label.as_str()),
            _ => {
                let code = self.code();
                SelectedOption::chosen(code, resolve_label(catalog, code))
            }
        }
    }
}

/// Normalize a raw value against `catalog`.
///
/// # Example
///
/// ```
/// use country_catalog::Catalog;
/// use country_field::normalize;
/// use country_model::SelectionMode;
///
/// let value = normalize(vec!["US", "GB"], Catalog::builtin(), SelectionMode::Multi);
/// assert_eq!(value.labels(), vec!["United States", "United Kingdom"]);
///
/// let value = normalize("ZZ", Catalog::builtin(), SelectionMode::Single);
/// assert_eq!(value.label(), Some("ZZ"));
/// ```
pub fn normalize(
    input: impl Into<FieldInput>,
    catalog: &Catalog,
    mode: SelectionMode,
) -> NormalizedValue {
    let raw = match input.into() {
        FieldInput::Normalized(value) => return value,
        FieldInput::Raw(raw) => raw,
    };

    let raw = match raw {
        Value::String(text) => decode_if_json(text),
        other => other,
    };

    if let Some(value) = as_normalized(&raw) {
        trace!("raw value is an already-normalized value");
        return value;
    }

    let entries = gather_entries(raw);

    let selection = match mode {
        SelectionMode::Multi => Selection::Multi(
            entries
                .iter()
                .map(|entry| entry.resolve(catalog))
                .collect(),
        ),
        SelectionMode::Single => {
            if entries.len() > 1 {
                trace!(
                    ignored = entries.len() - 1,
                    "single-select value keeps only the first entry"
                );
            }
            Selection::Single(entries.first().map(|entry| entry.resolve(catalog)))
        }
    };

    let options = catalog
        .iter()
        .map(|option| {
            let selected = entries.iter().any(|entry| entry.code() == option.code);
            option.with_selected(selected)
        })
        .collect();

    let value = NormalizedValue::new(selection, options);
    debug!(
        mode = %mode,
        selected = value.len(),
        "normalized country value"
    );
    value
}

/// Catalog label for `code`, or the code itself when it is not listed.
pub fn resolve_label(catalog: &Catalog, code: &str) -> String {
    match catalog.label_for(code) {
        Some(label) => {
            trace!(code, label, "resolved country label");
            label.to_string()
        }
        None => {
            debug!(code, "code not in catalog, using it as its own label");
            code.to_string()
        }
    }
}

/// Decode strings that look like a JSON array or object.
///
/// Anything else, including text that fails to parse, stays a literal string.
fn decode_if_json(text: String) -> Value {
    let trimmed = text.trim();
    let looks_like_json = (trimmed.starts_with('[') && trimmed.ends_with(']'))
        || (trimmed.starts_with('{') && trimmed.ends_with('}'));
    if looks_like_json {
        match serde_json::from_str(trimmed) {
            Ok(decoded) => return decoded,
            Err(error) => {
                debug!(%error, "value is not valid JSON, treating it as a literal code");
            }
        }
    }
    Value::String(text)
}

/// A serialized [`NormalizedValue`] round-tripped through JSON.
fn as_normalized(raw: &Value) -> Option<NormalizedValue> {
    let map = raw.as_object()?;
    if !(map.contains_key("selection") && map.contains_key("options")) {
        return None;
    }
    serde_json::from_value(raw.clone()).ok()
}

fn gather_entries(raw: Value) -> Vec<Entry> {
    match raw {
        Value::Null | Value::Bool(_) => Vec::new(),
        Value::String(_) | Value::Number(_) => {
            scalar_code(raw).map(Entry::Code).into_iter().collect()
        }
        Value::Array(items) => items.into_iter().filter_map(entry_from_item).collect(),
        Value::Object(map) => {
            if map.contains_key("value") {
                pair_from_object(&map).into_iter().collect()
            } else {
                map.into_iter()
                    .filter_map(|(_, item)| entry_from_item(item))
                    .collect()
            }
        }
    }
}

fn entry_from_item(item: Value) -> Option<Entry> {
    match item {
        Value::Object(map) => pair_from_object(&map),
        other => scalar_code(other).map(Entry::Code),
    }
}

fn pair_from_object(map: &Map<String, Value>) -> Option<Entry> {
    let value = scalar_code(map.get("value")?.clone())?;
    let label = map
        .get("label")
        .and_then(Value::as_str)
        .map(str::to_string);
    Some(Entry::Pair { label, value })
}

/// Non-empty strings and numbers are codes; everything else is ignored.
fn scalar_code(value: Value) -> Option<String> {
    match value {
        Value::String(code) if !code.is_empty() => Some(code),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}
