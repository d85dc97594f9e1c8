//! Rendering hook.
//!
//! Markup is produced by an external template service. This module only
//! builds the [`InputContext`] handed to it: the input name, stable element
//! ids, the normalized value, and the catalog options.

use country_model::{CountryOption, NormalizedValue};
use serde::Serialize;

use crate::error::RenderError;

/// Template rendered for the field input.
pub const SELECT_TEMPLATE: &str = "country-select/_select";

/// Everything a template needs to draw the control.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputContext<'a> {
    /// Form input name (the field handle).
    pub name: &'a str,
    /// Element id derived from the name.
    pub id: String,
    /// Element id with the form namespace applied.
    pub namespaced_id: String,
    pub value: &'a NormalizedValue,
    pub options: &'a [CountryOption],
}

/// External template renderer.
pub trait InputRenderer {
    fn render(&self, template: &str, context: &InputContext<'_>) -> Result<String, RenderError>;
}

impl<F> InputRenderer for F
where
    F: Fn(&str, &InputContext<'_>) -> Result<String, RenderError>,
{
    fn render(&self, template: &str, context: &InputContext<'_>) -> Result<String, RenderError> {
        self(template, context)
    }
}

/// Renders the context itself as pretty JSON.
///
/// Useful for inspecting what a real template would receive.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonContextRenderer;

impl InputRenderer for JsonContextRenderer {
    fn render(&self, template: &str, context: &InputContext<'_>) -> Result<String, RenderError> {
        serde_json::to_string_pretty(context)
            .map_err(|error| RenderError::new(template, error.to_string()))
    }
}

/// Turn an input name into an element id.
///
/// Runs of `[`, `]`, `\` and whitespace become a single `-`; trailing dashes
/// are dropped.
///
/// ```
/// use country_field::format_input_id;
///
/// assert_eq!(format_input_id("fields[country]"), "fields-country");
/// assert_eq!(format_input_id("homeCountry"), "homeCountry");
/// ```
pub fn format_input_id(name: &str) -> String {
    let mut id = String::with_capacity(name.len());
    let mut in_separator = false;
    for ch in name.chars() {
        if matches!(ch, '[' | ']' | '\\') || ch.is_whitespace() {
            if !in_separator {
                id.push('-');
                in_separator = true;
            }
        } else {
            id.push(ch);
            in_separator = false;
        }
    }
    id.truncate(id.trim_end_matches('-').len());
    id
}

/// Prefix an element id with the form namespace, if any.
pub fn namespace_input_id(id: &str, namespace: Option<&str>) -> String {
    match namespace {
        Some(namespace) if !namespace.is_empty() => {
            format!("{}-{id}", format_input_id(namespace))
        }
        _ => id.to_string(),
    }
}
