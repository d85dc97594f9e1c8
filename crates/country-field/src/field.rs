//! The country select field type.

use country_catalog::Catalog;
use country_model::{ColumnType, CountryOption, NormalizedValue, SelectionMode};
use serde_json::Value;
use tracing::debug;

use crate::config::FieldConfig;
use crate::error::Result;
use crate::input::FieldInput;
use crate::normalize::normalize;
use crate::render::{
    InputContext, InputRenderer, SELECT_TEMPLATE, format_input_id, namespace_input_id,
};
use crate::storage;

/// A country selector bound to one catalog and one selection mode.
///
/// # Example
///
/// ```
/// use country_field::{CountrySelectField, FieldConfig};
///
/// let field = CountrySelectField::new(FieldConfig::multi("visited").unwrap());
/// let value = field.normalize_value(r#"["CA","MX"]"#);
/// assert_eq!(value.codes(), vec!["CA", "MX"]);
/// assert_eq!(field.serialize_value(&value), serde_json::json!(["CA", "MX"]));
/// ```
#[derive(Debug, Clone)]
pub struct CountrySelectField<'c> {
    config: FieldConfig,
    catalog: &'c Catalog,
}

impl CountrySelectField<'static> {
    /// A field over the built-in catalog.
    pub fn new(config: FieldConfig) -> Self {
        Self::with_catalog(config, Catalog::builtin())
    }
}

impl<'c> CountrySelectField<'c> {
    pub const DISPLAY_NAME: &'static str = "Country Select";

    /// A field over a caller-supplied (e.g., translated) catalog.
    pub fn with_catalog(config: FieldConfig, catalog: &'c Catalog) -> Self {
        Self { config, catalog }
    }

    pub const fn display_name() -> &'static str {
        Self::DISPLAY_NAME
    }

    pub fn handle(&self) -> &str {
        &self.config.handle
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub const fn mode(&self) -> SelectionMode {
        self.config.mode()
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    /// Catalog options in display order.
    pub fn options(&self) -> &'c [CountryOption] {
        self.catalog.options()
    }

    pub fn normalize_value(&self, input: impl Into<FieldInput>) -> NormalizedValue {
        normalize(input, self.catalog, self.mode())
    }

    /// Persisted form of a value.
    pub fn serialize_value(&self, value: &NormalizedValue) -> Value {
        storage::serialize_value(value)
    }

    pub fn content_column_type(&self) -> ColumnType {
        storage::column_type(self.catalog, self.mode())
    }

    /// Context handed to the template renderer.
    pub fn input_context<'v>(
        &'v self,
        value: &'v NormalizedValue,
        namespace: Option<&str>,
    ) -> InputContext<'v> {
        let id = format_input_id(self.handle());
        let namespaced_id = namespace_input_id(&id, namespace);
        InputContext {
            name: self.handle(),
            id,
            namespaced_id,
            value,
            options: self.options(),
        }
    }

    /// Normalize `input` and render the select control through `renderer`.
    pub fn input_html(
        &self,
        input: impl Into<FieldInput>,
        renderer: &dyn InputRenderer,
        namespace: Option<&str>,
    ) -> Result<String> {
        let value = self.normalize_value(input);
        let context = self.input_context(&value, namespace);
        debug!(
            handle = %self.handle(),
            id = %context.namespaced_id,
            template = SELECT_TEMPLATE,
            "rendering country select input"
        );
        Ok(renderer.render(SELECT_TEMPLATE, &context)?)
    }
}
