//! Country select field type.
//!
//! - [`normalize`]: coerce any raw value into a [`NormalizedValue`](country_model::NormalizedValue)
//! - [`max_encoded_len`] / [`column_type`]: storage sizing hints
//! - [`serialize_value`] / [`to_column_text`]: persisted form of a value
//! - [`InputRenderer`] / [`InputContext`]: rendering hook for an external template service
//! - [`CountrySelectField`]: the field type tying these to a [`FieldConfig`]

pub mod config;
pub mod error;
pub mod field;
pub mod input;
pub mod normalize;
pub mod render;
pub mod storage;

pub use config::{FieldConfig, is_valid_handle};
pub use error::{FieldError, RenderError, Result};
pub use field::CountrySelectField;
pub use input::FieldInput;
pub use normalize::{normalize, resolve_label};
pub use render::{
    InputContext, InputRenderer, JsonContextRenderer, SELECT_TEMPLATE, format_input_id,
    namespace_input_id,
};
pub use storage::{column_type, max_encoded_len, serialize_value, to_column_text};
