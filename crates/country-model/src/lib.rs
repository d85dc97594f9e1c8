//! Country select data model.
//!
//! - [`CountryOption`]: a catalog entry (`code`, `label`)
//! - [`SelectedOption`]: an option paired with its selection flag
//! - [`Selection`] / [`NormalizedValue`]: the canonical field value
//! - [`SelectionMode`]: single or multi select
//! - [`ColumnType`]: storage size classes for persisted codes

pub mod column;
pub mod error;
pub mod mode;
pub mod option;
pub mod value;

pub use column::ColumnType;
pub use error::{ModelError, Result};
pub use mode::SelectionMode;
pub use option::{CountryOption, SelectedOption};
pub use value::{NormalizedValue, Selection};
