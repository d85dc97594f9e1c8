//! Country option catalog.
//!
//! This crate provides:
//!
//! - [`Catalog`]: the compiled-in country list, sorted by label
//! - [`Translate`]: passthrough hook applied to labels before sorting
//! - [`COUNTRIES`]: the raw `(code, label)` table
//!
//! # Example
//!
//! ```
//! use country_catalog::Catalog;
//!
//! let catalog = Catalog::builtin();
//! for option in catalog.iter().take(3) {
//!     println!("{} {}", option.code, option.label);
//! }
//! ```

pub mod catalog;
pub mod countries;
pub mod error;
pub mod translate;

pub use catalog::{Catalog, sort_key};
pub use countries::COUNTRIES;
pub use error::{CatalogError, Result};
pub use translate::{MessageTable, Passthrough, Translate};
