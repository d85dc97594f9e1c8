//! Field configuration.
//!
//! A field is defined by its handle and whether it accepts several
//! countries. Definitions can be loaded from TOML or JSON:
//!
//! ```toml
//! handle = "homeCountry"
//! multi = false
//! ```

use std::fs;
use std::path::Path;

use country_model::SelectionMode;
use serde::{Deserialize, Serialize};

use crate::error::{FieldError, Result};

/// Settings fixed at field-definition time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldConfig {
    /// Input name and storage key of the field.
    pub handle: String,

    /// Multi-select enabled.
    #[serde(default)]
    pub multi: bool,
}

impl FieldConfig {
    /// Create a validated config.
    pub fn new(handle: impl Into<String>, multi: bool) -> Result<Self> {
        let config = Self {
            handle: handle.into(),
            multi,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn single(handle: impl Into<String>) -> Result<Self> {
        Self::new(handle, false)
    }

    pub fn multi(handle: impl Into<String>) -> Result<Self> {
        Self::new(handle, true)
    }

    pub const fn mode(&self) -> SelectionMode {
        SelectionMode::from_multi(self.multi)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file, choosing the format from its extension.
    pub fn load(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(std::ffi::OsStr::to_str)
            .map(str::to_ascii_lowercase);
        let content = || {
            fs::read_to_string(path).map_err(|source| FieldError::Io {
                path: path.to_path_buf(),
                source,
            })
        };
        match extension.as_deref() {
            Some("toml") => Self::from_toml_str(&content()?),
            Some("json") => Self::from_json_str(&content()?),
            _ => Err(FieldError::UnsupportedConfigFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    fn validate(&self) -> Result<()> {
        if is_valid_handle(&self.handle) {
            Ok(())
        } else {
            Err(FieldError::InvalidHandle {
                handle: self.handle.clone(),
            })
        }
    }
}

/// Handles start with an ASCII letter followed by letters, digits or `_`.
pub fn is_valid_handle(handle: &str) -> bool {
    let mut chars = handle.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
        }
        _ => false,
    }
}
