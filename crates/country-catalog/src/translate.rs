//! Passthrough label translation.
//!
//! Country labels are run through a [`Translate`] implementation before the
//! catalog is sorted. The default is [`Passthrough`]; hosts with a message
//! catalog can supply a [`MessageTable`] or their own implementation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};

/// Translates a source message into the display language.
pub trait Translate {
    fn translate(&self, message: &str) -> String;
}

/// Returns every message unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl Translate for Passthrough {
    fn translate(&self, message: &str) -> String {
        message.to_string()
    }
}

/// Message → translation lookup. Missing messages pass through unchanged.
///
/// # Example
///
/// ```
/// use country_catalog::{MessageTable, Translate};
///
/// let table = MessageTable::from_json_str(r#"{ "Germany": "Deutschland" }"#).unwrap();
/// assert_eq!(table.translate("Germany"), "Deutschland");
/// assert_eq!(table.translate("France"), "France");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageTable {
    messages: BTreeMap<String, String>,
}

impl MessageTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a flat JSON object of `"message": "translation"` pairs.
    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|source| CatalogError::MessageTable { source })
    }

    pub fn insert(&mut self, message: impl Into<String>, translation: impl Into<String>) {
        self.messages.insert(message.into(), translation.into());
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Translate for MessageTable {
    fn translate(&self, message: &str) -> String {
        self.messages
            .get(message)
            .cloned()
            .unwrap_or_else(|| message.to_string())
    }
}
