//! Error types for catalog construction.

use thiserror::Error;

/// Errors that can occur when building a catalog from caller-supplied data.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    /// Two options share a code.
    #[error("duplicate country code '{code}' in catalog")]
    DuplicateCode { code: String },

    /// Translation table could not be parsed.
    #[error("failed to parse message table: {source}")]
    MessageTable {
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
