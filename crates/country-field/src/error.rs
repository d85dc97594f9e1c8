//! Error types for field configuration and rendering.

use std::path::PathBuf;

use thiserror::Error;

/// Failure reported by an external template renderer.
#[derive(Debug, Error)]
#[error("failed to render template '{template}': {message}")]
pub struct RenderError {
    pub template: String,
    pub message: String,
}

impl RenderError {
    pub fn new(template: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            message: message.into(),
        }
    }
}

/// Errors that can occur when configuring or rendering a field.
///
/// Value normalization never fails and has no variant here.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FieldError {
    /// Handle is empty or contains characters other than letters, digits and `_`.
    #[error("invalid field handle '{handle}': must start with a letter and contain only letters, digits or '_'")]
    InvalidHandle { handle: String },

    /// Config file could not be read.
    #[error("failed to read field config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML field config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid JSON field config: {0}")]
    Json(#[from] serde_json::Error),

    /// Config file extension is neither `.toml` nor `.json`.
    #[error("unsupported field config format: {path}")]
    UnsupportedConfigFormat { path: PathBuf },

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Result type for field operations.
pub type Result<T> = std::result::Result<T, FieldError>;
