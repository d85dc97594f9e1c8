use thiserror::Error;

/// Errors raised when parsing a selection mode from text.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ModelError {
    /// Selection mode string was neither `single` nor `multi`.
    #[error("unknown selection mode '{0}' (expected 'single' or 'multi')")]
    UnknownSelectionMode(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
