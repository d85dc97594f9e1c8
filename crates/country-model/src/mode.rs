//! Field selection mode.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Whether a field accepts one country or many.
///
/// Fixed when the field is defined; every normalization of that field's
/// values uses the same mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// At most one code is kept.
    #[default]
    Single,
    /// Any number of codes, in input order.
    Multi,
}

impl SelectionMode {
    /// Map the "multi-select enabled" flag to a mode.
    pub const fn from_multi(multi: bool) -> Self {
        if multi { Self::Multi } else { Self::Single }
    }

    pub const fn is_multi(self) -> bool {
        matches!(self, Self::Multi)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Multi => "multi",
        }
    }
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SelectionMode {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" => Ok(Self::Single),
            "multi" | "multiple" => Ok(Self::Multi),
            _ => Err(ModelError::UnknownSelectionMode(s.to_string())),
        }
    }
}
