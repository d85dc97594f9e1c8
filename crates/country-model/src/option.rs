//! Catalog entries and their per-value selection state.

use serde::{Deserialize, Serialize};

/// A single country entry in the option catalog.
///
/// # Example
///
/// ```
/// use country_model::CountryOption;
///
/// let option = CountryOption::new("FR", "France");
/// assert_eq!(option.code, "FR");
/// assert!(option.is_code("FR"));
/// assert!(!option.is_code("fr"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CountryOption {
    /// Two-letter storage key (e.g., "GB").
    pub code: String,

    /// Display name (e.g., "United Kingdom").
    pub label: String,
}

impl CountryOption {
    /// Create a new option.
    pub fn new(code: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
        }
    }

    /// Exact, case-sensitive code comparison.
    pub fn is_code(&self, code: &str) -> bool {
        self.code == code
    }

    /// Pair this option with a selection flag.
    pub fn with_selected(&self, selected: bool) -> SelectedOption {
        SelectedOption {
            code: self.code.clone(),
            label: self.label.clone(),
            selected,
        }
    }
}

/// An option together with whether the current value selects it.
///
/// Used both for the chosen entries of a value (always `selected = true`)
/// and for the catalog-aligned view a renderer walks to mark checked items.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectedOption {
    pub code: String,
    pub label: String,
    pub selected: bool,
}

impl SelectedOption {
    /// Create a selected entry.
    pub fn chosen(code: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
            selected: true,
        }
    }
}

impl From<SelectedOption> for CountryOption {
    fn from(option: SelectedOption) -> Self {
        Self {
            code: option.code,
            label: option.label,
        }
    }
}
