//! Normalized field values.
//!
//! A [`NormalizedValue`] is rebuilt from whatever raw value a field holds on
//! every read, write or validate cycle. It is never persisted itself; only the
//! selected code(s) are.
//!
//! # Serialized shape
//!
//! ```text
//! {
//!   "selection": {
//!     "kind": "multi",
//!     "selections": [{ "code": "FR", "label": "France", "selected": true }]
//!   },
//!   "options": [ ...one entry per catalog option... ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::mode::SelectionMode;
use crate::option::SelectedOption;

/// The chosen entries of a value.
///
/// Single-mode values hold at most one entry; `None` is the null-code
/// selection produced for empty input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "selections", rename_all = "lowercase")]
pub enum Selection {
    Single(Option<SelectedOption>),
    Multi(Vec<SelectedOption>),
}

impl Selection {
    /// Empty selection for the given mode.
    pub const fn empty(mode: SelectionMode) -> Self {
        match mode {
            SelectionMode::Single => Self::Single(None),
            SelectionMode::Multi => Self::Multi(Vec::new()),
        }
    }

    pub const fn mode(&self) -> SelectionMode {
        match self {
            Self::Single(_) => SelectionMode::Single,
            Self::Multi(_) => SelectionMode::Multi,
        }
    }

    /// Chosen entries in order.
    pub fn entries(&self) -> &[SelectedOption] {
        match self {
            Self::Single(entry) => entry.as_slice(),
            Self::Multi(entries) => entries,
        }
    }
}

/// A selection together with the catalog-aligned option view.
///
/// # Example
///
/// ```
/// use country_model::{NormalizedValue, SelectedOption, Selection};
///
/// let value = NormalizedValue::new(
///     Selection::Single(Some(SelectedOption::chosen("FR", "France"))),
///     vec![SelectedOption::chosen("FR", "France")],
/// );
/// assert_eq!(value.code(), Some("FR"));
/// assert_eq!(value.label(), Some("France"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedValue {
    pub selection: Selection,

    /// One entry per catalog option, in catalog order.
    pub options: Vec<SelectedOption>,
}

impl NormalizedValue {
    pub fn new(selection: Selection, options: Vec<SelectedOption>) -> Self {
        Self { selection, options }
    }

    pub const fn mode(&self) -> SelectionMode {
        self.selection.mode()
    }

    /// Chosen entries in order (zero or one in single mode).
    pub fn selected(&self) -> &[SelectedOption] {
        self.selection.entries()
    }

    /// First selected code, if any.
    pub fn code(&self) -> Option<&str> {
        self.selected().first().map(|entry| entry.code.as_str())
    }

    /// Label of the first selected entry, if any.
    pub fn label(&self) -> Option<&str> {
        self.selected().first().map(|entry| entry.label.as_str())
    }

    /// All selected codes in order.
    pub fn codes(&self) -> Vec<&str> {
        self.selected()
            .iter()
            .map(|entry| entry.code.as_str())
            .collect()
    }

    /// All selected labels in order.
    pub fn labels(&self) -> Vec<&str> {
        self.selected()
            .iter()
            .map(|entry| entry.label.as_str())
            .collect()
    }

    /// Catalog-aligned option view.
    pub fn options(&self) -> &[SelectedOption] {
        &self.options
    }

    pub fn contains(&self, code: &str) -> bool {
        self.selected().iter().any(|entry| entry.code == code)
    }

    pub fn len(&self) -> usize {
        self.selected().len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> Vec<SelectedOption> {
        vec![
            SelectedOption::chosen("FR", "France"),
            SelectedOption {
                code: "DE".to_string(),
                label: "Germany".to_string(),
                selected: false,
            },
        ]
    }

    #[test]
    fn test_single_accessors() {
        let value = NormalizedValue::new(
            Selection::Single(Some(SelectedOption::chosen("FR", "France"))),
            view(),
        );
        assert_eq!(value.mode(), SelectionMode::Single);
        assert_eq!(value.codes(), vec!["FR"]);
        assert!(value.contains("FR"));
        assert!(!value.contains("DE"));
        assert_eq!(value.len(), 1);
    }

    #[test]
    fn test_null_single_is_empty() {
        let value = NormalizedValue::new(Selection::empty(SelectionMode::Single), view());
        assert!(value.is_empty());
        assert_eq!(value.code(), None);
        assert_eq!(value.label(), None);
    }

    #[test]
    fn test_multi_keeps_order() {
        let value = NormalizedValue::new(
            Selection::Multi(vec![
                SelectedOption::chosen("US", "United States"),
                SelectedOption::chosen("FR", "France"),
            ]),
            view(),
        );
        assert_eq!(value.mode(), SelectionMode::Multi);
        assert_eq!(value.codes(), vec!["US", "FR"]);
        assert_eq!(value.labels(), vec!["United States", "France"]);
        assert_eq!(value.code(), Some("US"));
    }
}
