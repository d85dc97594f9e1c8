//! The label-sorted option catalog.
//!
//! The catalog is built once from the compiled-in table and shared for the
//! lifetime of the process. It is immutable after construction, so concurrent
//! readers need no synchronisation.
//!
//! # Ordering
//!
//! Options are sorted ascending by label using case-folded comparison. The
//! sort is stable: options whose folded labels are equal keep their source
//! order.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use country_model::CountryOption;
use tracing::debug;

use crate::countries::COUNTRIES;
use crate::error::{CatalogError, Result};
use crate::translate::{Passthrough, Translate};

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| Catalog::with_translator(&Passthrough));

/// Ordered list of country options.
///
/// # Example
///
/// ```
/// use country_catalog::Catalog;
///
/// let catalog = Catalog::builtin();
/// assert_eq!(catalog.label_for("GB"), Some("United Kingdom"));
/// assert_eq!(catalog.label_for("ZZ"), None);
/// assert_eq!(catalog.options()[0].label, "Afghanistan");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    options: Vec<CountryOption>,
}

impl Catalog {
    /// The process-wide catalog with untranslated labels.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Build the compiled-in catalog with translated labels.
    ///
    /// Labels are translated first and sorted afterwards, so the order follows
    /// the display language.
    pub fn with_translator(translator: &dyn Translate) -> Self {
        let options = COUNTRIES
            .iter()
            .map(|(code, label)| CountryOption::new(*code, translator.translate(label)))
            .collect();
        let catalog = Self::sorted(options);
        debug!(options = catalog.len(), "built country catalog");
        catalog
    }

    /// Build a catalog from caller-supplied options.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateCode`] if two options share a code.
    pub fn from_options(options: Vec<CountryOption>) -> Result<Self> {
        let mut seen = BTreeSet::new();
        for option in &options {
            if !seen.insert(option.code.as_str()) {
                return Err(CatalogError::DuplicateCode {
                    code: option.code.clone(),
                });
            }
        }
        Ok(Self::sorted(options))
    }

    fn sorted(mut options: Vec<CountryOption>) -> Self {
        options.sort_by_cached_key(|option| sort_key(&option.label));
        Self { options }
    }

    /// All options in label order.
    pub fn options(&self) -> &[CountryOption] {
        &self.options
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CountryOption> {
        self.options.iter()
    }

    /// Find an option by exact code.
    pub fn get(&self, code: &str) -> Option<&CountryOption> {
        self.options.iter().find(|option| option.is_code(code))
    }

    /// Label for an exact code, `None` if the code is not in the catalog.
    pub fn label_for(&self, code: &str) -> Option<&str> {
        self.get(code).map(|option| option.label.as_str())
    }

    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    /// Codes in label order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.options.iter().map(|option| option.code.as_str())
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CountryOption;
    type IntoIter = std::slice::Iter<'a, CountryOption>;

    fn into_iter(self) -> Self::IntoIter {
        self.options.iter()
    }
}

/// Case-folded sort key for a label.
pub fn sort_key(label: &str) -> String {
    label.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translate::MessageTable;

    #[test]
    fn test_builtin_has_every_entry() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), COUNTRIES.len());
        assert_eq!(catalog.len(), 251);
    }

    #[test]
    fn test_builtin_codes_are_unique() {
        let codes: BTreeSet<&str> = Catalog::builtin().codes().collect();
        assert_eq!(codes.len(), COUNTRIES.len());
    }

    #[test]
    fn test_builtin_sorted_case_insensitively() {
        let options = Catalog::builtin().options();
        for pair in options.windows(2) {
            assert!(
                pair[0].label.to_lowercase() <= pair[1].label.to_lowercase(),
                "{} should sort before {}",
                pair[0].label,
                pair[1].label
            );
        }
    }

    #[test]
    fn test_lookup_is_exact() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.label_for("US"), Some("United States"));
        assert_eq!(catalog.label_for("us"), None);
        assert!(catalog.contains("EU"));
        assert!(!catalog.contains(""));
    }

    #[test]
    fn test_ties_keep_source_order() {
        let catalog = Catalog::from_options(vec![
            CountryOption::new("B1", "beta"),
            CountryOption::new("A1", "Alpha"),
            CountryOption::new("B2", "Beta"),
        ])
        .expect("unique codes");
        let codes: Vec<&str> = catalog.codes().collect();
        assert_eq!(codes, vec!["A1", "B1", "B2"]);
    }

    #[test]
    fn test_duplicate_codes_rejected() {
        let err = Catalog::from_options(vec![
            CountryOption::new("FR", "France"),
            CountryOption::new("FR", "Francia"),
        ])
        .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateCode { code } if code == "FR"));
    }

    #[test]
    fn test_translation_applies_before_sorting() {
        let mut table = MessageTable::new();
        table.insert("Germany", "Allemagne");
        let catalog = Catalog::with_translator(&table);

        assert_eq!(catalog.label_for("DE"), Some("Allemagne"));
        let position = |code: &str| catalog.codes().position(|c| c == code);
        // "Allemagne" now sorts between "Algeria" and "American Samoa".
        assert!(position("DZ") < position("DE"));
        assert!(position("DE") < position("AS"));
    }
}
