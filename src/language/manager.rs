//! Business rules for languages and country-language links.
//!
//! The manager sits between the HTTP handlers and the store. It owns the
//! core invariant of the service: short names are unique identifiers, so the
//! same code can never resolve to two different names. Lookups that find
//! nothing are reported as not-found business errors here, not at the store.

use std::collections::HashMap;

use tracing::info;

use crate::error::{ServiceError, ServiceResult};
use crate::language::{validate, Language, LanguageStore};

/// Orchestrates validation, duplicate handling and storage access.
///
/// Holds no state of its own; cloning shares the underlying store.
#[derive(Clone)]
pub struct LanguageManager {
    store: LanguageStore,
}

impl LanguageManager {
    pub fn new(store: LanguageStore) -> Self {
        Self { store }
    }

    /// Get all known languages.
    pub fn languages(&self) -> Vec<Language> {
        info!("Querying storage for all languages");
        self.store.find_all()
    }

    /// Get a language by its short name.
    ///
    /// # Errors
    /// Invalid-argument if the short name is malformed, not-found if no
    /// language with that short name exists.
    pub fn language(&self, short_name: &str) -> ServiceResult<Language> {
        validate::check_short_name(short_name)?;
        info!("Querying storage for language with short name {short_name}");
        match self.store.find_by_short_name(short_name)? {
            Some(language) => {
                info!(
                    "Returning language {} for short name {} from storage",
                    language.name(),
                    language.short_name()
                );
                Ok(language)
            }
            None => Err(ServiceError::not_found(format!(
                "Language with short name {short_name} is not existing"
            ))),
        }
    }

    /// Add a language without creating duplicates.
    ///
    /// Returns the full updated language list.
    pub fn add_language(&self, language: Language) -> ServiceResult<Vec<Language>> {
        self.add_language_if_missing(&language)?;
        Ok(self.store.find_all())
    }

    /// Get all countries with their language.
    pub fn countries_with_language(&self) -> HashMap<String, Language> {
        info!("Querying storage for all countries with their language");
        self.store.find_all_countries_with_language()
    }

    /// Get the language of a country by the country's short name.
    ///
    /// # Errors
    /// Invalid-argument if the short name is malformed, not-found if no
    /// language is linked to that country.
    pub fn language_of_country(&self, country_short_name: &str) -> ServiceResult<Language> {
        validate::check_country_short_name(country_short_name)?;
        info!("Querying storage for language of country with short name {country_short_name}");
        match self.store.find_language_by_country(country_short_name)? {
            Some(language) => {
                info!(
                    "Returning language {} for country with short name {country_short_name}",
                    language.name()
                );
                Ok(language)
            }
            None => Err(ServiceError::not_found(format!(
                "No language is existing for country with short name {country_short_name}"
            ))),
        }
    }

    /// Add a country with its language.
    ///
    /// The language goes through the same duplicate handling as
    /// [`add_language`](Self::add_language); the country mapping itself is
    /// first-write-wins. Returns the updated map of all countries.
    pub fn add_country_with_language(
        &self,
        country_short_name: &str,
        language: Language,
    ) -> ServiceResult<HashMap<String, Language>> {
        validate::check_country_short_name(country_short_name)?;
        self.add_language_if_missing(&language)?;
        info!(
            "Adding language {} to country with short name {country_short_name}",
            language.name()
        );
        self.store.add_country_with_language(country_short_name, language)
    }

    /// Insert a language unless an equivalent one is already stored.
    ///
    /// Lookup is case-insensitive on the short name. A stored language with
    /// the same short name but a different name (case-insensitive compare) is
    /// a conflict; with a matching name the call is an idempotent no-op.
    fn add_language_if_missing(&self, language: &Language) -> ServiceResult<()> {
        validate::validate_language(language)?;
        info!(
            "Querying storage for language with short name {} to avoid duplicates",
            language.short_name()
        );
        match self.store.find_by_short_name(language.short_name())? {
            Some(existing) => {
                info!(
                    "Language with short name {} is already existing in storage: {}",
                    existing.short_name(),
                    existing.name()
                );
                if !existing.name().eq_ignore_ascii_case(language.name()) {
                    return Err(ServiceError::invalid_argument(format!(
                        "A language with the short name {} is already existing: {}. \
                         Cannot create two languages with the same short name",
                        existing.short_name(),
                        existing.name()
                    )));
                }
                // identical language already stored, nothing to do
                Ok(())
            }
            None => {
                info!(
                    "Adding new language {} with short name {} to storage",
                    language.name(),
                    language.short_name()
                );
                self.store.add_language(language.clone())?;
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn language(short_name: &str, name: &str) -> Language {
        Language::new(short_name, name).expect("valid language")
    }

    fn empty_manager() -> LanguageManager {
        LanguageManager::new(LanguageStore::empty())
    }

    fn seeded_manager() -> LanguageManager {
        LanguageManager::new(LanguageStore::seeded())
    }

    // ==================== Language Lookup Tests ====================

    #[test]
    fn test_add_then_get_returns_same_language() {
        let manager = empty_manager();
        manager.add_language(language("spa", "Spanish")).expect("add");

        let found = manager.language("spa").expect("lookup");
        assert_eq!(found.short_name(), "spa");
        assert_eq!(found.name(), "Spanish");
    }

    #[test]
    fn test_get_language_lookup_is_case_insensitive() {
        let manager = seeded_manager();
        let found = manager.language("DEU").expect("lookup");
        assert_eq!(found.name(), "German");
    }

    #[test]
    fn test_get_unknown_language_is_not_found() {
        let manager = seeded_manager();
        let err = manager.language("xyz").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_get_language_with_malformed_code_is_invalid_argument() {
        let manager = seeded_manager();
        let err = manager.language("de").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    // ==================== Duplicate Handling Tests ====================

    #[test]
    fn test_add_language_twice_is_idempotent() {
        let manager = empty_manager();
        manager.add_language(language("spa", "Spanish")).expect("first add");
        let languages = manager.add_language(language("spa", "Spanish")).expect("second add");

        assert_eq!(languages.len(), 1);
    }

    #[test]
    fn test_add_language_name_compare_is_case_insensitive() {
        let manager = empty_manager();
        manager.add_language(language("spa", "Spanish")).expect("first add");
        let languages = manager.add_language(language("SPA", "SPANISH")).expect("second add");

        // treated as the same language, not a conflict and not a new entry
        assert_eq!(languages.len(), 1);
        assert_eq!(manager.language("spa").unwrap().name(), "Spanish");
    }

    #[test]
    fn test_add_conflicting_language_fails_and_leaves_store_unchanged() {
        let manager = seeded_manager();
        let err = manager.add_language(language("eng", "Scottish")).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(err.message().contains("Cannot create two languages"));

        let languages = manager.languages();
        assert_eq!(languages.len(), 3);
        assert_eq!(manager.language("eng").unwrap().name(), "English");
    }

    #[test]
    fn test_add_malformed_language_fails_before_touching_storage() {
        let manager = empty_manager();
        // the entity constructor already rejects the shape, so a malformed
        // candidate cannot even be built
        assert!(Language::new("en", "English").is_err());
        assert!(manager.languages().is_empty());
    }

    // ==================== Country Link Tests ====================

    #[test]
    fn test_language_of_country() {
        let manager = seeded_manager();
        let found = manager.language_of_country("SCO").expect("lookup");
        assert_eq!(found.name(), "English");
    }

    #[test]
    fn test_language_of_unknown_country_is_not_found() {
        let manager = seeded_manager();
        let err = manager.language_of_country("ESP").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_add_country_with_language_twice_is_idempotent() {
        let manager = empty_manager();
        let german = language("deu", "German");
        manager
            .add_country_with_language("GER", german.clone())
            .expect("first add");
        let countries = manager
            .add_country_with_language("GER", german.clone())
            .expect("second add");

        assert_eq!(countries.len(), 1);
        assert_eq!(countries.get("GER"), Some(&german));
    }

    #[test]
    fn test_add_country_with_conflicting_language_fails() {
        let manager = seeded_manager();
        let err = manager
            .add_country_with_language("ESP", language("deu", "Dutch"))
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        // the country link is not created when the language conflicts
        assert!(manager.language_of_country("ESP").is_err());
    }

    #[test]
    fn test_add_country_keeps_existing_mapping() {
        let manager = seeded_manager();
        let countries = manager
            .add_country_with_language("GER", language("ita", "Italian"))
            .expect("add");

        assert_eq!(countries.get("GER"), Some(&language("deu", "German")));
        // the new language still landed in the language set
        assert!(manager.languages().contains(&language("ita", "Italian")));
    }

    #[test]
    fn test_add_country_with_malformed_code_fails() {
        let manager = empty_manager();
        let err = manager
            .add_country_with_language("GE", language("deu", "German"))
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(manager.countries_with_language().is_empty());
        // fails before the dedup insert, so the language set stays empty too
        assert!(manager.languages().is_empty());
    }

    // ==================== Snapshot Tests ====================

    #[test]
    fn test_languages_returns_seed_data() {
        let manager = seeded_manager();
        let languages = manager.languages();

        assert_eq!(languages.len(), 3);
        assert!(languages.contains(&language("deu", "German")));
        assert!(languages.contains(&language("fra", "French")));
        assert!(languages.contains(&language("eng", "English")));
    }

    #[test]
    fn test_countries_with_language_returns_seed_data() {
        let manager = seeded_manager();
        let countries = manager.countries_with_language();

        assert_eq!(countries.len(), 3);
        assert_eq!(countries.get("GER"), Some(&language("deu", "German")));
        assert_eq!(countries.get("FRA"), Some(&language("fra", "French")));
        assert_eq!(countries.get("SCO"), Some(&language("eng", "English")));
    }
}
