//! In-memory runtime storage for languages and country-language links.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use crate::error::ServiceResult;
use crate::language::{validate, Language};

#[derive(Debug, Default)]
struct StoreInner {
    /// All known languages, deduplicated by value.
    languages: HashSet<Language>,
    /// Relations between country short names (key) and languages (value).
    countries_with_language: HashMap<String, Language>,
}

/// The runtime storage of the service.
///
/// Cloning is cheap and clones share the same underlying collections. A
/// single mutex guards both collections, so concurrent requests cannot
/// observe a half-applied insert. All read operations return snapshots.
#[derive(Clone)]
pub struct LanguageStore {
    inner: Arc<Mutex<StoreInner>>,
}

impl LanguageStore {
    /// Create a store seeded with the initial languages and country links.
    pub fn seeded() -> Self {
        let store = Self::empty();
        {
            let mut inner = store.inner.lock().unwrap();
            let german = Language::new("deu", "German").expect("seed language");
            let french = Language::new("fra", "French").expect("seed language");
            let english = Language::new("eng", "English").expect("seed language");
            inner.languages.insert(german.clone());
            inner.languages.insert(french.clone());
            inner.languages.insert(english.clone());
            inner.countries_with_language.insert("GER".to_string(), german);
            inner.countries_with_language.insert("FRA".to_string(), french);
            inner.countries_with_language.insert("SCO".to_string(), english);
        }
        store
    }

    /// Create a store with no languages and no country links.
    pub fn empty() -> Self {
        Self {
            inner: Arc::new(Mutex::new(StoreInner::default())),
        }
    }

    /// Get all known languages.
    pub fn find_all(&self) -> Vec<Language> {
        let inner = self.inner.lock().unwrap();
        inner.languages.iter().cloned().collect()
    }

    /// Get a language by its short name (case-insensitive exact match).
    ///
    /// # Errors
    /// Returns an invalid-argument error if the short name is malformed.
    pub fn find_by_short_name(&self, short_name: &str) -> ServiceResult<Option<Language>> {
        validate::check_short_name(short_name)?;
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .languages
            .iter()
            .find(|language| language.short_name().eq_ignore_ascii_case(short_name))
            .cloned())
    }

    /// Add the given language to the known languages.
    ///
    /// This is a naive insert: the set deduplicates identical values, but the
    /// caller is responsible for rejecting a same-code-different-name
    /// duplicate beforehand. Returns the updated snapshot.
    pub fn add_language(&self, language: Language) -> ServiceResult<Vec<Language>> {
        validate::validate_language(&language)?;
        let mut inner = self.inner.lock().unwrap();
        inner.languages.insert(language);
        Ok(inner.languages.iter().cloned().collect())
    }

    /// Get all countries with their language.
    pub fn find_all_countries_with_language(&self) -> HashMap<String, Language> {
        let inner = self.inner.lock().unwrap();
        inner.countries_with_language.clone()
    }

    /// Add a country with its language.
    ///
    /// The language is always inserted into the language set as well. The
    /// country mapping itself is first-write-wins: an existing entry for the
    /// country is left untouched. Returns the updated map snapshot.
    pub fn add_country_with_language(
        &self,
        country_short_name: &str,
        language: Language,
    ) -> ServiceResult<HashMap<String, Language>> {
        validate::check_country_short_name(country_short_name)?;
        validate::validate_language(&language)?;
        let mut inner = self.inner.lock().unwrap();
        inner.languages.insert(language.clone());
        inner
            .countries_with_language
            .entry(country_short_name.to_string())
            .or_insert(language);
        Ok(inner.countries_with_language.clone())
    }

    /// Get the language of a country (exact key match).
    ///
    /// # Errors
    /// Returns an invalid-argument error if the country short name is malformed.
    pub fn find_language_by_country(&self, country_short_name: &str) -> ServiceResult<Option<Language>> {
        validate::check_country_short_name(country_short_name)?;
        let inner = self.inner.lock().unwrap();
        Ok(inner.countries_with_language.get(country_short_name).cloned())
    }
}
