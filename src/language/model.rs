//! The language entity held by the store.

use crate::error::ServiceResult;
use crate::language::validate;

/// A language, identified by its 3-character short name (ISO code).
///
/// Equality and hashing cover both fields, so a set of languages
/// deduplicates by value: re-inserting an identical language has no effect.
/// The short name's shape is checked at construction; absence of a field is
/// unrepresentable here and only exists at the wire level.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Language {
    short_name: String,
    name: String,
}

impl Language {
    /// Build a validated language.
    ///
    /// # Errors
    /// Returns an invalid-argument error if the short name does not have
    /// exactly 3 characters.
    pub fn new(short_name: impl Into<String>, name: impl Into<String>) -> ServiceResult<Self> {
        let language = Self {
            short_name: short_name.into(),
            name: name.into(),
        };
        validate::validate_language(&language)?;
        Ok(language)
    }

    /// The short name (ISO code) identifying this language.
    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    /// The display name of this language.
    pub fn name(&self) -> &str {
        &self.name
    }
}
