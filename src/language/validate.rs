//! Shape rules for languages and country short names.
//!
//! The same rules apply at every layer: handlers check path parameters and
//! wire DTOs, the manager re-checks candidates, and the store checks its own
//! inputs. Only presence and length are validated; no charset constraint is
//! enforced on the codes.

use crate::error::{ServiceError, ServiceResult};
use crate::language::Language;

pub const LANGUAGE_REQUIRED: &str = "Language is required";
pub const LANGUAGE_NAME_REQUIRED: &str = "Language name is required";
pub const LANGUAGE_SHORT_NAME_REQUIRED: &str = "Language short name is required";
pub const LANGUAGE_SHORT_NAME_LENGTH: &str = "Language short name must have 3 characters";
pub const COUNTRY_WITH_LANGUAGE_REQUIRED: &str = "Country with language is required";
pub const COUNTRY_SHORT_NAME_REQUIRED: &str = "Country short name is required";
pub const COUNTRY_SHORT_NAME_LENGTH: &str = "Country short name must have 3 characters";

/// Check that a language short name has exactly 3 characters.
pub fn check_short_name(short_name: &str) -> ServiceResult<()> {
    check_length(short_name, LANGUAGE_SHORT_NAME_LENGTH)
}

/// Check that a country short name has exactly 3 characters.
pub fn check_country_short_name(country_short_name: &str) -> ServiceResult<()> {
    check_length(country_short_name, COUNTRY_SHORT_NAME_LENGTH)
}

/// Validate a language entity.
///
/// Field absence is unrepresentable for the entity, so only the short name
/// shape remains to be checked.
pub fn validate_language(language: &Language) -> ServiceResult<()> {
    check_short_name(language.short_name())
}

fn check_length(reference: &str, error_message: &'static str) -> ServiceResult<()> {
    if reference.chars().count() != 3 {
        return Err(ServiceError::invalid_argument(error_message));
    }
    Ok(())
}
