//! Translation between wire DTOs and entities.
//!
//! The wire types keep every field optional so that a missing field is
//! reported by the validation rules as an invalid-argument business error
//! (HTTP 400) instead of failing JSON deserialization. Mapping into an
//! entity applies the exact same shape rules as the entity constructor.

use serde::{Deserialize, Serialize};

use crate::error::{ServiceError, ServiceResult};
use crate::language::{validate, Language};

/// Wire representation of a language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageDto {
    pub short_name: Option<String>,
    pub name: Option<String>,
}

/// Wire representation of a country with its language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryWithLanguageDto {
    pub country_short_name: Option<String>,
    pub language: Option<LanguageDto>,
}

/// Map a language entity to its wire representation.
pub fn to_dto(language: &Language) -> LanguageDto {
    LanguageDto {
        short_name: Some(language.short_name().to_string()),
        name: Some(language.name().to_string()),
    }
}

/// Map a wire language to an entity, validating presence and shape.
///
/// # Errors
/// Invalid-argument if the DTO itself, its name or its short name is missing,
/// or if the short name does not have 3 characters.
pub fn from_dto(dto: Option<&LanguageDto>) -> ServiceResult<Language> {
    let dto = dto.ok_or_else(|| ServiceError::invalid_argument(validate::LANGUAGE_REQUIRED))?;
    let name = dto
        .name
        .as_deref()
        .ok_or_else(|| ServiceError::invalid_argument(validate::LANGUAGE_NAME_REQUIRED))?;
    let short_name = dto
        .short_name
        .as_deref()
        .ok_or_else(|| ServiceError::invalid_argument(validate::LANGUAGE_SHORT_NAME_REQUIRED))?;
    Language::new(short_name, name)
}

/// Map a country short name and its language to the combined wire type.
pub fn country_to_dto(country_short_name: &str, language: &Language) -> CountryWithLanguageDto {
    CountryWithLanguageDto {
        country_short_name: Some(country_short_name.to_string()),
        language: Some(to_dto(language)),
    }
}

/// Map a combined wire type to the country short name and language entity.
///
/// # Errors
/// Invalid-argument if the DTO, the country short name or the language fails
/// the presence and shape rules.
pub fn country_from_dto(dto: Option<&CountryWithLanguageDto>) -> ServiceResult<(String, Language)> {
    let dto =
        dto.ok_or_else(|| ServiceError::invalid_argument(validate::COUNTRY_WITH_LANGUAGE_REQUIRED))?;
    let country_short_name = dto
        .country_short_name
        .as_deref()
        .ok_or_else(|| ServiceError::invalid_argument(validate::COUNTRY_SHORT_NAME_REQUIRED))?;
    validate::check_country_short_name(country_short_name)?;
    let language = from_dto(dto.language.as_ref())?;
    Ok((country_short_name.to_string(), language))
}
