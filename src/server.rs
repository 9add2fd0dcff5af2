//! HTTP resource handlers and router for the language service.
//!
//! The handlers are thin facades: they validate path parameters and wire
//! DTOs with the same rules the business layer uses, delegate to the
//! [`LanguageManager`], and map entities back to DTOs. One boundary rule
//! lives here and not in the manager: a GET over an empty collection is
//! surfaced as an empty-collection error, which the error type presents as
//! HTTP 204.

use axum::extract::{Path, Request, State};
use axum::http::HeaderValue;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::get;
use axum::{Json, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::error::{ServiceError, ServiceResult};
use crate::language::{mapper, validate, CountryWithLanguageDto, LanguageDto, LanguageManager};

/// Build the application router with all routes and middleware.
pub fn router(manager: LanguageManager) -> Router {
    Router::new()
        .route("/api/v1/languages", get(get_languages).post(create_language))
        .route("/api/v1/languages/:short_name", get(get_language))
        .route(
            "/api/v1/countries-with-language",
            get(get_countries_with_language).post(create_country_with_language),
        )
        .route(
            "/api/v1/countries-with-language/:country_short_name",
            get(get_country_with_language),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::new())
        .layer(middleware::from_fn(apply_cors_headers))
        .with_state(manager)
}

/// Append permissive CORS headers to every response, errors included.
///
/// Wildcard origin combined with allow-credentials cannot be expressed
/// through `tower_http::cors::CorsLayer`, so the headers are appended
/// directly.
async fn apply_cors_headers(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();
    headers.insert("Access-Control-Allow-Origin", HeaderValue::from_static("*"));
    headers.insert("Access-Control-Allow-Credentials", HeaderValue::from_static("true"));
    headers.insert(
        "Access-Control-Allow-Headers",
        HeaderValue::from_static("origin, content-type, accept, authorization"),
    );
    headers.insert(
        "Access-Control-Allow-Methods",
        HeaderValue::from_static("GET, POST, PUT, DELETE, OPTIONS, HEAD"),
    );
    response
}

/// GET /api/v1/languages
async fn get_languages(
    State(manager): State<LanguageManager>,
) -> ServiceResult<Json<Vec<LanguageDto>>> {
    info!("Resource to get all languages triggered");
    let languages = manager.languages();
    if languages.is_empty() {
        return Err(ServiceError::empty_collection("No languages are existing"));
    }
    Ok(Json(languages.iter().map(mapper::to_dto).collect()))
}

/// GET /api/v1/languages/{shortName}
async fn get_language(
    State(manager): State<LanguageManager>,
    Path(short_name): Path<String>,
) -> ServiceResult<Json<LanguageDto>> {
    validate::check_short_name(&short_name)?;
    info!("Resource to get language with short name {short_name} triggered");
    let language = manager.language(&short_name)?;
    Ok(Json(mapper::to_dto(&language)))
}

/// POST /api/v1/languages
async fn create_language(
    State(manager): State<LanguageManager>,
    Json(body): Json<Option<LanguageDto>>,
) -> ServiceResult<Json<Vec<LanguageDto>>> {
    let language = mapper::from_dto(body.as_ref())?;
    info!(
        "Resource to create new language {} with short name {} triggered",
        language.name(),
        language.short_name()
    );
    let languages = manager.add_language(language)?;
    Ok(Json(languages.iter().map(mapper::to_dto).collect()))
}

/// GET /api/v1/countries-with-language
async fn get_countries_with_language(
    State(manager): State<LanguageManager>,
) -> ServiceResult<Json<Vec<CountryWithLanguageDto>>> {
    info!("Resource to get all countries with their language triggered");
    let countries = manager.countries_with_language();
    if countries.is_empty() {
        return Err(ServiceError::empty_collection(
            "No countries with languages are available",
        ));
    }
    Ok(Json(
        countries
            .iter()
            .map(|(country, language)| mapper::country_to_dto(country, language))
            .collect(),
    ))
}

/// GET /api/v1/countries-with-language/{countryShortName}
async fn get_country_with_language(
    State(manager): State<LanguageManager>,
    Path(country_short_name): Path<String>,
) -> ServiceResult<Json<CountryWithLanguageDto>> {
    validate::check_country_short_name(&country_short_name)?;
    info!("Resource to get language of country with short name {country_short_name} triggered");
    let language = manager.language_of_country(&country_short_name)?;
    Ok(Json(mapper::country_to_dto(&country_short_name, &language)))
}

/// POST /api/v1/countries-with-language
async fn create_country_with_language(
    State(manager): State<LanguageManager>,
    Json(body): Json<Option<CountryWithLanguageDto>>,
) -> ServiceResult<Json<Vec<CountryWithLanguageDto>>> {
    let (country_short_name, language) = mapper::country_from_dto(body.as_ref())?;
    info!(
        "Resource to add language {} to country with short name {country_short_name} triggered",
        language.name()
    );
    let countries = manager.add_country_with_language(&country_short_name, language)?;
    Ok(Json(
        countries
            .iter()
            .map(|(country, language)| mapper::country_to_dto(country, language))
            .collect(),
    ))
}
