//! REST microservice managing languages and their association to countries.
//!
//! The service keeps two in-memory collections: the set of known languages
//! and a map from country short names to their language. It exposes them
//! through a small JSON API under `/api/v1`.
//!
//! # Architecture
//!
//! - `language`: entities, validation, in-memory storage and business rules
//! - `server`: axum router and HTTP resource handlers
//! - `error`: service-wide error type with HTTP response mapping
//! - `config`: environment-based configuration

pub mod config;
pub mod error;
pub mod language;
pub mod server;
