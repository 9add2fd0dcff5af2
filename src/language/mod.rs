//! Language component: entities, validation, storage and business rules.
//!
//! The component is layered the conventional way:
//!
//! - `model`: the `Language` entity
//! - `validate`: shape rules shared by every layer
//! - `store`: in-memory storage of languages and country-language links
//! - `manager`: business rules on top of the store (duplicate handling,
//!   not-found signaling)
//! - `mapper`: translation between wire DTOs and entities
//!
//! # Example
//!
//! ```rust,ignore
//! use language_service::language::{Language, LanguageManager, LanguageStore};
//!
//! let manager = LanguageManager::new(LanguageStore::seeded());
//! let spanish = Language::new("spa", "Spanish")?;
//! let all = manager.add_language(spanish)?;
//! ```

pub mod mapper;
pub mod validate;

mod manager;
mod model;
mod store;

pub use manager::LanguageManager;
pub use mapper::{CountryWithLanguageDto, LanguageDto};
pub use model::Language;
pub use store::LanguageStore;
