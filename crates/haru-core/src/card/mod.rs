//! Card domain models.

pub mod model;

pub use model::{AffirmationCard, CardId, Category, CategoryFilter, CATALOG_CATEGORIES};
