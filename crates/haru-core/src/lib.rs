//! Domain layer of the haru daily-affirmation app.
//!
//! Pure models and logic (cards, catalog, streak stats, ledger, selection,
//! calendar, premium content) plus the traits implemented by the
//! infrastructure layer (state store, quote provider).

pub mod calendar;
pub mod card;
pub mod catalog;
pub mod error;
pub mod ledger;
pub mod locale;
pub mod premium;
pub mod quote;
pub mod selection;
pub mod stats;
pub mod store;
pub mod theme;

// Re-export common error type
pub use error::HaruError;
