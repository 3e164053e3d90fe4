//! History and favorites ledger.

pub mod model;

pub use model::{FavoriteEntry, FavoriteToggle, Favorites, History, HistoryEntry, HISTORY_LIMIT};
