//! State store trait.
//!
//! Defines the interface for persisting user state, decoupling the session
//! logic from the specific storage mechanism (JSON files, an in-memory
//! store for tests, ...).

use async_trait::async_trait;

use crate::error::Result;
use crate::ledger::{Favorites, History};
use crate::stats::SessionStats;
use crate::theme::Theme;

/// An abstract key-value store for user state.
///
/// Loads never fail the caller: a missing or unreadable value yields its
/// documented default (zeroed stats, empty collections, dark theme), so a
/// corrupt store degrades silently instead of breaking the app.
#[async_trait]
pub trait StateStore: Send + Sync {
    /// Loads the session stats, or zeroed defaults.
    async fn load_stats(&self) -> SessionStats;

    /// Saves the session stats.
    async fn save_stats(&self, stats: &SessionStats) -> Result<()>;

    /// Loads the viewing history, or an empty history.
    async fn load_history(&self) -> History;

    /// Saves the viewing history.
    async fn save_history(&self, history: &History) -> Result<()>;

    /// Loads the favorites, or an empty list.
    async fn load_favorites(&self) -> Favorites;

    /// Saves the favorites.
    async fn save_favorites(&self, favorites: &Favorites) -> Result<()>;

    /// Loads the theme, or the default dark theme.
    async fn load_theme(&self) -> Theme;

    /// Saves the theme.
    async fn save_theme(&self, theme: Theme) -> Result<()>;
}
