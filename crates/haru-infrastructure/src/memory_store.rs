//! In-memory state store.
//!
//! Backs ephemeral runs and tests; nothing survives the process.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use haru_core::error::Result;
use haru_core::ledger::{Favorites, History};
use haru_core::stats::SessionStats;
use haru_core::store::StateStore;
use haru_core::theme::Theme;

#[derive(Debug, Default)]
struct Slots {
    stats: SessionStats,
    history: History,
    favorites: Favorites,
    theme: Theme,
}

/// Memory-only implementation of [`StateStore`].
#[derive(Debug, Clone, Default)]
pub struct MemoryStateStore {
    slots: Arc<Mutex<Slots>>,
}

impl MemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StateStore for MemoryStateStore {
    async fn load_stats(&self) -> SessionStats {
        self.slots.lock().await.stats.clone()
    }

    async fn save_stats(&self, stats: &SessionStats) -> Result<()> {
        self.slots.lock().await.stats = stats.clone();
        Ok(())
    }

    async fn load_history(&self) -> History {
        self.slots.lock().await.history.clone()
    }

    async fn save_history(&self, history: &History) -> Result<()> {
        self.slots.lock().await.history = history.clone();
        Ok(())
    }

    async fn load_favorites(&self) -> Favorites {
        self.slots.lock().await.favorites.clone()
    }

    async fn save_favorites(&self, favorites: &Favorites) -> Result<()> {
        self.slots.lock().await.favorites = favorites.clone();
        Ok(())
    }

    async fn load_theme(&self) -> Theme {
        self.slots.lock().await.theme
    }

    async fn save_theme(&self, theme: Theme) -> Result<()> {
        self.slots.lock().await.theme = theme;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_round_trip() {
        let store = MemoryStateStore::new();
        store.save_theme(Theme::Light).await.unwrap();
        assert_eq!(store.load_theme().await, Theme::Light);
        assert!(store.load_history().await.is_empty());
    }
}
