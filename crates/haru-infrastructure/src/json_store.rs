//! File-backed state store.
//!
//! One JSON file per logical key (`stats.json`, `history.json`,
//! `favorites.json`, `theme.json`) under the haru data directory. Loads
//! degrade to defaults on any failure; only saves report errors.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use haru_core::error::Result;
use haru_core::ledger::{Favorites, History};
use haru_core::stats::SessionStats;
use haru_core::store::StateStore;
use haru_core::theme::Theme;

use crate::paths::HaruPaths;

const KEY_STATS: &str = "stats";
const KEY_HISTORY: &str = "history";
const KEY_FAVORITES: &str = "favorites";
const KEY_THEME: &str = "theme";

/// JSON-file implementation of [`StateStore`].
#[derive(Debug, Clone)]
pub struct JsonStateStore {
    paths: HaruPaths,
}

impl JsonStateStore {
    /// Creates a store rooted at the default platform data directory.
    pub fn new() -> Result<Self> {
        Ok(Self {
            paths: HaruPaths::resolve()?,
        })
    }

    /// Creates a store rooted at an explicit directory.
    pub fn with_paths(paths: HaruPaths) -> Self {
        Self { paths }
    }

    /// Reads and deserializes one key, falling back to `T::default()` when
    /// the file is missing or unreadable. Corruption is logged, never
    /// surfaced.
    async fn load_or_default<T>(&self, key: &str) -> T
    where
        T: DeserializeOwned + Default,
    {
        let path = self.paths.state_file(key);
        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(err) => {
                if err.kind() != std::io::ErrorKind::NotFound {
                    tracing::warn!("failed to read {}: {}, using defaults", path.display(), err);
                }
                return T::default();
            }
        };

        match serde_json::from_str(&content) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(
                    "corrupt state in {}: {}, using defaults",
                    path.display(),
                    err
                );
                T::default()
            }
        }
    }

    async fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        tokio::fs::create_dir_all(self.paths.base_dir()).await?;
        let path = self.paths.state_file(key);
        let json = serde_json::to_string_pretty(value)?;
        tokio::fs::write(&path, json).await?;
        tracing::debug!("saved {}", path.display());
        Ok(())
    }
}

#[async_trait]
impl StateStore for JsonStateStore {
    async fn load_stats(&self) -> SessionStats {
        self.load_or_default(KEY_STATS).await
    }

    async fn save_stats(&self, stats: &SessionStats) -> Result<()> {
        self.save(KEY_STATS, stats).await
    }

    async fn load_history(&self) -> History {
        self.load_or_default(KEY_HISTORY).await
    }

    async fn save_history(&self, history: &History) -> Result<()> {
        self.save(KEY_HISTORY, history).await
    }

    async fn load_favorites(&self) -> Favorites {
        self.load_or_default(KEY_FAVORITES).await
    }

    async fn save_favorites(&self, favorites: &Favorites) -> Result<()> {
        self.save(KEY_FAVORITES, favorites).await
    }

    async fn load_theme(&self) -> Theme {
        self.load_or_default(KEY_THEME).await
    }

    async fn save_theme(&self, theme: Theme) -> Result<()> {
        self.save(KEY_THEME, &theme).await
    }
}
