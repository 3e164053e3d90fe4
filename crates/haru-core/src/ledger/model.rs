//! History and favorites domain models.
//!
//! Two bounded, ordered collections over card ids:
//! - history keeps the 10 most recently viewed distinct cards, newest first;
//! - favorites is unbounded, append-ordered, one entry per id.
//!
//! All id comparisons are structural on [`CardId`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::card::{AffirmationCard, CardId, Category};

/// Maximum number of retained history entries.
pub const HISTORY_LIMIT: usize = 10;

/// A viewed card together with the instant it was shown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    #[serde(flatten)]
    pub card: AffirmationCard,
    pub viewed_at: DateTime<Utc>,
}

/// Recently viewed cards, newest first, capped at [`HISTORY_LIMIT`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Records a view of `card` at `now`.
    ///
    /// Any existing entry with the same id is removed first, then the new
    /// entry is prepended and the list is truncated to [`HISTORY_LIMIT`].
    pub fn record_view(&mut self, card: AffirmationCard, now: DateTime<Utc>) {
        self.entries.retain(|e| e.card.id != card.id);
        self.entries.insert(0, HistoryEntry {
            card,
            viewed_at: now,
        });
        self.entries.truncate(HISTORY_LIMIT);
    }
}

/// A favorited card, keeping only the fields needed to render the list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteEntry {
    pub id: CardId,
    pub text: String,
    pub category: Category,
}

/// Outcome of a favorite toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteToggle {
    Added,
    Removed,
}

/// Favorited cards in insertion order, one entry per id, unbounded.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Favorites {
    entries: Vec<FavoriteEntry>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[FavoriteEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: &CardId) -> bool {
        self.entries.iter().any(|f| &f.id == id)
    }

    /// Adds `card` to the favorites, or removes it when already present.
    pub fn toggle(&mut self, card: &AffirmationCard) -> FavoriteToggle {
        if let Some(index) = self.entries.iter().position(|f| f.id == card.id) {
            self.entries.remove(index);
            FavoriteToggle::Removed
        } else {
            self.entries.push(FavoriteEntry {
                id: card.id.clone(),
                text: card.text.clone(),
                category: card.category,
            });
            FavoriteToggle::Added
        }
    }

    /// Removes the entry with the given id. No-op when absent.
    pub fn remove(&mut self, id: &CardId) {
        self.entries.retain(|f| &f.id != id);
    }
}
