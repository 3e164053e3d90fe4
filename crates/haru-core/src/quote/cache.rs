//! Single-slot, time-bounded quote cache.
//!
//! Lives only for the process lifetime; never persisted. A provider
//! failure must leave the slot untouched, so fallback cards are never
//! cached.

use chrono::{DateTime, Duration, Utc};

use crate::card::AffirmationCard;

/// How long a fetched quote stays fresh, in seconds.
pub const QUOTE_CACHE_TTL_SECS: i64 = 3600;

fn ttl() -> Duration {
    Duration::seconds(QUOTE_CACHE_TTL_SECS)
}

/// Holds the most recently fetched quote card and its fetch time.
#[derive(Debug, Clone, Default)]
pub struct QuoteCache {
    card: Option<AffirmationCard>,
    fetched_at: Option<DateTime<Utc>>,
}

impl QuoteCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached card while it is still fresh at `now`.
    pub fn fresh(&self, now: DateTime<Utc>) -> Option<&AffirmationCard> {
        match (&self.card, self.fetched_at) {
            (Some(card), Some(fetched_at)) if now - fetched_at < ttl() => Some(card),
            _ => None,
        }
    }

    /// Replaces the slot with a freshly fetched card.
    pub fn store(&mut self, card: AffirmationCard, now: DateTime<Utc>) {
        self.card = Some(card);
        self.fetched_at = Some(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{CardId, Category};
    use chrono::TimeZone;

    fn quote_card() -> AffirmationCard {
        AffirmationCard {
            id: CardId::Quote("abc".to_string()),
            category: Category::Quote,
            text: "Carpe diem.".to_string(),
            author: Some("Horace".to_string()),
        }
    }

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn test_empty_cache_is_never_fresh() {
        let cache = QuoteCache::new();
        assert!(cache.fresh(at(0)).is_none());
    }

    #[test]
    fn test_fresh_within_ttl() {
        let mut cache = QuoteCache::new();
        cache.store(quote_card(), at(1000));
        assert_eq!(cache.fresh(at(1000 + 3599)), Some(&quote_card()));
    }

    #[test]
    fn test_expired_at_ttl() {
        let mut cache = QuoteCache::new();
        cache.store(quote_card(), at(1000));
        assert!(cache.fresh(at(1000 + 3600)).is_none());
        assert!(cache.fresh(at(1000 + 3601)).is_none());
    }
}
