//! Affirmation session service.
//!
//! `AffirmationSession` is the single owner of all mutable user state
//! (stats, history, favorites, quote cache, current card). Persistence and
//! the quote provider are injected collaborators, so the core logic stays
//! testable without touching storage or the network.
//!
//! Every operation takes `&mut self`: draws are serialized by ownership,
//! which is what rules out the stale-response races the browser original
//! had between overlapping fetches. Storage write failures are logged and
//! swallowed; nothing in this flow is allowed to take the app down.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use haru_core::card::{AffirmationCard, CardId, Category, CategoryFilter};
use haru_core::catalog::Catalog;
use haru_core::error::Result;
use haru_core::ledger::{FavoriteToggle, Favorites, History};
use haru_core::premium::{deep_content, AdGate, DeepContent};
use haru_core::quote::{QuoteCache, QuoteProvider};
use haru_core::selection::select_card;
use haru_core::stats::SessionStats;
use haru_core::store::StateStore;
use haru_core::theme::Theme;
use haru_core::locale::Locale;

/// One user session over the affirmation app state.
pub struct AffirmationSession {
    catalog: Catalog,
    stats: SessionStats,
    history: History,
    favorites: Favorites,
    theme: Theme,
    quote_cache: QuoteCache,
    current_card: Option<AffirmationCard>,
    filter: CategoryFilter,
    /// Injected persistence collaborator.
    store: Arc<dyn StateStore>,
    /// Injected quote provider collaborator.
    provider: Arc<dyn QuoteProvider>,
}

impl AffirmationSession {
    /// Loads persisted state and records today's visit.
    ///
    /// The visit is counted at most once per calendar day; when it counts,
    /// the updated stats are persisted immediately.
    pub async fn start(
        store: Arc<dyn StateStore>,
        provider: Arc<dyn QuoteProvider>,
        today: chrono::NaiveDate,
    ) -> Self {
        let stats = store.load_stats().await;
        let history = store.load_history().await;
        let favorites = store.load_favorites().await;
        let theme = store.load_theme().await;

        let mut session = Self {
            catalog: Catalog::bundled(),
            stats,
            history,
            favorites,
            theme,
            quote_cache: QuoteCache::new(),
            current_card: None,
            filter: CategoryFilter::All,
            store,
            provider,
        };

        if session.stats.record_visit(today) {
            tracing::info!(
                streak_days = session.stats.streak_days,
                "visit recorded for {}",
                today
            );
            session.persist_stats().await;
        }

        session
    }

    /// Draws a new card for the current filter.
    ///
    /// The `quote` filter is served from the cache or one provider call;
    /// on provider failure the draw falls back to a full-catalog pick for
    /// this call only. Every drawn card is recorded in the history and the
    /// view total, and both are persisted.
    pub async fn draw_card(&mut self, now: DateTime<Utc>) -> Result<AffirmationCard> {
        let card = if self.filter.is_quote() {
            self.quote_card(now).await?
        } else {
            self.pick_from_catalog(self.filter)?
        };

        self.current_card = Some(card.clone());
        self.history.record_view(card.clone(), now);
        self.stats.record_card_view();
        self.persist_history().await;
        self.persist_stats().await;

        Ok(card)
    }

    /// Serves the quote category: fresh cache slot, or one provider call.
    async fn quote_card(&mut self, now: DateTime<Utc>) -> Result<AffirmationCard> {
        if let Some(card) = self.quote_cache.fresh(now) {
            tracing::debug!("serving quote from cache");
            return Ok(card.clone());
        }

        match self.provider.random_quote().await {
            Ok(quote) => {
                let card = AffirmationCard {
                    id: CardId::Quote(Uuid::new_v4().to_string()),
                    category: Category::Quote,
                    text: quote.content,
                    author: Some(quote.author).filter(|a| !a.is_empty()),
                };
                self.quote_cache.store(card.clone(), now);
                Ok(card)
            }
            Err(err) => {
                // Fallback picks from the whole catalog; the cache slot and
                // the selected filter stay untouched.
                tracing::warn!("quote provider failed: {}, falling back to catalog", err);
                self.pick_from_catalog(CategoryFilter::All)
            }
        }
    }

    fn pick_from_catalog(&self, filter: CategoryFilter) -> Result<AffirmationCard> {
        let mut rng = rand::thread_rng();
        select_card(&self.catalog, filter, &mut rng).map(|card| card.clone())
    }

    /// Changes the category filter for subsequent draws.
    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.filter = filter;
    }

    /// Toggles the current card in the favorites and persists them.
    /// Returns `None` when no card has been drawn yet.
    pub async fn toggle_favorite(&mut self) -> Option<FavoriteToggle> {
        let card = self.current_card.clone()?;
        let outcome = self.favorites.toggle(&card);
        self.persist_favorites().await;
        Some(outcome)
    }

    /// Removes a favorite by id and persists. No-op when absent.
    pub async fn remove_favorite(&mut self, id: &CardId) {
        self.favorites.remove(id);
        self.persist_favorites().await;
    }

    /// Flips the theme and persists it.
    pub async fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        if let Err(err) = self.store.save_theme(self.theme).await {
            tracing::warn!("failed to persist theme: {}", err);
        }
        self.theme
    }

    /// Opens the ad gate and generates deep content for the current card.
    /// Returns `None` when no card has been drawn yet.
    pub fn premium_content(&self, now: DateTime<Utc>) -> Option<(AdGate, DeepContent)> {
        let card = self.current_card.as_ref()?;
        let mut rng = rand::thread_rng();
        Some((AdGate::open(now), deep_content(card, &mut rng)))
    }

    /// Text shared for the current card: card text plus app signature.
    pub fn share_text(&self, locale: Locale) -> Option<String> {
        let card = self.current_card.as_ref()?;
        Some(format!("{}\n\n- {}", card.text, locale.app_title()))
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn filter(&self) -> CategoryFilter {
        self.filter
    }

    pub fn current_card(&self) -> Option<&AffirmationCard> {
        self.current_card.as_ref()
    }

    async fn persist_stats(&self) {
        if let Err(err) = self.store.save_stats(&self.stats).await {
            tracing::warn!("failed to persist stats: {}", err);
        }
    }

    async fn persist_history(&self) {
        if let Err(err) = self.store.save_history(&self.history).await {
            tracing::warn!("failed to persist history: {}", err);
        }
    }

    async fn persist_favorites(&self) {
        if let Err(err) = self.store.save_favorites(&self.favorites).await {
            tracing::warn!("failed to persist favorites: {}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::{NaiveDate, TimeZone};
    use haru_core::error::HaruError;
    use haru_core::quote::ProviderQuote;
    use haru_infrastructure::MemoryStateStore;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    struct MockProvider {
        calls: AtomicUsize,
        fail: AtomicBool,
    }

    impl MockProvider {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail: AtomicBool::new(false),
            }
        }

        fn failing() -> Self {
            let provider = Self::new();
            provider.fail.store(true, Ordering::SeqCst);
            provider
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl QuoteProvider for MockProvider {
        async fn random_quote(&self) -> Result<ProviderQuote> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail.load(Ordering::SeqCst) {
                return Err(HaruError::provider("mock failure"));
            }
            Ok(ProviderQuote {
                content: "The obstacle is the way.".to_string(),
                author: "Marcus Aurelius".to_string(),
            })
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    async fn session_with(
        store: Arc<dyn StateStore>,
        provider: Arc<MockProvider>,
        today: NaiveDate,
    ) -> AffirmationSession {
        AffirmationSession::start(store, provider, today).await
    }

    #[tokio::test]
    async fn test_streak_scenario_across_sessions() {
        let store = Arc::new(MemoryStateStore::new());
        let provider = Arc::new(MockProvider::new());

        let s1 = session_with(store.clone(), provider.clone(), day(2024, 1, 1)).await;
        assert_eq!(s1.stats().streak_days, 1);

        let s2 = session_with(store.clone(), provider.clone(), day(2024, 1, 2)).await;
        assert_eq!(s2.stats().streak_days, 2);

        let s3 = session_with(store.clone(), provider.clone(), day(2024, 1, 5)).await;
        assert_eq!(s3.stats().streak_days, 1);
        assert_eq!(s3.stats().visit_dates.len(), 3);
    }

    #[tokio::test]
    async fn test_same_day_restart_does_not_double_count() {
        let store = Arc::new(MemoryStateStore::new());
        let provider = Arc::new(MockProvider::new());

        session_with(store.clone(), provider.clone(), day(2024, 1, 1)).await;
        let again = session_with(store.clone(), provider.clone(), day(2024, 1, 1)).await;
        assert_eq!(again.stats().streak_days, 1);
        assert_eq!(again.stats().visit_dates.len(), 1);
    }

    #[tokio::test]
    async fn test_draw_records_history_and_total() {
        let store = Arc::new(MemoryStateStore::new());
        let provider = Arc::new(MockProvider::new());
        let mut session = session_with(store.clone(), provider, day(2024, 1, 1)).await;

        let card = session.draw_card(at(0)).await.unwrap();
        assert_eq!(session.current_card(), Some(&card));
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.stats().total_cards_viewed, 1);

        // Persisted as well.
        assert_eq!(store.load_history().await.len(), 1);
        assert_eq!(store.load_stats().await.total_cards_viewed, 1);
    }

    #[tokio::test]
    async fn test_category_filter_respected() {
        let store = Arc::new(MemoryStateStore::new());
        let provider = Arc::new(MockProvider::new());
        let mut session = session_with(store, provider, day(2024, 1, 1)).await;

        session.set_filter(CategoryFilter::Category(Category::Success));
        for _ in 0..20 {
            let card = session.draw_card(at(0)).await.unwrap();
            assert_eq!(card.category, Category::Success);
        }
    }

    #[tokio::test]
    async fn test_quote_cache_honored_within_ttl() {
        let store = Arc::new(MemoryStateStore::new());
        let provider = Arc::new(MockProvider::new());
        let mut session = session_with(store, provider.clone(), day(2024, 1, 1)).await;

        session.set_filter(CategoryFilter::Category(Category::Quote));
        let first = session.draw_card(at(1000)).await.unwrap();
        let second = session.draw_card(at(1000 + 3599)).await.unwrap();

        assert_eq!(provider.call_count(), 1);
        assert_eq!(first, second);
        assert!(first.id.is_quote());
    }

    #[tokio::test]
    async fn test_quote_cache_expires() {
        let store = Arc::new(MemoryStateStore::new());
        let provider = Arc::new(MockProvider::new());
        let mut session = session_with(store, provider.clone(), day(2024, 1, 1)).await;

        session.set_filter(CategoryFilter::Category(Category::Quote));
        session.draw_card(at(1000)).await.unwrap();
        session.draw_card(at(1000 + 3601)).await.unwrap();

        assert_eq!(provider.call_count(), 2);
    }

    #[tokio::test]
    async fn test_provider_failure_falls_back_without_caching() {
        let store = Arc::new(MemoryStateStore::new());
        let provider = Arc::new(MockProvider::failing());
        let mut session = session_with(store, provider.clone(), day(2024, 1, 1)).await;

        session.set_filter(CategoryFilter::Category(Category::Quote));
        let card = session.draw_card(at(0)).await.unwrap();

        // Fallback serves a catalog card, the filter stays on quote.
        assert_ne!(card.category, Category::Quote);
        assert_eq!(session.filter(), CategoryFilter::Category(Category::Quote));

        // Nothing was cached: the next draw hits the provider again.
        session.draw_card(at(1)).await.unwrap();
        assert_eq!(provider.call_count(), 2);
    }

    #[tokio::test]
    async fn test_toggle_favorite_round_trip() {
        let store = Arc::new(MemoryStateStore::new());
        let provider = Arc::new(MockProvider::new());
        let mut session = session_with(store.clone(), provider, day(2024, 1, 1)).await;

        assert_eq!(session.toggle_favorite().await, None);

        let card = session.draw_card(at(0)).await.unwrap();
        assert_eq!(session.toggle_favorite().await, Some(FavoriteToggle::Added));
        assert!(session.favorites().contains(&card.id));
        assert_eq!(store.load_favorites().await.len(), 1);

        assert_eq!(
            session.toggle_favorite().await,
            Some(FavoriteToggle::Removed)
        );
        assert!(store.load_favorites().await.is_empty());
    }

    #[tokio::test]
    async fn test_remove_favorite_is_idempotent() {
        let store = Arc::new(MemoryStateStore::new());
        let provider = Arc::new(MockProvider::new());
        let mut session = session_with(store, provider, day(2024, 1, 1)).await;

        let card = session.draw_card(at(0)).await.unwrap();
        session.toggle_favorite().await;
        session.remove_favorite(&card.id).await;
        session.remove_favorite(&card.id).await;
        assert!(session.favorites().is_empty());
    }

    #[tokio::test]
    async fn test_theme_toggle_persists() {
        let store = Arc::new(MemoryStateStore::new());
        let provider = Arc::new(MockProvider::new());
        let mut session = session_with(store.clone(), provider, day(2024, 1, 1)).await;

        assert_eq!(session.theme(), Theme::Dark);
        assert_eq!(session.toggle_theme().await, Theme::Light);
        assert_eq!(store.load_theme().await, Theme::Light);
    }

    #[tokio::test]
    async fn test_premium_requires_current_card() {
        let store = Arc::new(MemoryStateStore::new());
        let provider = Arc::new(MockProvider::new());
        let mut session = session_with(store, provider, day(2024, 1, 1)).await;

        assert!(session.premium_content(at(0)).is_none());
        session.draw_card(at(0)).await.unwrap();
        let (gate, content) = session.premium_content(at(10)).unwrap();
        assert_eq!(gate.remaining_secs(at(10)), haru_core::premium::AD_GATE_SECS);
        assert!(!content.practices.is_empty());
    }

    #[tokio::test]
    async fn test_share_text_includes_signature() {
        let store = Arc::new(MemoryStateStore::new());
        let provider = Arc::new(MockProvider::new());
        let mut session = session_with(store, provider, day(2024, 1, 1)).await;

        assert!(session.share_text(Locale::Ko).is_none());
        let card = session.draw_card(at(0)).await.unwrap();
        let text = session.share_text(Locale::Ko).unwrap();
        assert!(text.starts_with(&card.text));
        assert!(text.contains(Locale::Ko.app_title()));
    }
}
