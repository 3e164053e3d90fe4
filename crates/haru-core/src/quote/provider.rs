//! Quote provider trait.
//!
//! Defines the interface to the external quote service, decoupling the
//! session logic from the concrete HTTP client.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A quote as returned by the external provider, before a card id is
/// synthesized for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderQuote {
    pub content: String,
    pub author: String,
}

/// An abstract source of random inspirational quotes.
///
/// Implementations perform exactly one outbound request per call; retrying
/// is not their concern. A failure (network error, empty result, malformed
/// response) is reported as `HaruError::Provider` and the caller decides
/// the fallback.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Fetches one random inspirational/motivational quote.
    async fn random_quote(&self) -> Result<ProviderQuote>;
}
