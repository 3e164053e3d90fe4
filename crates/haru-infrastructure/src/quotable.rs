//! Quotable API client.
//!
//! Fetches one random inspirational/motivational quote per call. One
//! request, no retry; every failure mode (transport error, non-success
//! status, empty or malformed body) maps to `HaruError::Provider` and the
//! caller falls back to the catalog.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use haru_core::error::{HaruError, Result};
use haru_core::quote::{ProviderQuote, QuoteProvider};

const BASE_URL: &str = "https://api.quotable.io";
const QUOTE_TAGS: &str = "inspirational|motivational";

/// HTTP client for the Quotable quote service.
#[derive(Debug, Clone)]
pub struct QuotableClient {
    client: Client,
    base_url: String,
}

impl QuotableClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: BASE_URL.to_string(),
        }
    }

    /// Overrides the service base URL (used by tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl Default for QuotableClient {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Deserialize)]
struct QuoteDto {
    content: String,
    author: String,
}

#[async_trait]
impl QuoteProvider for QuotableClient {
    async fn random_quote(&self) -> Result<ProviderQuote> {
        let url = format!("{}/quotes/random?tags={}", self.base_url, QUOTE_TAGS);
        tracing::debug!("fetching quote from {}", url);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(HaruError::provider(format!(
                "quote service returned {}",
                response.status()
            )));
        }

        let quotes: Vec<QuoteDto> = response.json().await?;
        let quote = quotes
            .into_iter()
            .next()
            .ok_or_else(|| HaruError::provider("quote service returned an empty result"))?;

        Ok(ProviderQuote {
            content: quote.content,
            author: quote.author,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_shape_parses() {
        let body = r#"[{"_id":"x","content":"Do it.","author":"Someone","tags":["motivational"]}]"#;
        let quotes: Vec<QuoteDto> = serde_json::from_str(body).unwrap();
        assert_eq!(quotes[0].content, "Do it.");
        assert_eq!(quotes[0].author, "Someone");
    }

    #[test]
    fn test_empty_response_is_parseable() {
        let quotes: Vec<QuoteDto> = serde_json::from_str("[]").unwrap();
        assert!(quotes.is_empty());
    }
}
