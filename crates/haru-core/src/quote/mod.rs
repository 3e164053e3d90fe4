//! Quote provider boundary and its single-slot cache.

pub mod cache;
pub mod provider;

pub use cache::{QuoteCache, QUOTE_CACHE_TTL_SECS};
pub use provider::{ProviderQuote, QuoteProvider};
