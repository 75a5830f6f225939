//! Quote source - remote fetch with time-boxed memoization
//!
//! The remote call is the application's only real failure mode; it is fully
//! absorbed here. Failure is binary: either the decoded list or the fixed
//! fallback list, never a partial result and never an error to the caller.

use crate::model::quote::{fallback_quotes, Quote};
use anyhow::Result;
use std::time::{Duration, Instant};

/// Remote endpoint serving the quote list
pub const QUOTES_ENDPOINT: &str = "https://type.fit/api/quotes";

/// How long a fetched (or fallback) list stays memoized
pub const CACHE_TTL: Duration = Duration::from_secs(3600);

/// A memoized fetch result checked against the TTL
#[derive(Debug)]
struct CacheEntry {
    quotes: Vec<Quote>,
    fetched_at: Instant,
}

/// Fetches the quote list, memoizing the result for one cache window
pub struct QuoteSource {
    client: reqwest::blocking::Client,
    endpoint: String,
    ttl: Duration,
    cache: Option<CacheEntry>,
}

impl Default for QuoteSource {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteSource {
    pub fn new() -> Self {
        Self::with_endpoint(QUOTES_ENDPOINT, CACHE_TTL)
    }

    /// Source against a specific endpoint and TTL
    pub fn with_endpoint(endpoint: impl Into<String>, ttl: Duration) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            endpoint: endpoint.into(),
            ttl,
            cache: None,
        }
    }

    /// Return the quote list. Never fails: any network, HTTP-status, or
    /// decode error yields the fallback list. Repeated calls within the
    /// cache window return the memoized list without re-fetching.
    pub fn fetch(&mut self) -> Vec<Quote> {
        if let Some(entry) = &self.cache {
            if entry.fetched_at.elapsed() < self.ttl {
                return entry.quotes.clone();
            }
        }

        let quotes = self.fetch_remote().unwrap_or_else(|_| fallback_quotes());
        self.cache = Some(CacheEntry {
            quotes: quotes.clone(),
            fetched_at: Instant::now(),
        });
        quotes
    }

    fn fetch_remote(&self) -> Result<Vec<Quote>> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()?
            .error_for_status()?;
        let quotes: Vec<Quote> = response.json()?;
        Ok(quotes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Unroutable endpoint: the connection is refused immediately, which
    // exercises the fallback path without touching the network.
    fn unreachable_source(ttl: Duration) -> QuoteSource {
        QuoteSource::with_endpoint("http://127.0.0.1:9/quotes", ttl)
    }

    #[test]
    fn test_fetch_never_raises_and_falls_back() {
        let mut source = unreachable_source(CACHE_TTL);
        let quotes = source.fetch();
        assert_eq!(quotes.len(), 5);
        assert_eq!(quotes, fallback_quotes());
    }

    #[test]
    fn test_fetch_memoizes_within_window() {
        let mut source = unreachable_source(CACHE_TTL);
        let first = source.fetch();
        assert!(source.cache.is_some());

        let second = source.fetch();
        assert_eq!(first, second);
    }

    #[test]
    fn test_fallback_is_cached_like_a_success() {
        // The fallback result occupies the cache window too; a zero TTL is
        // the only thing that forces another attempt.
        let mut source = unreachable_source(Duration::ZERO);
        source.fetch();
        let first_attempt = source.cache.as_ref().map(|e| e.fetched_at);

        source.fetch();
        let second_attempt = source.cache.as_ref().map(|e| e.fetched_at);
        assert_ne!(first_attempt, second_attempt);
    }
}
