//! [`PriceProvider`] implementation backed by the chart client and cache.

use crate::cache::{CacheKey, PriceCache};
use crate::client::YahooClient;
use ronda_traits::PriceProvider;
use ronda_traits::types::{Date, PriceSeries};
use tracing::{debug, warn};

/// Cached Yahoo Finance price provider.
///
/// Fetch failures are logged and surface as `None`, so one bad symbol never
/// aborts a screening run; the pipeline decides whether a missing series is
/// fatal (benchmark) or skippable (instrument).
#[derive(Debug, Clone, Default)]
pub struct YahooProvider {
    client: YahooClient,
    cache: PriceCache,
}

impl YahooProvider {
    /// Creates a provider against the public Yahoo Finance endpoint.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a provider over an existing client and cache.
    #[must_use]
    pub fn with_parts(client: YahooClient, cache: PriceCache) -> Self {
        Self { client, cache }
    }

    /// The underlying cache, for snapshot persistence.
    #[must_use]
    pub const fn cache(&self) -> &PriceCache {
        &self.cache
    }
}

impl PriceProvider for YahooProvider {
    async fn get_series(&self, symbol: &str, start: Date, end: Date) -> Option<PriceSeries> {
        let key = CacheKey::new(symbol, start, end);
        if let Some(series) = self.cache.get(&key).await {
            debug!(symbol, "cache hit");
            return Some(series);
        }

        match self.client.daily_history(symbol, start, end).await {
            Ok(series) => {
                self.cache.put(key, &series).await;
                Some(series)
            }
            Err(e) => {
                warn!(symbol, error = %e, "fetch failed");
                None
            }
        }
    }
}
