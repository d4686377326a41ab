//! Yahoo Finance chart API client implementation.

use crate::{Result, error::YahooError, types::ChartResponse};
use chrono::NaiveTime;
use reqwest::Client;
use ronda_traits::types::{Date, PriceSeries};
use tracing::debug;

/// Base URL for the Yahoo Finance v8 chart API.
const YAHOO_BASE_URL: &str = "https://query1.finance.yahoo.com";

/// Minimum number of observations a fetched series must hold.
///
/// Anything shorter is treated as no data; the pipeline validator applies its
/// own, stricter threshold afterwards.
pub const MIN_FETCH_POINTS: usize = 10;

/// Yahoo Finance chart API client.
#[derive(Debug, Clone)]
pub struct YahooClient {
    client: Client,
    base_url: String,
}

impl Default for YahooClient {
    fn default() -> Self {
        Self::new()
    }
}

impl YahooClient {
    /// Create a new client against the public Yahoo Finance endpoint.
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: YAHOO_BASE_URL.to_string(),
        }
    }

    /// Create a client against a custom base URL.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Build the chart URL for a symbol and date window.
    fn url(&self, symbol: &str, start: Date, end: Date) -> String {
        let period1 = start.and_time(NaiveTime::MIN).and_utc().timestamp();
        let period2 = end.and_time(NaiveTime::MIN).and_utc().timestamp();
        format!(
            "{}/v8/finance/chart/{symbol}?period1={period1}&period2={period2}&interval=1d",
            self.base_url
        )
    }

    /// Get daily closing prices for a symbol over `[start, end)`.
    ///
    /// Adjusted closes are used when present, raw closes otherwise.
    ///
    /// # Arguments
    ///
    /// * `symbol` - Ticker or index symbol (e.g., "AAPL", "^GSPC")
    /// * `start` - First date of the window (inclusive)
    /// * `end` - Last date of the window (exclusive)
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the API rejects the symbol,
    /// or the response holds fewer than [`MIN_FETCH_POINTS`] observations.
    pub async fn daily_history(&self, symbol: &str, start: Date, end: Date) -> Result<PriceSeries> {
        let url = self.url(symbol, start, end);
        debug!(symbol, %start, %end, "fetching daily history");

        let response = self.client.get(&url).send().await?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(YahooError::RateLimitExceeded);
        }

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(YahooError::Api(format!("HTTP {status}: {text}")));
        }

        let parsed: ChartResponse = response.json().await?;

        if let Some(error) = parsed.chart.error {
            return Err(YahooError::Api(format!(
                "{}: {}",
                error.code, error.description
            )));
        }

        let result = parsed
            .chart
            .result
            .and_then(|mut results| {
                if results.is_empty() {
                    None
                } else {
                    Some(results.swap_remove(0))
                }
            })
            .ok_or_else(|| YahooError::NoData(symbol.to_string()))?;

        let series = result.into_price_series(symbol)?;
        if series.len() < MIN_FETCH_POINTS {
            return Err(YahooError::NoData(symbol.to_string()));
        }

        Ok(series)
    }
}
