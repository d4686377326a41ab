//! Response types for the Yahoo Finance v8 chart API.
//!
//! Only the fields the screener consumes are modeled; everything else in the
//! payload is ignored during deserialization.

use crate::error::YahooError;
use chrono::DateTime;
use ronda_traits::types::{Date, PriceSeries};
use serde::Deserialize;

/// Top-level chart API response.
#[derive(Debug, Deserialize)]
pub struct ChartResponse {
    /// The chart envelope.
    pub chart: Chart,
}

/// Chart envelope: one of `result` or `error` is populated.
#[derive(Debug, Deserialize)]
pub struct Chart {
    /// Per-symbol results; the chart endpoint returns at most one.
    pub result: Option<Vec<ChartResult>>,
    /// API-level error, set when the request was understood but rejected.
    pub error: Option<ApiError>,
}

/// API-level error payload.
#[derive(Debug, Deserialize)]
pub struct ApiError {
    /// Machine-readable error code.
    pub code: String,
    /// Human-readable description.
    pub description: String,
}

/// One symbol's chart data.
#[derive(Debug, Deserialize)]
pub struct ChartResult {
    /// Unix timestamps (seconds, UTC) of the observations.
    pub timestamp: Option<Vec<i64>>,
    /// Price indicator blocks.
    pub indicators: Indicators,
}

/// Indicator blocks carried in a chart result.
#[derive(Debug, Deserialize)]
pub struct Indicators {
    /// Raw OHLCV quote blocks; the close column is the fallback price.
    #[serde(default)]
    pub quote: Vec<QuoteBlock>,
    /// Split- and dividend-adjusted closes, when the API supplies them.
    pub adjclose: Option<Vec<AdjCloseBlock>>,
}

/// The close column of a quote block. Nulls mark missing observations.
#[derive(Debug, Deserialize)]
pub struct QuoteBlock {
    /// Unadjusted daily closes.
    pub close: Option<Vec<Option<f64>>>,
}

/// Adjusted-close block.
#[derive(Debug, Deserialize)]
pub struct AdjCloseBlock {
    /// Adjusted daily closes.
    pub adjclose: Vec<Option<f64>>,
}

impl ChartResult {
    /// Converts the chart payload into a [`PriceSeries`].
    ///
    /// Adjusted closes are preferred; the raw close column is the fallback.
    /// Missing observations stay `None` so downstream validation can measure
    /// data quality.
    ///
    /// # Errors
    ///
    /// Returns [`YahooError::NoData`] when the payload carries neither
    /// timestamps nor a usable price column.
    pub fn into_price_series(self, symbol: &str) -> Result<PriceSeries, YahooError> {
        let timestamps = self
            .timestamp
            .filter(|t| !t.is_empty())
            .ok_or_else(|| YahooError::NoData(symbol.to_string()))?;

        let closes = self
            .indicators
            .adjclose
            .and_then(|mut blocks| {
                if blocks.is_empty() {
                    None
                } else {
                    Some(blocks.swap_remove(0).adjclose)
                }
            })
            .or_else(|| {
                self.indicators
                    .quote
                    .into_iter()
                    .next()
                    .and_then(|block| block.close)
            })
            .ok_or_else(|| YahooError::NoData(symbol.to_string()))?;

        let mut dates: Vec<Date> = Vec::with_capacity(timestamps.len());
        let mut values: Vec<Option<f64>> = Vec::with_capacity(timestamps.len());
        for (ts, close) in timestamps.into_iter().zip(closes) {
            if let Some(dt) = DateTime::from_timestamp(ts, 0) {
                dates.push(dt.date_naive());
                values.push(close);
            }
        }

        Ok(PriceSeries::new(dates, values))
    }
}
