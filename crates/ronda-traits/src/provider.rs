//! Provider seam over price-data sources.
//!
//! The screening pipeline is generic over anything that can supply a daily
//! price series for a (symbol, start, end) request. A failed or empty fetch
//! is a normal `None` return, never an error the pipeline has to catch;
//! network concerns (timeouts, retries, caching) live behind this trait.

use crate::types::{Date, PriceSeries};
use std::future::Future;

/// A source of daily closing-price series.
///
/// Implementations should be cheap to share across concurrent instrument
/// tasks; the returned future must be `Send` so fetches can run side by
/// side on a multi-threaded runtime.
pub trait PriceProvider: Send + Sync {
    /// Fetches the price series for `symbol` over `[start, end)`.
    ///
    /// Returns `None` when the fetch failed or produced no usable data.
    fn get_series(
        &self,
        symbol: &str,
        start: Date,
        end: Date,
    ) -> impl Future<Output = Option<PriceSeries>> + Send;
}
