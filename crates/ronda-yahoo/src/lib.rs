//! Yahoo Finance price provider for ronda.
//!
//! This crate fetches daily adjusted closing prices from the public
//! [Yahoo Finance](https://finance.yahoo.com/) v8 chart API and exposes them
//! through the [`PriceProvider`](ronda_traits::PriceProvider) trait, with an
//! in-memory cache keyed by `(symbol, start, end)` so repeated runs over the
//! same window never refetch.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ronda_yahoo::YahooProvider;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = YahooProvider::new();
//!
//!     // Fetch daily adjusted closes through the provider trait
//!     let series = provider.get_series("AAPL", start, end).await;
//!
//!     Ok(())
//! }
//! ```

mod cache;
mod client;
mod error;
mod provider;
mod types;

pub use cache::{CacheKey, PriceCache};
pub use client::{MIN_FETCH_POINTS, YahooClient};
pub use error::YahooError;
pub use provider::YahooProvider;
pub use types::{
    AdjCloseBlock, ApiError, Chart, ChartResponse, ChartResult, Indicators, QuoteBlock,
};

/// Result type for Yahoo Finance operations.
pub type Result<T> = std::result::Result<T, YahooError>;
