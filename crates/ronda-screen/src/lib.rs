//! Benchmark-relative screening pipeline for ronda.
//!
//! This crate drives a screening run end to end: sanitize instrument ids,
//! fetch price series through a [`PriceProvider`](ronda_traits::PriceProvider),
//! validate data quality, derive and align returns, window them to the
//! trailing lookback, invoke the metrics engine, and rank the results by
//! Information Ratio.
//!
//! Per-instrument failures (bad data, failed fetch, too little aligned
//! history) are logged and skipped; only an inverted date range or an
//! unreachable benchmark aborts a run.
//!
//! # Example
//!
//! ```rust,ignore
//! use ronda_screen::{Screener, ScreenerConfig};
//!
//! let config = ScreenerConfig::default();
//! let screener = Screener::new(provider, config);
//! let report = screener.screen(&instruments, "^GSPC", 60).await?;
//! ```

pub mod config;
pub mod pipeline;
pub mod validate;

// Re-export main types
pub use config::ScreenerConfig;
pub use pipeline::{FETCH_BUFFER_DAYS, Screener};
pub use validate::{DEFAULT_MIN_DATA_POINTS, DataValidator};
