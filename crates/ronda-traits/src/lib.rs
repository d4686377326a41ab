#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/ronda/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core type definitions for the ronda screening framework.
//!
//! This crate provides the foundational abstractions for benchmark-relative
//! screening: price and return series, metric results, the provider seam
//! over price-data sources, and the shared error taxonomy.

/// The version of the ronda-traits crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Module declarations
pub mod error;
pub mod metric;
pub mod provider;
pub mod stats;
pub mod types;

// Re-exports
pub use error::{Result, RondaError};
pub use metric::{MetricResult, MetricValue, ScreeningReport, ScreeningRow, metric_names};
pub use provider::PriceProvider;
pub use types::{AlignedReturns, Date, PriceSeries, ReturnSeries, Symbol, ValidationVerdict};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        assert!(VERSION.contains('.'));
    }
}
