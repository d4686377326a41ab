//! Relative-performance metrics for ronda.
//!
//! This crate computes benchmark-relative statistics over aligned return
//! windows:
//! - Information Ratio: mean excess return / excess volatility
//! - Sharpe Ratio (annualized), Beta, Alpha (annualized)
//! - Relative Strength and Total Return from cumulative growth
//!
//! Calculators form an open set keyed by name; new metrics register into the
//! engine without touching existing ones, and one metric's failure never
//! affects another's outcome.
//!
//! # Example
//!
//! ```rust,ignore
//! use ronda_metrics::{MetricsConfig, MetricsEngine};
//!
//! let engine = MetricsEngine::new(MetricsConfig::default());
//! let result = engine.compute_all(&instrument_returns, &benchmark_returns);
//! ```

pub mod calculators;
pub mod config;
pub mod engine;

// Re-export main types
pub use calculators::{
    AlphaCalculator, BetaCalculator, InformationRatio, MetricCalculator, RelativeStrength,
    SharpeRatio, TotalReturn,
};
pub use config::MetricsConfig;
pub use engine::MetricsEngine;
