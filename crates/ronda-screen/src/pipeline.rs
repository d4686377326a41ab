//! The screening pipeline.
//!
//! Orchestrates a run: fetch the benchmark once, then per instrument
//! sanitize, fetch, validate, align returns, window, and compute metrics.
//! Instruments are independent of one another, so their fetch-and-compute
//! futures run concurrently; the benchmark return series is shared
//! read-only across all of them.

use chrono::{Duration, Utc};
use futures::future::join_all;
use ronda_metrics::{MetricsConfig, MetricsEngine};
use ronda_traits::metric::{ScreeningReport, ScreeningRow};
use ronda_traits::types::{Date, ReturnSeries};
use ronda_traits::{PriceProvider, Result, RondaError};
use tracing::{debug, info, warn};

use crate::config::ScreenerConfig;
use crate::validate::DataValidator;

/// Calendar days added to the fetch window beyond the lookback.
///
/// Guarantees enough trading days survive weekend/holiday removal, return
/// derivation, and validation.
pub const FETCH_BUFFER_DAYS: i64 = 100;

/// Screens instruments against a benchmark and ranks them by Information
/// Ratio.
#[derive(Debug)]
pub struct Screener<P> {
    provider: P,
    validator: DataValidator,
    engine: MetricsEngine,
    config: ScreenerConfig,
}

impl<P: PriceProvider> Screener<P> {
    /// Creates a screener over `provider` using `config`.
    ///
    /// The metrics engine inherits the configured risk-free rate; the
    /// validator inherits the configured minimum observation count.
    #[must_use]
    pub fn new(provider: P, config: ScreenerConfig) -> Self {
        let engine = MetricsEngine::new(MetricsConfig {
            risk_free_rate: config.risk_free_rate,
            ..MetricsConfig::default()
        });
        let validator = DataValidator::new(config.min_data_points);
        Self {
            provider,
            validator,
            engine,
            config,
        }
    }

    /// The screener configuration.
    #[must_use]
    pub const fn config(&self) -> &ScreenerConfig {
        &self.config
    }

    /// The validator, exposed for pre-flight checks by callers.
    #[must_use]
    pub const fn validator(&self) -> &DataValidator {
        &self.validator
    }

    /// Mutable access to the metrics engine, for registering additional
    /// calculators before a run.
    pub fn engine_mut(&mut self) -> &mut MetricsEngine {
        &mut self.engine
    }

    /// Screens `instruments` against `benchmark` over the trailing
    /// `lookback` aligned return observations, fetching data up to today.
    ///
    /// # Errors
    ///
    /// Returns [`RondaError::BenchmarkUnavailable`] when the benchmark
    /// series cannot be fetched. Per-instrument failures are logged and
    /// skipped, never propagated.
    pub async fn screen(
        &self,
        instruments: &[String],
        benchmark: &str,
        lookback: usize,
    ) -> Result<ScreeningReport> {
        let end = Utc::now().date_naive();
        let start = end - Duration::days(lookback as i64 + FETCH_BUFFER_DAYS);
        self.screen_range(instruments, benchmark, start, end, lookback)
            .await
    }

    /// Screens over an explicit fetch window.
    ///
    /// # Errors
    ///
    /// Returns [`RondaError::InvalidDateRange`] when `start` is not before
    /// `end`, and [`RondaError::BenchmarkUnavailable`] when the benchmark
    /// series cannot be fetched.
    pub async fn screen_range(
        &self,
        instruments: &[String],
        benchmark: &str,
        start: Date,
        end: Date,
        lookback: usize,
    ) -> Result<ScreeningReport> {
        if start >= end {
            return Err(RondaError::InvalidDateRange { start, end });
        }

        info!(
            instruments = instruments.len(),
            benchmark,
            %start,
            %end,
            lookback,
            "starting screening run"
        );

        let benchmark_series = self
            .provider
            .get_series(benchmark, start, end)
            .await
            .ok_or_else(|| RondaError::BenchmarkUnavailable(benchmark.to_string()))?;
        let benchmark_returns = benchmark_series.returns();
        debug!(
            benchmark,
            points = benchmark_series.len(),
            returns = benchmark_returns.len(),
            "benchmark data fetched"
        );

        let rows = join_all(
            instruments
                .iter()
                .map(|ticker| self.screen_one(ticker, &benchmark_returns, start, end, lookback)),
        )
        .await;

        let mut report = ScreeningReport::new();
        for row in rows.into_iter().flatten() {
            report.push(row);
        }
        report.sort_by_information_ratio();

        info!(
            screened = instruments.len(),
            reported = report.len(),
            "screening run complete"
        );
        Ok(report)
    }

    /// Processes a single instrument; `None` means skip.
    ///
    /// Every failure on this path is recoverable: it is logged and turns
    /// into a skipped row, never an error for the run.
    async fn screen_one(
        &self,
        ticker: &str,
        benchmark_returns: &ReturnSeries,
        start: Date,
        end: Date,
        lookback: usize,
    ) -> Option<ScreeningRow> {
        let symbol = self.validator.sanitize_ticker(ticker);

        let Some(series) = self.provider.get_series(&symbol, start, end).await else {
            warn!(%symbol, "fetch returned no data, skipping");
            return None;
        };

        let verdict = self.validator.validate(&series, &symbol);
        if !verdict.passed() {
            warn!(%symbol, reason = verdict.reason(), "validation failed, skipping");
            return None;
        }

        let returns = series.returns();
        let aligned = returns.align(benchmark_returns);
        if aligned.len() < lookback {
            warn!(
                %symbol,
                aligned = aligned.len(),
                lookback,
                "insufficient aligned data, skipping"
            );
            return None;
        }

        let windowed = aligned.tail(lookback);
        let metrics = self
            .engine
            .compute_all(windowed.instrument(), windowed.benchmark());
        debug!(%symbol, "metrics computed");

        Some(ScreeningRow { symbol, metrics })
    }
}
