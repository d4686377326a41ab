//! Metric calculator implementations.
//!
//! Each calculator is a pure function of two aligned return slices and
//! yields a [`MetricValue`]: a finite value, or undefined with the reason it
//! could not be computed. Calculators never panic and never abort each
//! other; the engine runs them in isolation.

use crate::config::MetricsConfig;
use ronda_traits::metric::{
    ALPHA, BETA, INFORMATION_RATIO, MetricValue, RELATIVE_STRENGTH, SHARPE_RATIO, TOTAL_RETURN,
};
use ronda_traits::stats::{cumulative_growth, mean, sample_covariance, sample_std, sample_variance};

/// A named, benchmark-relative metric over aligned return windows.
///
/// Implementations must be thread-safe (`Send + Sync`) so the engine can be
/// shared across concurrent instrument tasks.
pub trait MetricCalculator: Send + Sync {
    /// Unique metric name, used as the key in the result mapping.
    fn name(&self) -> &'static str;

    /// Whether the metric reads the benchmark series.
    ///
    /// The engine uses this to decide which metrics a corrupt benchmark
    /// input invalidates.
    fn uses_benchmark(&self) -> bool {
        true
    }

    /// Computes the metric over the aligned window.
    fn compute(&self, instrument: &[f64], benchmark: &[f64]) -> MetricValue;
}

/// Information Ratio: mean excess return divided by excess-return volatility.
///
/// Excess is `instrument − benchmark`, elementwise. Undefined when the
/// excess volatility is zero (identical series) or fewer than two
/// observations are available.
#[derive(Debug, Clone, Copy, Default)]
pub struct InformationRatio;

impl MetricCalculator for InformationRatio {
    fn name(&self) -> &'static str {
        INFORMATION_RATIO
    }

    fn compute(&self, instrument: &[f64], benchmark: &[f64]) -> MetricValue {
        if instrument.len() < 2 {
            return MetricValue::undefined("fewer than 2 observations");
        }
        let excess: Vec<f64> = instrument
            .iter()
            .zip(benchmark.iter())
            .map(|(s, b)| s - b)
            .collect();
        let std = sample_std(&excess);
        if !std.is_finite() || std == 0.0 {
            return MetricValue::undefined("zero excess return volatility");
        }
        MetricValue::Value(mean(&excess) / std)
    }
}

/// Sharpe Ratio, annualized.
///
/// `mean(instrument − rf) / stddev(instrument) × sqrt(252)` with the
/// risk-free rate converted to a per-period fraction. Undefined when the
/// instrument volatility is zero or fewer than two observations are
/// available.
#[derive(Debug, Clone, Copy)]
pub struct SharpeRatio {
    rate_per_period: f64,
    annualization: f64,
}

impl SharpeRatio {
    /// Creates the calculator from the shared metrics configuration.
    #[must_use]
    pub fn new(config: &MetricsConfig) -> Self {
        Self {
            rate_per_period: config.per_period_rate(),
            annualization: config.annualization_factor(),
        }
    }
}

impl MetricCalculator for SharpeRatio {
    fn name(&self) -> &'static str {
        SHARPE_RATIO
    }

    fn uses_benchmark(&self) -> bool {
        false
    }

    fn compute(&self, instrument: &[f64], _benchmark: &[f64]) -> MetricValue {
        if instrument.len() < 2 {
            return MetricValue::undefined("fewer than 2 observations");
        }
        let std = sample_std(instrument);
        if !std.is_finite() || std == 0.0 {
            return MetricValue::undefined("zero instrument volatility");
        }
        let excess_mean = mean(instrument) - self.rate_per_period;
        MetricValue::Value(excess_mean / std * self.annualization)
    }
}

/// Beta: sample covariance of instrument and benchmark over benchmark
/// variance.
///
/// Both estimators use the N−1 denominator. Undefined when the benchmark
/// variance is zero or fewer than two observations are available.
#[derive(Debug, Clone, Copy, Default)]
pub struct BetaCalculator;

/// Shared beta computation, also used by [`AlphaCalculator`].
fn beta(instrument: &[f64], benchmark: &[f64]) -> Option<f64> {
    if instrument.len() < 2 {
        return None;
    }
    let variance = sample_variance(benchmark);
    if !variance.is_finite() || variance == 0.0 {
        return None;
    }
    let covariance = sample_covariance(instrument, benchmark);
    if !covariance.is_finite() {
        return None;
    }
    Some(covariance / variance)
}

impl MetricCalculator for BetaCalculator {
    fn name(&self) -> &'static str {
        BETA
    }

    fn compute(&self, instrument: &[f64], benchmark: &[f64]) -> MetricValue {
        beta(instrument, benchmark).map_or_else(
            || MetricValue::undefined("zero benchmark variance or fewer than 2 observations"),
            MetricValue::Value,
        )
    }
}

/// Alpha, annualized: mean instrument return in excess of the CAPM
/// expectation, scaled to a year.
///
/// `(mean(instrument) − [rf + beta × (mean(benchmark) − rf)]) × 252`.
/// Undefined whenever beta is undefined.
#[derive(Debug, Clone, Copy)]
pub struct AlphaCalculator {
    rate_per_period: f64,
    periods_per_year: f64,
}

impl AlphaCalculator {
    /// Creates the calculator from the shared metrics configuration.
    #[must_use]
    pub fn new(config: &MetricsConfig) -> Self {
        Self {
            rate_per_period: config.per_period_rate(),
            periods_per_year: config.trading_days_per_year as f64,
        }
    }
}

impl MetricCalculator for AlphaCalculator {
    fn name(&self) -> &'static str {
        ALPHA
    }

    fn compute(&self, instrument: &[f64], benchmark: &[f64]) -> MetricValue {
        let Some(beta) = beta(instrument, benchmark) else {
            return MetricValue::undefined("beta is undefined");
        };
        let expected = self.rate_per_period + beta * (mean(benchmark) - self.rate_per_period);
        let alpha = (mean(instrument) - expected) * self.periods_per_year;
        if alpha.is_finite() {
            MetricValue::Value(alpha)
        } else {
            MetricValue::undefined("non-finite result")
        }
    }
}

/// Relative Strength: cumulative instrument growth over cumulative
/// benchmark growth.
///
/// Undefined when the benchmark's cumulative growth is zero or undefined.
#[derive(Debug, Clone, Copy, Default)]
pub struct RelativeStrength;

impl MetricCalculator for RelativeStrength {
    fn name(&self) -> &'static str {
        RELATIVE_STRENGTH
    }

    fn compute(&self, instrument: &[f64], benchmark: &[f64]) -> MetricValue {
        let benchmark_growth = cumulative_growth(benchmark);
        if !benchmark_growth.is_finite() || benchmark_growth == 0.0 {
            return MetricValue::undefined("zero or undefined benchmark cumulative growth");
        }
        let ratio = cumulative_growth(instrument) / benchmark_growth;
        if ratio.is_finite() {
            MetricValue::Value(ratio)
        } else {
            MetricValue::undefined("non-finite result")
        }
    }
}

/// Total Return: cumulative fractional return over the window.
#[derive(Debug, Clone, Copy, Default)]
pub struct TotalReturn;

impl MetricCalculator for TotalReturn {
    fn name(&self) -> &'static str {
        TOTAL_RETURN
    }

    fn uses_benchmark(&self) -> bool {
        false
    }

    fn compute(&self, instrument: &[f64], _benchmark: &[f64]) -> MetricValue {
        let total = cumulative_growth(instrument) - 1.0;
        if total.is_finite() {
            MetricValue::Value(total)
        } else {
            MetricValue::undefined("non-finite result")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ronda_traits::stats::{sample_covariance, sample_variance};

    const STOCK: [f64; 6] = [0.01, -0.02, 0.015, 0.03, -0.01, 0.005];
    const BENCH: [f64; 6] = [0.005, -0.01, 0.01, 0.02, -0.005, 0.0];

    #[test]
    fn test_information_ratio_known_value() {
        let result = InformationRatio.compute(&STOCK, &BENCH);
        let excess: Vec<f64> = STOCK.iter().zip(BENCH.iter()).map(|(s, b)| s - b).collect();
        let expected = mean(&excess) / sample_std(&excess);
        assert_relative_eq!(result.value().unwrap(), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_information_ratio_identical_series_undefined() {
        let result = InformationRatio.compute(&STOCK, &STOCK);
        assert!(!result.is_defined());
    }

    #[test]
    fn test_information_ratio_single_observation_undefined() {
        assert!(!InformationRatio.compute(&[0.01], &[0.02]).is_defined());
    }

    #[test]
    fn test_sharpe_known_value() {
        let config = MetricsConfig::default();
        let result = SharpeRatio::new(&config).compute(&STOCK, &BENCH);
        let expected =
            (mean(&STOCK) - 0.03 / 252.0) / sample_std(&STOCK) * 252.0f64.sqrt();
        assert_relative_eq!(result.value().unwrap(), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_sharpe_flat_returns_undefined() {
        let config = MetricsConfig::default();
        let flat = [0.01; 5];
        assert!(!SharpeRatio::new(&config).compute(&flat, &BENCH).is_defined());
    }

    #[test]
    fn test_beta_satisfies_covariance_identity() {
        let result = BetaCalculator.compute(&STOCK, &BENCH);
        let beta = result.value().unwrap();
        assert_relative_eq!(
            sample_covariance(&STOCK, &BENCH),
            beta * sample_variance(&BENCH),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_beta_of_benchmark_against_itself_is_one() {
        let result = BetaCalculator.compute(&BENCH, &BENCH);
        assert_relative_eq!(result.value().unwrap(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_beta_zero_benchmark_variance_undefined() {
        let flat = [0.01; 6];
        assert!(!BetaCalculator.compute(&STOCK, &flat).is_defined());
    }

    #[test]
    fn test_alpha_undefined_when_beta_undefined() {
        let config = MetricsConfig::default();
        let flat = [0.01; 6];
        let result = AlphaCalculator::new(&config).compute(&STOCK, &flat);
        assert_eq!(result, MetricValue::undefined("beta is undefined"));
    }

    #[test]
    fn test_alpha_known_value() {
        let config = MetricsConfig::default();
        let result = AlphaCalculator::new(&config).compute(&STOCK, &BENCH);

        let rf = 0.03 / 252.0;
        let beta = sample_covariance(&STOCK, &BENCH) / sample_variance(&BENCH);
        let expected = (mean(&STOCK) - (rf + beta * (mean(&BENCH) - rf))) * 252.0;
        assert_relative_eq!(result.value().unwrap(), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_relative_strength_known_value() {
        let result = RelativeStrength.compute(&[0.1, 0.1], &[0.0, 0.0]);
        assert_relative_eq!(result.value().unwrap(), 1.21, epsilon = 1e-12);
    }

    #[test]
    fn test_relative_strength_zero_benchmark_growth_undefined() {
        // A -100% benchmark return collapses cumulative growth to zero.
        let result = RelativeStrength.compute(&[0.1, 0.1], &[-1.0, 0.5]);
        assert!(!result.is_defined());
    }

    #[test]
    fn test_total_return_known_value() {
        let result = TotalReturn.compute(&[0.1, -0.05, 0.02], &[]);
        assert_relative_eq!(
            result.value().unwrap(),
            1.1 * 0.95 * 1.02 - 1.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_total_return_single_observation_defined() {
        let result = TotalReturn.compute(&[0.05], &[]);
        assert_relative_eq!(result.value().unwrap(), 0.05, epsilon = 1e-12);
    }
}
