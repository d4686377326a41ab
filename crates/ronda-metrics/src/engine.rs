//! The metrics engine: an open, name-keyed set of calculators.

use crate::calculators::{
    AlphaCalculator, BetaCalculator, InformationRatio, MetricCalculator, RelativeStrength,
    SharpeRatio, TotalReturn,
};
use crate::config::MetricsConfig;
use ronda_traits::metric::{MetricResult, MetricValue};
use tracing::{debug, warn};

/// Computes the full metric set over an aligned return window.
///
/// The engine holds an ordered set of [`MetricCalculator`]s keyed by name.
/// New metrics can be [registered](Self::register) without modifying the
/// existing ones. Every registered name appears in the returned
/// [`MetricResult`] exactly once, as either a finite value or an explicit
/// undefined marker.
///
/// `compute_all` is a pure function of its inputs; it takes `&self` and
/// repeated invocation with identical inputs yields identical output.
pub struct MetricsEngine {
    calculators: Vec<Box<dyn MetricCalculator>>,
    config: MetricsConfig,
}

impl std::fmt::Debug for MetricsEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MetricsEngine")
            .field("config", &self.config)
            .field(
                "calculators",
                &self.calculators.iter().map(|c| c.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl Default for MetricsEngine {
    fn default() -> Self {
        Self::new(MetricsConfig::default())
    }
}

impl MetricsEngine {
    /// Creates an engine with the six core calculators registered.
    #[must_use]
    pub fn new(config: MetricsConfig) -> Self {
        let calculators: Vec<Box<dyn MetricCalculator>> = vec![
            Box::new(InformationRatio),
            Box::new(SharpeRatio::new(&config)),
            Box::new(BetaCalculator),
            Box::new(AlphaCalculator::new(&config)),
            Box::new(RelativeStrength),
            Box::new(TotalReturn),
        ];
        Self {
            calculators,
            config,
        }
    }

    /// The configuration the core calculators were built from.
    #[must_use]
    pub const fn config(&self) -> &MetricsConfig {
        &self.config
    }

    /// Registers a calculator, replacing any existing one with the same name.
    pub fn register(&mut self, calculator: Box<dyn MetricCalculator>) {
        if let Some(existing) = self
            .calculators
            .iter_mut()
            .find(|c| c.name() == calculator.name())
        {
            *existing = calculator;
        } else {
            self.calculators.push(calculator);
        }
    }

    /// Names of the registered metrics, in registration order.
    #[must_use]
    pub fn metric_names(&self) -> Vec<&'static str> {
        self.calculators.iter().map(|c| c.name()).collect()
    }

    /// Computes every registered metric over the aligned window.
    ///
    /// Inputs are expected to be already aligned and equal in length, but
    /// the engine does not trust the caller: mismatched lengths are
    /// truncated to the shorter side, empty input yields a result with
    /// every metric undefined (logged as a warning, not an error), and a
    /// non-finite value anywhere in an input makes every metric that reads
    /// that input undefined.
    #[must_use]
    pub fn compute_all(&self, instrument: &[f64], benchmark: &[f64]) -> MetricResult {
        let mut result = MetricResult::new();

        if instrument.is_empty() || benchmark.is_empty() {
            warn!(
                instrument_len = instrument.len(),
                benchmark_len = benchmark.len(),
                "empty return series, all metrics undefined"
            );
            for calculator in &self.calculators {
                result.insert(calculator.name(), MetricValue::undefined("empty input"));
            }
            return result;
        }

        let len = instrument.len().min(benchmark.len());
        if instrument.len() != benchmark.len() {
            warn!(
                instrument_len = instrument.len(),
                benchmark_len = benchmark.len(),
                "misaligned return series, truncating to common length"
            );
        }
        let instrument = &instrument[..len];
        let benchmark = &benchmark[..len];

        let instrument_ok = instrument.iter().all(|v| v.is_finite());
        let benchmark_ok = benchmark.iter().all(|v| v.is_finite());

        for calculator in &self.calculators {
            let value = if !instrument_ok {
                MetricValue::undefined("non-finite values in instrument returns")
            } else if calculator.uses_benchmark() && !benchmark_ok {
                MetricValue::undefined("non-finite values in benchmark returns")
            } else {
                calculator.compute(instrument, benchmark)
            };
            debug!(metric = calculator.name(), %value, "metric computed");
            result.insert(calculator.name(), value);
        }

        result
    }
}
