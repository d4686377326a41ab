//! Metric result model.
//!
//! A screening run produces one [`MetricResult`] per instrument: a mapping
//! from metric name to either a finite value or an explicit
//! undefined-with-reason marker. Undefined is a normal data state (degenerate
//! variance, too few observations), never an error, and never silently zero.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Metric name: mean excess return over excess-return volatility.
pub const INFORMATION_RATIO: &str = "Information Ratio";
/// Metric name: annualized mean excess-over-risk-free return per unit of volatility.
pub const SHARPE_RATIO: &str = "Sharpe Ratio";
/// Metric name: sensitivity of instrument returns to benchmark returns.
pub const BETA: &str = "Beta";
/// Metric name: annualized return unexplained by benchmark exposure.
pub const ALPHA: &str = "Alpha";
/// Metric name: ratio of cumulative instrument growth to benchmark growth.
pub const RELATIVE_STRENGTH: &str = "Relative Strength";
/// Metric name: cumulative fractional return over the window.
pub const TOTAL_RETURN: &str = "Total Return";

/// The fixed core metric set, in presentation order.
#[must_use]
pub const fn metric_names() -> [&'static str; 6] {
    [
        INFORMATION_RATIO,
        SHARPE_RATIO,
        BETA,
        ALPHA,
        RELATIVE_STRENGTH,
        TOTAL_RETURN,
    ]
}

/// A single metric outcome: a finite value, or undefined with a reason.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MetricValue {
    /// The metric was computed to a finite value.
    Value(f64),
    /// The metric is not computable for this input; the reason says why.
    Undefined(String),
}

impl MetricValue {
    /// Convenience constructor for the undefined case.
    #[must_use]
    pub fn undefined(reason: impl Into<String>) -> Self {
        Self::Undefined(reason.into())
    }

    /// The finite value, if defined.
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(*v),
            Self::Undefined(_) => None,
        }
    }

    /// Whether the metric was computed.
    #[must_use]
    pub const fn is_defined(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// The value as a float, `NaN` when undefined.
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        self.value().unwrap_or(f64::NAN)
    }
}

impl std::fmt::Display for MetricValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Value(v) => write!(f, "{v:.4}"),
            Self::Undefined(_) => write!(f, "n/a"),
        }
    }
}

/// The full metric mapping for one instrument.
///
/// Every registered metric name is present exactly once; values are either
/// finite or explicitly undefined. Immutable once the engine returns it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MetricResult {
    values: BTreeMap<String, MetricValue>,
}

impl MetricResult {
    /// Creates an empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the outcome for a named metric.
    pub fn insert(&mut self, name: impl Into<String>, value: MetricValue) {
        self.values.insert(name.into(), value);
    }

    /// The outcome for a named metric, if the name is registered.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&MetricValue> {
        self.values.get(name)
    }

    /// Number of metric entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns whether the result holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over `(name, outcome)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MetricValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// The Information Ratio outcome, if present.
    #[must_use]
    pub fn information_ratio(&self) -> Option<&MetricValue> {
        self.get(INFORMATION_RATIO)
    }
}

/// One row of a screening report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreeningRow {
    /// Sanitized instrument identifier.
    pub symbol: String,
    /// Metric outcomes for the instrument.
    pub metrics: MetricResult,
}

/// Ordered collection of per-instrument metric rows.
///
/// Sorted descending by Information Ratio; instruments whose Information
/// Ratio is undefined sort last.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScreeningReport {
    rows: Vec<ScreeningRow>,
}

impl ScreeningReport {
    /// Creates an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a row.
    pub fn push(&mut self, row: ScreeningRow) {
        self.rows.push(row);
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns whether the report holds no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The rows in their current order.
    #[must_use]
    pub fn rows(&self) -> &[ScreeningRow] {
        &self.rows
    }

    /// Sorts rows descending by Information Ratio, undefined values last.
    ///
    /// Ties (including rows that are all undefined) fall back to symbol
    /// order so the report is deterministic.
    pub fn sort_by_information_ratio(&mut self) {
        self.rows.sort_by(|a, b| {
            let ia = a.metrics.information_ratio().and_then(MetricValue::value);
            let ib = b.metrics.information_ratio().and_then(MetricValue::value);
            match (ia, ib) {
                (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(Ordering::Equal),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            }
            .then_with(|| a.symbol.cmp(&b.symbol))
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(symbol: &str, ir: MetricValue) -> ScreeningRow {
        let mut metrics = MetricResult::new();
        metrics.insert(INFORMATION_RATIO, ir);
        ScreeningRow {
            symbol: symbol.to_string(),
            metrics,
        }
    }

    #[test]
    fn test_metric_value_accessors() {
        let v = MetricValue::Value(1.25);
        assert!(v.is_defined());
        assert_eq!(v.value(), Some(1.25));
        assert_eq!(v.as_f64(), 1.25);

        let u = MetricValue::undefined("zero excess volatility");
        assert!(!u.is_defined());
        assert_eq!(u.value(), None);
        assert!(u.as_f64().is_nan());
    }

    #[test]
    fn test_metric_value_display() {
        assert_eq!(MetricValue::Value(0.5).to_string(), "0.5000");
        assert_eq!(MetricValue::undefined("x").to_string(), "n/a");
    }

    #[test]
    fn test_metric_result_insert_get() {
        let mut result = MetricResult::new();
        result.insert(BETA, MetricValue::Value(1.1));
        result.insert(BETA, MetricValue::Value(0.9));
        assert_eq!(result.len(), 1);
        assert_eq!(result.get(BETA), Some(&MetricValue::Value(0.9)));
        assert!(result.get("Sortino").is_none());
    }

    #[test]
    fn test_metric_names_fixed_set() {
        let names = metric_names();
        assert_eq!(names.len(), 6);
        assert!(names.contains(&INFORMATION_RATIO));
        assert!(names.contains(&TOTAL_RETURN));
    }

    #[test]
    fn test_report_sort_descending_undefined_last() {
        let mut report = ScreeningReport::new();
        report.push(row("LOW", MetricValue::Value(0.1)));
        report.push(row("NONE", MetricValue::undefined("zero excess volatility")));
        report.push(row("HIGH", MetricValue::Value(0.9)));

        report.sort_by_information_ratio();

        let symbols: Vec<&str> = report.rows().iter().map(|r| r.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["HIGH", "LOW", "NONE"]);
    }

    #[test]
    fn test_report_sort_ties_by_symbol() {
        let mut report = ScreeningReport::new();
        report.push(row("BBB", MetricValue::undefined("x")));
        report.push(row("AAA", MetricValue::undefined("y")));

        report.sort_by_information_ratio();

        let symbols: Vec<&str> = report.rows().iter().map(|r| r.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["AAA", "BBB"]);
    }
}
