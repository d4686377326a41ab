//! Price-series validation and ticker sanitizing.
//!
//! A series must pass every check before it enters metric calculation:
//! presence, minimum length, missing-value rate, basic quality (no
//! non-positive prices), and an anomaly scan for patterns that usually mean
//! corrupt or stale data.

use ronda_traits::types::{PriceSeries, ValidationVerdict};
use tracing::debug;

/// Anomaly label for an unusual share of large single-step moves.
pub const ANOMALY_EXTREME_MOVES: &str = "extreme price movements";
/// Anomaly label for long stretches of unchanged prices.
pub const ANOMALY_FLAT_PERIODS: &str = "extended flat periods";

/// Default minimum number of price observations a series must hold.
///
/// This is the canonical threshold; [`ScreenerConfig`](crate::ScreenerConfig)
/// defaults to the same value and feeds it here, so configuration and
/// validator can never disagree.
pub const DEFAULT_MIN_DATA_POINTS: usize = 20;

/// Maximum tolerated fraction of missing observations.
const MAX_MISSING_FRACTION: f64 = 0.1;
/// Single-step return magnitude considered extreme.
const EXTREME_RETURN: f64 = 0.5;
/// Share of extreme returns above which the series is flagged.
const EXTREME_RETURN_SHARE: f64 = 0.01;
/// Share of flat steps (relative to series length) above which the series
/// is flagged.
const FLAT_STEP_SHARE: f64 = 0.1;
/// Number of detected anomalies above which validation fails.
const MAX_ANOMALIES: usize = 3;

/// Validates raw price series before they enter metric calculation.
#[derive(Debug, Clone)]
pub struct DataValidator {
    min_data_points: usize,
}

impl Default for DataValidator {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_DATA_POINTS)
    }
}

impl DataValidator {
    /// Creates a validator with the given minimum observation count.
    #[must_use]
    pub const fn new(min_data_points: usize) -> Self {
        Self { min_data_points }
    }

    /// Runs all checks over `series`, short-circuiting on the first failure.
    ///
    /// `label` names the instrument in the verdict reason and the
    /// diagnostic trace. This is a pure function; it never mutates the
    /// series.
    #[must_use]
    pub fn validate(&self, series: &PriceSeries, label: &str) -> ValidationVerdict {
        debug!(label, len = series.len(), "validating price series");

        if series.is_empty() {
            return ValidationVerdict::invalid(format!("no data for {label}"));
        }

        if series.len() < self.min_data_points {
            return ValidationVerdict::invalid(format!(
                "insufficient data points: {}",
                series.len()
            ));
        }

        let missing = series.missing_fraction();
        if missing > MAX_MISSING_FRACTION {
            return ValidationVerdict::invalid(format!(
                "too many missing values: {:.1}%",
                missing * 100.0
            ));
        }

        if !Self::data_quality_ok(series) {
            return ValidationVerdict::invalid("poor data quality detected");
        }

        let anomalies = self.detect_anomalies(series);
        debug!(label, ?anomalies, "anomaly scan complete");
        if anomalies.len() > MAX_ANOMALIES {
            return ValidationVerdict::invalid(format!(
                "multiple anomalies detected: {}",
                anomalies[..MAX_ANOMALIES].join(", ")
            ));
        }

        ValidationVerdict::valid()
    }

    /// Cleans a ticker symbol: trims, uppercases, removes interior spaces.
    #[must_use]
    pub fn sanitize_ticker(&self, ticker: &str) -> String {
        ticker.trim().to_uppercase().replace(' ', "")
    }

    /// Scans for anomalous patterns and returns their labels.
    #[must_use]
    pub fn detect_anomalies(&self, series: &PriceSeries) -> Vec<&'static str> {
        let mut anomalies = Vec::new();

        // Extreme single-step movements, measured over the return series so
        // gaps do not produce spurious jumps.
        let returns = series.returns();
        if !returns.is_empty() {
            let extreme = returns
                .values()
                .iter()
                .filter(|r| r.abs() > EXTREME_RETURN)
                .count();
            if extreme as f64 > returns.len() as f64 * EXTREME_RETURN_SHARE {
                anomalies.push(ANOMALY_EXTREME_MOVES);
            }
        }

        // Consecutive unchanged prices; both observations must be present.
        let closes = series.closes();
        let flat = (1..closes.len())
            .filter(|&i| matches!((closes[i - 1], closes[i]), (Some(a), Some(b)) if a == b))
            .count();
        if flat as f64 > series.len() as f64 * FLAT_STEP_SHARE {
            anomalies.push(ANOMALY_FLAT_PERIODS);
        }

        anomalies
    }

    /// All-missing series or any non-positive price fails the quality check.
    fn data_quality_ok(series: &PriceSeries) -> bool {
        let mut any_present = false;
        for close in series.closes().iter().flatten() {
            any_present = true;
            if *close <= 0.0 {
                return false;
            }
        }
        any_present
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ronda_traits::types::Date;

    fn series(closes: &[Option<f64>]) -> PriceSeries {
        let start = Date::from_ymd_opt(2024, 1, 1).unwrap();
        let dates = (0..closes.len() as i64)
            .map(|n| start + chrono::Duration::days(n))
            .collect();
        PriceSeries::new(dates, closes.to_vec())
    }

    /// A well-behaved series: positive, gently trending, no flats or jumps.
    fn good_series(n: usize) -> PriceSeries {
        let closes: Vec<Option<f64>> = (0..n)
            .map(|i| Some(100.0 + i as f64 + if i % 2 == 0 { 0.25 } else { -0.25 }))
            .collect();
        series(&closes)
    }

    #[test]
    fn test_empty_series_rejected() {
        let verdict = DataValidator::default().validate(&series(&[]), "AAPL");
        assert!(!verdict.passed());
        assert!(verdict.reason().contains("no data"));
    }

    #[test]
    fn test_three_point_series_rejected() {
        let verdict = DataValidator::default().validate(&good_series(3), "AAPL");
        assert!(!verdict.passed());
        assert!(verdict.reason().contains("insufficient data points"));
        assert!(verdict.reason().contains('3'));
    }

    #[test]
    fn test_twenty_five_point_series_accepted() {
        let verdict = DataValidator::default().validate(&good_series(25), "AAPL");
        assert!(verdict.passed(), "rejected: {}", verdict.reason());
        assert_eq!(verdict.reason(), "Valid");
    }

    #[test]
    fn test_excessive_missing_values_rejected() {
        let mut closes: Vec<Option<f64>> = (0..30).map(|i| Some(100.0 + i as f64)).collect();
        for slot in closes.iter_mut().take(8) {
            *slot = None;
        }
        let verdict = DataValidator::default().validate(&series(&closes), "MSFT");
        assert!(!verdict.passed());
        assert!(verdict.reason().contains("too many missing values"));
    }

    #[test]
    fn test_non_positive_price_rejected() {
        let mut closes: Vec<Option<f64>> = (0..25).map(|i| Some(100.0 + i as f64)).collect();
        closes[10] = Some(-1.0);
        let verdict = DataValidator::default().validate(&series(&closes), "GOOG");
        assert!(!verdict.passed());
        assert_eq!(verdict.reason(), "poor data quality detected");
    }

    #[test]
    fn test_all_missing_rejected_as_poor_quality() {
        // Long enough to clear the length check, but every value missing
        // fails the missing-fraction check first.
        let closes = vec![None; 25];
        let verdict = DataValidator::default().validate(&series(&closes), "X");
        assert!(!verdict.passed());
    }

    #[test]
    fn test_detect_flat_periods() {
        let closes: Vec<Option<f64>> = vec![Some(100.0); 30];
        let anomalies = DataValidator::default().detect_anomalies(&series(&closes));
        assert!(anomalies.contains(&ANOMALY_FLAT_PERIODS));
    }

    #[test]
    fn test_detect_extreme_movements() {
        let mut closes: Vec<Option<f64>> = (0..40).map(|i| Some(100.0 + i as f64)).collect();
        closes[20] = Some(400.0); // > 50% jump and drop around it
        let anomalies = DataValidator::default().detect_anomalies(&series(&closes));
        assert!(anomalies.contains(&ANOMALY_EXTREME_MOVES));
    }

    #[test]
    fn test_clean_series_has_no_anomalies() {
        let anomalies = DataValidator::default().detect_anomalies(&good_series(40));
        assert!(anomalies.is_empty());
    }

    #[test]
    fn test_custom_minimum() {
        let validator = DataValidator::new(30);
        assert!(!validator.validate(&good_series(25), "AAPL").passed());
        assert!(validator.validate(&good_series(30), "AAPL").passed());
    }

    #[test]
    fn test_sanitize_ticker() {
        let validator = DataValidator::default();
        assert_eq!(validator.sanitize_ticker(" aapl "), "AAPL");
        assert_eq!(validator.sanitize_ticker("brk b"), "BRKB");
        assert_eq!(validator.sanitize_ticker("^gspc"), "^GSPC");
    }
}
