//! Common types used throughout the ronda framework.
//!
//! This module defines the time-series types flowing through a screening
//! run: raw price series as supplied by a provider, fractional return
//! series derived from them, and timestamp-aligned return pairs ready for
//! metric calculation.

use serde::{Deserialize, Serialize};

// Re-export date type from chrono
pub use chrono::NaiveDate as Date;

/// A market symbol identifier.
///
/// Symbols identify instruments across the ronda framework, typically
/// ticker symbols like "AAPL" or index symbols like "^GSPC".
pub type Symbol = String;

/// An ordered daily closing-price series for a single instrument.
///
/// Timestamps are strictly increasing and prices are positive; a `None`
/// close marks a missing observation (a gap in the provider's data), which
/// is preserved here so the validator can measure data quality before the
/// gap rows are dropped during return computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    dates: Vec<Date>,
    closes: Vec<Option<f64>>,
}

impl PriceSeries {
    /// Creates a price series from parallel date and close vectors.
    ///
    /// The vectors are truncated to their common length; callers are
    /// expected to supply dates in strictly increasing order.
    #[must_use]
    pub fn new(mut dates: Vec<Date>, mut closes: Vec<Option<f64>>) -> Self {
        let len = dates.len().min(closes.len());
        dates.truncate(len);
        closes.truncate(len);
        Self { dates, closes }
    }

    /// Number of observations, including missing ones.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns whether the series holds no observations.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// The observation dates.
    #[must_use]
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// The closing prices, `None` where the observation is missing.
    #[must_use]
    pub fn closes(&self) -> &[Option<f64>] {
        &self.closes
    }

    /// Number of missing observations.
    #[must_use]
    pub fn missing_count(&self) -> usize {
        self.closes.iter().filter(|c| c.is_none()).count()
    }

    /// Fraction of observations that are missing, in `[0, 1]`.
    ///
    /// Returns `0.0` for an empty series.
    #[must_use]
    pub fn missing_fraction(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        self.missing_count() as f64 / self.len() as f64
    }

    /// Derives the fractional return series by pairwise relative change.
    ///
    /// A return is emitted only where two consecutive observations are both
    /// present and the earlier one is non-zero; rows adjacent to a gap are
    /// dropped, not bridged. The result is stamped with the later date of
    /// each pair and is at most one element shorter than the source.
    #[must_use]
    pub fn returns(&self) -> ReturnSeries {
        let mut dates = Vec::new();
        let mut values = Vec::new();
        for i in 1..self.len() {
            if let (Some(prev), Some(cur)) = (self.closes[i - 1], self.closes[i]) {
                if prev != 0.0 {
                    dates.push(self.dates[i]);
                    values.push(cur / prev - 1.0);
                }
            }
        }
        ReturnSeries { dates, values }
    }
}

/// An ordered fractional-return series derived from a [`PriceSeries`].
///
/// Every value is defined; rows whose underlying price was missing are not
/// represented.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnSeries {
    dates: Vec<Date>,
    values: Vec<f64>,
}

impl ReturnSeries {
    /// Creates a return series from parallel date and value vectors.
    #[must_use]
    pub fn new(mut dates: Vec<Date>, mut values: Vec<f64>) -> Self {
        let len = dates.len().min(values.len());
        dates.truncate(len);
        values.truncate(len);
        Self { dates, values }
    }

    /// Number of return observations.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns whether the series holds no observations.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// The observation dates.
    #[must_use]
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// The fractional returns.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Restricts this series and `benchmark` to the intersection of their
    /// timestamps, preserving order.
    ///
    /// Both inputs are expected to carry strictly increasing dates; the
    /// intersection is computed with a linear two-pointer merge. The result
    /// holds identical dates on both sides by construction.
    #[must_use]
    pub fn align(&self, benchmark: &Self) -> AlignedReturns {
        let mut dates = Vec::new();
        let mut instrument = Vec::new();
        let mut bench = Vec::new();

        let (mut i, mut j) = (0, 0);
        while i < self.len() && j < benchmark.len() {
            match self.dates[i].cmp(&benchmark.dates[j]) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    dates.push(self.dates[i]);
                    instrument.push(self.values[i]);
                    bench.push(benchmark.values[j]);
                    i += 1;
                    j += 1;
                }
            }
        }

        AlignedReturns {
            dates,
            instrument,
            benchmark: bench,
        }
    }
}

/// A pair of return series restricted to their common timestamps.
///
/// Invariant: both sides have identical length and identical date sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedReturns {
    dates: Vec<Date>,
    instrument: Vec<f64>,
    benchmark: Vec<f64>,
}

impl AlignedReturns {
    /// Number of aligned observations.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns whether the pair holds no observations.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// The common observation dates.
    #[must_use]
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Instrument returns.
    #[must_use]
    pub fn instrument(&self) -> &[f64] {
        &self.instrument
    }

    /// Benchmark returns.
    #[must_use]
    pub fn benchmark(&self) -> &[f64] {
        &self.benchmark
    }

    /// Returns the trailing `n`-observation suffix of the pair.
    ///
    /// Returns the pair unchanged when it is already `n` observations or
    /// shorter.
    #[must_use]
    pub fn tail(&self, n: usize) -> Self {
        let skip = self.len().saturating_sub(n);
        Self {
            dates: self.dates[skip..].to_vec(),
            instrument: self.instrument[skip..].to_vec(),
            benchmark: self.benchmark[skip..].to_vec(),
        }
    }
}

/// Outcome of validating a raw price series before metric calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationVerdict {
    passed: bool,
    reason: String,
}

impl ValidationVerdict {
    /// A passing verdict.
    #[must_use]
    pub fn valid() -> Self {
        Self {
            passed: true,
            reason: "Valid".to_string(),
        }
    }

    /// A failing verdict with a human-readable reason.
    #[must_use]
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self {
            passed: false,
            reason: reason.into(),
        }
    }

    /// Whether the series passed validation.
    #[must_use]
    pub const fn passed(&self) -> bool {
        self.passed
    }

    /// Human-readable reason; `"Valid"` for a passing verdict.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn day(n: u32) -> Date {
        Date::from_ymd_opt(2024, 1, 1).unwrap() + chrono::Duration::days(i64::from(n))
    }

    fn series(closes: &[Option<f64>]) -> PriceSeries {
        let dates = (0..closes.len() as u32).map(day).collect();
        PriceSeries::new(dates, closes.to_vec())
    }

    #[test]
    fn test_price_series_truncates_to_common_length() {
        let s = PriceSeries::new(vec![day(0), day(1)], vec![Some(1.0)]);
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn test_missing_fraction() {
        let s = series(&[Some(1.0), None, Some(1.1), None]);
        assert_eq!(s.missing_count(), 2);
        assert_relative_eq!(s.missing_fraction(), 0.5);

        let empty = PriceSeries::new(vec![], vec![]);
        assert_relative_eq!(empty.missing_fraction(), 0.0);
    }

    #[test]
    fn test_returns_pairwise_change() {
        let s = series(&[Some(100.0), Some(110.0), Some(99.0)]);
        let r = s.returns();
        assert_eq!(r.len(), 2);
        assert_eq!(r.dates(), &[day(1), day(2)]);
        assert_relative_eq!(r.values()[0], 0.10, epsilon = 1e-12);
        assert_relative_eq!(r.values()[1], -0.10, epsilon = 1e-12);
    }

    #[test]
    fn test_returns_drop_rows_adjacent_to_gaps() {
        // A gap at index 2 removes both the return into and out of it.
        let s = series(&[Some(100.0), Some(101.0), None, Some(103.0), Some(104.0)]);
        let r = s.returns();
        assert_eq!(r.len(), 2);
        assert_eq!(r.dates(), &[day(1), day(4)]);
    }

    #[test]
    fn test_returns_empty_and_single() {
        assert!(series(&[]).returns().is_empty());
        assert!(series(&[Some(100.0)]).returns().is_empty());
    }

    #[test]
    fn test_align_intersection() {
        let a = ReturnSeries::new(vec![day(1), day(2), day(4)], vec![0.01, 0.02, 0.04]);
        let b = ReturnSeries::new(vec![day(2), day(3), day(4)], vec![0.2, 0.3, 0.4]);
        let aligned = a.align(&b);

        assert_eq!(aligned.len(), 2);
        assert_eq!(aligned.dates(), &[day(2), day(4)]);
        assert_eq!(aligned.instrument(), &[0.02, 0.04]);
        assert_eq!(aligned.benchmark(), &[0.2, 0.4]);
    }

    #[test]
    fn test_align_disjoint() {
        let a = ReturnSeries::new(vec![day(1)], vec![0.01]);
        let b = ReturnSeries::new(vec![day(2)], vec![0.02]);
        assert!(a.align(&b).is_empty());
    }

    #[test]
    fn test_tail() {
        let a = ReturnSeries::new(vec![day(1), day(2), day(3)], vec![0.1, 0.2, 0.3]);
        let b = ReturnSeries::new(vec![day(1), day(2), day(3)], vec![0.4, 0.5, 0.6]);
        let aligned = a.align(&b);

        let tail = aligned.tail(2);
        assert_eq!(tail.dates(), &[day(2), day(3)]);
        assert_eq!(tail.instrument(), &[0.2, 0.3]);
        assert_eq!(tail.benchmark(), &[0.5, 0.6]);

        // Requesting more than available returns the whole pair.
        assert_eq!(aligned.tail(10).len(), 3);
    }

    #[test]
    fn test_validation_verdict() {
        let ok = ValidationVerdict::valid();
        assert!(ok.passed());
        assert_eq!(ok.reason(), "Valid");

        let bad = ValidationVerdict::invalid("no data for AAPL");
        assert!(!bad.passed());
        assert_eq!(bad.reason(), "no data for AAPL");
    }

    #[test]
    fn test_price_series_serde_round_trip() {
        let s = series(&[Some(100.0), None, Some(102.0)]);
        let json = serde_json::to_string(&s).unwrap();
        let back: PriceSeries = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }
}
