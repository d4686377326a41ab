//! Configuration for metric calculation.

use serde::{Deserialize, Serialize};

/// Configuration shared by the metric calculators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsConfig {
    /// Annual risk-free rate as a fraction (0.03 for 3%).
    pub risk_free_rate: f64,
    /// Number of trading days per year for annualization and for converting
    /// the annual risk-free rate to a per-period rate.
    pub trading_days_per_year: usize,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            risk_free_rate: 0.03,
            trading_days_per_year: 252,
        }
    }
}

impl MetricsConfig {
    /// The risk-free rate per trading period.
    #[must_use]
    pub fn per_period_rate(&self) -> f64 {
        self.risk_free_rate / self.trading_days_per_year as f64
    }

    /// Annualization factor for volatility-scaled ratios.
    #[must_use]
    pub fn annualization_factor(&self) -> f64 {
        (self.trading_days_per_year as f64).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default() {
        let config = MetricsConfig::default();
        assert_relative_eq!(config.risk_free_rate, 0.03);
        assert_eq!(config.trading_days_per_year, 252);
    }

    #[test]
    fn test_per_period_rate() {
        let config = MetricsConfig::default();
        assert_relative_eq!(config.per_period_rate(), 0.03 / 252.0);
    }

    #[test]
    fn test_annualization_factor() {
        let config = MetricsConfig::default();
        assert_relative_eq!(config.annualization_factor(), 252.0f64.sqrt());
    }
}
