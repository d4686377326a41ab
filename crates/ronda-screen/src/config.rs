//! Screener configuration.
//!
//! Loaded from an optional TOML file; every field has a default so the
//! screener works without any configuration present.

use ronda_traits::{Result, RondaError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::validate::DEFAULT_MIN_DATA_POINTS;

/// Configuration for a screening run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenerConfig {
    /// Number of trailing aligned return observations per metric window.
    #[serde(default = "default_lookback")]
    pub default_lookback: usize,

    /// Annual risk-free rate as a fraction.
    #[serde(default = "default_risk_free_rate")]
    pub risk_free_rate: f64,

    /// Minimum number of price observations a series must hold.
    ///
    /// Defaults to [`DEFAULT_MIN_DATA_POINTS`], the validator's canonical
    /// threshold.
    #[serde(default = "default_min_data_points")]
    pub min_data_points: usize,

    /// Benchmark catalogue: display name to index symbol.
    #[serde(default = "default_benchmarks")]
    pub benchmarks: BTreeMap<String, String>,

    /// Instruments screened when the caller supplies none.
    #[serde(default = "default_instruments")]
    pub default_instruments: Vec<String>,
}

fn default_lookback() -> usize {
    60
}

fn default_risk_free_rate() -> f64 {
    0.03
}

fn default_min_data_points() -> usize {
    DEFAULT_MIN_DATA_POINTS
}

fn default_benchmarks() -> BTreeMap<String, String> {
    [
        ("S&P 500", "^GSPC"),
        ("Nasdaq 100", "^NDX"),
        ("Nasdaq 100 Technology", "^NDXT"),
        ("Dow Jones", "^DJI"),
        ("Russell 2000", "^RUT"),
    ]
    .into_iter()
    .map(|(name, symbol)| (name.to_string(), symbol.to_string()))
    .collect()
}

fn default_instruments() -> Vec<String> {
    ["AAPL", "MSFT", "GOOGL", "AMZN", "META"]
        .into_iter()
        .map(str::to_string)
        .collect()
}

impl Default for ScreenerConfig {
    fn default() -> Self {
        Self {
            default_lookback: default_lookback(),
            risk_free_rate: default_risk_free_rate(),
            min_data_points: default_min_data_points(),
            benchmarks: default_benchmarks(),
            default_instruments: default_instruments(),
        }
    }
}

impl ScreenerConfig {
    /// Loads configuration from a TOML file.
    ///
    /// With an explicit `path` the file must exist; with `None`, a
    /// `ronda.toml` in the working directory is used when present and the
    /// defaults otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`RondaError::Config`] when the file is missing (explicit
    /// path only), unreadable, or does not deserialize.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let source = match path {
            Some(p) => config::File::with_name(p).required(true),
            None => config::File::with_name("ronda").required(false),
        };
        let settings = config::Config::builder()
            .add_source(source)
            .build()
            .map_err(|e| RondaError::Config(e.to_string()))?;
        settings
            .try_deserialize()
            .map_err(|e| RondaError::Config(e.to_string()))
    }

    /// Resolves a benchmark display name to its symbol.
    ///
    /// Unrecognized names pass through unchanged so callers can supply raw
    /// symbols directly.
    #[must_use]
    pub fn resolve_benchmark(&self, name_or_symbol: &str) -> String {
        self.benchmarks
            .get(name_or_symbol)
            .cloned()
            .unwrap_or_else(|| name_or_symbol.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_defaults() {
        let config = ScreenerConfig::default();
        assert_eq!(config.default_lookback, 60);
        assert_relative_eq!(config.risk_free_rate, 0.03);
        assert_eq!(config.min_data_points, DEFAULT_MIN_DATA_POINTS);
        assert_eq!(config.benchmarks.len(), 5);
        assert_eq!(config.default_instruments.len(), 5);
    }

    #[test]
    fn test_resolve_benchmark() {
        let config = ScreenerConfig::default();
        assert_eq!(config.resolve_benchmark("S&P 500"), "^GSPC");
        assert_eq!(config.resolve_benchmark("Russell 2000"), "^RUT");
        // Raw symbols pass through.
        assert_eq!(config.resolve_benchmark("^FTSE"), "^FTSE");
    }

    #[test]
    fn test_load_missing_explicit_path_fails() {
        let result = ScreenerConfig::load(Some("/nonexistent/ronda"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = std::env::temp_dir().join("ronda-config-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("screener.toml");
        std::fs::write(
            &path,
            "default_lookback = 90\nrisk_free_rate = 0.05\n\n[benchmarks]\n\"FTSE 100\" = \"^FTSE\"\n",
        )
        .unwrap();

        // `config::File::with_name` resolves the extension itself.
        let name = dir.join("screener");
        let config = ScreenerConfig::load(name.to_str()).unwrap();
        assert_eq!(config.default_lookback, 90);
        assert_relative_eq!(config.risk_free_rate, 0.05);
        // Unspecified fields fall back to defaults.
        assert_eq!(config.min_data_points, DEFAULT_MIN_DATA_POINTS);
        assert_eq!(config.resolve_benchmark("FTSE 100"), "^FTSE");
    }

    #[test]
    fn test_serde_round_trip() {
        let config = ScreenerConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: ScreenerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.default_lookback, config.default_lookback);
        assert_eq!(back.benchmarks, config.benchmarks);
    }
}
