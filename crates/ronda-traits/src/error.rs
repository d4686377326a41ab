//! Error types for the ronda framework.
//!
//! Only two error cases interrupt a screening run: malformed caller input
//! (an inverted date range) and an unreachable benchmark. Everything else is
//! absorbed into the data as skipped instruments or undefined metric values.

use crate::types::Date;
use thiserror::Error;

/// The main error type for ronda operations.
#[derive(Debug, Error)]
pub enum RondaError {
    /// Malformed caller input: the start date is not before the end date.
    #[error("start date {start} must be before end date {end}")]
    InvalidDateRange {
        /// Requested window start.
        start: Date,
        /// Requested window end.
        end: Date,
    },

    /// The benchmark series could not be fetched; the whole run is aborted.
    #[error("cannot fetch benchmark data for {0}")]
    BenchmarkUnavailable(String),

    /// Error due to invalid or malformed data.
    #[error("invalid data: {0}")]
    InvalidData(String),

    /// Error when data is insufficient for the requested operation.
    #[error("insufficient data: {0}")]
    InsufficientData(String),

    /// Error loading or parsing configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// Generic error for other cases.
    #[error("error: {0}")]
    Other(String),
}

impl From<String> for RondaError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for RondaError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

/// A specialized Result type for ronda operations.
pub type Result<T> = std::result::Result<T, RondaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let start = Date::from_ymd_opt(2024, 6, 1).unwrap();
        let end = Date::from_ymd_opt(2024, 1, 1).unwrap();
        let err = RondaError::InvalidDateRange { start, end };
        assert_eq!(
            err.to_string(),
            "start date 2024-06-01 must be before end date 2024-01-01"
        );

        let err = RondaError::BenchmarkUnavailable("^GSPC".to_string());
        assert_eq!(err.to_string(), "cannot fetch benchmark data for ^GSPC");
    }

    #[test]
    fn test_error_from_string() {
        let err: RondaError = "fetch failed".into();
        assert!(matches!(err, RondaError::Other(_)));
    }

    #[test]
    fn test_result_type() {
        let ok_result: Result<i32> = Ok(42);
        assert!(ok_result.is_ok());

        let err_result: Result<i32> = Err(RondaError::InvalidData("bad".to_string()));
        assert!(err_result.is_err());
    }
}
