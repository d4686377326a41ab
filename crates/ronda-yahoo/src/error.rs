//! Error types for the Yahoo Finance client.

use thiserror::Error;

/// Errors that can occur when fetching from the Yahoo Finance chart API.
#[derive(Debug, Error)]
pub enum YahooError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("Failed to parse JSON response: {0}")]
    Json(#[from] serde_json::Error),

    /// API returned an error.
    #[error("Yahoo Finance API error: {0}")]
    Api(String),

    /// Rate limit exceeded.
    #[error("Rate limit exceeded by Yahoo Finance")]
    RateLimitExceeded,

    /// No usable data in the response.
    #[error("No data available for {0}")]
    NoData(String),

    /// Cache file I/O failed.
    #[error("Cache I/O error: {0}")]
    Io(#[from] std::io::Error),
}
