//! Error types for the listing sources.

use thiserror::Error;

/// Errors that can occur while fetching listings.
///
/// None of these are retried: any of them aborts the survey.
#[derive(Error, Debug)]
pub enum SourceError {
    /// API answered with a non-success status
    #[error("API error ({source_id}): status {status}, {message}")]
    ApiError {
        /// Source name
        source_id: String,
        /// HTTP status code
        status: u16,
        /// Response body or reason
        message: String,
    },

    /// Response body did not have the expected shape
    #[error("failed to parse response from {source_id}: {message}")]
    ParseError {
        /// Source name
        source_id: String,
        /// Error message
        message: String,
    },

    /// Network error
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Internal error
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type alias for source operations.
pub type Result<T> = std::result::Result<T, SourceError>;
