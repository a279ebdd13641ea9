//! Error types for the search pipeline.

use thiserror::Error;

/// Errors surfaced to the user by library operations.
///
/// Every variant is fatal for the current invocation. Empty results and the
/// known backend quirks are not errors and never reach this type.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Invalid invocation detected before any network call.
    #[error("{0}")]
    UsageError(String),

    /// Request failed for a reason other than the known empty-result quirks.
    #[error("Search failed: {0}")]
    TransportError(String),

    /// Successful response whose agent records could not be decoded.
    #[error("Search failed: invalid agent record: {0}")]
    ResponseError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Failed to write output: {0}")]
    OutputError(String),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
