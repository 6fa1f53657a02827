//! Error types for the price-feed client.

use thiserror::Error;

/// Errors that can occur when talking to the price-data service.
#[derive(Debug, Error)]
pub enum FeedError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("Failed to parse JSON response: {0}")]
    Json(#[from] serde_json::Error),

    /// The service returned a non-success status.
    #[error("Price API error: {0}")]
    Api(String),
}
