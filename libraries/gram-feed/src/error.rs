//! Error types for the feed client.

use thiserror::Error;

/// Errors that can occur when fetching the posts feed.
#[derive(Error, Debug)]
pub enum FeedError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Feed endpoint answered with a non-success status.
    ///
    /// The display text is the message the original viewer raised for any
    /// non-OK response; the actual status is kept for diagnostics.
    #[error("Network Sending Response not Found")]
    BadStatus {
        /// HTTP status code of the response
        status: u16,
    },

    /// Feed host is offline or unreachable
    #[error("Feed unreachable: {0}")]
    Unreachable(String),

    /// Failed to parse the response body
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Invalid feed base URL
    #[error("Invalid feed URL: {0}")]
    InvalidUrl(String),

    /// Fetch was cancelled before completing
    #[error("Fetch cancelled")]
    Cancelled,
}

/// Result type for feed operations.
pub type Result<T> = std::result::Result<T, FeedError>;
