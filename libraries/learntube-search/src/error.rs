//! Error types for video search.

use thiserror::Error;

/// Errors that can occur when searching for videos.
#[derive(Error, Debug)]
pub enum SearchError {
    /// Query was empty after trimming
    #[error("Search query cannot be empty")]
    EmptyQuery,

    /// No API key configured
    #[error("YouTube API key is not configured")]
    MissingApiKey,

    /// Invalid base URL in configuration
    #[error("Invalid search URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// API returned an error response
    #[error("YouTube API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Failed to parse API response
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

/// Result type for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;
