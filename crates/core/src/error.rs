//! Error types for the search client and input parsing.

use thiserror::Error;

/// Errors that can occur while fetching one page from the search API.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network-level error during HTTP communication.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Request did not complete within the configured timeout.
    #[error("Request timed out")]
    Timeout,

    /// The API answered with a non-success status.
    #[error("Search API error: {status} - {message}")]
    Status { status: u16, message: String },

    /// Body was not a JSON object of the expected shape.
    #[error("Invalid response from search API: {0}")]
    InvalidResponse(String),

    /// Configured endpoint is not an absolute URL.
    #[error("Invalid endpoint '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },
}

/// A tag string outside the closed set accepted by the API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown tag '{0}' (expected one of: story, ask_hn, show_hn, poll)")]
pub struct UnknownTag(pub String);
