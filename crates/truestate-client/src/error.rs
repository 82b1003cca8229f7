//! Error types for the sales API client.

use thiserror::Error;

/// Errors that can occur while fetching sales data.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ClientError {
    /// The request could not be sent or the connection failed.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status.
    #[error("sales request failed: {status} {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, possibly empty.
        body: String,
    },

    /// The response body was not JSON.
    #[error("could not decode sales response: {0}")]
    Decode(String),

    /// The configured base URL is not a valid absolute URL.
    #[error("invalid API base URL: {0}")]
    InvalidBaseUrl(String),
}

impl ClientError {
    /// Returns a user-friendly error message suitable for display.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::Network(_) => "Could not reach the sales API. Please check your connection.",
            Self::Status { status, .. } if *status >= 500 => {
                "The sales API is having trouble. Please try again."
            }
            Self::Status { .. } => "The sales API rejected the request.",
            Self::Decode(_) => "The sales API returned an unreadable response.",
            Self::InvalidBaseUrl(_) => "The sales API address is misconfigured.",
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
