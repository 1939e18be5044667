//! Error types for catalog requests.
//!
//! Screens collapse every variant into one user-visible message; the
//! variant only matters for logging.

use thiserror::Error;

/// Errors that can occur while talking to the catalog API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Base URL or a derived request URL could not be built
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Failed to reach the catalog server
    #[error("Connection to '{url}' failed: {source}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Request exceeded the configured timeout
    #[error("Request to '{url}' timed out")]
    Timeout { url: String },

    /// Catalog returned a non-success status
    #[error("Catalog returned {status} for '{url}'")]
    Status { status: u16, url: String },

    /// Response body did not have the expected shape
    #[error("Unexpected response from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl ApiError {
    pub(crate) fn from_send(url: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout {
                url: url.to_string(),
            }
        } else {
            ApiError::Connection {
                url: url.to_string(),
                source: err,
            }
        }
    }

    pub(crate) fn from_body(url: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout {
                url: url.to_string(),
            }
        } else {
            ApiError::Decode {
                url: url.to_string(),
                source: err,
            }
        }
    }

    /// Short machine-friendly tag for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Client(_) => "client",
            ApiError::InvalidUrl { .. } => "invalid_url",
            ApiError::Connection { .. } => "connection",
            ApiError::Timeout { .. } => "timeout",
            ApiError::Status { .. } => "status",
            ApiError::Decode { .. } => "decode",
        }
    }

    /// True when the catalog answered 404.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status: 404, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_kind_and_message() {
        let err = ApiError::Status {
            status: 503,
            url: "https://dummyjson.com/products".to_string(),
        };
        assert_eq!(err.kind(), "status");
        assert_eq!(
            err.to_string(),
            "Catalog returned 503 for 'https://dummyjson.com/products'"
        );
        assert!(!err.is_not_found());
    }

    #[test]
    fn not_found_is_detected() {
        let err = ApiError::Status {
            status: 404,
            url: "https://dummyjson.com/products/9999".to_string(),
        };
        assert!(err.is_not_found());
    }
}
