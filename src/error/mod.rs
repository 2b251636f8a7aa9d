//! Error types for the utility collection
//!
//! Two failure policies coexist deliberately in this crate and are documented
//! per function family:
//!
//! - Pure transformations (string helpers, combinatorics, validity checks)
//!   use sentinel returns (`0`, `false`, `None`) for domain-invalid input and
//!   never construct an error.
//! - Side-effecting operations (HTTP requests, downloads) return
//!   [`Result`] and carry a human-readable description of what failed.

use thiserror::Error;

/// Main error type for the utility collection
#[derive(Error, Debug, Clone)]
pub enum UtilsError {
    /// HTTP request completed with a non-success status
    #[error("Request failed with code {status} ({status_text})")]
    RequestFailed {
        /// HTTP status code
        status: u16,
        /// Canonical status text, e.g. "Not Found"
        status_text: String,
    },

    /// HTTP request did not complete within the allotted time
    #[error("Request to {url} timed out after {timeout_ms}ms")]
    Timeout {
        /// The URL that was being fetched
        url: String,
        /// The timeout that elapsed, in milliseconds
        timeout_ms: u64,
    },

    /// Network communication error (DNS, connection, TLS, body transfer)
    #[error("Network error: {0}")]
    Network(String),

    /// A URL could not be parsed
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic I/O error
    #[error("I/O error: {0}")]
    Io(String),

    /// An argument had the wrong shape for the requested operation
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Custom error with message
    #[error("{0}")]
    Custom(String),
}

/// Type alias for Results using UtilsError
pub type Result<T> = std::result::Result<T, UtilsError>;

impl UtilsError {
    /// Create a custom error with a message
    pub fn custom<S: Into<String>>(msg: S) -> Self {
        UtilsError::Custom(msg.into())
    }

    /// Check if this error is a network-related error
    pub fn is_network_error(&self) -> bool {
        matches!(
            self,
            UtilsError::Network(_) | UtilsError::RequestFailed { .. } | UtilsError::Timeout { .. }
        )
    }

    /// Check if this error is a timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, UtilsError::Timeout { .. })
    }
}

impl From<reqwest::Error> for UtilsError {
    fn from(error: reqwest::Error) -> Self {
        UtilsError::Network(error.to_string())
    }
}

impl From<serde_json::Error> for UtilsError {
    fn from(error: serde_json::Error) -> Self {
        UtilsError::Serialization(error.to_string())
    }
}

impl From<std::io::Error> for UtilsError {
    fn from(error: std::io::Error) -> Self {
        UtilsError::Io(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = UtilsError::RequestFailed {
            status: 404,
            status_text: "Not Found".to_string(),
        };
        assert_eq!(err.to_string(), "Request failed with code 404 (Not Found)");

        let err = UtilsError::Timeout {
            url: "https://example.com".to_string(),
            timeout_ms: 3000,
        };
        assert_eq!(
            err.to_string(),
            "Request to https://example.com timed out after 3000ms"
        );

        let err = UtilsError::custom("Custom error message");
        assert_eq!(err.to_string(), "Custom error message");
    }

    #[test]
    fn test_error_categories() {
        assert!(UtilsError::Network("refused".to_string()).is_network_error());
        assert!(UtilsError::Timeout {
            url: "https://example.com".to_string(),
            timeout_ms: 10,
        }
        .is_timeout());
        assert!(!UtilsError::Io("disk full".to_string()).is_network_error());
    }
}
