//! Error types for the client library.

use serde::Deserialize;
use thiserror::Error;

/// Error response from the API.
///
/// Wraps the detailed error information returned by the provider.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    /// The error detail object from the API.
    pub error: ErrorDetail,
}

/// Detailed error information from the API.
#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    /// The error message text describing what went wrong.
    pub message: String,
}

/// Errors that can occur when talking to the proofreading endpoint.
///
/// Every variant degrades to "buffer left unchanged" at the plugin layer;
/// nothing here is fatal.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ClientError {
    /// Network or HTTP request failure.
    ///
    /// Indicates issues like DNS resolution, connection failures, or socket
    /// errors.
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    /// JSON serialization or deserialization error.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// API authentication failure (HTTP 401).
    ///
    /// The API key is missing, invalid, or revoked. Check the authinfo entry.
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// Non-success HTTP status other than 401.
    #[error("Request error: {0}")]
    RequestError(String),

    /// Unexpected or malformed API response.
    ///
    /// The API returned data that doesn't match the documented shape, e.g.
    /// an empty `choices` array.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Client configuration issue.
    ///
    /// Invalid base URL or incompatible settings.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl ClientError {
    /// Check if this is an authentication error.
    #[must_use]
    pub const fn is_authentication_error(&self) -> bool {
        matches!(self, Self::AuthenticationError(_))
    }
}
