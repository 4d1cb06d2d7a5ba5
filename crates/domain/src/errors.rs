//! Error types for Model Hub client operations

use thiserror::Error;

/// Top-level error type shared by all client crates
#[derive(Debug, Error)]
pub enum ModelHubError {
    /// A required configuration value is missing. Fatal at startup, never
    /// retried at runtime.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Interactive sign-in failed or was cancelled. The authorization
    /// service stays Unauthenticated so a later call can retry.
    #[error("Authorization error: {0}")]
    Auth(String),

    /// A non-2xx HTTP response. Displays as the bare numeric status code;
    /// the response body is not parsed on failure. No 4xx/5xx distinction
    /// is made, a documented simplification of this client.
    #[error("{0}")]
    HttpStatus(u16),

    /// Transport-level failure (connect, TLS, timeout).
    #[error("Network error: {0}")]
    Network(String),

    /// A response that could not be deserialized, or another client bug.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for Model Hub operations
pub type Result<T> = std::result::Result<T, ModelHubError>;
