//! Client error types

use thiserror::Error;

/// Client error type
///
/// `Transport` failures are retryable by re-issuing the identical request;
/// `AuthExpired` means the stored credential was cleared and the user must
/// authenticate again.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or protocol failure
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// No session established
    #[error("Not authenticated")]
    NotAuthenticated,

    /// Server rejected the credential (401); session state has been cleared
    #[error("Session expired")]
    AuthExpired,

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error (bad input, operation not attempted)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Structured error reported by the server
    #[error("API error {code}: {message}")]
    Api { code: u16, message: String },

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
