//! Client error types

use shared::validation::FieldErrors;
use thiserror::Error;

/// Client error type
///
/// Variants built from a server response carry the server's message, which
/// is meant to be shown to the user as-is.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Missing, invalid or expired token, or wrong credentials
    #[error("{0}")]
    Unauthorized(String),

    /// Permission denied
    #[error("{0}")]
    Forbidden(String),

    /// Resource not found (or not owned by the caller)
    #[error("{0}")]
    NotFound(String),

    /// Resource already exists
    #[error("{0}")]
    Conflict(String),

    /// Server-side validation failed
    #[error("{message}")]
    Validation { message: String, fields: FieldErrors },

    /// Too many requests
    #[error("{0}")]
    RateLimited(String),

    /// Internal error
    #[error("{0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Human-readable message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Per-field messages of a validation failure
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            ClientError::Validation { fields, .. } => Some(fields),
            _ => None,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
