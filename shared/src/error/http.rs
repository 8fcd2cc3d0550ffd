//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,

            Self::ListNotFound | Self::GameNotFound | Self::UserNotFound => StatusCode::NOT_FOUND,

            Self::EmailAlreadyRegistered => StatusCode::CONFLICT,

            Self::NotAuthenticated
            | Self::InvalidCredentials
            | Self::TokenExpired
            | Self::TokenInvalid => StatusCode::UNAUTHORIZED,

            Self::TooManyRequests => StatusCode::TOO_MANY_REQUESTS,

            Self::ReorderFailed | Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,

            // Validation and malformed input
            _ => StatusCode::BAD_REQUEST,
        }
    }
}
