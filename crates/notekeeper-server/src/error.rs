//! API error types rendered as JSON envelopes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use notekeeper_store::StoreError;

use crate::envelope::Envelope;

/// Message returned for every 5xx; the cause goes to the log only.
pub const INTERNAL_MESSAGE: &str = "Internal Server Error";

/// API error that can be returned from handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Missing or malformed input (400).
    #[error("validation failed: {0}")]
    Validation(String),

    /// No usable credentials, or the token's user is gone (401).
    #[error("unauthenticated: {0}")]
    Unauthenticated(String),

    /// Credentials presented but rejected, e.g. a wrong password (401).
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Token present but invalid or expired (403).
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// No matching entity owned by the caller (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Duplicate resource (409).
    #[error("conflict: {0}")]
    Conflict(String),

    /// Internal server error (500).
    #[error("internal error: {0}")]
    Internal(String),

    /// Store error.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}

impl ApiError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Unauthenticated(_) | Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Store(e) => match e {
                e if e.is_not_found() => StatusCode::NOT_FOUND,
                StoreError::DuplicateEmail(_) => StatusCode::CONFLICT,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    /// The message placed in the response envelope.
    pub fn message(&self) -> String {
        match self {
            Self::Validation(m)
            | Self::Unauthenticated(m)
            | Self::Unauthorized(m)
            | Self::Forbidden(m)
            | Self::NotFound(m)
            | Self::Conflict(m) => m.clone(),
            Self::Store(StoreError::DuplicateEmail(_)) => "User already exists".to_string(),
            Self::Store(StoreError::UserNotFound(_)) => "User not found".to_string(),
            Self::Internal(_) | Self::Store(_) => INTERNAL_MESSAGE.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        (status, Envelope::failure(self.message())).into_response()
    }
}

/// Result type for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::Validation("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Unauthenticated("x".into()).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::Forbidden("x".into()).status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ApiError::Store(StoreError::DuplicateEmail("a@x.com".into())).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::Store(StoreError::UserNotFound(Uuid::nil())).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Store(StoreError::MigrationError("x".into())).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_details_are_hidden() {
        let err = ApiError::Internal("pool exhausted at 10.0.0.3".into());
        assert_eq!(err.message(), INTERNAL_MESSAGE);

        let err = ApiError::Store(StoreError::MigrationError("relation exists".into()));
        assert_eq!(err.message(), INTERNAL_MESSAGE);
    }

    #[test]
    fn test_client_errors_keep_message() {
        let err = ApiError::NotFound("Note not found".into());
        assert_eq!(err.message(), "Note not found");
    }
}
