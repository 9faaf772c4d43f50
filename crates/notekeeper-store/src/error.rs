//! Error types for the storage layer.

use thiserror::Error;
use uuid::Uuid;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database connection or query error.
    #[error("database connection error: {0}")]
    Connection(#[from] sqlx::Error),

    /// User not found.
    #[error("user not found: {0}")]
    UserNotFound(Uuid),

    /// Another account already uses this email address.
    #[error("email already registered: {0}")]
    DuplicateEmail(String),

    /// Migration error.
    #[error("migration error: {0}")]
    MigrationError(String),
}

impl StoreError {
    /// Whether this error reports a missing record rather than a failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UserNotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_classification() {
        assert!(StoreError::UserNotFound(Uuid::nil()).is_not_found());
        assert!(!StoreError::DuplicateEmail("a@x.com".into()).is_not_found());
        assert!(!StoreError::MigrationError("boom".into()).is_not_found());
    }
}
