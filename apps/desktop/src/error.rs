//! # Error Types
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ValidationError ──► CoreError ──┐                                      │
//! │                                  ├──► ApiError ──► status line + log    │
//! │  sqlx::Error ──► DbError ────────┘                                      │
//! │                                                                         │
//! │  io::Error / DbError at startup ──► AppError ──► process exit           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Command failures never end the event loop: they become an `ApiError` that
//! the window shows and the log records. Only terminal failures and startup
//! failures surface as `AppError`.

use thiserror::Error;

use inventory_core::{CoreError, ValidationError};
use inventory_db::DbError;

/// Error returned from command handlers.
#[derive(Debug, Clone)]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Form input could not be coerced
    ValidationError,

    /// Database operation failed
    DatabaseError,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    pub fn is_validation(&self) -> bool {
        self.code == ErrorCode::ValidationError
    }
}

/// Converts database errors to API errors.
impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::ConnectionFailed(e) => {
                tracing::error!("Database connection failed: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database connection failed")
            }
            DbError::SchemaFailed(e) => {
                tracing::error!("Schema setup failed: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database schema setup failed")
            }
            DbError::QueryFailed(e) => {
                tracing::error!("Database query failed: {}", e);
                ApiError::new(
                    ErrorCode::DatabaseError,
                    format!("Database operation failed: {}", e),
                )
            }
            DbError::PoolExhausted => {
                ApiError::new(ErrorCode::DatabaseError, "Database is busy, try again")
            }
            DbError::Internal(e) => {
                tracing::error!("Internal database error: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
        }
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::from(CoreError::from(err))
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Result type for command handlers.
pub type ApiResult<T> = Result<T, ApiError>;

// =============================================================================
// Application Error
// =============================================================================

/// Failures that end the process.
#[derive(Debug, Error)]
pub enum AppError {
    /// Terminal setup, drawing or input failed.
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The database could not be opened.
    #[error("Database unavailable: {0}")]
    Database(#[from] DbError),

    /// The log file or subscriber could not be set up.
    #[error("Logging setup failed: {0}")]
    Logging(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_validation_code() {
        let err: ApiError = ValidationError::InvalidFormat {
            field: "quantity".to_string(),
            reason: "'x' is not a whole number".to_string(),
        }
        .into();

        assert!(err.is_validation());
        assert_eq!(
            err.message,
            "quantity has invalid format: 'x' is not a whole number"
        );
    }

    #[test]
    fn test_db_error_maps_to_database_code() {
        let err: ApiError = DbError::QueryFailed("disk I/O error".to_string()).into();

        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert!(err.message.contains("disk I/O error"));
    }

    #[test]
    fn test_display_includes_code() {
        let err = ApiError::validation("boom");
        assert_eq!(err.to_string(), "[ValidationError] boom");
    }
}
