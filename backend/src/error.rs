//! Error handling for the household inventory server
//!
//! Every failure reaches the client as `{"error": {"code", "message", "field"?}}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Authentication errors
    #[error("Invalid password")]
    InvalidCredentials,

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    // Validation errors
    #[error("Validation error: {message}")]
    Validation { field: String, message: String },

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Duplicate entry: {0}")]
    DuplicateEntry(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Invalid backup file: {0}")]
    InvalidBackup(String),

    #[error("Backups unavailable: {0}")]
    BackupUnavailable(String),

    // Database errors
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Internal errors
    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Internal server error")]
    InternalError(#[from] anyhow::Error),
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ErrorDetail {
    pub fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            field: None,
        }
    }
}

impl AppError {
    /// Shorthand for a field-level validation failure
    pub fn invalid(field: &str, message: impl Into<String>) -> Self {
        AppError::Validation {
            field: field.to_string(),
            message: message.into(),
        }
    }

    /// Turn a unique-constraint violation into `DuplicateEntry`, pass other errors through
    pub fn on_duplicate(err: sqlx::Error, field: &str) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AppError::DuplicateEntry(field.to_string())
            }
            _ => AppError::DatabaseError(err),
        }
    }

    /// Turn a foreign-key violation into `NotFound` for the missing parent row
    pub fn on_missing(err: sqlx::Error, resource: &str) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
                AppError::NotFound(resource.to_string())
            }
            _ => AppError::DatabaseError(err),
        }
    }

    fn status_and_detail(&self) -> (StatusCode, ErrorDetail) {
        match self {
            AppError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                ErrorDetail::new("INVALID_CREDENTIALS", "Invalid password"),
            ),
            AppError::Unauthorized(message) => (
                StatusCode::UNAUTHORIZED,
                ErrorDetail::new("UNAUTHORIZED", message.clone()),
            ),
            AppError::Validation { field, message } => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "VALIDATION_ERROR".to_string(),
                    message: message.clone(),
                    field: Some(field.clone()),
                },
            ),
            AppError::ValidationError(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorDetail::new("VALIDATION_ERROR", msg.clone()),
            ),
            AppError::DuplicateEntry(field) => (
                StatusCode::CONFLICT,
                ErrorDetail {
                    code: "DUPLICATE_ENTRY".to_string(),
                    message: format!("A record with this {} already exists", field),
                    field: Some(field.clone()),
                },
            ),
            AppError::NotFound(resource) => (
                StatusCode::NOT_FOUND,
                ErrorDetail::new("NOT_FOUND", format!("{} not found", resource)),
            ),
            AppError::InvalidBackup(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorDetail::new("INVALID_BACKUP", format!("Invalid backup file: {}", msg)),
            ),
            AppError::BackupUnavailable(msg) => (
                StatusCode::CONFLICT,
                ErrorDetail::new("BACKUP_UNAVAILABLE", msg.clone()),
            ),
            AppError::DatabaseError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail::new("DATABASE_ERROR", "A database error occurred"),
            ),
            AppError::Io(_) | AppError::Internal(_) | AppError::InternalError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail::new("INTERNAL_ERROR", "An internal server error occurred"),
            ),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let field_errors = errors.field_errors();
        let mut fields: Vec<_> = field_errors.iter().collect();
        fields.sort_by_key(|(field, _)| **field);

        match fields.first().and_then(|(field, errs)| errs.first().map(|e| (**field, e))) {
            Some((field, error)) => {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field));
                AppError::invalid(field, message)
            }
            None => AppError::ValidationError(errors.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_detail) = self.status_and_detail();

        // Log the error for debugging
        if status.is_server_error() {
            tracing::error!("Error: {:?}", self);
        } else {
            tracing::warn!(code = %error_detail.code, "Request rejected: {}", self);
        }

        (status, Json(ErrorResponse { error: error_detail })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
