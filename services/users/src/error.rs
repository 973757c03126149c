//! Custom error types for the user record service

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Custom error type for the user record service
#[derive(Error, Debug)]
pub enum UserError {
    /// Malformed or missing field
    #[error("{0}")]
    Validation(String),

    /// Another record already uses this email
    #[error("User with email '{0}' already exists")]
    DuplicateEmail(String),

    /// No record for the given email
    #[error("User with email '{0}' not found")]
    NotFound(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] common::error::DatabaseError),

    /// Password hashing failed
    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Type alias for user service results
pub type UserResult<T> = Result<T, UserError>;

impl UserError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            UserError::Validation(_) | UserError::DuplicateEmail(_) => StatusCode::BAD_REQUEST,
            UserError::NotFound(_) => StatusCode::NOT_FOUND,
            UserError::Database(_) | UserError::PasswordHash(_) | UserError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let error_message = if status.is_server_error() {
            error!("Request failed: {}", self);
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
