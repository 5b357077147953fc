//! Dev Server Error Types
//!
//! Errors raised by the development backend and their HTTP mapping. Bodies
//! carry a top-level `message` so clients can show it verbatim.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    /// Request validation failed
    #[error("{0}")]
    Validation(String),

    /// Missing, malformed, or unknown bearer token
    #[error("Invalid or expired token")]
    Unauthorized,

    /// Wrong email or password
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Resource not found
    #[error("{0}")]
    NotFound(String),

    /// Unique constraint violated
    #[error("{0}")]
    Conflict(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    pub code: &'static str,
    pub message: String,
    pub request_id: String,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ServerError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            ServerError::Unauthorized => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
            ServerError::InvalidCredentials => (StatusCode::UNAUTHORIZED, "INVALID_CREDENTIALS"),
            ServerError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ServerError::Conflict(_) => (StatusCode::CONFLICT, "CONFLICT"),
            ServerError::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "IO_ERROR"),
        };

        let request_id = uuid::Uuid::new_v4().to_string();

        tracing::warn!(
            request_id = %request_id,
            error_code = %code,
            error_message = %self,
            "Request rejected"
        );

        let body = ErrorResponse {
            code,
            message: self.to_string(),
            request_id,
        };

        (status, Json(body)).into_response()
    }
}

pub type ServerResult<T> = Result<T, ServerError>;
