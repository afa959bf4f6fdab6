//! Web Error Types
//!
//! Defines error types for the web layer and their conversion
//! to HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::auth::AuthError;

/// Errors surfaced by the web layer
#[derive(Error, Debug)]
pub enum WebError {
    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Session lookup against the identity service failed
    #[error("Session lookup failed: {0}")]
    Auth(#[from] AuthError),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
    pub request_id: String,
}

/// Error details
#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            WebError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            WebError::Auth(AuthError::Timeout) | WebError::Auth(AuthError::Unavailable) => {
                (StatusCode::SERVICE_UNAVAILABLE, "IDENTITY_UNAVAILABLE")
            }
            WebError::Auth(_) => (StatusCode::BAD_GATEWAY, "IDENTITY_ERROR"),
            WebError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
            WebError::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "IO_ERROR"),
        };

        let request_id = uuid::Uuid::new_v4().to_string();

        tracing::error!(
            request_id = %request_id,
            error_code = %code,
            error_message = %self,
            "Request failed"
        );

        let body = ErrorResponse {
            error: ErrorBody {
                code: code.to_string(),
                message: self.to_string(),
            },
            request_id,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for web handlers
pub type WebResult<T> = Result<T, WebError>;
