//! Error types for staffbook-api
//!
//! [`Error`] covers server start-up and shutdown. [`ApiError`] is what a
//! handler returns; it renders as `{"error": "..."}` with the matching status
//! code and never exposes internal detail on a 500.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use staffbook_core::Violations;
use thiserror::Error;

/// Result type alias for staffbook-api operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while running the server
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Socket bind or serve failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Message sent with every 404.
pub const NOT_FOUND_MESSAGE: &str = "Employee not found";

/// Message sent with every 500.
pub const SERVER_ERROR_MESSAGE: &str = "Server error";

/// Message sent when a create payload is missing a field.
pub const FIELDS_REQUIRED_MESSAGE: &str = "All fields are required";

/// JSON body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable reason.
    pub error: String,
}

/// A failed request, already classified by status.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Malformed payload, failed validation, or duplicate email.
    #[error("{0}")]
    BadRequest(String),

    /// No employee with the requested id.
    #[error("Employee not found")]
    NotFound,

    /// Store or other internal failure.
    #[error("Server error")]
    Internal(#[source] staffbook_storage::Error),
}

impl ApiError {
    /// Creates a 400 error.
    pub fn bad_request<S: Into<String>>(message: S) -> Self {
        ApiError::BadRequest(message.into())
    }

    /// Status code this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<staffbook_storage::Error> for ApiError {
    fn from(err: staffbook_storage::Error) -> Self {
        if err.is_client_error() {
            ApiError::BadRequest(err.to_string())
        } else {
            ApiError::Internal(err)
        }
    }
}

impl From<Violations> for ApiError {
    fn from(violations: Violations) -> Self {
        ApiError::BadRequest(violations.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::Internal(source) => {
                tracing::error!(error = %source, "request failed with internal error");
            }
            other => tracing::debug!(%status, reason = %other, "request rejected"),
        }

        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
