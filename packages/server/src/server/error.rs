//! HTTP error mapping.
//!
//! Store failures are logged here with full detail; callers only ever see a
//! fixed message.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::common::BlogError;
use crate::domains::auth::AuthError;

/// Generic 500 message for failed reads and edits.
pub const DATABASE_ERROR: &str = "Database error";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Internal(&'static str),
}

impl ApiError {
    /// Convert a domain error, using `failure` as the public 500 message.
    pub fn from_blog(err: BlogError, failure: &'static str) -> Self {
        match err {
            BlogError::Validation(message) => ApiError::BadRequest(message),
            BlogError::NotFound(entity) => ApiError::NotFound(format!("{} not found", entity)),
            BlogError::Store(e) => {
                error!(error = %e, "{}", failure);
                ApiError::Internal(failure)
            }
        }
    }
}

impl From<BlogError> for ApiError {
    fn from(err: BlogError) -> Self {
        Self::from_blog(err, DATABASE_ERROR)
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Token(e) => {
                error!(error = %e, "Failed to issue token");
                ApiError::Internal("Authentication error")
            }
            other => ApiError::Unauthorized(other.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(format!("Invalid request body: {}", rejection.body_text()))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(format!("Invalid query string: {}", rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, json!({ "error": message }))
            }
            ApiError::Unauthorized(message) => {
                (StatusCode::UNAUTHORIZED, json!({ "error": message }))
            }
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, json!({ "error": message })),
            ApiError::Internal(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "success": false, "error": message }),
            ),
        };

        (status, Json(body)).into_response()
    }
}
