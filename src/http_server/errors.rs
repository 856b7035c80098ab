//! # HTTP API Errors
//!
//! Error types for the Pokemon routes. Every error renders as
//! `{"error": <message>, "code": <status>}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::store::StoreError;

/// Result type for route handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// HTTP API errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// No record with the requested identifier
    #[error("Pokemon not found: {0}")]
    NotFound(String),

    /// Request body is not a decodable record
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    // ==================
    // Server Errors (5xx)
    // ==================
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => ApiError::NotFound(id),
            StoreError::LockPoisoned => ApiError::Internal(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::InvalidBody(err.to_string())
    }
}

/// Error response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::NotFound("1".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::InvalidBody("eof".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Internal("test".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_store_error_mapping() {
        let err = ApiError::from(StoreError::NotFound("999".to_string()));
        assert_eq!(err, ApiError::NotFound("999".to_string()));

        let err = ApiError::from(StoreError::LockPoisoned);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_response_body() {
        let body = ErrorResponse::from(ApiError::NotFound("999".to_string()));
        assert_eq!(body.code, 404);
        assert_eq!(body.error, "Pokemon not found: 999");
    }
}
