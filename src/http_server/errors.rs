//! # HTTP API Errors
//!
//! Error types for the load/save boundary.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::snapshot::SnapshotError;

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// HTTP API errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Snapshot persistence failure
    #[error("{0}")]
    Snapshot(#[from] SnapshotError),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Snapshot(SnapshotError::NotFound { .. }) => StatusCode::NOT_FOUND,
            ApiError::Snapshot(SnapshotError::Parse { .. }) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Snapshot(SnapshotError::Validation { .. }) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::Snapshot(SnapshotError::Save { .. }) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
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
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let not_found = ApiError::Snapshot(SnapshotError::not_found("./x.json"));
        assert_eq!(not_found.status_code(), StatusCode::NOT_FOUND);

        let save = ApiError::Snapshot(SnapshotError::save("disk full"));
        assert_eq!(save.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_response_carries_message() {
        let err = ApiError::Snapshot(SnapshotError::parse("unexpected eof"));
        let body = ErrorResponse::from(err);
        assert_eq!(body.code, 500);
        assert!(body.error.contains("unexpected eof"));
    }
}
