//! HTTP error surface.
//!
//! # Design
//! `ApiError` is the taxonomy the HTTP caller sees: `NotFound` → 404,
//! `Validation` → 400, `Internal` → 500. Every error renders as a minimal
//! structured body `{"error": "<kind>", "message": "<detail>"}` so the
//! front-end can branch on `error` without parsing prose. `Internal` is
//! logged before it leaves the process; nothing is silently swallowed.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::store::StoreError;

/// Errors surfaced to the HTTP caller.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("no todo with id {0}")]
    NotFound(u64),

    #[error("{0}")]
    Validation(String),

    /// Unexpected failure. Logged, returned as 500, never retried.
    #[error("{0}")]
    Internal(String),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => ApiError::NotFound(id),
            StoreError::EmptyTitle => ApiError::Validation(err.to_string()),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, kind) = match &self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            ApiError::Validation(_) => (StatusCode::BAD_REQUEST, "validation"),
            ApiError::Internal(message) => {
                tracing::error!(%message, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal")
            }
        };
        let body = ErrorBody {
            error: kind,
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_not_found_maps_to_api_not_found() {
        let err: ApiError = StoreError::NotFound(9).into();
        assert!(matches!(err, ApiError::NotFound(9)));
    }

    #[test]
    fn store_empty_title_maps_to_validation() {
        let err: ApiError = StoreError::EmptyTitle.into();
        assert!(matches!(err, ApiError::Validation(_)));
        assert_eq!(err.to_string(), "title must not be empty");
    }

    #[test]
    fn not_found_renders_404() {
        let resp = ApiError::NotFound(1).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn validation_renders_400() {
        let resp = ApiError::Validation("title must not be empty".to_string()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn internal_renders_500() {
        let resp = ApiError::Internal("storage unavailable".to_string()).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
