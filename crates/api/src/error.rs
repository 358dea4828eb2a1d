//! API error types and handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::domains::DomainError;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    // Malformed requests (bad Host header, unparseable body)
    #[error("{0}")]
    BadRequest(String),

    // Resource errors
    #[error("Resource not found")]
    NotFound,

    // Domain lifecycle errors
    #[error("{0}")]
    Domain(#[from] DomainError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // Validation
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),

            // Resources
            ApiError::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND", self.to_string()),

            // Domains keep the status class the failure came with
            ApiError::Domain(err) => (err.status_code(), err.code(), err.to_string()),
        };

        let body = Json(json!({
            "success": false,
            "message": message,
            "code": code,
        }));

        (status, body).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
