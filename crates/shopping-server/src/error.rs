//! API error types with JSON responses.
//!
//! Every failure a handler can produce ends up here and is rendered as
//! `{ "error": <message> }` with the status carried by the variant.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use shopping_core::ValidationError;
use shopping_store::StoreError;

/// API error that can be returned from handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Create payload failed validation (400).
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Store error. A missing item is a client error here (400), not 404.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Request under `/items` did not name an item (400).
    #[error("No item name parameter given")]
    MissingName,

    /// Bad request (400).
    #[error("{0}")]
    BadRequest(String),

    /// Request rejected before reaching a handler, with the rejection's own
    /// client-error status (e.g. 413 for an oversized body).
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },

    /// No route matched (404).
    #[error("Not Found")]
    NotFound,

    /// Internal server error (500).
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Store(e) => match e {
                StoreError::ItemNotFound(_) => StatusCode::BAD_REQUEST,
            },
            Self::MissingName => StatusCode::BAD_REQUEST,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Rejected { status, .. } => *status,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// JSON error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %message, "Request failed");
        } else {
            tracing::warn!(status = status.as_u16(), error = %message, "Request rejected");
        }

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

/// Result type for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;
