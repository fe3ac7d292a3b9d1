//! HTTP error mapping
//!
//! The closed set of failure responses the API can produce. Client
//! errors carry the exact wire messages of the public contract.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::routes::todo::MessageResponse;

#[derive(Error, Debug)]
pub enum ApiError {
    /// Create payload with an empty or missing task title
    #[error("task must have title")]
    EmptyTask,

    /// Malformed record identifier in the request path
    #[error("invalied id")]
    InvalidId,

    /// Store failure; aborts this request only
    #[error("internal server error")]
    Store(#[from] resolution_core::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::EmptyTask | ApiError::InvalidId => StatusCode::BAD_REQUEST,
            ApiError::Store(ref e) => {
                tracing::error!("store operation failed: {e}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = MessageResponse {
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
