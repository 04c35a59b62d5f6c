use axum::response::{IntoResponse, Response};
use ::http::StatusCode;
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("list not found")]
    NotFound,
    #[error("invalid id {0:?}")]
    InvalidId(String),
    #[error("{0}")]
    Internal(String),
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody { pub message: String }

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::InvalidId(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() { tracing::error!(error = %self, "request failed"); }
        (status, axum::Json(ErrorBody { message: self.to_string() })).into_response()
    }
}
