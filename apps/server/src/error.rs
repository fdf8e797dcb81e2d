use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// Expected absence; `error` becomes the short label in the body.
    #[error("{message}")]
    NotFound {
        error: &'static str,
        message: String,
    },
    #[error("{0}")]
    Internal(String),
    #[error("{0}")]
    Anyhow(#[from] anyhow::Error),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            ApiError::NotFound { error, message } => {
                (StatusCode::NOT_FOUND, error.to_string(), message)
            }
            ApiError::Internal(reason) => {
                tracing::error!("Internal error: {}", reason);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    "An unexpected error occurred".to_string(),
                )
            }
            ApiError::Anyhow(err) => {
                tracing::error!("Unhandled error: {:#}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    "An unexpected error occurred".to_string(),
                )
            }
        };
        let body = Json(ErrorBody { error, message });
        let mut response = (status, body).into_response();
        // Misses and faults must not linger in caches.
        response
            .headers_mut()
            .insert(header::CACHE_CONTROL, HeaderValue::from_static("no-cache"));
        response
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
