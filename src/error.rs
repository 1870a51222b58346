use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Every failure response carries exactly one `error` string.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Failures surfaced while persisting a record. The `Display` output is
/// meant for server-side logs and names the file the write was aimed at.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to serialize record: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write {filename}: {source}")]
    Write {
        filename: String,
        #[source]
        source: std::io::Error,
    },
}

/// Request-boundary error taxonomy. Each variant maps onto one HTTP status,
/// and the `Display` string is exactly what the caller sees; underlying
/// causes stay in the server logs.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No bearer credential could be extracted from the request.
    #[error("Access token required")]
    MissingToken,

    /// A credential was presented but does not match the configured secret.
    #[error("Invalid token")]
    InvalidToken,

    /// The request body is not valid JSON.
    #[error("Invalid JSON payload")]
    InvalidJson(#[source] serde_json::Error),

    /// The record writer failed.
    #[error("Failed to save webhook data")]
    Storage(#[from] StoreError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingToken => StatusCode::UNAUTHORIZED,
            Self::InvalidToken => StatusCode::FORBIDDEN,
            Self::InvalidJson(_) => StatusCode::BAD_REQUEST,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody { error: self.to_string() };
        (self.status(), Json(body)).into_response()
    }
}
