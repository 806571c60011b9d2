//! # ApiError
//!
//! Everything a handler can fail with, and how it is rendered: a status code
//! plus `{"error": <message>}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use domains::DomainError;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::error;

use crate::dto::ErrorBody;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Path id that is not a decimal u32.
    #[error("Invalid {0} ID")]
    InvalidId(&'static str),

    /// Body that is not JSON or lacks a required field.
    #[error("{0}")]
    MalformedBody(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Domain(DomainError::NotFound { .. }) => StatusCode::NOT_FOUND,
            ApiError::Domain(DomainError::Conflict(_)) => StatusCode::CONFLICT,
            ApiError::Domain(DomainError::Validation(_)) => StatusCode::BAD_REQUEST,
            ApiError::Domain(DomainError::IdentityExhausted(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::InvalidId(_) | ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
        }
    }
}

/// Decodes a JSON request body. The `Content-Type` header is not consulted.
pub fn decode_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|err| ApiError::MalformedBody(err.to_string()))
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        }
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Parses a path segment as a strictly decimal u32 (no sign, no whitespace).
pub fn parse_id(raw: &str, resource: &'static str) -> Result<u32, ApiError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ApiError::InvalidId(resource));
    }
    raw.parse().map_err(|_| ApiError::InvalidId(resource))
}
