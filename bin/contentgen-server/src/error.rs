//! Unified server error type.
//!
//! Every handler returns `Result<T, ServerError>`, which implements
//! [`axum::response::IntoResponse`] so errors are automatically converted
//! to a `{"error": ...}` JSON body with an appropriate status code.
//!
//! Upstream failures are logged with full detail but only a generic message
//! is returned, so provider error bodies never leak to clients.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contentgen_core::{GenerateError, ValidationError};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// All errors that can occur in the contentgen-server request lifecycle.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The caller sent an invalid or malformed request.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The request body exceeded the buffering limit (in bytes).
    #[error("request body exceeds {0} bytes")]
    PayloadTooLarge(usize),

    /// The remote model failed and the fallback policy is strict.
    #[error("upstream error: {0}")]
    Upstream(#[from] GenerateError),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, client_message) = match &self {
            ServerError::BadRequest(m) => (StatusCode::BAD_REQUEST, m.clone()),
            ServerError::PayloadTooLarge(_) => (StatusCode::PAYLOAD_TOO_LARGE, self.to_string()),
            ServerError::Upstream(e) => {
                error!(error = %e, "content generation failed");
                let message = match e {
                    GenerateError::Remote(_) => "content generation service unavailable",
                    GenerateError::MalformedStructuredResponse(_) => {
                        "content generation service returned an unusable response"
                    }
                };
                (StatusCode::BAD_GATEWAY, message.to_owned())
            }
        };
        (status, Json(json!({ "error": client_message }))).into_response()
    }
}

impl From<ValidationError> for ServerError {
    fn from(e: ValidationError) -> Self {
        ServerError::BadRequest(e.to_string())
    }
}

impl From<JsonRejection> for ServerError {
    fn from(rejection: JsonRejection) -> Self {
        ServerError::BadRequest(rejection.body_text())
    }
}
