//! Request extractors.

use axum::extract::FromRequest;

use crate::error::ServerError;

/// `axum::Json` whose rejections become `400 {"error": ...}` instead of
/// axum's default 415/422 plain-text bodies.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ServerError))]
pub struct ApiJson<T>(pub T);
