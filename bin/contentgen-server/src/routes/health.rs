//! Health / heartbeat endpoints.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use utoipa::OpenApi;

use crate::state::AppState;

const BANNER: &str = "AI Content Generator Backend is running!";

#[derive(OpenApi)]
#[openapi(paths(get_health))]
pub struct HealthApi;

/// Register health-check routes.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(get_banner))
        .route("/health", get(get_health))
}

/// Plain-text liveness banner at `/`.
pub async fn get_banner() -> &'static str {
    BANNER
}

/// Heartbeat endpoint.
///
/// Returns `{"status": "ok", "version": "...", "mode": "live" | "demo"}`.
/// `mode` reports whether a usable remote credential is configured.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Server is healthy", body = Value)
    )
)]
pub async fn get_health(State(state): State<Arc<AppState>>) -> Json<Value> {
    let mode = if state.generator.is_live() { "live" } else { "demo" };
    Json(json!({
        "status":   "ok",
        "version":  env!("CARGO_PKG_VERSION"),
        "mode":     mode,
        "fallback": state.generator.fallback_policy().to_string(),
    }))
}

// ── Tests ──────────────────────────────────────────────────────────────────────
