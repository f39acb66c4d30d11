//! Content and campaign generation routes.
//!
//! Both generation endpoints answer 200 whenever the request itself is valid:
//! remote failures are absorbed by the dispatcher's demo fallback unless the
//! server runs with `CONTENTGEN_FALLBACK=strict`, in which case they surface
//! as 502.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderName, HeaderValue};
use axum::routing::{get, post};
use axum::{Json, Router};
use contentgen_core::{ContentType, Length, Provenance, Tone};
use tracing::{debug, info};
use utoipa::OpenApi;

use crate::error::ServerError;
use crate::extract::ApiJson;
use crate::schemas::content::{
    ContentOptionsResponse, GenerateCampaignRequest, GenerateCampaignResponse,
    GenerateContentRequest, GenerateContentResponse,
};
use crate::state::AppState;

/// Response header naming where the body came from (`remote` or `demo`).
pub static X_CONTENT_SOURCE: &str = "x-content-source";

#[derive(OpenApi)]
#[openapi(
    paths(generate_content, generate_campaign, list_content_options),
    components(schemas(
        GenerateContentRequest,
        GenerateContentResponse,
        GenerateCampaignRequest,
        GenerateCampaignResponse,
        ContentOptionsResponse
    ))
)]
pub struct ContentApi;

/// Routes nested under `/api/content`.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/generate", post(generate_content))
        .route("/generate-campaign", post(generate_campaign))
        .route("/types", get(list_content_options))
}

fn source_header(source: Provenance) -> [(HeaderName, HeaderValue); 1] {
    let value = match source {
        Provenance::Remote => HeaderValue::from_static("remote"),
        Provenance::Demo => HeaderValue::from_static("demo"),
    };
    [(HeaderName::from_static(X_CONTENT_SOURCE), value)]
}

/// Generate a piece of content (`POST /api/content/generate`).
#[utoipa::path(
    post,
    path = "/api/content/generate",
    tag = "content",
    request_body = GenerateContentRequest,
    responses(
        (
            status = 200,
            description = "Content generated (remote or demo)",
            body = GenerateContentResponse
        ),
        (status = 400, description = "Content type or topic missing"),
        (status = 502, description = "Remote model failed (strict fallback policy only)"),
    )
)]
pub async fn generate_content(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<GenerateContentRequest>,
) -> Result<([(HeaderName, HeaderValue); 1], Json<GenerateContentResponse>), ServerError> {
    let req = req.validate()?;
    debug!(
        topic = %req.topic,
        content_type_len = req.content_type.len(),
        "content generation request"
    );

    let generated = state
        .generator
        .generate(&req.content_type, &req.topic)
        .await?;

    info!(
        source = %generated.source,
        chars = generated.value.len(),
        "content generation done"
    );
    Ok((
        source_header(generated.source),
        Json(GenerateContentResponse {
            generated_content: generated.value,
        }),
    ))
}

/// Generate a one-week campaign plan (`POST /api/content/generate-campaign`).
#[utoipa::path(
    post,
    path = "/api/content/generate-campaign",
    tag = "content",
    request_body = GenerateCampaignRequest,
    responses(
        (
            status = 200,
            description = "Campaign generated (remote or demo)",
            body = GenerateCampaignResponse
        ),
        (status = 400, description = "Topic missing"),
        (status = 502, description = "Remote model failed (strict fallback policy only)"),
    )
)]
pub async fn generate_campaign(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<GenerateCampaignRequest>,
) -> Result<([(HeaderName, HeaderValue); 1], Json<GenerateCampaignResponse>), ServerError> {
    let topic = req.validate()?;

    let generated = state.generator.generate_campaign(&topic).await?;

    info!(source = %generated.source, topic = %topic, "campaign generation done");
    Ok((
        source_header(generated.source),
        Json(GenerateCampaignResponse {
            generated_campaign: generated.value,
        }),
    ))
}

/// Supported content types, tones and lengths (`GET /api/content/types`).
#[utoipa::path(
    get,
    path = "/api/content/types",
    tag = "content",
    responses(
        (status = 200, description = "Selectable options", body = ContentOptionsResponse)
    )
)]
pub async fn list_content_options() -> Json<ContentOptionsResponse> {
    Json(ContentOptionsResponse {
        content_types: ContentType::tags(),
        tones: Tone::all(),
        lengths: Length::all(),
    })
}

// ── Tests ──────────────────────────────────────────────────────────────────────
