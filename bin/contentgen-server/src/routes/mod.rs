//! Axum router construction.
//!
//! [`build`] assembles the complete application router, including:
//! - Middleware layers (CORS, per-request trace-ID injection)
//! - Optional Swagger UI / OpenAPI spec endpoint (disable with `CONTENTGEN_ENABLE_SWAGGER=false`)
//! - Banner and health routes
//! - `/api/content` generation routes, plus the legacy `/api/generate-campaign` alias

pub mod content;
pub mod doc;
mod health;

use std::sync::Arc;

use axum::routing::post;
use axum::{middleware, Router};
use tower::ServiceBuilder;
use utoipa_swagger_ui::SwaggerUi;

use crate::middleware::{cors, trace};
use crate::state::AppState;

// ── Router builder ────────────────────────────────────────────────────────────

/// Build the complete Axum [`Router`] for the application.
pub fn build(state: Arc<AppState>) -> Router {
    let api_router = Router::new()
        .merge(health::router())
        .nest("/api/content", content::router())
        .route("/api/generate-campaign", post(content::generate_campaign));

    let mut app = Router::new().merge(api_router);

    if state.config.enable_swagger {
        app = app.merge(
            SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", doc::get_docs()),
        );
    }

    // Layers added last run first; CORS wraps trace so early rejections keep CORS headers.
    app.layer(middleware::from_fn(trace::trace_middleware))
        .layer(ServiceBuilder::new().layer(cors::cors_layer(&state)))
        .with_state(state)
}

#[cfg(test)]
mod test {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::middleware::trace::{MAX_REQUEST_BODY_BYTES, X_TRACE_ID};
    use crate::testing::{demo_state, ScriptedClient};

    #[tokio::test]
    async fn banner_is_served_at_root() {
        let app = build(demo_state(ScriptedClient::ok("")));
        let resp = app
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn trace_id_is_echoed_or_generated() {
        let app = build(demo_state(ScriptedClient::ok("")));
        let id = "7f1c2a7e-9a55-4a5b-8d1e-2f4b3c6d8e90";
        let resp = app
            .clone()
            .oneshot(
                Request::get("/health")
                    .header(X_TRACE_ID, id)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.headers()[X_TRACE_ID], id);

        let resp = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let generated = resp.headers()[X_TRACE_ID].to_str().unwrap();
        assert!(uuid::Uuid::parse_str(generated).is_ok());
    }

    #[tokio::test]
    async fn swagger_can_be_disabled() {
        let config = Config {
            enable_swagger: false,
            ..Config::default()
        };
        let state = Arc::new(AppState::with_client(config, ScriptedClient::ok("")));
        let resp = build(state)
            .oneshot(Request::get("/api-docs/openapi.json").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp = build(demo_state(ScriptedClient::ok("")))
            .oneshot(Request::get("/api-docs/openapi.json").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn cors_allows_configured_origin() {
        let config = Config {
            cors_allowed_origins: Some("http://localhost:5173, https://app.example.com".into()),
            ..Config::default()
        };
        let state = Arc::new(AppState::with_client(config, ScriptedClient::ok("")));
        let resp = build(state)
            .oneshot(
                Request::get("/health")
                    .header("origin", "http://localhost:5173")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(
            resp.headers()["access-control-allow-origin"],
            "http://localhost:5173"
        );
    }

    #[tokio::test]
    async fn oversized_body_is_rejected_before_generation() {
        let client = ScriptedClient::ok("remote text");
        let app = build(demo_state(client.clone()));
        let oversized = vec![b' '; MAX_REQUEST_BODY_BYTES + 1];

        // Streamed body without a declared length.
        let resp = app
            .clone()
            .oneshot(
                Request::post("/api/content/generate")
                    .header("content-type", "application/json")
                    .body(Body::from(oversized))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert!(resp.headers().contains_key(X_TRACE_ID));

        // Declared length over the limit is refused without reading the body.
        let resp = app
            .oneshot(
                Request::post("/api/content/generate")
                    .header("content-type", "application/json")
                    .header("content-length", (MAX_REQUEST_BODY_BYTES * 4).to_string())
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(client.calls(), 0);
    }
}
