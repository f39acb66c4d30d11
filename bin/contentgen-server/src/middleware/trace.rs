use std::time::Instant;

use axum::{
    body::{Body, Bytes},
    extract::Request,
    http::{header, HeaderValue},
    middleware::Next,
    response::Response,
};
use axum::response::IntoResponse;
use http_body_util::{BodyExt, LengthLimitError, Limited};
use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::error::ServerError;

pub static X_TRACE_ID: &str = "x-trace-id";

/// JSON bodies up to this size are logged verbatim.
const MAX_LOGGED_BODY_BYTES: usize = 1024;

/// Largest request body buffered; matches axum's default `Json` limit.
pub const MAX_REQUEST_BODY_BYTES: usize = 2 * 1024 * 1024;

enum BufferError {
    TooLarge,
    Failed,
}

/// Assign (or propagate) a trace id, wrap the request in an `http_request`
/// span and log small JSON bodies plus latency.
pub async fn trace_middleware(req: Request<Body>, next: Next) -> Response {
    let start_time = Instant::now();

    let trace_id = req
        .headers()
        .get(X_TRACE_ID)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| Uuid::parse_str(s).ok())
        .unwrap_or_else(Uuid::new_v4);
    let trace_value = HeaderValue::from_str(&trace_id.to_string())
        .unwrap_or_else(|_| HeaderValue::from_static("invalid"));

    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let span = info_span!(
        "http_request",
        trace_id = %trace_id,
        method = %method,
        path = %path,
    );

    async move {
        info!("→ request started");
        let (parts, body) = req.into_parts();
        let req_bytes =
            match buffer_and_log("request", &parts.headers, body, MAX_REQUEST_BODY_BYTES).await {
                Ok(bytes) => bytes,
                Err(BufferError::TooLarge) => {
                    warn!(limit = MAX_REQUEST_BODY_BYTES, "request body too large");
                    let mut response = ServerError::PayloadTooLarge(MAX_REQUEST_BODY_BYTES)
                        .into_response();
                    response.headers_mut().insert(X_TRACE_ID, trace_value);
                    return response;
                }
                Err(BufferError::Failed) => Bytes::new(),
            };
        let mut req = Request::from_parts(parts, Body::from(req_bytes));
        req.headers_mut().insert(X_TRACE_ID, trace_value.clone());

        let response = next.run(req).await;

        let (parts, body) = response.into_parts();
        let res_bytes = buffer_and_log("response", &parts.headers, body, usize::MAX)
            .await
            .unwrap_or_default();
        let mut response = Response::from_parts(parts, Body::from(res_bytes));
        response.headers_mut().insert(X_TRACE_ID, trace_value);

        info!(
            status = response.status().as_u16(),
            latency_ms = start_time.elapsed().as_millis(),
            "← response finished"
        );

        response
    }
    .instrument(span)
    .await
}

/// Collect at most `limit` bytes of a body, logging it when it is small JSON.
async fn buffer_and_log(
    direction: &str,
    headers: &header::HeaderMap,
    body: Body,
    limit: usize,
) -> Result<Bytes, BufferError> {
    let declared = headers
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<usize>().ok());
    if declared.is_some_and(|len| len > limit) {
        return Err(BufferError::TooLarge);
    }

    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    let is_json = content_type.contains("application/json");

    let bytes = match Limited::new(body, limit).collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(e) if e.is::<LengthLimitError>() => return Err(BufferError::TooLarge),
        Err(e) => {
            warn!(error = %e, direction, "failed to buffer body");
            return Err(BufferError::Failed);
        }
    };

    if is_json && bytes.len() < MAX_LOGGED_BODY_BYTES {
        if let Ok(text) = std::str::from_utf8(&bytes) {
            info!("{direction} body: {text}");
        }
    } else if !bytes.is_empty() {
        info!(
            "{direction} body: [skipped: type={content_type}, size={}]",
            bytes.len()
        );
    }

    Ok(bytes)
}
