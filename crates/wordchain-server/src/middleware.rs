use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderMap, HeaderValue, Method, Request, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tracing::Instrument;
use uuid::Uuid;

use crate::AppState;

const ALLOW_METHODS: &str = "GET,POST,OPTIONS";
const ALLOW_HEADERS: &str = "content-type,x-request-id";

/// Answers preflight requests with 204 and stamps
/// `access-control-allow-origin` on responses to allowed origins.
///
/// A `"*"` entry in the allow list answers every request with a literal `*`.
pub async fn cors_middleware(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let allow_origin = allowed_origin(&state, req.headers());

    if *req.method() == Method::OPTIONS {
        let mut resp = StatusCode::NO_CONTENT.into_response();
        if let Some(origin) = allow_origin {
            let headers = resp.headers_mut();
            headers.insert("access-control-allow-origin", origin);
            headers.insert(
                "access-control-allow-methods",
                HeaderValue::from_static(ALLOW_METHODS),
            );
            headers.insert(
                "access-control-allow-headers",
                HeaderValue::from_static(ALLOW_HEADERS),
            );
        }
        return resp;
    }

    let mut resp = next.run(req).await;
    if let Some(origin) = allow_origin {
        let wildcard = origin == "*";
        resp.headers_mut().insert("access-control-allow-origin", origin);
        if !wildcard {
            resp.headers_mut()
                .insert("vary", HeaderValue::from_static("Origin"));
        }
    }
    resp
}

fn allowed_origin(state: &AppState, headers: &HeaderMap) -> Option<HeaderValue> {
    if state.http.cors_allowed_origins.iter().any(|o| o == "*") {
        return Some(HeaderValue::from_static("*"));
    }

    let origin = headers.get("origin")?.to_str().ok()?.trim();
    if state.http.allows_origin(origin) {
        HeaderValue::from_str(origin).ok()
    } else {
        None
    }
}

/// Wraps each request in an `http.request` span and echoes its id back in
/// `x-request-id`. A caller-provided id is reused.
pub async fn request_tracing_middleware(req: Request<Body>, next: Next) -> Response {
    let request_id = req
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty() && v.len() <= 128)
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let span = tracing::info_span!(
        "http.request",
        request_id = %request_id,
        method = %req.method(),
        route = %req.uri().path(),
    );

    let mut resp = next.run(req).instrument(span.clone()).await;
    let status = resp.status().as_u16();
    span.in_scope(|| tracing::debug!(status, "handled"));

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        resp.headers_mut().insert("x-request-id", value);
    }
    resp
}
