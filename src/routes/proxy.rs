//! `/api/*` forwarding to the SEO analysis backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser only talks to its own origin. Everything under `/api/` is
//! replayed against `SEO_API_URL` with the same method, query, and body, and
//! the backend's status and payload are relayed untouched so the client's
//! error mapping sees the real `detail` messages.
//!
//! TRADE-OFFS
//! ==========
//! Only `content-type` and the credential header cross the proxy in either
//! direction. Cookies and hop-by-hop headers never leak to the backend.

use axum::body::{Body, Bytes};
use axum::extract::{Path, RawQuery, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::state::AppState;

/// Detail sent to the browser when the backend cannot be reached.
pub const UNREACHABLE_DETAIL: &str = "SEO backend unreachable";

/// Request headers forwarded to the backend.
const FORWARDED_HEADERS: [&str; 2] = ["content-type", reports::CREDENTIAL_HEADER];

/// Join the backend base URL with the captured path and raw query.
#[must_use]
pub fn upstream_url(base: &str, path: &str, query: Option<&str>) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    match query.filter(|q| !q.is_empty()) {
        Some(q) => format!("{base}/{path}?{q}"),
        None => format!("{base}/{path}"),
    }
}

/// Copy the allow-listed request headers.
#[must_use]
pub fn forwarded_headers(incoming: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::new();
    for name in FORWARDED_HEADERS {
        if let Some(value) = incoming.get(name) {
            out.insert(name, value.clone());
        }
    }
    out
}

/// Reject paths that would climb out of the backend's root.
#[must_use]
pub fn is_safe_path(path: &str) -> bool {
    !path.split('/').any(|segment| segment == "..")
}

/// JSON error body in the backend's own `{"detail": ...}` shape.
pub fn detail_response(status: StatusCode, detail: &str) -> Response {
    (status, Json(serde_json::json!({ "detail": detail }))).into_response()
}

/// 502 reply for a backend that never answered.
///
/// The `error` marker lets the browser tell this apart from a backend-issued
/// 502 and show its generic per-operation message instead of `detail`.
pub fn unreachable_response() -> Response {
    let body = serde_json::json!({ "detail": UNREACHABLE_DETAIL, "error": reports::FORWARDER_UNREACHABLE });
    (StatusCode::BAD_GATEWAY, Json(body)).into_response()
}

/// Axum handler for `/api/{*path}`.
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    Path(path): Path<String>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    relay(&state, method, &path, query.as_deref(), &headers, body).await
}

/// Replay one request against the backend and relay its response.
pub async fn relay(
    state: &AppState,
    method: Method,
    path: &str,
    query: Option<&str>,
    headers: &HeaderMap,
    body: Bytes,
) -> Response {
    if !is_safe_path(path) {
        return detail_response(StatusCode::NOT_FOUND, "Not Found");
    }
    let url = upstream_url(&state.upstream, path, query);

    let mut req = state.http.request(method.clone(), &url).headers(forwarded_headers(headers));
    if !body.is_empty() {
        req = req.body(body);
    }

    let resp = match req.send().await {
        Ok(resp) => resp,
        Err(e) => {
            tracing::warn!(upstream = %url, error = %e, "backend request failed");
            return unreachable_response();
        }
    };

    let status = resp.status();
    let content_type = resp.headers().get(CONTENT_TYPE).cloned();
    let bytes = match resp.bytes().await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(upstream = %url, error = %e, "backend response body failed");
            return unreachable_response();
        }
    };
    tracing::debug!(%method, upstream = %url, status = status.as_u16(), "proxied");

    let mut out = Response::new(Body::from(bytes));
    *out.status_mut() = status;
    out.headers_mut()
        .insert(CONTENT_TYPE, content_type.unwrap_or_else(|| HeaderValue::from_static("application/json")));
    out
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
