use axum::Router;
use axum::routing::post;

use super::*;
use crate::config::{HostConfig, UpstreamTimeouts};

// =============================================================
// pure helpers
// =============================================================

#[test]
fn upstream_url_joins_path_and_query() {
    assert_eq!(upstream_url("http://seo:8002", "domain", None), "http://seo:8002/domain");
    assert_eq!(upstream_url("http://seo:8002/", "/history", Some("limit=5")), "http://seo:8002/history?limit=5");
    assert_eq!(upstream_url("http://seo:8002", "audit", Some("")), "http://seo:8002/audit");
}

#[test]
fn forwarded_headers_keeps_only_allow_list() {
    let mut incoming = HeaderMap::new();
    incoming.insert("content-type", HeaderValue::from_static("application/json"));
    incoming.insert("x-api-key", HeaderValue::from_static("seo_abc"));
    incoming.insert("cookie", HeaderValue::from_static("session=1"));
    incoming.insert("host", HeaderValue::from_static("dashboard.local"));

    let out = forwarded_headers(&incoming);
    assert_eq!(out.len(), 2);
    assert_eq!(out.get("x-api-key").unwrap(), "seo_abc");
    assert!(out.get("cookie").is_none());
}

#[test]
fn parent_segments_are_rejected() {
    assert!(is_safe_path("domain"));
    assert!(is_safe_path("reports/v2/history"));
    assert!(!is_safe_path("../admin"));
    assert!(!is_safe_path("a/../../b"));
}

// =============================================================
// relay against a live backend
// =============================================================

fn state_for(upstream: String) -> AppState {
    let config = HostConfig {
        port: 0,
        upstream,
        timeouts: UpstreamTimeouts { connect_secs: 2, request_secs: Some(5) },
    };
    AppState::new(&config).unwrap()
}

async fn spawn_backend() -> String {
    async fn domain(headers: HeaderMap, body: String) -> Response {
        if headers.get("x-api-key").is_none() {
            return detail_response(StatusCode::UNAUTHORIZED, "Invalid API key");
        }
        (StatusCode::OK, [(CONTENT_TYPE, "application/json")], body).into_response()
    }

    let app = Router::new().route("/domain", post(domain));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn body_text(resp: Response) -> String {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn relay_forwards_body_and_credential() {
    let state = state_for(spawn_backend().await);
    let mut headers = HeaderMap::new();
    headers.insert("content-type", HeaderValue::from_static("application/json"));
    headers.insert("x-api-key", HeaderValue::from_static("seo_abc"));

    let resp =
        relay(&state, Method::POST, "domain", None, &headers, Bytes::from_static(br#"{"domain":"example.com"}"#)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers().get(CONTENT_TYPE).unwrap(), "application/json");
    assert_eq!(body_text(resp).await, r#"{"domain":"example.com"}"#);
}

#[tokio::test]
async fn relay_passes_backend_errors_through() {
    let state = state_for(spawn_backend().await);
    let resp = relay(&state, Method::POST, "domain", None, &HeaderMap::new(), Bytes::new()).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_text(resp).await, r#"{"detail":"Invalid API key"}"#);
}

#[tokio::test]
async fn relay_maps_unreachable_backend_to_bad_gateway() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let state = state_for(format!("http://{addr}"));
    let resp = relay(&state, Method::GET, "history", None, &HeaderMap::new(), Bytes::new()).await;
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    let text = body_text(resp).await;
    let body: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(body["detail"], UNREACHABLE_DETAIL);

    // The browser must show the generic message, not the forwarder's detail.
    let err = reports::ApiError::from_response(reports::Operation::Analysis, 502, &text);
    assert!(matches!(err, reports::ApiError::Network { .. }));
    assert_eq!(err.to_string(), "Domain analysis failed");
}

#[tokio::test]
async fn relay_refuses_parent_traversal() {
    let state = state_for("http://127.0.0.1:9".to_owned());
    let resp = relay(&state, Method::GET, "../etc/passwd", None, &HeaderMap::new(), Bytes::new()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
