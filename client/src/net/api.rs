//! REST calls to the SEO analysis API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, routed through the
//! host's `/api` forwarder so the browser never talks cross-origin.
//! Server-side (SSR): stubs returning a network error since these calls are
//! only ever triggered by user actions in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<T, ApiError>`. Panels turn the error into
//! display text with `to_string()`; nothing is thrown past the panel.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use reports::{
    ApiError, AuditRequest, AuditResult, CheckoutRequest, CheckoutSession, DomainAnalysis, DomainRequest, Endpoint,
    History, KeywordReport, KeywordRequest,
};
#[cfg(any(test, feature = "hydrate"))]
use reports::Operation;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Prefix under which the host forwards requests to the backend.
pub const API_BASE: &str = "/api";

/// Turn a status + body pair into the typed result.
#[cfg(any(test, feature = "hydrate"))]
fn decode_response<T: DeserializeOwned>(op: Operation, status: u16, body: &str) -> Result<T, ApiError> {
    if (200..300).contains(&status) {
        serde_json::from_str(body).map_err(|e| ApiError::decode(op, e))
    } else {
        Err(ApiError::from_response(op, status, body))
    }
}

async fn send<B: Serialize, T: DeserializeOwned>(
    endpoint: Endpoint,
    credential: Option<&str>,
    body: Option<&B>,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use reports::{CREDENTIAL_HEADER, Method};

        let op = endpoint.operation();
        let url = endpoint.url(API_BASE);
        let mut builder = match endpoint.method() {
            Method::Get => gloo_net::http::Request::get(&url),
            Method::Post => gloo_net::http::Request::post(&url),
        };
        if let Some(key) = credential {
            builder = builder.header(CREDENTIAL_HEADER, key);
        }
        let request = match body {
            Some(body) => builder.json(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::network(op, e))?;

        let resp = request.send().await.map_err(|e| ApiError::network(op, e))?;
        let status = resp.status();
        let text = resp.text().await.map_err(|e| ApiError::network(op, e))?;
        if !resp.ok() {
            log::warn!("{} {} -> {status}", endpoint.method().as_str(), endpoint.path());
        }
        decode_response(op, status, &text)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (credential, body);
        Err(ApiError::network(endpoint.operation(), "not available on server"))
    }
}

/// `POST /domain`.
///
/// # Errors
///
/// Returns the classified [`ApiError`] for transport failures, non-2xx
/// statuses, or undecodable bodies.
pub async fn analyze_domain(credential: Option<&str>, domain: &str) -> Result<DomainAnalysis, ApiError> {
    let body = DomainRequest { domain: domain.to_owned() };
    send(Endpoint::Domain, credential, Some(&body)).await
}

/// `POST /keywords`.
///
/// # Errors
///
/// See [`analyze_domain`].
pub async fn research_keyword(
    credential: Option<&str>,
    keyword: &str,
    country: Option<&str>,
) -> Result<KeywordReport, ApiError> {
    let body = KeywordRequest::new(keyword, country);
    send(Endpoint::Keywords, credential, Some(&body)).await
}

/// `POST /audit`.
///
/// # Errors
///
/// See [`analyze_domain`].
pub async fn audit_site(credential: Option<&str>, url: &str) -> Result<AuditResult, ApiError> {
    let body = AuditRequest { url: url.to_owned() };
    send(Endpoint::Audit, credential, Some(&body)).await
}

/// `GET /history`.
///
/// # Errors
///
/// See [`analyze_domain`].
pub async fn fetch_history(credential: Option<&str>) -> Result<History, ApiError> {
    send::<(), _>(Endpoint::History, credential, None).await
}

/// `POST /checkout`. The backend does not require a credential here.
///
/// # Errors
///
/// See [`analyze_domain`].
pub async fn create_checkout(plan: &str, email: &str) -> Result<CheckoutSession, ApiError> {
    let body = CheckoutRequest { plan: plan.to_owned(), email: email.to_owned() };
    send(Endpoint::Checkout, None, Some(&body)).await
}
