//! Async HTTP client for the analysis API.
//!
//! Requests are built from the shared endpoint table so the terminal and the
//! browser hit identical paths, methods, and headers. Successful bodies come
//! back as raw JSON; callers decode into the typed DTOs or print verbatim.

use std::time::Duration;

use reports::{ApiError, CREDENTIAL_HEADER, Endpoint, Method, Operation};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::CliError;

const REQUEST_TIMEOUT_SECS: u64 = 120;
const CONNECT_TIMEOUT_SECS: u64 = 10;

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl ApiClient {
    /// # Errors
    ///
    /// Returns the reqwest builder error when the TLS backend fails to initialize.
    pub fn new(base_url: &str, api_key: Option<String>) -> Result<Self, CliError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()?;
        let api_key = api_key.map(|k| k.trim().to_owned()).filter(|k| !k.is_empty());
        Ok(Self { http, base_url: base_url.trim_end_matches('/').to_owned(), api_key })
    }

    /// Prepare the request for `endpoint` without sending it.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::MissingApiKey`] when the endpoint needs a credential
    /// and none was configured.
    pub fn request<B: Serialize>(&self, endpoint: Endpoint, body: Option<&B>) -> Result<reqwest::RequestBuilder, CliError> {
        let url = endpoint.url(&self.base_url);
        let mut builder = match endpoint.method() {
            Method::Get => self.http.get(url),
            Method::Post => self.http.post(url),
        };
        if endpoint.requires_credential() {
            let key = self.api_key.as_deref().ok_or(CliError::MissingApiKey)?;
            builder = builder.header(CREDENTIAL_HEADER, key);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }
        Ok(builder)
    }

    /// Send a request and return the success body as JSON.
    ///
    /// # Errors
    ///
    /// Non-2xx responses and transport failures come back as [`ApiError`].
    pub async fn call<B: Serialize>(&self, endpoint: Endpoint, body: Option<&B>) -> Result<Value, CliError> {
        let op = endpoint.operation();
        let response = self.request(endpoint, body)?.send().await.map_err(|e| ApiError::network(op, e))?;
        let status = response.status().as_u16();
        let text = response.text().await.map_err(|e| ApiError::network(op, e))?;
        Ok(decode_body(op, status, &text)?)
    }
}

/// Classify a raw response: JSON on success, [`ApiError`] otherwise.
///
/// # Errors
///
/// Returns the classified error for non-2xx statuses or unparseable bodies.
pub fn decode_body(op: Operation, status: u16, body: &str) -> Result<Value, ApiError> {
    if (200..300).contains(&status) {
        serde_json::from_str(body).map_err(|e| ApiError::decode(op, e))
    } else {
        Err(ApiError::from_response(op, status, body))
    }
}

/// Convert a success body into its typed DTO.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] when the body has the wrong shape.
pub fn typed<T: DeserializeOwned>(op: Operation, value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::decode(op, e))
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
