//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! host is a stateless forwarder, so it only carries one pooled HTTP client
//! and the backend base URL.

use std::sync::Arc;
use std::time::Duration;

use crate::config::HostConfig;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; inner fields are cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub upstream: Arc<str>,
}

impl AppState {
    /// Build the forwarding client from host config.
    ///
    /// # Errors
    ///
    /// Returns the reqwest builder error when the TLS backend fails to initialize.
    pub fn new(config: &HostConfig) -> Result<Self, reqwest::Error> {
        let mut builder =
            reqwest::Client::builder().connect_timeout(Duration::from_secs(config.timeouts.connect_secs));
        if let Some(secs) = config.timeouts.request_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(Self { http: builder.build()?, upstream: Arc::from(config.upstream.as_str()) })
    }
}
