//! Error taxonomy for backend calls.
//!
//! DESIGN
//! ======
//! Every operation returns `Result<T, ApiError>`. The error carries the
//! [`Operation`] that failed so display text can fall back to a
//! per-operation message when the server supplies no `detail`.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::Deserialize;

/// Backend capability a request belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Analysis,
    Research,
    Audit,
    History,
    Checkout,
    Health,
}

impl Operation {
    /// Generic message shown when a request fails without a usable server detail.
    #[must_use]
    pub fn failure_message(self) -> &'static str {
        match self {
            Self::Analysis => "Domain analysis failed",
            Self::Research => "Keyword research failed",
            Self::Audit => "Site audit failed",
            Self::History => "History request failed",
            Self::Checkout => "Checkout failed",
            Self::Health => "Health check failed",
        }
    }
}

/// Failure of a single backend request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The input was empty after trimming; no request was issued.
    #[error("{} (empty input)", .0.failure_message())]
    InvalidInput(Operation),

    /// HTTP 401: the stored credential was rejected.
    #[error("Invalid credential")]
    Unauthorized(Operation),

    /// HTTP 429: plan quota or rate limit hit.
    #[error("Quota exceeded")]
    QuotaExceeded { op: Operation, detail: Option<String> },

    /// Any other non-success status.
    #[error("{}", request_message(.op, .detail.as_deref()))]
    Request { op: Operation, status: u16, detail: Option<String> },

    /// The request never produced a response.
    #[error("{}", .op.failure_message())]
    Network { op: Operation, message: String },

    /// A success response whose body did not match the expected shape.
    #[error("{}", .op.failure_message())]
    Decode { op: Operation, message: String },
}

/// `error` value the host forwarder sets when the backend never answered.
///
/// A backend-originated 502 carries no such marker and keeps its `detail`.
pub const FORWARDER_UNREACHABLE: &str = "upstream_unreachable";

#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<serde_json::Value>,
    #[serde(default)]
    error: Option<String>,
}

/// Whether `body` is the forwarder's own transport-failure reply.
#[must_use]
pub fn is_forwarder_failure(body: &str) -> bool {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .is_some_and(|kind| kind == FORWARDER_UNREACHABLE)
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn request_message(op: &Operation, detail: Option<&str>) -> String {
    match detail {
        Some(detail) if !detail.trim().is_empty() => detail.to_owned(),
        _ => op.failure_message().to_owned(),
    }
}

/// Pull a human-readable `detail` out of an error body, if there is one.
///
/// The backend usually sends `{"detail": "..."}`; validation failures send a
/// list of objects, in which case the first `msg` is used.
#[must_use]
pub fn extract_detail(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    match parsed.detail? {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Array(items) => items
            .iter()
            .find_map(|item| item.get("msg").and_then(serde_json::Value::as_str))
            .map(str::to_owned),
        _ => None,
    }
}

impl ApiError {
    /// Classify a non-success HTTP response.
    #[must_use]
    pub fn from_response(op: Operation, status: u16, body: &str) -> Self {
        if is_forwarder_failure(body) {
            return Self::Network { op, message: format!("forwarder answered {status}") };
        }
        let detail = extract_detail(body);
        match status {
            401 => Self::Unauthorized(op),
            429 => Self::QuotaExceeded { op, detail },
            _ => Self::Request { op, status, detail },
        }
    }

    /// Transport-level failure (DNS, connection refused, CORS, ...).
    pub fn network(op: Operation, err: impl std::fmt::Display) -> Self {
        Self::Network { op, message: err.to_string() }
    }

    /// Body decode failure on a success status.
    pub fn decode(op: Operation, err: impl std::fmt::Display) -> Self {
        Self::Decode { op, message: err.to_string() }
    }

    /// Operation that produced this error.
    #[must_use]
    pub fn operation(&self) -> Operation {
        match self {
            Self::InvalidInput(op) | Self::Unauthorized(op) => *op,
            Self::QuotaExceeded { op, .. }
            | Self::Request { op, .. }
            | Self::Network { op, .. }
            | Self::Decode { op, .. } => *op,
        }
    }

    /// HTTP status behind this error, when one was received.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized(_) => Some(401),
            Self::QuotaExceeded { .. } => Some(429),
            Self::Request { status, .. } => Some(*status),
            Self::InvalidInput(_) | Self::Network { .. } | Self::Decode { .. } => None,
        }
    }
}
