//! Backend endpoint table.

use crate::error::Operation;

/// Header carrying the opaque API credential.
pub const CREDENTIAL_HEADER: &str = "x-api-key";

/// HTTP method used by an endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// One backend capability.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Domain,
    Keywords,
    Audit,
    History,
    Checkout,
    Health,
}

impl Endpoint {
    /// Path relative to the API base, with a leading slash.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Domain => "/domain",
            Self::Keywords => "/keywords",
            Self::Audit => "/audit",
            Self::History => "/history",
            Self::Checkout => "/checkout",
            Self::Health => "/health",
        }
    }

    #[must_use]
    pub fn method(self) -> Method {
        match self {
            Self::History | Self::Health => Method::Get,
            Self::Domain | Self::Keywords | Self::Audit | Self::Checkout => Method::Post,
        }
    }

    #[must_use]
    pub fn operation(self) -> Operation {
        match self {
            Self::Domain => Operation::Analysis,
            Self::Keywords => Operation::Research,
            Self::Audit => Operation::Audit,
            Self::History => Operation::History,
            Self::Checkout => Operation::Checkout,
            Self::Health => Operation::Health,
        }
    }

    /// Whether the backend expects the credential header on this endpoint.
    #[must_use]
    pub fn requires_credential(self) -> bool {
        !matches!(self, Self::Checkout | Self::Health)
    }

    /// Join the endpoint path onto `base`, tolerating a trailing slash.
    #[must_use]
    pub fn url(self, base: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), self.path())
    }
}

#[cfg(test)]
#[path = "endpoint_test.rs"]
mod tests;
