//! Shared contract between the SEO dashboard front-ends and the analysis API.
//!
//! This crate owns the wire representation used by both `client` (browser)
//! and `cli` (terminal). It performs no I/O: callers bring their own HTTP
//! transport and feed status codes and bodies through [`ApiError::from_response`]
//! and the typed DTOs in [`types`].

pub mod endpoint;
pub mod error;
pub mod input;
pub mod plans;
pub mod types;

pub use endpoint::{CREDENTIAL_HEADER, Endpoint, Method};
pub use error::{ApiError, FORWARDER_UNREACHABLE, Operation};
pub use input::{normalize_country, normalize_query, plausible_email};
pub use plans::{PLANS, Plan, find_plan};
pub use types::{
    AuditCheck, AuditChecks, AuditRequest, AuditResult, CheckoutRequest, CheckoutSession, DomainAnalysis,
    DomainRequest, Health, History, HistoryEntry, KeywordReport, KeywordRequest, RelatedKeyword,
};
