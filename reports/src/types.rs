//! Request and response DTOs for the analysis API.
//!
//! DESIGN
//! ======
//! Response types expose short client-side names (`score`, `difficulty`,
//! `volume`) and accept the backend's longer wire names through serde
//! aliases. Decoding is lenient: missing fields fall back to defaults, and
//! nothing beyond shape is validated.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::input::normalize_country;

// =============================================================================
// REQUESTS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainRequest {
    pub domain: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRequest {
    pub keyword: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl KeywordRequest {
    /// Build a request with the country code in its canonical lowercase form.
    #[must_use]
    pub fn new(keyword: impl Into<String>, country: Option<&str>) -> Self {
        Self { keyword: keyword.into(), country: country.and_then(normalize_country) }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditRequest {
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutRequest {
    pub plan: String,
    pub email: String,
}

// =============================================================================
// DOMAIN OVERVIEW
// =============================================================================

/// Result of `POST /domain`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainAnalysis {
    pub domain: String,
    /// Overall SEO score, 0-100.
    #[serde(alias = "seo_score")]
    pub score: u32,
    pub status_code: u16,
    pub load_time_seconds: f64,
    pub has_ssl: bool,
    pub title: String,
    pub title_length: u32,
    pub meta_description: String,
    pub description_length: u32,
    pub h1_count: u32,
    pub h1_text: String,
    pub has_canonical: bool,
    pub has_open_graph: bool,
    pub has_schema_markup: bool,
    pub has_robots_meta: bool,
    pub word_count: u32,
    pub total_images: u32,
    pub images_missing_alt: u32,
    pub issues: Vec<String>,
    pub recommendations: Vec<String>,
    pub analyzed_at: Option<String>,
    /// Set by the backend when the result was served from its cache.
    pub from_cache: bool,
}

impl DomainAnalysis {
    /// Boolean page signals in display order.
    #[must_use]
    pub fn signals(&self) -> [(&'static str, bool); 5] {
        [
            ("HTTPS", self.has_ssl),
            ("Canonical tag", self.has_canonical),
            ("Open Graph", self.has_open_graph),
            ("Schema markup", self.has_schema_markup),
            ("Robots meta", self.has_robots_meta),
        ]
    }
}

// =============================================================================
// KEYWORD RESEARCH
// =============================================================================

/// One related keyword suggestion.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelatedKeyword {
    pub keyword: String,
    pub volume: u64,
    pub difficulty: u32,
    pub cpc: f64,
}

/// Result of `POST /keywords`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordReport {
    pub keyword: String,
    pub country: String,
    /// Estimated monthly searches.
    #[serde(alias = "monthly_volume")]
    pub volume: u64,
    /// Ranking difficulty, 0-100.
    #[serde(alias = "keyword_difficulty")]
    pub difficulty: u32,
    /// Cost per click in USD.
    #[serde(alias = "cpc_usd")]
    pub cpc: f64,
    pub competition: String,
    pub trend: String,
    pub serp_features: Vec<String>,
    #[serde(alias = "related_keywords")]
    pub related: Vec<RelatedKeyword>,
    pub opportunity_score: u32,
    pub analyzed_at: Option<String>,
}

// =============================================================================
// SITE AUDIT
// =============================================================================

/// A single audit check outcome.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditCheck {
    /// Short label, e.g. `"Page Speed"`.
    #[serde(alias = "label")]
    pub check: String,
    pub detail: String,
}

/// Check outcomes partitioned by severity.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditChecks {
    pub passed: Vec<AuditCheck>,
    pub warnings: Vec<AuditCheck>,
    pub issues: Vec<AuditCheck>,
}

/// Result of `POST /audit`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditResult {
    pub url: String,
    /// Share of passed checks, 0-100.
    pub health_score: u32,
    pub total_checks: u32,
    pub passed: u32,
    pub warnings: u32,
    #[serde(alias = "issues_count")]
    pub issues: u32,
    pub checks: AuditChecks,
    pub audited_at: Option<String>,
}

// =============================================================================
// HISTORY / CHECKOUT / HEALTH
// =============================================================================

/// One previously run report.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryEntry {
    /// `domain`, `keyword`, or `audit`.
    #[serde(rename = "type")]
    pub kind: String,
    pub query: String,
    pub score: Option<u32>,
    pub volume: Option<u64>,
    pub at: String,
}

/// Result of `GET /history`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct History {
    pub reports: Vec<HistoryEntry>,
    pub quota_used: u32,
    /// `-1` means unlimited.
    pub quota_limit: i32,
}

impl History {
    /// Usage label such as `3 / 10` or `12 / unlimited`.
    #[must_use]
    pub fn quota_label(&self) -> String {
        if self.quota_limit < 0 {
            format!("{} / unlimited", self.quota_used)
        } else {
            format!("{} / {}", self.quota_used, self.quota_limit)
        }
    }
}

/// Result of `POST /checkout`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutSession {
    /// Payment page the browser must navigate to.
    pub checkout_url: String,
}

/// Result of `GET /health`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Health {
    pub status: String,
    pub timestamp: Option<String>,
}
