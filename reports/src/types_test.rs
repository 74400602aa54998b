use super::*;
use serde_json::json;

// =============================================================
// DomainAnalysis
// =============================================================

#[test]
fn domain_analysis_reads_seo_score_alias() {
    let body = json!({
        "domain": "example.com",
        "seo_score": 85,
        "has_ssl": true,
        "h1_count": 1,
        "issues": ["Missing meta description"],
        "recommendations": ["Add a meta description (150-160 chars)", "Add canonical URL tag"],
        "analyzed_at": "2026-01-01T00:00:00"
    });
    let parsed: DomainAnalysis = serde_json::from_value(body).expect("domain analysis");
    assert_eq!(parsed.score, 85);
    assert_eq!(parsed.domain, "example.com");
    assert_eq!(parsed.issues, ["Missing meta description"]);
    assert_eq!(parsed.recommendations.len(), 2);
    assert!(!parsed.from_cache);
}

#[test]
fn domain_analysis_signals_follow_flags() {
    let parsed: DomainAnalysis =
        serde_json::from_value(json!({ "has_ssl": true, "has_schema_markup": true })).expect("parse");
    let on: Vec<_> = parsed.signals().iter().filter(|(_, v)| *v).map(|(k, _)| *k).collect();
    assert_eq!(on, ["HTTPS", "Schema markup"]);
}

// =============================================================
// KeywordReport
// =============================================================

#[test]
fn keyword_report_exposes_short_names_for_wire_aliases() {
    let body = json!({
        "keyword": "seo tool",
        "country": "us",
        "monthly_volume": 12000,
        "keyword_difficulty": 42,
        "cpc_usd": 3.25,
        "competition": "Medium",
        "related_keywords": [
            { "keyword": "best seo tool", "volume": 3600, "difficulty": 27, "cpc": 2.6 }
        ]
    });
    let parsed: KeywordReport = serde_json::from_value(body).expect("keyword report");
    assert_eq!(parsed.difficulty, 42);
    assert_eq!(parsed.volume, 12000);
    assert!((parsed.cpc - 3.25).abs() < f64::EPSILON);
    assert_eq!(parsed.related.len(), 1);
    assert_eq!(parsed.related[0].keyword, "best seo tool");
}

#[test]
fn keyword_report_accepts_short_names_directly() {
    let parsed: KeywordReport =
        serde_json::from_value(json!({ "keyword": "x", "difficulty": 7, "volume": 1 })).expect("parse");
    assert_eq!(parsed.difficulty, 7);
    assert_eq!(parsed.volume, 1);
}

#[test]
fn keyword_request_omits_missing_country() {
    let req = KeywordRequest { keyword: "seo".to_owned(), country: None };
    assert_eq!(serde_json::to_value(&req).expect("ser"), json!({ "keyword": "seo" }));
    let req = KeywordRequest { keyword: "seo".to_owned(), country: Some("gb".to_owned()) };
    assert_eq!(serde_json::to_value(&req).expect("ser"), json!({ "keyword": "seo", "country": "gb" }));
}

#[test]
fn keyword_request_new_lowercases_country() {
    assert_eq!(KeywordRequest::new("seo", Some(" GB ")).country.as_deref(), Some("gb"));
    assert_eq!(KeywordRequest::new("seo", Some("us")).country.as_deref(), Some("us"));
    assert_eq!(KeywordRequest::new("seo", Some("  ")).country, None);
    assert_eq!(KeywordRequest::new("seo", None).country, None);
}

// =============================================================
// AuditResult
// =============================================================

#[test]
fn audit_result_partitions_checks_and_reads_issue_count_alias() {
    let body = json!({
        "url": "https://example.com",
        "health_score": 62,
        "total_checks": 8,
        "passed": 5,
        "warnings": 2,
        "issues_count": 1,
        "checks": {
            "passed": [{ "check": "HTTPS", "detail": "SSL certificate active" }],
            "warnings": [{ "check": "Redirects", "detail": "1 redirect(s) detected" }],
            "issues": [{ "check": "Mobile Viewport", "detail": "Missing viewport meta tag" }]
        }
    });
    let parsed: AuditResult = serde_json::from_value(body).expect("audit");
    assert_eq!(parsed.health_score, 62);
    assert_eq!((parsed.passed, parsed.warnings, parsed.issues), (5, 2, 1));
    assert_eq!(parsed.checks.issues[0].check, "Mobile Viewport");
    assert_eq!(parsed.checks.warnings[0].detail, "1 redirect(s) detected");
}

// =============================================================
// History / Checkout
// =============================================================

#[test]
fn history_reads_type_field_and_optional_metrics() {
    let body = json!({
        "reports": [
            { "type": "domain", "query": "example.com", "score": 71, "at": "t1" },
            { "type": "keyword", "query": "seo", "volume": 900, "at": "t2" }
        ],
        "quota_used": 2,
        "quota_limit": 10
    });
    let parsed: History = serde_json::from_value(body).expect("history");
    assert_eq!(parsed.reports[0].kind, "domain");
    assert_eq!(parsed.reports[0].score, Some(71));
    assert_eq!(parsed.reports[1].volume, Some(900));
    assert_eq!(parsed.quota_label(), "2 / 10");
}

#[test]
fn history_quota_label_handles_unlimited() {
    let history = History { reports: vec![], quota_used: 12, quota_limit: -1 };
    assert_eq!(history.quota_label(), "12 / unlimited");
}

#[test]
fn checkout_session_requires_url() {
    let ok: CheckoutSession =
        serde_json::from_value(json!({ "checkout_url": "https://pay.example/sess_123" })).expect("session");
    assert_eq!(ok.checkout_url, "https://pay.example/sess_123");
    assert!(serde_json::from_value::<CheckoutSession>(json!({})).is_err());
}
