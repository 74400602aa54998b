//! Plain-text report rendering for terminal output.

use std::fmt::Write;

use reports::{AuditCheck, AuditResult, DomainAnalysis, History, KeywordReport, Plan};

/// Mark used for boolean signals and passed checks.
fn mark(ok: bool) -> &'static str {
    if ok { "[x]" } else { "[ ]" }
}

#[must_use]
pub fn domain(report: &DomainAnalysis) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}  score {}/100", report.domain, report.score);
    let _ = writeln!(out, "  status {}  load {:.2}s", report.status_code, report.load_time_seconds);
    let _ = writeln!(out, "  title ({} chars): {}", report.title_length, report.title);
    let _ = writeln!(out, "  description ({} chars): {}", report.description_length, report.meta_description);
    let _ = writeln!(out, "  h1 x{}: {}", report.h1_count, report.h1_text);
    let _ = writeln!(
        out,
        "  words {}  images {} ({} missing alt)",
        report.word_count, report.total_images, report.images_missing_alt
    );
    for (label, ok) in report.signals() {
        let _ = writeln!(out, "  {} {label}", mark(ok));
    }
    push_list(&mut out, "Issues", &report.issues);
    push_list(&mut out, "Recommendations", &report.recommendations);
    out
}

#[must_use]
pub fn keywords(report: &KeywordReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", report.keyword, report.country);
    let _ = writeln!(
        out,
        "  volume {}/mo  difficulty {}/100  cpc ${:.2}",
        report.volume, report.difficulty, report.cpc
    );
    let _ = writeln!(
        out,
        "  competition {}  trend {}  opportunity {}",
        report.competition, report.trend, report.opportunity_score
    );
    if !report.serp_features.is_empty() {
        let _ = writeln!(out, "  SERP: {}", report.serp_features.join(", "));
    }
    if !report.related.is_empty() {
        let _ = writeln!(out, "Related:");
        for related in &report.related {
            let _ = writeln!(
                out,
                "  {:<32} {:>8}  kd {:>3}  ${:.2}",
                related.keyword, related.volume, related.difficulty, related.cpc
            );
        }
    }
    out
}

#[must_use]
pub fn audit(result: &AuditResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}  health {}/100", result.url, result.health_score);
    let _ = writeln!(
        out,
        "  {} checks: {} passed, {} warnings, {} issues",
        result.total_checks, result.passed, result.warnings, result.issues
    );
    push_checks(&mut out, "Issues", &result.checks.issues);
    push_checks(&mut out, "Warnings", &result.checks.warnings);
    push_checks(&mut out, "Passed", &result.checks.passed);
    out
}

#[must_use]
pub fn history(history: &History) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Quota: {}", history.quota_label());
    if history.reports.is_empty() {
        let _ = writeln!(out, "No reports yet.");
    }
    for entry in &history.reports {
        let metric = match (entry.score, entry.volume) {
            (Some(score), _) => format!("score {score}"),
            (None, Some(volume)) => format!("volume {volume}"),
            (None, None) => String::new(),
        };
        let _ = writeln!(out, "  {:<20} {:<8} {:<32} {metric}", entry.at, entry.kind, entry.query);
    }
    out
}

#[must_use]
pub fn plans(plans: &[Plan]) -> String {
    let mut out = String::new();
    for plan in plans {
        let quota = if plan.is_unlimited() { "unlimited".to_owned() } else { plan.reports_per_month.to_string() };
        let star = if plan.featured { " *" } else { "" };
        let _ = writeln!(out, "{:<14} {:<10} {quota} reports/month{star}", plan.id, plan.price_label());
        for feature in plan.features {
            let _ = writeln!(out, "    - {feature}");
        }
    }
    out
}

fn push_list(out: &mut String, title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    let _ = writeln!(out, "{title}:");
    for item in items {
        let _ = writeln!(out, "  - {item}");
    }
}

fn push_checks(out: &mut String, title: &str, checks: &[AuditCheck]) {
    if checks.is_empty() {
        return;
    }
    let _ = writeln!(out, "{title}:");
    for check in checks {
        let _ = writeln!(out, "  {}: {}", check.check, check.detail);
    }
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
