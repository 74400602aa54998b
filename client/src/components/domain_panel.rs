//! Domain overview tool.
//!
//! SYSTEM CONTEXT
//! ==============
//! Submits a domain to `POST /domain` and renders the SEO score, page
//! signals, counts, issues, and recommendations.

use leptos::prelude::*;
use reports::DomainAnalysis;

use crate::components::panel_status::status_line;
use crate::components::query_bar::QueryBar;
use crate::components::score_badge::{Metric, ScoreBadge};
use crate::state::panel::{PanelState, PanelStatus};
use crate::state::session::SessionState;
use crate::util::format::{format_count, format_seconds, format_timestamp};

#[component]
pub fn DomainPanel() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let panel = RwSignal::new(PanelState::<DomainAnalysis>::default());
    let input = RwSignal::new(String::new());

    let on_submit = Callback::new(move |()| {
        let raw = input.get_untracked();
        if reports::normalize_query(&raw).is_none() {
            return;
        }
        let Some(ticket) = panel.try_update(|p| p.begin(&raw)).flatten() else {
            return;
        };
        let credential = session.with_untracked(|s| s.credential().map(str::to_owned));

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::analyze_domain(credential.as_deref(), &ticket.query).await;
            panel.update(|p| {
                if !p.resolve(&ticket, result) {
                    log::debug!("dropped stale domain result for {}", ticket.query);
                }
            });
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (ticket, credential);
    });

    let busy = Signal::derive(move || panel.with(PanelState::is_busy));

    view! {
        <section class="panel panel--domain">
            <h2 class="panel__title">"Domain Overview"</h2>
            <QueryBar
                value=input
                placeholder="example.com"
                button_label="Analyze"
                busy=busy
                on_submit=on_submit
            />
            {move || {
                panel.with(|p| match &p.status {
                    PanelStatus::Success(report) => Some(view! { <DomainReport report=report.clone()/> }.into_any()),
                    other => status_line(other, "Enter a domain to analyze its on-page SEO.", "Analyzing domain..."),
                })
            }}
        </section>
    }
}

#[component]
fn DomainReport(report: DomainAnalysis) -> impl IntoView {
    let signals = report.signals();
    let analyzed = report.analyzed_at.as_deref().map(format_timestamp);
    let from_cache = report.from_cache;
    let title = if report.title.is_empty() { "(no title)".to_owned() } else { report.title.clone() };

    view! {
        <div class="report report--domain">
            <header class="report__header">
                <ScoreBadge score=report.score label="SEO score"/>
                <div class="report__heading">
                    <h3 class="report__subject">{report.domain.clone()}</h3>
                    <p class="report__title">{title}</p>
                    {analyzed.map(|at| view! { <p class="report__meta">"Analyzed " {at}</p> })}
                    <Show when=move || from_cache>
                        <span class="report__badge">"cached"</span>
                    </Show>
                </div>
            </header>

            <div class="report__metrics">
                <Metric label="HTTP status" value=report.status_code.to_string()/>
                <Metric label="Load time" value=format_seconds(report.load_time_seconds)/>
                <Metric label="H1 tags" value=report.h1_count.to_string()/>
                <Metric label="Words" value=format_count(u64::from(report.word_count))/>
                <Metric label="Images" value=report.total_images.to_string()/>
                <Metric label="Missing alt" value=report.images_missing_alt.to_string()/>
            </div>

            <ul class="report__signals">
                {signals
                    .into_iter()
                    .map(|(name, on)| {
                        view! {
                            <li class=if on { "signal signal--on" } else { "signal signal--off" }>
                                <span class="signal__mark">{if on { "✓" } else { "✕" }}</span>
                                {name}
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>

            <TextList title="Issues" class="report__issues" items=report.issues.clone() empty="No issues found."/>
            <TextList
                title="Recommendations"
                class="report__recommendations"
                items=report.recommendations.clone()
                empty="Nothing to recommend."
            />
        </div>
    }
}

/// Titled bullet list with an empty-state line.
#[component]
pub fn TextList(
    title: &'static str,
    class: &'static str,
    items: Vec<String>,
    empty: &'static str,
) -> impl IntoView {
    let body = if items.is_empty() {
        view! { <p class="report__empty">{empty}</p> }.into_any()
    } else {
        view! { <ol>{items.into_iter().map(|item| view! { <li>{item}</li> }).collect::<Vec<_>>()}</ol> }.into_any()
    };
    view! {
        <div class=format!("report__list {class}")>
            <h4>{title}</h4>
            {body}
        </div>
    }
}
