//! Keyword research tool.
//!
//! SYSTEM CONTEXT
//! ==============
//! Submits a keyword plus a country code to `POST /keywords` and renders
//! volume, difficulty, CPC, competition, SERP features, and related terms.

use leptos::prelude::*;
use reports::{KeywordReport, RelatedKeyword};

use crate::components::domain_panel::TextList;
use crate::components::panel_status::status_line;
use crate::components::query_bar::QueryBar;
use crate::components::score_badge::{Metric, ScoreBadge};
use crate::state::panel::{PanelState, PanelStatus};
use crate::state::session::SessionState;
use crate::util::format::{format_count, format_cpc};
use crate::util::score::ScoreTier;

/// Country codes offered in the selector; the backend accepts any string.
pub const COUNTRIES: &[(&str, &str)] = &[
    ("us", "United States"),
    ("gb", "United Kingdom"),
    ("ca", "Canada"),
    ("au", "Australia"),
    ("de", "Germany"),
    ("fr", "France"),
    ("in", "India"),
];

#[component]
pub fn KeywordPanel() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let panel = RwSignal::new(PanelState::<KeywordReport>::default());
    let input = RwSignal::new(String::new());
    let country = RwSignal::new("us".to_owned());

    let on_submit = Callback::new(move |()| {
        let raw = input.get_untracked();
        if reports::normalize_query(&raw).is_none() {
            return;
        }
        let Some(ticket) = panel.try_update(|p| p.begin(&raw)).flatten() else {
            return;
        };
        let credential = session.with_untracked(|s| s.credential().map(str::to_owned));
        let country = country.get_untracked();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result =
                crate::net::api::research_keyword(credential.as_deref(), &ticket.query, Some(&country)).await;
            panel.update(|p| {
                if !p.resolve(&ticket, result) {
                    log::debug!("dropped stale keyword result for {}", ticket.query);
                }
            });
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (ticket, credential, country);
    });

    let busy = Signal::derive(move || panel.with(PanelState::is_busy));

    view! {
        <section class="panel panel--keywords">
            <h2 class="panel__title">"Keyword Research"</h2>
            <QueryBar
                value=input
                placeholder="seo audit tool"
                button_label="Research"
                busy=busy
                on_submit=on_submit
            >
                <select
                    class="query-bar__select"
                    prop:value=move || country.get()
                    on:change=move |ev| country.set(event_target_value(&ev))
                >
                    {COUNTRIES
                        .iter()
                        .map(|(code, name)| view! { <option value=*code>{*name}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </QueryBar>
            {move || {
                panel.with(|p| match &p.status {
                    PanelStatus::Success(report) => Some(view! { <KeywordView report=report.clone()/> }.into_any()),
                    other => status_line(other, "Enter a keyword to see volume and difficulty.", "Researching keyword..."),
                })
            }}
        </section>
    }
}

#[component]
fn KeywordView(report: KeywordReport) -> impl IntoView {
    let related = report.related.clone();

    view! {
        <div class="report report--keywords">
            <header class="report__header">
                <ScoreBadge score=report.difficulty label="Difficulty" inverted=true/>
                <div class="report__heading">
                    <h3 class="report__subject">{report.keyword.clone()}</h3>
                    <p class="report__meta">{report.country.to_uppercase()}</p>
                </div>
            </header>

            <div class="report__metrics">
                <Metric label="Monthly volume" value=format_count(report.volume)/>
                <Metric label="CPC" value=format_cpc(report.cpc)/>
                <Metric label="Competition" value=report.competition.clone()/>
                <Metric label="Opportunity" value=report.opportunity_score.to_string()/>
                <Metric label="Trend" value=report.trend.clone()/>
            </div>

            <TextList
                title="SERP features"
                class="report__serp"
                items=report.serp_features.clone()
                empty="No SERP features reported."
            />

            <RelatedTable rows=related/>
        </div>
    }
}

#[component]
fn RelatedTable(rows: Vec<RelatedKeyword>) -> impl IntoView {
    if rows.is_empty() {
        return view! { <p class="report__empty">"No related keywords."</p> }.into_any();
    }
    view! {
        <table class="report__table">
            <thead>
                <tr>
                    <th>"Related keyword"</th>
                    <th>"Volume"</th>
                    <th>"Difficulty"</th>
                    <th>"CPC"</th>
                </tr>
            </thead>
            <tbody>
                {rows
                    .into_iter()
                    .map(|row| {
                        let tier = ScoreTier::for_difficulty(row.difficulty);
                        view! {
                            <tr>
                                <td>{row.keyword}</td>
                                <td>{format_count(row.volume)}</td>
                                <td class=tier.css_class()>{row.difficulty}</td>
                                <td>{format_cpc(row.cpc)}</td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
    .into_any()
}
