//! Site audit tool.
//!
//! Submits a URL to `POST /audit` and renders the health score plus the
//! passed / warning / issue check lists.

use leptos::prelude::*;
use reports::{AuditCheck, AuditResult};

use crate::components::panel_status::status_line;
use crate::components::query_bar::QueryBar;
use crate::components::score_badge::{Metric, ScoreBadge};
use crate::state::panel::{PanelState, PanelStatus};
use crate::state::session::SessionState;
use crate::util::format::format_timestamp;

#[component]
pub fn AuditPanel() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let panel = RwSignal::new(PanelState::<AuditResult>::default());
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
            let result = crate::net::api::audit_site(credential.as_deref(), &ticket.query).await;
            panel.update(|p| {
                if !p.resolve(&ticket, result) {
                    log::debug!("dropped stale audit result for {}", ticket.query);
                }
            });
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (ticket, credential);
    });

    let busy = Signal::derive(move || panel.with(PanelState::is_busy));

    view! {
        <section class="panel panel--audit">
            <h2 class="panel__title">"Site Audit"</h2>
            <QueryBar
                value=input
                placeholder="https://example.com"
                button_label="Audit"
                busy=busy
                on_submit=on_submit
            />
            {move || {
                panel.with(|p| match &p.status {
                    PanelStatus::Success(result) => Some(view! { <AuditView result=result.clone()/> }.into_any()),
                    other => status_line(other, "Enter a URL to run a technical audit.", "Auditing site..."),
                })
            }}
        </section>
    }
}

#[component]
fn AuditView(result: AuditResult) -> impl IntoView {
    let audited = result.audited_at.as_deref().map(format_timestamp);
    let checks = result.checks.clone();

    view! {
        <div class="report report--audit">
            <header class="report__header">
                <ScoreBadge score=result.health_score label="Health"/>
                <div class="report__heading">
                    <h3 class="report__subject">{result.url.clone()}</h3>
                    {audited.map(|at| view! { <p class="report__meta">"Audited " {at}</p> })}
                </div>
            </header>

            <div class="report__metrics">
                <Metric label="Passed" value=result.passed.to_string()/>
                <Metric label="Warnings" value=result.warnings.to_string()/>
                <Metric label="Issues" value=result.issues.to_string()/>
                <Metric label="Total checks" value=result.total_checks.to_string()/>
            </div>

            <CheckList title="Issues" severity="issue" checks=checks.issues/>
            <CheckList title="Warnings" severity="warning" checks=checks.warnings/>
            <CheckList title="Passed" severity="passed" checks=checks.passed/>
        </div>
    }
}

#[component]
fn CheckList(title: &'static str, severity: &'static str, checks: Vec<AuditCheck>) -> impl IntoView {
    let count = checks.len();
    view! {
        <div class=format!("checks checks--{severity}")>
            <h4>{title} " (" {count} ")"</h4>
            <ul>
                {checks
                    .into_iter()
                    .map(|c| {
                        view! {
                            <li class="check">
                                <span class="check__label">{c.check}</span>
                                <span class="check__detail">{c.detail}</span>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </div>
    }
}
