//! Report history and quota usage.

use leptos::prelude::*;
use reports::{History, HistoryEntry};

use crate::components::panel_status::status_line;
use crate::state::panel::{PanelState, PanelStatus};
use crate::state::session::SessionState;
use crate::util::format::{format_count, format_timestamp};
use crate::util::score::ScoreTier;

#[component]
pub fn HistoryPanel() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let panel = RwSignal::new(PanelState::<History>::default());

    let refresh = Callback::new(move |()| {
        let ticket = panel.try_update(PanelState::begin_fetch);
        let credential = session.with_untracked(|s| s.credential().map(str::to_owned));

        #[cfg(feature = "hydrate")]
        {
            if let Some(ticket) = ticket {
                leptos::task::spawn_local(async move {
                    let result = crate::net::api::fetch_history(credential.as_deref()).await;
                    panel.update(|p| {
                        p.resolve(&ticket, result);
                    });
                });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (ticket, credential);
    });

    // Load once on mount.
    Effect::new(move || refresh.run(()));

    view! {
        <section class="panel panel--history">
            <header class="panel__header">
                <h2 class="panel__title">"History"</h2>
                <button
                    class="btn panel__refresh"
                    on:click=move |_| refresh.run(())
                    disabled=move || panel.with(PanelState::is_busy)
                >
                    "Refresh"
                </button>
            </header>
            {move || {
                panel.with(|p| match &p.status {
                    PanelStatus::Success(history) => Some(view! { <HistoryView history=history.clone()/> }.into_any()),
                    other => status_line(other, "No history loaded.", "Loading history..."),
                })
            }}
        </section>
    }
}

#[component]
fn HistoryView(history: History) -> impl IntoView {
    let quota = history.quota_label();
    let rows = history.reports.into_iter().rev().collect::<Vec<_>>();
    let empty = rows.is_empty();

    view! {
        <div class="report report--history">
            <p class="history__quota">"Reports this month: " <strong>{quota}</strong></p>
            <Show when=move || empty>
                <p class="report__empty">"No reports yet."</p>
            </Show>
            <ul class="history__list">
                {rows.into_iter().map(|entry| view! { <HistoryRow entry=entry/> }).collect::<Vec<_>>()}
            </ul>
        </div>
    }
}

#[component]
fn HistoryRow(entry: HistoryEntry) -> impl IntoView {
    let metric = match (entry.score, entry.volume) {
        (Some(score), _) => {
            let tier = ScoreTier::for_score(score);
            view! { <span class=format!("history__metric {}", tier.css_class())>{score}</span> }.into_any()
        }
        (None, Some(volume)) => {
            view! { <span class="history__metric">{format!("{} / mo", format_count(volume))}</span> }.into_any()
        }
        (None, None) => view! { <span class="history__metric">"—"</span> }.into_any(),
    };

    view! {
        <li class=format!("history__row history__row--{}", entry.kind)>
            <span class="history__kind">{entry.kind.clone()}</span>
            <span class="history__query">{entry.query.clone()}</span>
            {metric}
            <span class="history__at">{format_timestamp(&entry.at)}</span>
        </li>
    }
}
