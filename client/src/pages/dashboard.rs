//! Dashboard page hosting the SEO tool panels.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. All panels stay mounted and are
//! hidden when inactive, so switching tabs keeps results and in-flight
//! requests intact. `?tool=<slug>` selects the initial tab.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::audit_panel::AuditPanel;
use crate::components::domain_panel::DomainPanel;
use crate::components::history_panel::HistoryPanel;
use crate::components::keyword_panel::KeywordPanel;
use crate::components::toolbar::Toolbar;
use crate::state::session::SessionState;
use crate::state::ui::{ToolTab, UiState};
use crate::util::auth::install_unauth_redirect;

/// Dashboard page. Redirects to `/login` when no credential is stored.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    install_unauth_redirect(session, use_navigate());

    let query = use_query_map();
    Effect::new(move || {
        if let Some(tab) = query.read().get("tool").as_deref().and_then(ToolTab::from_slug) {
            ui.update(|u| u.active_tool = tab);
        }
    });

    let hidden_unless = move |tab: ToolTab| move || ui.with(|u| u.active_tool != tab);

    view! {
        <Show
            when=move || session.with(SessionState::is_authenticated)
            fallback=move || {
                view! {
                    <div class="dashboard-page">
                        <p>{move || if session.with(|s| s.loading) { "Loading..." } else { "Redirecting to login..." }}</p>
                    </div>
                }
            }
        >
            <div class="dashboard-page">
                <Toolbar/>
                <main class="dashboard-page__body">
                    <div class="dashboard-page__tool" hidden=hidden_unless(ToolTab::Domain)>
                        <DomainPanel/>
                    </div>
                    <div class="dashboard-page__tool" hidden=hidden_unless(ToolTab::Keywords)>
                        <KeywordPanel/>
                    </div>
                    <div class="dashboard-page__tool" hidden=hidden_unless(ToolTab::Audit)>
                        <AuditPanel/>
                    </div>
                    <div class="dashboard-page__tool" hidden=hidden_unless(ToolTab::History)>
                        <HistoryPanel/>
                    </div>
                </main>
            </div>
        </Show>
    }
}
