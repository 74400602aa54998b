//! Dashboard header: brand, tool tabs, pricing link, and logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Switching tabs changes `UiState` and mirrors the choice into `?tool=` so
//! the view can be deep-linked. Each panel keeps its own request state while
//! hidden.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::{SessionState, mask_credential};
use crate::state::ui::{ToolTab, UiState};
use crate::util::auth::sign_out;

#[component]
pub fn Toolbar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();
    let navigate_tab = navigate.clone();

    let key_label = move || session.with(|s| s.credential().map(mask_credential).unwrap_or_default());

    let on_logout = move |_| {
        sign_out(session);
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <header class="toolbar">
            <a class="toolbar__brand" href="/">"SEO Dashboard"</a>
            <nav class="toolbar__tabs" role="tablist">
                {ToolTab::ALL
                    .into_iter()
                    .map(|tab| {
                        let navigate = navigate_tab.clone();
                        let active = move || ui.with(|u| u.active_tool == tab);
                        view! {
                            <button
                                class=move || if active() { "toolbar__tab toolbar__tab--active" } else { "toolbar__tab" }
                                role="tab"
                                aria-selected=move || active().to_string()
                                on:click=move |_| {
                                    ui.update(|u| u.active_tool = tab);
                                    let options = NavigateOptions { replace: true, ..NavigateOptions::default() };
                                    navigate(&format!("/?tool={}", tab.slug()), options);
                                }
                            >
                                {tab.label()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>
            <span class="toolbar__spacer"></span>
            <a class="btn toolbar__pricing" href="/pricing">"Upgrade"</a>
            <span class="toolbar__key" title="API key">{key_label}</span>
            <button class="btn toolbar__logout" on:click=on_logout title="Logout">
                "Logout"
            </button>
        </header>
    }
}
