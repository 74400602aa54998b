//! Shared rendering for the non-success panel states.

use leptos::prelude::*;

use crate::state::panel::PanelStatus;

/// Hint, busy indicator, or error line; `None` for `Success`.
pub fn status_line<T>(status: &PanelStatus<T>, hint: &'static str, busy: &'static str) -> Option<AnyView> {
    match status {
        PanelStatus::Idle => Some(view! { <p class="panel__hint">{hint}</p> }.into_any()),
        PanelStatus::Submitting => Some(
            view! {
                <p class="panel__busy" role="status">
                    <span class="spinner" aria-hidden="true"></span>
                    {busy}
                </p>
            }
            .into_any(),
        ),
        PanelStatus::Failed(msg) => {
            let msg = msg.clone();
            Some(view! { <p class="panel__error" role="alert">{msg}</p> }.into_any())
        }
        PanelStatus::Success(_) => None,
    }
}
