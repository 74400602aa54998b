//! Login page: paste an API key to unlock the dashboard.
//!
//! Any non-blank string is accepted and stored. The backend checks it on the
//! first tool request; a rejected key shows up there as "Invalid credential".

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::state::session::SessionState;
use crate::util::auth::{post_login_target, sign_in};

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    let query = use_query_map();
    let key = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let next = move || query.read().get("next");

    // Covers both an already-stored key and a fresh sign-in.
    Effect::new(move || {
        if session.with(|s| !s.loading && s.is_authenticated()) {
            let target = next();
            navigate(post_login_target(target.as_deref()), NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match sign_in(session, &key.get_untracked()) {
            Ok(()) => info.set(String::new()),
            Err(msg) => info.set(msg.to_owned()),
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"SEO Dashboard"</h1>
                <p class="login-card__subtitle">"Sign in with your API key"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="password"
                        autocomplete="off"
                        placeholder="seo_..."
                        prop:value=move || key.get()
                        on:input=move |ev| key.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit">
                        "Open Dashboard"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <p class="login-card__subtitle">
                    "No key yet? " <a href="/pricing">"Pick a plan"</a>
                    " and it will be emailed to you."
                </p>
            </div>
        </div>
    }
}
