//! Session glue between the shared `SessionState` signal and browser storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! Login, logout, and startup restore all go through here so the signal and
//! `localStorage` never disagree. Route components share the same
//! unauthenticated redirect behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::{SessionState, should_redirect_unauth};
use crate::util::storage;

/// Read the persisted credential once and mark the session as loaded.
pub fn restore_session(session: RwSignal<SessionState>) {
    let stored = storage::load_credential();
    session.set(SessionState::restored(stored));
}

/// Store `raw` as the credential and flip the session to authenticated.
///
/// # Errors
///
/// Returns a display message when `raw` is blank.
pub fn sign_in(session: RwSignal<SessionState>, raw: &str) -> Result<(), &'static str> {
    let credential = session.try_update(|s| s.login(raw)).unwrap_or(Err("Session unavailable."))?;
    storage::save_credential(&credential);
    Ok(())
}

/// Clear the credential from both the signal and storage.
pub fn sign_out(session: RwSignal<SessionState>) {
    storage::clear_credential();
    session.update(SessionState::logout);
}

/// Where the login page should send the user after signing in.
#[must_use]
pub fn post_login_target(next: Option<&str>) -> &str {
    match next {
        Some(path) if path.starts_with('/') && !path.starts_with("//") && path != "/login" => path,
        _ => "/",
    }
}

/// Redirect to `/login` whenever the session has loaded and holds no credential.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if session.with(should_redirect_unauth) {
            navigate("/login", NavigateOptions::default());
        }
    });
}
