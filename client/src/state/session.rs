//! Session state for the browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The application shell owns one `RwSignal<SessionState>` and provides it
//! through context. Panels read the credential from it when they issue a
//! request; only the login and logout actions write to it.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use reports::normalize_query;

pub const EMPTY_CREDENTIAL: &str = "Enter your API key.";

/// Credential held by the current browser session.
///
/// `loading` stays `true` until persisted storage has been read, which only
/// happens after hydration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    credential: Option<String>,
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { credential: None, loading: true }
    }
}

impl SessionState {
    /// Session rebuilt from whatever was found in storage.
    #[must_use]
    pub fn restored(stored: Option<String>) -> Self {
        Self { credential: stored.as_deref().and_then(normalize_query), loading: false }
    }

    /// Accept any non-blank credential. No server round-trip happens here; a
    /// bad key surfaces later as a `401` on the first tool request.
    ///
    /// # Errors
    ///
    /// Returns [`EMPTY_CREDENTIAL`] for blank input, leaving the session as is.
    pub fn login(&mut self, raw: &str) -> Result<String, &'static str> {
        let credential = normalize_query(raw).ok_or(EMPTY_CREDENTIAL)?;
        self.credential = Some(credential.clone());
        self.loading = false;
        Ok(credential)
    }

    pub fn logout(&mut self) {
        self.credential = None;
        self.loading = false;
    }

    #[must_use]
    pub fn credential(&self) -> Option<&str> {
        self.credential.as_deref()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.credential.is_some()
    }
}

/// Gate check: storage has been read and nothing usable was there.
#[must_use]
pub fn should_redirect_unauth(state: &SessionState) -> bool {
    !state.loading && state.credential.is_none()
}

/// Masked form for display, e.g. `seo_…a1b2`.
#[must_use]
pub fn mask_credential(credential: &str) -> String {
    let chars: Vec<char> = credential.chars().collect();
    if chars.len() <= 8 {
        return "•".repeat(chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}…{tail}")
}
