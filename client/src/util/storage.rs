//! Browser `localStorage` persistence for the session credential.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort browser-only behavior; SSR paths no-op so
//! server rendering stays deterministic.

/// Storage key holding the API credential.
pub const CREDENTIAL_KEY: &str = "seo_api_key";

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Read the stored credential, if any.
pub fn load_credential() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        local_storage()?.get_item(CREDENTIAL_KEY).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the credential so it survives reloads.
pub fn save_credential(credential: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            if storage.set_item(CREDENTIAL_KEY, credential).is_err() {
                log::warn!("could not persist credential");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credential;
    }
}

/// Remove the stored credential.
pub fn clear_credential() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            if storage.remove_item(CREDENTIAL_KEY).is_err() {
                log::warn!("could not clear stored credential");
            }
        }
    }
}
