//! Auth token persistence.
//!
//! The sign-in response's token is kept in `localStorage` so a reload stays
//! signed in. Requires a browser environment; SSR paths safely no-op so
//! server rendering stays deterministic.

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "auth_token";

/// Read the stored auth token, if any.
pub fn read() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window()?;
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(token)) = storage.get_item(STORAGE_KEY) {
                if !token.is_empty() {
                    return Some(token);
                }
            }
        }
        None
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the token after a successful sign-in.
pub fn store(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, token);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Drop the token on sign-out.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(STORAGE_KEY);
            }
        }
    }
}
