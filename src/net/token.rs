//! Bearer-token persistence over `localStorage`.
//!
//! One string credential under a fixed key. Read per request by the
//! HTTP layer; written only by the session manager, so there is a
//! single writer. Requires a browser environment.

#[cfg(feature = "hydrate")]
const TOKEN_KEY: &str = "token";

/// Read the stored bearer token, if any.
pub fn get() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window()?;
        window.local_storage().ok().flatten()?.get_item(TOKEN_KEY).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the bearer token.
pub fn set(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(TOKEN_KEY, token);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Remove the stored bearer token.
pub fn remove() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(TOKEN_KEY);
            }
        }
    }
}
