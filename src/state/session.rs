//! Session/auth-state manager.
//!
//! Single in-memory source of truth for the authenticated identity,
//! synchronized with the persisted bearer token. There is no separate
//! authenticated flag: the session is authenticated exactly when an
//! identity is present, so the two can never desync.
//!
//! Transitions happen only through `initialize`, `login`, `register`,
//! `logout`, and `refresh`. Operations that change the authenticated
//! area take the router's navigate function so the transition and the
//! redirect stay coupled in one place.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::{RwSignal, Update};

use crate::net::http::ApiResult;
use crate::net::token;
use crate::net::types::{AuthResponse, LoginPayload, RegisterPayload, User};
use crate::services;

/// Current session: the identity, and whether a transition is in
/// flight (startup counts as one until the first fetch settles).
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Install an identity after login, registration, or refresh.
    pub fn apply_user(&mut self, user: User) {
        self.user = Some(user);
        self.loading = false;
    }

    /// Drop to anonymous.
    pub fn clear(&mut self) {
        self.user = None;
        self.loading = false;
    }
}

/// Startup: if a token is stored, fetch the profile it belongs to; on
/// failure clear the token and end anonymous. The UI is "ready" once
/// this settles.
pub async fn initialize(session: RwSignal<SessionState>) {
    if token::get().is_none() {
        session.update(SessionState::clear);
        return;
    }
    refresh(session).await;
}

/// Re-fetch the identity from the server and replace in-memory state.
/// Used after any profile mutation. A failed fetch means the token is
/// no longer good, so the session ends anonymous.
pub async fn refresh(session: RwSignal<SessionState>) {
    match services::auth::current_user().await {
        Ok(user) => session.update(|s| s.apply_user(user)),
        Err(err) => {
            log::warn!("profile fetch failed: {err}");
            token::remove();
            session.update(SessionState::clear);
        }
    }
}

/// Submit credentials; on success persist the token, store the
/// identity, and enter the dashboard. Errors propagate for display.
pub async fn login(
    session: RwSignal<SessionState>,
    navigate: impl Fn(&str),
    payload: &LoginPayload,
) -> ApiResult<()> {
    session.update(|s| s.loading = true);
    match services::auth::login(payload).await {
        Ok(auth) => {
            finish_auth(session, navigate, auth);
            Ok(())
        }
        Err(err) => {
            session.update(|s| s.loading = false);
            Err(err)
        }
    }
}

/// Submit registration details; same success path as `login`.
pub async fn register(
    session: RwSignal<SessionState>,
    navigate: impl Fn(&str),
    payload: &RegisterPayload,
) -> ApiResult<()> {
    session.update(|s| s.loading = true);
    match services::auth::register(payload).await {
        Ok(auth) => {
            finish_auth(session, navigate, auth);
            Ok(())
        }
        Err(err) => {
            session.update(|s| s.loading = false);
            Err(err)
        }
    }
}

/// Best-effort remote invalidation, then unconditionally clear local
/// token and identity. A failed remote logout never blocks the local
/// sign-out.
pub async fn logout(session: RwSignal<SessionState>, navigate: impl Fn(&str)) {
    if let Err(err) = services::auth::logout().await {
        log::warn!("remote logout failed: {err}");
    }
    token::remove();
    session.update(SessionState::clear);
    navigate("/login");
}

fn finish_auth(session: RwSignal<SessionState>, navigate: impl Fn(&str), auth: AuthResponse) {
    token::set(&auth.access_token);
    session.update(|s| s.apply_user(auth.user));
    navigate("/dashboard");
}
