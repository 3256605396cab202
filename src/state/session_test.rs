use super::*;

fn identity(id: i64) -> User {
    User { id, name: "Ada Lovelace".into(), email: "ada@example.com".into(), ..User::default() }
}

// =============================================================
// SessionState transitions
// =============================================================

#[test]
fn session_starts_anonymous_and_loading() {
    let state = SessionState::default();
    assert!(state.user.is_none());
    assert!(state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn apply_user_authenticates_and_settles() {
    let mut state = SessionState::default();
    state.apply_user(identity(7));
    assert!(state.is_authenticated());
    assert!(!state.loading);
    assert_eq!(state.user.as_ref().unwrap().id, 7);
}

#[test]
fn clear_drops_to_anonymous() {
    let mut state = SessionState::default();
    state.apply_user(identity(7));
    state.clear();
    assert!(state.user.is_none());
    assert!(!state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn authenticated_is_exactly_identity_presence() {
    // The invariant: no separate flag exists that could desync.
    let mut state = SessionState::default();
    assert_eq!(state.is_authenticated(), state.user.is_some());
    state.apply_user(identity(1));
    assert_eq!(state.is_authenticated(), state.user.is_some());
    state.clear();
    assert_eq!(state.is_authenticated(), state.user.is_some());
}

#[test]
fn clear_after_failed_startup_fetch_settles_loading() {
    // Startup with a dead token ends anonymous, not stuck loading.
    let mut state = SessionState::default();
    assert!(state.loading);
    state.clear();
    assert!(!state.loading);
    assert!(!state.is_authenticated());
}
