use super::*;

// =============================================================
// ToastState queue behavior
// =============================================================

#[test]
fn toast_state_default_empty() {
    let state = ToastState::default();
    assert!(state.toasts.is_empty());
}

#[test]
fn push_appends_and_returns_id() {
    let mut state = ToastState::default();
    let id = state.push(ToastKind::Error, "Update Failed", "Could not save changes.");
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, id);
    assert_eq!(state.toasts[0].kind, ToastKind::Error);
}

#[test]
fn dismiss_removes_only_that_toast() {
    let mut state = ToastState::default();
    let first = state.push(ToastKind::Success, "Saved", "");
    let second = state.push(ToastKind::Error, "Failed", "");
    state.dismiss(&first);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, second);
}

#[test]
fn dismiss_unknown_id_is_noop() {
    let mut state = ToastState::default();
    state.push(ToastKind::Success, "Saved", "");
    state.dismiss("nope");
    assert_eq!(state.toasts.len(), 1);
}
