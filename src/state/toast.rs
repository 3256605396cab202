//! Transient notification queue.
//!
//! Pages push a toast when an API call fails (or succeeds, for edits)
//! and fall back to an empty/default view; nothing is retried.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::{RwSignal, Update};

/// Queue of currently visible toasts.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
}

/// A single transient notification.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: String,
    pub kind: ToastKind,
    pub title: String,
    pub detail: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast--success",
            ToastKind::Error => "toast--error",
        }
    }
}

impl ToastState {
    /// Append a toast and return its id.
    pub fn push(&mut self, kind: ToastKind, title: impl Into<String>, detail: impl Into<String>) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        self.toasts.push(Toast { id: id.clone(), kind, title: title.into(), detail: detail.into() });
        id
    }

    /// Remove the toast with the given id, leaving the rest.
    pub fn dismiss(&mut self, id: &str) {
        self.toasts.retain(|t| t.id != id);
    }
}

/// Auto-dismiss delay for pushed toasts.
#[cfg(feature = "hydrate")]
const TOAST_MS: u32 = 4_000;

/// Push a toast into the shared queue and schedule its dismissal.
pub fn notify(
    toasts: RwSignal<ToastState>,
    kind: ToastKind,
    title: impl Into<String>,
    detail: impl Into<String>,
) {
    let mut pushed = String::new();
    toasts.update(|t| pushed = t.push(kind, title, detail));

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_MS).await;
            toasts.update(|t| t.dismiss(&pushed));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = pushed;
    }
}

/// Convenience for the common "error toast" path.
pub fn notify_error(toasts: RwSignal<ToastState>, title: impl Into<String>, detail: impl Into<String>) {
    notify(toasts, ToastKind::Error, title, detail);
}
