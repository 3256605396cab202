//! Renders the shared toast queue in a fixed overlay.

use leptos::prelude::*;

use crate::state::toast::ToastState;

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-host">
            {move || {
                toasts
                    .get()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id.clone();
                        view! {
                            <div class=format!("toast {}", toast.kind.class())>
                                <div class="toast__body">
                                    <p class="toast__title">{toast.title}</p>
                                    <p class="toast__detail">{toast.detail}</p>
                                </div>
                                <button
                                    class="toast__dismiss"
                                    on:click=move |_| toasts.update(|t| t.dismiss(&id))
                                >
                                    "\u{d7}"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
