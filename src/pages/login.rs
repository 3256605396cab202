//! Login page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::logo::Logo;
use crate::state::session::SessionState;
use crate::state::toast::{self, ToastState};
use crate::util::forms;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(Vec::<String>::new());
    let submitting = RwSignal::new(false);

    let submit = Callback::new(move |()| {
        match forms::validate_login(&email.get(), &password.get()) {
            Err(messages) => errors.set(messages),
            Ok(payload) => {
                errors.set(Vec::new());
                #[cfg(feature = "hydrate")]
                {
                    let navigate = navigate.clone();
                    submitting.set(true);
                    leptos::task::spawn_local(async move {
                        let result = crate::state::session::login(
                            session,
                            |to| navigate(to, NavigateOptions::default()),
                            &payload,
                        )
                        .await;
                        submitting.set(false);
                        if let Err(err) = result {
                            toast::notify_error(toasts, "Login failed", err.to_string());
                        }
                    });
                }
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = (payload, &navigate, session, toasts, submitting);
                }
            }
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit.run(());
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <Logo/>
                <h1 class="auth-card__title">"Welcome Back"</h1>
                <p class="auth-card__subtitle">"Log in to see your curated matches."</p>

                <FieldErrors errors=errors/>

                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label">
                        "Email"
                        <input
                            class="auth-form__input"
                            type="email"
                            placeholder="your@email.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Password"
                        <input
                            class="auth-form__input"
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Logging in..." } else { "Log In" }}
                    </button>
                </form>

                <p class="auth-card__footer">
                    <a href="/forgot-password">"Forgot password?"</a>
                </p>
                <p class="auth-card__footer">
                    "New here? " <a href="/register">"Create a profile"</a>
                </p>
            </div>
        </div>
    }
}

/// Inline list of validation messages, hidden when empty.
#[component]
pub fn FieldErrors(errors: RwSignal<Vec<String>>) -> impl IntoView {
    view! {
        <Show when=move || !errors.get().is_empty()>
            <ul class="auth-form__errors">
                {move || {
                    errors
                        .get()
                        .into_iter()
                        .map(|message| view! { <li>{message}</li> })
                        .collect::<Vec<_>>()
                }}
            </ul>
        </Show>
    }
}
