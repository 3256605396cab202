//! Registration page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::logo::Logo;
use crate::pages::login::FieldErrors;
use crate::state::session::SessionState;
use crate::state::toast::{self, ToastState};
use crate::util::forms;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirmation = RwSignal::new(String::new());
    let errors = RwSignal::new(Vec::<String>::new());
    let submitting = RwSignal::new(false);

    let submit = Callback::new(move |()| {
        let validated = forms::validate_registration(
            &name.get(),
            &email.get(),
            &password.get(),
            &confirmation.get(),
        );
        match validated {
            Err(messages) => errors.set(messages),
            Ok(payload) => {
                errors.set(Vec::new());
                #[cfg(feature = "hydrate")]
                {
                    let navigate = navigate.clone();
                    submitting.set(true);
                    leptos::task::spawn_local(async move {
                        let result = crate::state::session::register(
                            session,
                            |to| navigate(to, NavigateOptions::default()),
                            &payload,
                        )
                        .await;
                        submitting.set(false);
                        if let Err(err) = result {
                            toast::notify_error(toasts, "Registration failed", err.to_string());
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
                <h1 class="auth-card__title">"Create Your Profile"</h1>
                <p class="auth-card__subtitle">
                    "A private profile is the first step toward a curated introduction."
                </p>

                <FieldErrors errors=errors/>

                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label">
                        "Full Name"
                        <input
                            class="auth-form__input"
                            type="text"
                            placeholder="Your full name"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
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
                    <label class="auth-form__label">
                        "Confirm Password"
                        <input
                            class="auth-form__input"
                            type="password"
                            prop:value=move || confirmation.get()
                            on:input=move |ev| confirmation.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Creating..." } else { "Sign Up" }}
                    </button>
                </form>

                <p class="auth-card__footer">
                    "Already a member? " <a href="/login">"Log in"</a>
                </p>
            </div>
        </div>
    }
}
