//! Reset-password page: sets a new password using the verified code.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::logo::Logo;
use crate::net::types::ResetPasswordPayload;
use crate::pages::login::FieldErrors;
use crate::state::toast::{self, ToastKind, ToastState};

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    let query = use_query_map();

    let code = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirmation = RwSignal::new(String::new());
    let errors = RwSignal::new(Vec::<String>::new());
    let submitting = RwSignal::new(false);

    let email = move || query.get().get("email").unwrap_or_default();

    let submit = Callback::new(move |()| {
        let mut messages = Vec::new();
        let address = email();
        if address.is_empty() {
            messages.push("Email address is missing from the reset link.".to_owned());
        }
        if code.get().trim().is_empty() {
            messages.push("Verification code is required.".to_owned());
        }
        if password.get().chars().count() < 8 {
            messages.push("Password must be at least 8 characters.".to_owned());
        }
        if password.get() != confirmation.get() {
            messages.push("Passwords do not match.".to_owned());
        }
        if !messages.is_empty() {
            errors.set(messages);
            return;
        }
        errors.set(Vec::new());

        let payload = ResetPasswordPayload {
            email: address,
            otp: code.get().trim().to_owned(),
            password: password.get(),
            password_confirmation: confirmation.get(),
        };

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            submitting.set(true);
            leptos::task::spawn_local(async move {
                let result = crate::services::auth::reset_password(&payload).await;
                submitting.set(false);
                match result {
                    Ok(_) => {
                        toast::notify(
                            toasts,
                            ToastKind::Success,
                            "Password reset",
                            "You can now log in with your new password.",
                        );
                        navigate("/login", NavigateOptions::default());
                    }
                    Err(err) => toast::notify_error(toasts, "Reset failed", err.to_string()),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (payload, &navigate, toasts, submitting);
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
                <h1 class="auth-card__title">"Set a New Password"</h1>
                <p class="auth-card__subtitle">
                    {move || format!("Resetting the password for {}.", email())}
                </p>

                <FieldErrors errors=errors/>

                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label">
                        "Verification Code"
                        <input
                            class="auth-form__input"
                            type="text"
                            prop:value=move || code.get()
                            on:input=move |ev| code.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "New Password"
                        <input
                            class="auth-form__input"
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Confirm New Password"
                        <input
                            class="auth-form__input"
                            type="password"
                            prop:value=move || confirmation.get()
                            on:input=move |ev| confirmation.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Saving..." } else { "Reset Password" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
