//! Forgot-password page: requests a reset code, then hands off to the
//! verify-email step.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::logo::Logo;
use crate::pages::login::FieldErrors;
use crate::state::toast::{self, ToastKind, ToastState};
use crate::util::forms;

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let errors = RwSignal::new(Vec::<String>::new());
    let submitting = RwSignal::new(false);

    let submit = Callback::new(move |()| {
        let address = email.get();
        if !forms::looks_like_email(&address) {
            errors.set(vec!["Please enter a valid email.".to_owned()]);
            return;
        }
        errors.set(Vec::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            submitting.set(true);
            leptos::task::spawn_local(async move {
                let result = crate::services::auth::forgot_password(address.trim()).await;
                submitting.set(false);
                match result {
                    Ok(_) => {
                        toast::notify(
                            toasts,
                            ToastKind::Success,
                            "Reset code sent",
                            "Check your email for the verification code.",
                        );
                        let to = format!("/verify-email?email={}", address.trim());
                        navigate(&to, NavigateOptions::default());
                    }
                    Err(err) => toast::notify_error(toasts, "Request failed", err.to_string()),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (address, &navigate, toasts, submitting);
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
                <h1 class="auth-card__title">"Forgot Password"</h1>
                <p class="auth-card__subtitle">
                    "Enter your email to receive a password reset code."
                </p>

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
                    <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Sending..." } else { "Send Reset Code" }}
                    </button>
                </form>

                <p class="auth-card__footer">
                    "Remember your password? " <a href="/login">"Log in"</a>
                </p>
            </div>
        </div>
    }
}
