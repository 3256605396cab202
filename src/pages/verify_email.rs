//! Verify-email page: confirms the one-time code sent during the
//! password reset flow.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::logo::Logo;
use crate::pages::login::FieldErrors;
use crate::state::toast::{self, ToastKind, ToastState};

#[component]
pub fn VerifyEmailPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    let query = use_query_map();

    let code = RwSignal::new(String::new());
    let errors = RwSignal::new(Vec::<String>::new());
    let submitting = RwSignal::new(false);

    let email = move || query.get().get("email").unwrap_or_default();

    let submit = Callback::new(move |()| {
        let address = email();
        if address.is_empty() {
            errors.set(vec![
                "Email address is missing. Please return to the forgot password page.".to_owned(),
            ]);
            return;
        }
        let otp = code.get();
        if otp.trim().chars().count() < 6 {
            errors.set(vec!["Verification code must be at least 6 characters.".to_owned()]);
            return;
        }
        errors.set(Vec::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            submitting.set(true);
            leptos::task::spawn_local(async move {
                let result = crate::services::auth::verify_email(&address, otp.trim()).await;
                submitting.set(false);
                match result {
                    Ok(_) => {
                        toast::notify(
                            toasts,
                            ToastKind::Success,
                            "Code verified",
                            "You can now set a new password.",
                        );
                        let to = format!("/reset-password?email={address}");
                        navigate(&to, NavigateOptions::default());
                    }
                    Err(err) => toast::notify_error(
                        toasts,
                        "Verification failed",
                        format!("Invalid or expired verification code. {err}"),
                    ),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (address, otp, &navigate, toasts, submitting);
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
                <h1 class="auth-card__title">"Verify Your Email"</h1>
                <p class="auth-card__subtitle">
                    {move || format!("Enter the code we sent to {}.", email())}
                </p>

                <FieldErrors errors=errors/>

                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label">
                        "Verification Code"
                        <input
                            class="auth-form__input"
                            type="text"
                            placeholder="123456"
                            prop:value=move || code.get()
                            on:input=move |ev| code.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Verifying..." } else { "Verify" }}
                    </button>
                </form>

                <p class="auth-card__footer">
                    <a href="/forgot-password">"Use a different email"</a>
                </p>
            </div>
        </div>
    }
}
