//! Settings: match preferences, account details, and the danger zone.
//!
//! The preferences endpoint returns every record visible to the
//! caller; the member's own record is selected client-side by
//! `user_id`. Saving updates that record when it exists and creates
//! one otherwise.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::shell::DashboardShell;
use crate::net::types::PreferenceUpsert;
use crate::pages::login::FieldErrors;
use crate::services;
use crate::state::session::SessionState;
use crate::state::toast::{self, ToastKind, ToastState};
use crate::util::forms;

#[component]
pub fn SettingsPage() -> impl IntoView {
    view! {
        <DashboardShell>
            <h1 class="page-title">"Settings"</h1>
            <PreferencesCard/>
            <AccountCard/>
            <DangerZone/>
        </DashboardShell>
    }
}

#[component]
fn PreferencesCard() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let prefs = LocalResource::new(|| services::preferences::list());

    let pref_id = RwSignal::new(Option::<i64>::None);
    let age_min = RwSignal::new("25".to_owned());
    let age_max = RwSignal::new("40".to_owned());
    let radius = RwSignal::new("50".to_owned());
    let interests = RwSignal::new(String::new());
    let errors = RwSignal::new(Vec::<String>::new());
    let saving = RwSignal::new(false);

    // Prefill from the member's own record once both the session and
    // the preference list have settled.
    let prefilled = RwSignal::new(false);
    Effect::new(move || {
        if prefilled.get_untracked() {
            return;
        }
        let Some(user_id) = session.get().user.map(|u| u.id) else {
            return;
        };
        let Some(result) = prefs.get() else {
            return;
        };
        if let Ok(list) = result {
            if let Some(mine) = list.iter().find(|p| p.user_id == user_id) {
                pref_id.set(Some(mine.id));
                age_min.set(mine.age_min.to_string());
                age_max.set(mine.age_max.to_string());
                radius.set(mine.location_radius_km.to_string());
                interests.set(mine.desired_interests.join(", "));
            }
            prefilled.set(true);
        }
    });

    let save = Callback::new(move |()| {
        let mut messages = Vec::new();
        let min: u32 = age_min.get().trim().parse().unwrap_or(0);
        let max: u32 = age_max.get().trim().parse().unwrap_or(0);
        let km: u32 = radius.get().trim().parse().unwrap_or(0);
        if min < 18 {
            messages.push("Minimum age must be at least 18.".to_owned());
        }
        if max < min {
            messages.push("Maximum age must not be below the minimum.".to_owned());
        }
        if km == 0 {
            messages.push("Search radius must be at least 1 km.".to_owned());
        }
        if !messages.is_empty() {
            errors.set(messages);
            return;
        }
        errors.set(Vec::new());

        let Some(user_id) = session.get_untracked().user.map(|u| u.id) else {
            return;
        };
        let existing = pref_id.get_untracked();
        let payload = PreferenceUpsert {
            user_id: existing.is_none().then_some(user_id),
            age_min: min,
            age_max: max,
            location_radius_km: km,
            desired_interests: forms::split_interests(&interests.get()),
        };

        #[cfg(feature = "hydrate")]
        {
            let prefs = prefs.clone();
            saving.set(true);
            leptos::task::spawn_local(async move {
                let result = match existing {
                    Some(id) => services::preferences::update(id, &payload).await,
                    None => services::preferences::create(&payload).await,
                };
                match result {
                    Ok(saved) => {
                        pref_id.set(Some(saved.id));
                        prefs.refetch();
                        toast::notify(
                            toasts,
                            ToastKind::Success,
                            "Preferences saved",
                            "Your matchmakers will use these going forward.",
                        );
                    }
                    Err(err) => toast::notify_error(toasts, "Save failed", err.to_string()),
                }
                saving.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (payload, existing, prefs, toasts, saving);
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        save.run(());
    };

    view! {
        <div class="card">
            <h2 class="card__title">"Match Preferences"</h2>
            <FieldErrors errors=errors/>
            <form class="profile-form" on:submit=on_submit>
                <div class="profile-form__row">
                    <label class="profile-form__label">
                        "Minimum Age"
                        <input
                            class="profile-form__input"
                            type="number"
                            min="18"
                            prop:value=move || age_min.get()
                            on:input=move |ev| age_min.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="profile-form__label">
                        "Maximum Age"
                        <input
                            class="profile-form__input"
                            type="number"
                            min="18"
                            prop:value=move || age_max.get()
                            on:input=move |ev| age_max.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="profile-form__label">
                        "Search Radius (km)"
                        <input
                            class="profile-form__input"
                            type="number"
                            min="1"
                            prop:value=move || radius.get()
                            on:input=move |ev| radius.set(event_target_value(&ev))
                        />
                    </label>
                </div>
                <label class="profile-form__label">
                    "Interests You'd Like to Share (comma separated)"
                    <input
                        class="profile-form__input"
                        type="text"
                        placeholder="travel, live music, cooking"
                        prop:value=move || interests.get()
                        on:input=move |ev| interests.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                    {move || if saving.get() { "Saving..." } else { "Save Preferences" }}
                </button>
            </form>
        </div>
    }
}

#[component]
fn AccountCard() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                crate::state::session::logout(session, |to| {
                    navigate(to, NavigateOptions::default());
                })
                .await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, session);
        }
    };

    view! {
        <div class="card">
            <h2 class="card__title">"Account"</h2>
            <dl class="account-facts">
                <dt>"Email"</dt>
                <dd>
                    {move || session.get().user.map(|u| u.email).unwrap_or_default()}
                </dd>
            </dl>
            <button class="btn btn--secondary" on:click=on_logout>"Log Out"</button>
        </div>
    }
}

/// Account deletion, armed by a first click and executed on the
/// second. Local sign-out happens regardless of the remote result.
#[component]
fn DangerZone() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let armed = RwSignal::new(false);
    let deleting = RwSignal::new(false);

    let on_delete = move |_| {
        if !armed.get_untracked() {
            armed.set(true);
            return;
        }
        let Some(user_id) = session.get_untracked().user.map(|u| u.id) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            deleting.set(true);
            leptos::task::spawn_local(async move {
                if let Err(err) = services::users::delete(user_id).await {
                    toast::notify_error(toasts, "Couldn't delete account", err.to_string());
                    deleting.set(false);
                    return;
                }
                crate::state::session::logout(session, |to| {
                    navigate(to, NavigateOptions::default());
                })
                .await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (user_id, &navigate, session, toasts, deleting);
        }
    };

    view! {
        <div class="card card--danger">
            <h2 class="card__title">"Danger Zone"</h2>
            <p class="muted">
                "Deleting your account removes your profile, photos, matches, and messages. \
                 This cannot be undone."
            </p>
            <button class="btn btn--danger" on:click=on_delete disabled=move || deleting.get()>
                {move || {
                    if deleting.get() {
                        "Deleting..."
                    } else if armed.get() {
                        "Confirm Permanent Deletion"
                    } else {
                        "Delete My Account"
                    }
                }}
            </button>
            <Show when=move || armed.get() && !deleting.get()>
                <button class="btn btn--ghost" on:click=move |_| armed.set(false)>"Cancel"</button>
            </Show>
        </div>
    }
}
