//! Profile editor: member details, photo management, and the AI
//! profile review.
//!
//! DESIGN
//! ======
//! The form is validated client-side before any request is built; a
//! successful save is followed by a session refresh so every other
//! page sees the updated profile. Photo mutations always refetch the
//! photo list rather than patching local state, so the primary flag
//! shown is whatever the server says it is.

use leptos::prelude::*;

use crate::components::shell::DashboardShell;
use crate::net::types::{AnalyzeProfilePayload, Photo, primary_photo};
use crate::pages::login::FieldErrors;
use crate::services;
use crate::state::session::SessionState;
use crate::state::toast::{self, ToastKind, ToastState};
use crate::util::forms::{self, ProfileForm};

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let photos = LocalResource::new(|| services::photos::list());

    let name = RwSignal::new(String::new());
    let age = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let occupation = RwSignal::new(String::new());
    let education = RwSignal::new(String::new());
    let quote = RwSignal::new(String::new());
    let summary = RwSignal::new(String::new());
    let interests = RwSignal::new(String::new());
    let errors = RwSignal::new(Vec::<String>::new());
    let saving = RwSignal::new(false);

    // Prefill once the session user is available.
    let prefilled = RwSignal::new(false);
    Effect::new(move || {
        if prefilled.get_untracked() {
            return;
        }
        if let Some(user) = session.get().user {
            name.set(user.name);
            age.set(user.age.map(|a| a.to_string()).unwrap_or_default());
            location.set(user.location.unwrap_or_default());
            occupation.set(user.occupation.unwrap_or_default());
            education.set(user.education.unwrap_or_default());
            quote.set(user.quote.unwrap_or_default());
            summary.set(user.profile_summary.unwrap_or_default());
            interests.set(user.interests.join(", "));
            prefilled.set(true);
        }
    });

    let save = Callback::new(move |()| {
        let form = ProfileForm {
            name: name.get(),
            age: age.get(),
            location: location.get(),
            occupation: occupation.get(),
            education: education.get(),
            quote: quote.get(),
            profile_summary: summary.get(),
            interests: interests.get(),
        };
        match forms::validate_profile(&form) {
            Err(messages) => errors.set(messages),
            Ok(payload) => {
                errors.set(Vec::new());
                let Some(user_id) = session.get_untracked().user.map(|u| u.id) else {
                    return;
                };
                #[cfg(feature = "hydrate")]
                {
                    saving.set(true);
                    leptos::task::spawn_local(async move {
                        let result = services::users::update(user_id, &payload).await;
                        match result {
                            Ok(_) => {
                                crate::state::session::refresh(session).await;
                                toast::notify(
                                    toasts,
                                    ToastKind::Success,
                                    "Profile saved",
                                    "Your changes are live.",
                                );
                            }
                            Err(err) => {
                                toast::notify_error(toasts, "Save failed", err.to_string());
                            }
                        }
                        saving.set(false);
                    });
                }
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = (payload, user_id, session, toasts, saving);
                }
            }
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        save.run(());
    };

    view! {
        <DashboardShell>
            <h1 class="page-title">"My Profile"</h1>

            <div class="card">
                <h2 class="card__title">"Photos"</h2>
                <PhotoSection photos=photos/>
            </div>

            <div class="card">
                <h2 class="card__title">"Profile Details"</h2>
                <FieldErrors errors=errors/>
                <form class="profile-form" on:submit=on_submit>
                    <div class="profile-form__row">
                        <label class="profile-form__label">
                            "Full Name"
                            <input
                                class="profile-form__input"
                                type="text"
                                prop:value=move || name.get()
                                on:input=move |ev| name.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="profile-form__label">
                            "Age"
                            <input
                                class="profile-form__input"
                                type="number"
                                min="18"
                                prop:value=move || age.get()
                                on:input=move |ev| age.set(event_target_value(&ev))
                            />
                        </label>
                    </div>
                    <div class="profile-form__row">
                        <label class="profile-form__label">
                            "Location"
                            <input
                                class="profile-form__input"
                                type="text"
                                prop:value=move || location.get()
                                on:input=move |ev| location.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="profile-form__label">
                            "Occupation"
                            <input
                                class="profile-form__input"
                                type="text"
                                prop:value=move || occupation.get()
                                on:input=move |ev| occupation.set(event_target_value(&ev))
                            />
                        </label>
                    </div>
                    <label class="profile-form__label">
                        "Education"
                        <input
                            class="profile-form__input"
                            type="text"
                            prop:value=move || education.get()
                            on:input=move |ev| education.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="profile-form__label">
                        "Profile Quote"
                        <input
                            class="profile-form__input"
                            type="text"
                            placeholder="A short line that captures you"
                            prop:value=move || quote.get()
                            on:input=move |ev| quote.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="profile-form__label">
                        "About You"
                        <textarea
                            class="profile-form__textarea"
                            rows="5"
                            prop:value=move || summary.get()
                            on:input=move |ev| summary.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    <label class="profile-form__label">
                        "Interests (comma separated)"
                        <input
                            class="profile-form__input"
                            type="text"
                            placeholder="hiking, jazz, cooking"
                            prop:value=move || interests.get()
                            on:input=move |ev| interests.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                        {move || if saving.get() { "Saving..." } else { "Save Profile" }}
                    </button>
                </form>
            </div>

            <AiReview summary=summary interests=interests/>
        </DashboardShell>
    }
}

/// Photo grid with upload, set-primary, and delete actions.
#[component]
fn PhotoSection(photos: LocalResource<crate::net::http::ApiResult<Vec<Photo>>>) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let session = expect_context::<RwSignal<SessionState>>();
    let file_input: NodeRef<leptos::html::Input> = NodeRef::new();
    let uploading = RwSignal::new(false);

    let on_pick = move |_| {
        #[cfg(feature = "hydrate")]
        if let Some(input) = file_input.get() {
            input.click();
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = file_input;
        }
    };

    let on_file = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            let Some(file) = input.files().and_then(|list| list.get(0)) else {
                return;
            };
            input.set_value("");
            let Some(user_id) = session.get_untracked().user.map(|u| u.id) else {
                return;
            };
            // A member's first photo becomes their primary photo.
            let is_first = photos
                .get_untracked()
                .map(|result| result.map(|list| list.is_empty()).unwrap_or(true))
                .unwrap_or(true);
            let photos = photos.clone();
            uploading.set(true);
            leptos::task::spawn_local(async move {
                match services::photos::upload(user_id, &file, is_first).await {
                    Ok(_) => {
                        photos.refetch();
                        toast::notify(
                            toasts,
                            ToastKind::Success,
                            "Photo uploaded",
                            "Your new photo has been added.",
                        );
                    }
                    Err(err) => toast::notify_error(toasts, "Upload failed", err.to_string()),
                }
                uploading.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ev, session, toasts, uploading);
        }
    };

    view! {
        <div class="photo-section">
            <Suspense fallback=move || view! { <p class="muted">"Loading photos..."</p> }>
                {move || {
                    photos
                        .get()
                        .map(|result| match result {
                            Ok(list) => view! { <PhotoGrid list=list photos=photos/> }.into_any(),
                            Err(err) => {
                                view! { <p class="form-error">{format!("Couldn't load photos: {err}")}</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
            <input
                type="file"
                accept="image/*"
                class="photo-section__file"
                style="display: none"
                node_ref=file_input
                on:change=on_file
            />
            <button class="btn btn--secondary" on:click=on_pick disabled=move || uploading.get()>
                {move || if uploading.get() { "Uploading..." } else { "Add Photo" }}
            </button>
        </div>
    }
}

#[component]
fn PhotoGrid(
    list: Vec<Photo>,
    photos: LocalResource<crate::net::http::ApiResult<Vec<Photo>>>,
) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    if list.is_empty() {
        return view! {
            <p class="muted">"No photos yet. Add one so matchmakers can put a face to your profile."</p>
        }
        .into_any();
    }

    let primary_id = primary_photo(&list).map(|p| p.id);
    view! {
        <ul class="photo-grid">
            {list
                .into_iter()
                .map(|photo| {
                    let is_shown_primary = Some(photo.id) == primary_id;
                    let photo_id = photo.id;
                    let set_primary = move |_| {
                        #[cfg(feature = "hydrate")]
                        {
                            let photos = photos.clone();
                            leptos::task::spawn_local(async move {
                                match services::photos::set_primary(photo_id).await {
                                    Ok(_) => photos.refetch(),
                                    Err(err) => toast::notify_error(
                                        toasts,
                                        "Couldn't set primary photo",
                                        err.to_string(),
                                    ),
                                }
                            });
                        }
                        #[cfg(not(feature = "hydrate"))]
                        {
                            let _ = (photo_id, photos, toasts);
                        }
                    };
                    let delete = move |_| {
                        #[cfg(feature = "hydrate")]
                        {
                            let photos = photos.clone();
                            leptos::task::spawn_local(async move {
                                match services::photos::delete(photo_id).await {
                                    Ok(_) => photos.refetch(),
                                    Err(err) => toast::notify_error(
                                        toasts,
                                        "Couldn't delete photo",
                                        err.to_string(),
                                    ),
                                }
                            });
                        }
                        #[cfg(not(feature = "hydrate"))]
                        {
                            let _ = (photo_id, photos, toasts);
                        }
                    };
                    view! {
                        <li class="photo-grid__item">
                            <img
                                class="photo-grid__image"
                                src=photo.url.clone()
                                alt=photo.caption.clone().unwrap_or_else(|| "Profile photo".to_owned())
                            />
                            <Show when=move || is_shown_primary>
                                <span class="photo-grid__badge">"Primary"</span>
                            </Show>
                            <div class="photo-grid__actions">
                                <Show when=move || !is_shown_primary>
                                    <button class="btn btn--ghost" on:click=set_primary>
                                        "Make Primary"
                                    </button>
                                </Show>
                                <button class="btn btn--danger" on:click=delete>"Remove"</button>
                            </div>
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ul>
    }
    .into_any()
}

/// One-shot AI review of the current summary and interests. Runs
/// against the text in the form, saved or not.
#[component]
fn AiReview(summary: RwSignal<String>, interests: RwSignal<String>) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let suggestions = RwSignal::new(Option::<String>::None);
    let analyzing = RwSignal::new(false);

    let analyze = move |_| {
        let payload = AnalyzeProfilePayload {
            profile_summary: summary.get().trim().to_owned(),
            interests: forms::split_interests(&interests.get()),
        };
        if payload.profile_summary.is_empty() {
            toast::notify_error(
                toasts,
                "Nothing to review",
                "Write a profile summary first, then ask for a review.",
            );
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            analyzing.set(true);
            leptos::task::spawn_local(async move {
                match services::ai::analyze_profile(&payload).await {
                    Ok(analysis) => suggestions.set(Some(analysis.suggested_improvements)),
                    Err(err) => toast::notify_error(toasts, "Review failed", err.to_string()),
                }
                analyzing.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (payload, toasts, suggestions, analyzing);
        }
    };

    view! {
        <div class="card">
            <div class="card__header">
                <h2 class="card__title">"AI Profile Review"</h2>
                <button class="btn btn--secondary" on:click=analyze disabled=move || analyzing.get()>
                    {move || if analyzing.get() { "Reviewing..." } else { "Review My Profile" }}
                </button>
            </div>
            <p class="muted">
                "Get suggestions on how your summary and interests read to potential matches."
            </p>
            <Show when=move || suggestions.get().is_some()>
                <div class="ai-review__result">
                    <h3 class="ai-review__title">"Suggestions"</h3>
                    <p>{move || suggestions.get().unwrap_or_default()}</p>
                </div>
            </Show>
        </div>
    }
}
