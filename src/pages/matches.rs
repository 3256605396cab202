//! Matches page: curated introductions with a detail view and
//! accept/decline actions.

use leptos::prelude::*;

use crate::components::shell::DashboardShell;
use crate::net::http::ApiResult;
use crate::net::types::{Match, MatchStatus, User};
use crate::services;
use crate::state::toast::{self, ToastState};

/// Shown when the matchmaker left no note on a pairing.
const DEFAULT_NOTE: &str =
    "We believe you two would be a great fit based on your shared interests and values.";

#[component]
pub fn MatchesPage() -> impl IntoView {
    let matches = LocalResource::new(|| services::matches::list());
    let selected = RwSignal::new(Option::<Match>::None);

    let on_close = Callback::new(move |()| selected.set(None));
    let on_updated = Callback::new(move |()| {
        selected.set(None);
        matches.refetch();
    });

    view! {
        <DashboardShell>
            <h1 class="page-title">"Your Matches"</h1>
            <p class="muted">"Introductions curated for you by our matchmakers."</p>

            <Suspense fallback=move || view! { <p class="muted">"Loading matches..."</p> }>
                {move || {
                    matches
                        .get()
                        .map(|result: ApiResult<Vec<Match>>| match result {
                            Ok(list) => view! { <MatchGrid list=list selected=selected/> }.into_any(),
                            Err(err) => {
                                view! { <p class="form-error">{format!("Couldn't load matches: {err}")}</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>

            {move || {
                selected
                    .get()
                    .map(|m| view! { <MatchDetail curated=m on_close=on_close on_updated=on_updated/> })
            }}
        </DashboardShell>
    }
}

#[component]
fn MatchGrid(list: Vec<Match>, selected: RwSignal<Option<Match>>) -> impl IntoView {
    if list.is_empty() {
        return view! {
            <div class="card">
                <p class="muted">
                    "No introductions yet. Our matchmakers are reviewing your profile; check back soon."
                </p>
            </div>
        }
        .into_any();
    }

    view! {
        <ul class="match-grid">
            {list
                .into_iter()
                .map(|m| {
                    let open = {
                        let m = m.clone();
                        move |_| selected.set(Some(m.clone()))
                    };
                    let title = m
                        .matched_user
                        .as_ref()
                        .map(|u| match u.age {
                            Some(age) => format!("{}, {age}", u.name),
                            None => u.name.clone(),
                        })
                        .unwrap_or_else(|| "A curated introduction".to_owned());
                    let subtitle = m
                        .matched_user
                        .as_ref()
                        .and_then(|u| u.location.clone())
                        .unwrap_or_else(|| "Details on request".to_owned());
                    let status = m.status;
                    view! {
                        <li class="match-card" on:click=open>
                            <span class=format!("badge badge--{}", status_class(status))>
                                {status.label()}
                            </span>
                            <h3 class="match-card__title">{title}</h3>
                            <p class="muted">{subtitle}</p>
                            <button class="btn btn--ghost">"View Introduction"</button>
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ul>
    }
    .into_any()
}

fn status_class(status: MatchStatus) -> &'static str {
    match status {
        MatchStatus::Proposed => "proposed",
        MatchStatus::Accepted => "accepted",
        MatchStatus::Declined => "declined",
    }
}

/// Detail dialog for one introduction. Fetches the other member's
/// profile if the listing didn't embed it.
#[component]
fn MatchDetail(curated: Match, on_close: Callback<()>, on_updated: Callback<()>) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let other = RwSignal::new(curated.matched_user.clone());
    let responding = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    if other.get_untracked().is_none() {
        let matched_user_id = curated.matched_user_id;
        leptos::task::spawn_local(async move {
            match services::users::get(matched_user_id).await {
                Ok(user) => other.set(Some(user)),
                Err(err) => {
                    toast::notify_error(toasts, "Couldn't load their profile", err.to_string());
                }
            }
        });
    }

    let match_id = curated.id;
    let respond = move |status: MatchStatus| {
        #[cfg(feature = "hydrate")]
        {
            responding.set(true);
            leptos::task::spawn_local(async move {
                match services::matches::update_status(match_id, status).await {
                    Ok(_) => on_updated.run(()),
                    Err(err) => {
                        toast::notify_error(toasts, "Couldn't record your response", err.to_string());
                    }
                }
                responding.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (status, match_id, toasts, responding, on_updated);
        }
    };
    let accept = move |_| respond(MatchStatus::Accepted);
    let decline = move |_| respond(MatchStatus::Declined);

    let note = curated.matchmaker_note.clone().unwrap_or_else(|| DEFAULT_NOTE.to_owned());
    let is_proposed = curated.status == MatchStatus::Proposed;

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <button class="dialog__close" on:click=move |_| on_close.run(())>"\u{00d7}"</button>

                {move || {
                    other
                        .get()
                        .map_or_else(
                            || view! { <p class="muted">"Loading their profile..."</p> }.into_any(),
                            |user| view! { <MatchProfile user=user/> }.into_any(),
                        )
                }}

                <div class="dialog__note">
                    <h3 class="dialog__note-title">"A note from your matchmaker"</h3>
                    <p>{note}</p>
                </div>

                <Show when=move || is_proposed>
                    <div class="dialog__actions">
                        <button
                            class="btn btn--primary"
                            on:click=accept
                            disabled=move || responding.get()
                        >
                            "Accept Introduction"
                        </button>
                        <button
                            class="btn btn--secondary"
                            on:click=decline
                            disabled=move || responding.get()
                        >
                            "Politely Decline"
                        </button>
                    </div>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn MatchProfile(user: User) -> impl IntoView {
    let headline = match user.age {
        Some(age) => format!("{}, {age}", user.name),
        None => user.name.clone(),
    };
    view! {
        <div class="match-profile">
            <span class="avatar avatar--large">{user.initial()}</span>
            <h2 class="match-profile__name">{headline}</h2>
            <p class="muted">
                {user.location.clone().unwrap_or_else(|| "Location not shared".to_owned())}
            </p>
            <dl class="match-profile__facts">
                <dt>"Occupation"</dt>
                <dd>{user.occupation.clone().unwrap_or_else(|| "Not shared".to_owned())}</dd>
                <dt>"Education"</dt>
                <dd>{user.education.clone().unwrap_or_else(|| "Not shared".to_owned())}</dd>
            </dl>
            {user.profile_summary.clone().map(|s| view! { <p class="match-profile__summary">{s}</p> })}
            <div class="tag-row">
                {user.interests
                    .iter()
                    .map(|i| view! { <span class="tag">{i.clone()}</span> })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
