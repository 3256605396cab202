//! Dashboard overview: stat cards and recent activity.

use leptos::prelude::*;

use crate::components::shell::DashboardShell;
use crate::net::http::ApiResult;
use crate::net::types::{Match, Message, accepted_count, unread_count};
use crate::services;
use crate::state::session::SessionState;
use crate::state::toast::{self, ToastState};

/// Everything the overview needs, fetched in one settled batch.
#[derive(Clone, Debug, Default)]
struct Overview {
    matches: Vec<Match>,
    messages: Vec<Message>,
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    // Matches and messages load concurrently; the summary renders only
    // once both have settled.
    let overview = LocalResource::new(move || async move {
        let (matches, messages) =
            futures::join!(services::matches::list(), services::messages::list());
        Overview {
            matches: or_empty(matches, toasts, "matches"),
            messages: or_empty(messages, toasts, "messages"),
        }
    });

    let greeting = move || {
        session
            .get()
            .user
            .map(|u| format!("Welcome back, {}!", u.first_name()))
            .unwrap_or_else(|| "Welcome back!".to_owned())
    };

    view! {
        <DashboardShell>
            <h1 class="page-title">{greeting}</h1>

            <Suspense fallback=move || view! { <p class="muted">"Loading your dashboard..."</p> }>
                {move || {
                    overview
                        .get()
                        .map(|data| {
                            let total = data.matches.len();
                            let accepted = accepted_count(&data.matches);
                            let unread = unread_count(&data.messages);
                            let recent: Vec<Message> =
                                data.messages.iter().take(3).cloned().collect();
                            view! {
                                <div class="stat-grid">
                                    <div class="card card--stat">
                                        <p class="card__label">"Profile Status"</p>
                                        <p class="card__value">"Active"</p>
                                        <p class="muted">"Your profile is visible to matchmakers."</p>
                                    </div>
                                    <div class="card card--stat">
                                        <p class="card__label">"Your Matches"</p>
                                        <p class="card__value">{total}</p>
                                        <p class="muted">{accepted} " accepted"</p>
                                    </div>
                                    <div class="card card--stat">
                                        <p class="card__label">"Unread Messages"</p>
                                        <p class="card__value">{unread}</p>
                                        <p class="muted">"New messages waiting for you"</p>
                                    </div>
                                </div>

                                <div class="card">
                                    <div class="card__header">
                                        <h2 class="card__title">"Recent Messages"</h2>
                                        <a href="/dashboard/messages" class="btn btn--ghost">"View All"</a>
                                    </div>
                                    <RecentMessages messages=recent/>
                                </div>
                            }
                        })
                }}
            </Suspense>

            <div class="card">
                <div class="card__header">
                    <h2 class="card__title">"Your Profile Summary"</h2>
                    <a href="/dashboard/profile" class="btn btn--ghost">"Edit Profile"</a>
                </div>
                <ProfilePreview/>
            </div>
        </DashboardShell>
    }
}

fn or_empty<T>(result: ApiResult<Vec<T>>, toasts: RwSignal<ToastState>, what: &str) -> Vec<T> {
    match result {
        Ok(items) => items,
        Err(err) => {
            toast::notify_error(toasts, format!("Couldn't load {what}"), err.to_string());
            Vec::new()
        }
    }
}

#[component]
fn RecentMessages(messages: Vec<Message>) -> impl IntoView {
    if messages.is_empty() {
        return view! { <p class="muted">"No messages yet."</p> }.into_any();
    }
    view! {
        <ul class="message-preview">
            {messages
                .into_iter()
                .map(|message| {
                    view! {
                        <li class="message-preview__item">
                            <a href="/dashboard/messages">
                                <span class="message-preview__snippet">{message.content}</span>
                                <Show when=move || !message.is_read>
                                    <span class="dot dot--unread"></span>
                                </Show>
                            </a>
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ul>
    }
    .into_any()
}

/// How the member's profile currently reads to matchmakers.
#[component]
fn ProfilePreview() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    view! {
        {move || {
            session
                .get()
                .user
                .map(|user| {
                    let headline = match user.age {
                        Some(age) => format!("{}, {age}", user.name),
                        None => user.name.clone(),
                    };
                    let quote = user
                        .quote
                        .clone()
                        .unwrap_or_else(|| "No profile quote yet.".to_owned());
                    view! {
                        <div class="profile-preview">
                            <span class="avatar avatar--large">{user.initial()}</span>
                            <div>
                                <h3 class="profile-preview__name">{headline}</h3>
                                <p class="muted">
                                    {user.location.clone().unwrap_or_else(|| "Location not set".to_owned())}
                                </p>
                                <p class="profile-preview__quote">{format!("\u{201c}{quote}\u{201d}")}</p>
                                <div class="tag-row">
                                    {user.interests
                                        .iter()
                                        .map(|i| view! { <span class="tag">{i.clone()}</span> })
                                        .collect::<Vec<_>>()}
                                </div>
                            </div>
                        </div>
                    }
                })
        }}
    }
}
