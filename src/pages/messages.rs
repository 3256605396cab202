//! Messages inbox: notes from the matchmaking team. Opening an unread
//! message marks it read on the server, then the list is refetched.

use leptos::prelude::*;

use crate::components::shell::DashboardShell;
use crate::net::http::ApiResult;
use crate::net::types::{Message, unread_count};
use crate::services;
use crate::state::toast::{self, ToastState};

#[component]
pub fn MessagesPage() -> impl IntoView {
    let messages = LocalResource::new(|| services::messages::list());

    view! {
        <DashboardShell>
            <h1 class="page-title">"Messages"</h1>
            <p class="muted">"Notes from your matchmaking team."</p>

            <Suspense fallback=move || view! { <p class="muted">"Loading messages..."</p> }>
                {move || {
                    messages
                        .get()
                        .map(|result: ApiResult<Vec<Message>>| match result {
                            Ok(list) => view! { <Inbox list=list messages=messages/> }.into_any(),
                            Err(err) => {
                                view! { <p class="form-error">{format!("Couldn't load messages: {err}")}</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </DashboardShell>
    }
}

#[component]
fn Inbox(list: Vec<Message>, messages: LocalResource<ApiResult<Vec<Message>>>) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    if list.is_empty() {
        return view! {
            <div class="card">
                <p class="muted">"No messages yet. Your matchmaker will reach out here."</p>
            </div>
        }
        .into_any();
    }

    let unread = unread_count(&list);
    view! {
        <div class="inbox-wrap">
            <Show when=move || { unread > 0 }>
                <p class="muted">{unread} " unread"</p>
            </Show>
            <ul class="inbox">
            {list
                .into_iter()
                .map(|message| {
                    let message_id = message.id;
                    let is_read = message.is_read;
                    let open = move |_| {
                        if is_read {
                            return;
                        }
                        #[cfg(feature = "hydrate")]
                        {
                            let messages = messages.clone();
                            leptos::task::spawn_local(async move {
                                match services::messages::mark_read(message_id).await {
                                    Ok(_) => messages.refetch(),
                                    Err(err) => toast::notify_error(
                                        toasts,
                                        "Couldn't mark as read",
                                        err.to_string(),
                                    ),
                                }
                            });
                        }
                        #[cfg(not(feature = "hydrate"))]
                        {
                            let _ = (message_id, messages, toasts);
                        }
                    };
                    let item_class =
                        if is_read { "inbox__item" } else { "inbox__item inbox__item--unread" };
                    view! {
                        <li class=item_class on:click=open>
                            <div class="inbox__meta">
                                <span class="inbox__sender">"Your Matchmaker"</span>
                                <span class="inbox__date">
                                    {message.created_at.clone().unwrap_or_default()}
                                </span>
                                <Show when=move || !is_read>
                                    <span class="dot dot--unread"></span>
                                </Show>
                            </div>
                            <p class="inbox__content">{message.content}</p>
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
            </ul>
        </div>
    }
    .into_any()
}
