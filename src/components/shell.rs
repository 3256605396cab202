//! Dashboard shell: sidebar navigation, top bar, and the auth guard.
//!
//! Every dashboard page renders inside this shell. Once the session
//! has settled anonymous, the shell redirects to `/login`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::logo::Logo;
use crate::state::session::SessionState;
use crate::util::content::{ADMIN_NAV, DASHBOARD_NAV, NavItem};

#[component]
pub fn DashboardShell(children: Children) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    // Redirect to login once the session settles anonymous.
    Effect::new(move || {
        let state = session.get();
        if !state.loading && state.user.is_none() {
            navigate("/login", NavigateOptions::default());
        }
    });

    let is_admin = move || session.get().user.as_ref().is_some_and(|u| u.is_admin);

    view! {
        <div class="dashboard">
            <aside class="dashboard__sidebar">
                <div class="dashboard__sidebar-header">
                    <Logo/>
                </div>
                <nav class="dashboard__nav">
                    {DASHBOARD_NAV.iter().map(|item| nav_link(*item)).collect::<Vec<_>>()}
                    <Show when=is_admin>
                        <p class="dashboard__nav-section">"Administration"</p>
                        {ADMIN_NAV.iter().map(|item| nav_link(*item)).collect::<Vec<_>>()}
                    </Show>
                </nav>
                <SidebarFooter/>
            </aside>
            <div class="dashboard__main">
                <TopBar/>
                <main class="dashboard__content">{children()}</main>
            </div>
        </div>
    }
}

fn nav_link(item: NavItem) -> impl IntoView {
    let location = use_location();
    view! {
        <a
            href=item.href
            class="dashboard__nav-link"
            class:is-active=move || location.pathname.get() == item.href
        >
            {item.title}
        </a>
    }
}

/// Current member identity plus sign-out, pinned to the sidebar foot.
#[component]
fn SidebarFooter() -> impl IntoView {
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
            let _ = &navigate;
        }
    };

    view! {
        <div class="dashboard__sidebar-footer">
            {move || {
                session
                    .get()
                    .user
                    .map(|user| {
                        view! {
                            <div class="dashboard__identity">
                                <span class="avatar">{user.initial()}</span>
                                <div class="dashboard__identity-text">
                                    <p class="dashboard__identity-name">{user.name.clone()}</p>
                                    <p class="dashboard__identity-email">{user.email.clone()}</p>
                                </div>
                            </div>
                        }
                    })
            }}
            <button class="btn btn--ghost dashboard__logout" on:click=on_logout>
                "Log out"
            </button>
        </div>
    }
}

/// Slim top bar with quick links to profile and settings.
#[component]
fn TopBar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    view! {
        <header class="dashboard__topbar">
            <div class="dashboard__topbar-spacer"></div>
            <a href="/dashboard/profile" class="dashboard__topbar-link">"Profile"</a>
            <a href="/dashboard/settings" class="dashboard__topbar-link">"Settings"</a>
            <span class="avatar avatar--small">
                {move || session.get().user.map(|u| u.initial()).unwrap_or_else(|| "?".to_owned())}
            </span>
        </header>
    }
}
