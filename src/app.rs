//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast_host::ToastHost;
use crate::pages::{
    about::AboutPage, contact::ContactPage, dashboard::DashboardPage,
    email_templates::EmailTemplatesPage, forgot_password::ForgotPasswordPage, home::HomePage,
    how_it_works::HowItWorksPage, login::LoginPage, matches::MatchesPage, messages::MessagesPage,
    privacy::PrivacyPage, profile::ProfilePage, register::RegisterPage,
    reset_password::ResetPasswordPage, settings::SettingsPage, terms::TermsPage,
    verify_email::VerifyEmailPage,
};
use crate::state::session::SessionState;
use crate::state::toast::ToastState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and toast contexts, kicks off the startup
/// session fetch, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let toasts = RwSignal::new(ToastState::default());
    provide_context(session);
    provide_context(toasts);

    // Derive the session from the persisted token before anything
    // renders as "ready".
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(crate::state::session::initialize(session));

    view! {
        <Stylesheet id="leptos" href="/pkg/heartcraft-web.css"/>
        <Title text="HeartCraft"/>

        <Router>
            <ToastHost/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("how-it-works") view=HowItWorksPage/>
                <Route path=StaticSegment("about") view=AboutPage/>
                <Route path=StaticSegment("contact") view=ContactPage/>
                <Route path=StaticSegment("terms") view=TermsPage/>
                <Route path=StaticSegment("privacy") view=PrivacyPage/>

                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("forgot-password") view=ForgotPasswordPage/>
                <Route path=StaticSegment("verify-email") view=VerifyEmailPage/>
                <Route path=StaticSegment("reset-password") view=ResetPasswordPage/>

                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route
                    path=(StaticSegment("dashboard"), StaticSegment("profile"))
                    view=ProfilePage
                />
                <Route
                    path=(StaticSegment("dashboard"), StaticSegment("matches"))
                    view=MatchesPage
                />
                <Route
                    path=(StaticSegment("dashboard"), StaticSegment("messages"))
                    view=MessagesPage
                />
                <Route
                    path=(StaticSegment("dashboard"), StaticSegment("settings"))
                    view=SettingsPage
                />
                <Route
                    path=(
                        StaticSegment("dashboard"),
                        StaticSegment("admin"),
                        StaticSegment("email-templates"),
                    )
                    view=EmailTemplatesPage
                />
            </Routes>
        </Router>
    }
}
