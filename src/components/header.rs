//! Marketing site header with primary navigation and auth entry points.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::logo::Logo;
use crate::util::content::NAV_ITEMS;

/// Sticky top navigation shown on every marketing page. Highlights the
/// current route and always offers Log In / Sign Up.
#[component]
pub fn Header() -> impl IntoView {
    let location = use_location();

    view! {
        <header class="site-header">
            <div class="site-header__inner">
                <Logo/>
                <nav class="site-header__nav">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| {
                            let href = item.href;
                            view! {
                                <a
                                    href=href
                                    class="site-header__link"
                                    class:is-active=move || location.pathname.get() == href
                                >
                                    {item.title}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </nav>
                <div class="site-header__actions">
                    <a href="/login" class="btn btn--ghost">"Log In"</a>
                    <a href="/register" class="btn btn--primary">"Sign Up"</a>
                </div>
            </div>
        </header>
    }
}
