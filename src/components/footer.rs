//! Marketing site footer.

use leptos::prelude::*;

use crate::components::logo::Logo;
use crate::util::content::NAV_ITEMS;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="site-footer__inner">
                <div class="site-footer__brand">
                    <Logo/>
                    <p class="site-footer__blurb">
                        "Hand-curated introductions for people serious about finding a partner."
                    </p>
                </div>
                <nav class="site-footer__nav">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| {
                            view! { <a href=item.href class="site-footer__link">{item.title}</a> }
                        })
                        .collect::<Vec<_>>()}
                    <a href="/terms" class="site-footer__link">"Terms"</a>
                    <a href="/privacy" class="site-footer__link">"Privacy"</a>
                </nav>
            </div>
            <p class="site-footer__copyright">"\u{a9} 2026 HeartCraft. All rights reserved."</p>
        </footer>
    }
}
