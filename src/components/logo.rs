//! Wordmark linking back to the home page.

use leptos::prelude::*;

use crate::util::content::SITE_NAME;

#[component]
pub fn Logo() -> impl IntoView {
    view! {
        <a href="/" class="logo">
            <span class="logo__mark">"\u{2764}"</span>
            <span class="logo__name">{SITE_NAME}</span>
        </a>
    }
}
