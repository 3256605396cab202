//! Privacy policy page.

use leptos::prelude::*;

use crate::components::{footer::Footer, header::Header};

#[component]
pub fn PrivacyPage() -> impl IntoView {
    view! {
        <div class="page">
            <Header/>
            <main class="page__main">
                <section class="section section--narrow">
                    <h1 class="section__title">"Privacy Policy"</h1>
                    <p class="section__body">
                        "Your profile is visible only to our matchmaking team and to \
                         members we introduce you to. There is no public directory and \
                         no search."
                    </p>
                    <p class="section__body">
                        "We store the details you submit, the photos you upload, and the \
                         messages our team sends you, solely to operate the matching \
                         service. You can delete your account and all associated data at \
                         any time from Settings."
                    </p>
                </section>
            </main>
            <Footer/>
        </div>
    }
}
