//! Terms of service page.

use leptos::prelude::*;

use crate::components::{footer::Footer, header::Header};

#[component]
pub fn TermsPage() -> impl IntoView {
    view! {
        <div class="page">
            <Header/>
            <main class="page__main">
                <section class="section section--narrow">
                    <h1 class="section__title">"Terms of Service"</h1>
                    <p class="section__body">
                        "Membership is for individuals aged 18 or over seeking a genuine \
                         relationship. Profiles are reviewed by our staff before matching \
                         begins, and we may decline or remove profiles that violate our \
                         community standards."
                    </p>
                    <p class="section__body">
                        "Introductions are proposals, not guarantees. Either member may \
                         decline a proposed match without explanation, and subscription \
                         fees cover the matching service itself."
                    </p>
                </section>
            </main>
            <Footer/>
        </div>
    }
}
