//! Contact page.

use leptos::prelude::*;

use crate::components::{footer::Footer, header::Header};

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <div class="page">
            <Header/>
            <main class="page__main">
                <section class="section section--narrow">
                    <h1 class="section__title">"Contact"</h1>
                    <p class="section__subtitle">
                        "Questions about membership or an existing match? We read everything."
                    </p>
                    <div class="contact">
                        <div class="card">
                            <h3 class="card__title">"Email"</h3>
                            <p class="card__text">
                                <a href="mailto:hello@heartcraft.example">"hello@heartcraft.example"</a>
                            </p>
                        </div>
                        <div class="card">
                            <h3 class="card__title">"Members"</h3>
                            <p class="card__text">
                                "Signed in? Your matchmaker reads replies in "
                                <a href="/dashboard/messages">"Messages"</a> "."
                            </p>
                        </div>
                    </div>
                </section>
            </main>
            <Footer/>
        </div>
    }
}
