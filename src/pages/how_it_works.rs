//! Process explainer page.

use leptos::prelude::*;

use crate::components::{footer::Footer, header::Header};
use crate::util::content::HOW_IT_WORKS_STEPS;

#[component]
pub fn HowItWorksPage() -> impl IntoView {
    view! {
        <div class="page">
            <Header/>
            <main class="page__main">
                <section class="section">
                    <h1 class="section__title">"How It Works"</h1>
                    <p class="section__subtitle">
                        "From your first profile draft to your first introduction."
                    </p>
                    <ol class="steps">
                        {HOW_IT_WORKS_STEPS
                            .iter()
                            .enumerate()
                            .map(|(i, step)| {
                                view! {
                                    <li class="steps__item">
                                        <span class="steps__number">{i + 1}</span>
                                        <div>
                                            <h2 class="steps__title">{step.title}</h2>
                                            <p class="steps__text">{step.description}</p>
                                        </div>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ol>
                    <div class="section__cta">
                        <a href="/register" class="btn btn--primary btn--large">"Start Your Profile"</a>
                    </div>
                </section>
            </main>
            <Footer/>
        </div>
    }
}
