//! About page.

use leptos::prelude::*;

use crate::components::{footer::Footer, header::Header};
use crate::util::content::WHY_CHOOSE_US;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="page">
            <Header/>
            <main class="page__main">
                <section class="section">
                    <h1 class="section__title">"About Us"</h1>
                    <p class="section__subtitle">
                        "HeartCraft was founded on a simple belief: lasting relationships \
                         start with thoughtful introductions, not infinite feeds."
                    </p>
                    <p class="section__body">
                        "Our matchmakers read every profile, talk through what each member \
                         is looking for, and only propose a match when they believe both \
                         people will be glad they met. No swiping, no public browsing, no \
                         algorithmic ranking of human beings."
                    </p>
                    <div class="section__grid section__grid--three">
                        {WHY_CHOOSE_US
                            .iter()
                            .map(|point| {
                                view! {
                                    <div class="card">
                                        <h3 class="card__title">{point.title}</h3>
                                        <p class="card__text">{point.description}</p>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </section>
            </main>
            <Footer/>
        </div>
    }
}
