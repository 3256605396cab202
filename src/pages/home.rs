//! Marketing landing page: hero, process, selling points, stories,
//! and pricing.

use leptos::prelude::*;

use crate::components::{footer::Footer, header::Header};
use crate::util::content::{
    HOW_IT_WORKS_STEPS, PRICING_PLANS, SUCCESS_STORIES, TAGLINE, WHY_CHOOSE_US,
};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page">
            <Header/>
            <main class="page__main">
                <section class="hero">
                    <h1 class="hero__title">{TAGLINE}</h1>
                    <p class="hero__subtitle">
                        "Tired of endless swiping? Discover a new approach to finding love. \
                         We personally vet and match profiles based on deep compatibility."
                    </p>
                    <div class="hero__actions">
                        <a href="/register" class="btn btn--primary btn--large">"Find a Match"</a>
                        <a href="/how-it-works" class="btn btn--outline btn--large">"How It Works"</a>
                    </div>
                </section>

                <section class="section">
                    <h2 class="section__title">"Your Journey to a Lasting Connection"</h2>
                    <p class="section__subtitle">"A simple, private, and personalized process."</p>
                    <div class="section__grid section__grid--four">
                        {HOW_IT_WORKS_STEPS
                            .iter()
                            .map(|step| {
                                view! {
                                    <div class="card card--step">
                                        <h3 class="card__title">{step.title}</h3>
                                        <p class="card__text">{step.description}</p>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </section>

                <section class="section section--alt">
                    <h2 class="section__title">"A Different Kind of Dating"</h2>
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

                <section class="section">
                    <h2 class="section__title">"Success Stories"</h2>
                    <div class="section__grid section__grid--three">
                        {SUCCESS_STORIES
                            .iter()
                            .map(|story| {
                                view! {
                                    <blockquote class="card card--story">
                                        <p class="card__text">{format!("\u{201c}{}\u{201d}", story.quote)}</p>
                                        <footer class="card__footer">
                                            {story.names} " \u{2014} matched " {story.matched_date}
                                        </footer>
                                    </blockquote>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </section>

                <section class="section section--alt">
                    <h2 class="section__title">"Membership"</h2>
                    <div class="section__grid section__grid--two">
                        {PRICING_PLANS
                            .iter()
                            .map(|plan| {
                                view! {
                                    <div class="card card--pricing" class:is-featured=plan.featured>
                                        <h3 class="card__title">{plan.title}</h3>
                                        <p class="card__text">{plan.description}</p>
                                        <p class="card__price">
                                            "$" {plan.price} <span class="card__period">"/" {plan.period}</span>
                                        </p>
                                        <ul class="card__features">
                                            {plan.features
                                                .iter()
                                                .map(|f| view! { <li>{*f}</li> })
                                                .collect::<Vec<_>>()}
                                        </ul>
                                        <a href="/register" class="btn btn--primary">"Get Started"</a>
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
