//! Home Page

use leptos::prelude::*;

use crate::api;
use crate::components::{DealCard, EmptyDeals};

#[component]
pub fn HomePage() -> impl IntoView {
    // None until the first (and only) fetch resolves
    let (deals, set_deals) = signal(None::<Vec<api::ProductCard>>);

    leptos::task::spawn_local(async move {
        set_deals.set(Some(api::featured_products().await));
    });

    view! {
        <div class="home">
            <header class="hero">
                <h1>"JargLarg Store"</h1>
                <p class="tagline">"Everything You Need, For Less!"</p>
                <a href="#products" class="btn btn-primary">"View Super Deals"</a>
            </header>

            <section id="products" class="deals">
                <h2>"🔥 Super Deals"</h2>
                <p class="subtitle">"Prices so low, they're JargLarg!"</p>

                {move || match deals.get() {
                    None => view! { <p class="deals-loading">"Loading deals..."</p> }.into_any(),
                    Some(cards) if cards.is_empty() => view! { <EmptyDeals /> }.into_any(),
                    Some(cards) => view! {
                        <div class="deal-grid">
                            {cards
                                .into_iter()
                                .map(|card| view! { <DealCard card=card /> })
                                .collect_view()}
                        </div>
                    }
                    .into_any(),
                }}
            </section>
        </div>
    }
}
