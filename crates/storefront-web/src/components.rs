//! UI Components

use leptos::prelude::*;

use crate::api::ProductCard;

/// Linked product card with discount badge
#[component]
pub fn DealCard(card: ProductCard) -> impl IntoView {
    let badge = card.badge().map(|text| view! { <div class="deal-badge">{text}</div> });
    let original = card
        .original_price_label
        .map(|label| view! { <span class="deal-original-price">{label}</span> });
    let name = card.name;

    view! {
        <a href=card.href class="deal-card">
            <div class="deal-media">
                <img src=card.image alt=name.clone() />
                {badge}
            </div>
            <div class="deal-body">
                <h3 class="deal-name" title=name.clone()>{name.clone()}</h3>
                <div class="deal-prices">
                    <span class="deal-price">{card.price_label}</span>
                    {original}
                </div>
                <div class="deal-cta">"View Deal"</div>
            </div>
        </a>
    }
}

/// Shown when there are no featured products (or the store is down)
#[component]
pub fn EmptyDeals() -> impl IntoView {
    view! {
        <div class="deals-empty">
            <p>"No super deals yet! Check back soon."</p>
            <p class="hint">"(The database is empty. Products will appear here once added.)"</p>
        </div>
    }
}
