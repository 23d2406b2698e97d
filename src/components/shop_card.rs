//! Shop Card Component

use leptos::prelude::*;

use crate::context::{use_app_context, Screen};
use crate::models::Shop;

#[component]
pub fn ShopCard(shop: Shop) -> impl IntoView {
    let ctx = use_app_context();
    let shop_id = shop.id.clone();

    view! {
        <button class="shop-card" on:click=move |_| ctx.navigate(Screen::Shop(shop_id.clone()))>
            <div class="shop-card-header">
                <span class="shop-name">
                    {shop.name.clone()}
                    {shop.is_verified.then(|| view! { <span class="verified">"✔"</span> })}
                </span>
                <span class=if shop.is_open { "open-badge" } else { "open-badge closed" }>
                    {if shop.is_open { "Open" } else { "Closed" }}
                </span>
            </div>
            <div class="shop-card-meta">
                <span>"★ " {format!("{:.1}", shop.rating)}</span>
                <span>{shop.distance.clone()}</span>
                <span>{shop.delivery_time.clone()}</span>
            </div>
        </button>
    }
}
