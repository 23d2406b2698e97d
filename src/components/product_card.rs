//! Product Card Component
//!
//! Grid/rail card with price, discount badge, and an add-to-cart button.
//! The stock guard lives here: the add action is never offered for an
//! out-of-stock product, so the cart never has to re-validate stock.

use leptos::prelude::*;

use crate::catalog;
use crate::models::Product;
use crate::store::{store_add_to_cart, use_app_store};

/// Image placeholder: the category icon, since the demo ships no assets
fn category_icon(category: &str) -> String {
    catalog::categories()
        .iter()
        .find(|c| c.name == category)
        .map(|c| c.icon.clone())
        .unwrap_or_else(|| "🛒".to_string())
}

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let store = use_app_store();
    let add_product = product.clone();

    let add_to_cart = move |_| {
        if !add_product.in_stock {
            return;
        }
        if store_add_to_cart(&store, &add_product, 1).is_err() {
            web_sys::console::warn_1(&format!("[CART] rejected add for {}", add_product.id).into());
        }
    };

    view! {
        <div class=if product.in_stock { "product-card" } else { "product-card out-of-stock" }>
            {product
                .discount
                .map(|pct| view! { <span class="discount-badge">"-" {pct} "%"</span> })}
            <div class="product-image">{category_icon(&product.category)}</div>
            <h4 class="product-name">{product.name.clone()}</h4>
            {product.unit.clone().map(|unit| view! { <p class="product-unit">{unit}</p> })}
            <div class="product-footer">
                <span class="product-price">
                    {product.price} " Br"
                    {product
                        .original_price
                        .map(|original| view! { <s class="original-price">{original} " Br"</s> })}
                </span>
                {if product.in_stock {
                    view! {
                        <button class="add-btn" on:click=add_to_cart>"+"</button>
                    }
                        .into_any()
                } else {
                    view! { <span class="stock-note">"Out of stock"</span> }.into_any()
                }}
            </div>
        </div>
    }
}
