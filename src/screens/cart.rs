//! Cart Screen
//!
//! Line items with quantity steppers, totals footer, checkout hand-off.
//! The minus button at quantity 1 drives the quantity to 0, which removes
//! the line — the same contract the store exposes.

use leptos::prelude::*;

use crate::components::{BottomNav, MobileLayout};
use crate::context::{use_app_context, Screen};
use crate::order::DELIVERY_FEE;
use crate::store::{
    cart_total, store_clear_cart, store_set_item_note, store_update_quantity, use_app_store,
    AppStateStoreFields,
};

#[component]
pub fn CartScreen() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let is_empty = move || store.cart().read().is_empty();
    let delivery_fee = move || if is_empty() { 0 } else { DELIVERY_FEE };

    view! {
        <MobileLayout>
            <div class="screen-body">
                <header class="screen-header">
                    <button class="back-btn" on:click=move |_| ctx.navigate(Screen::Home)>
                        "‹"
                    </button>
                    <h1>"Cart"</h1>
                    {move || {
                        (!is_empty())
                            .then(|| {
                                view! {
                                    <button
                                        class="link-btn destructive"
                                        on:click=move |_| store_clear_cart(&store)
                                    >
                                        "Clear all"
                                    </button>
                                }
                            })
                    }}
                </header>

                {move || {
                    if is_empty() {
                        view! {
                            <div class="empty-state">
                                <div class="empty-icon">"🛒"</div>
                                <h3>"Your cart is empty"</h3>
                                <p>"Add items from a nearby shop to get started"</p>
                                <button class="btn-primary" on:click=move |_| ctx.navigate(Screen::Home)>
                                    "Browse Shops"
                                </button>
                            </div>
                        }
                            .into_any()
                    } else {
                        view! {
                            <div>
                                <div class="card-flat delivery-info">
                                    <p>"Delivery in 15-25 min"</p>
                                    <p class="muted">{move || store.current_location().get()}</p>
                                </div>

                                <div class="cart-list">
                                    <For
                                        each=move || store.cart().get()
                                        key=|item| (item.product.id.clone(), item.quantity)
                                        children=move |item| {
                                            let id_dec = item.product.id.clone();
                                            let id_inc = item.product.id.clone();
                                            let id_note = item.product.id.clone();
                                            let quantity = item.quantity;
                                            view! {
                                                <div class="cart-item card-flat">
                                                    <div class="cart-item-info">
                                                        <h4>{item.product.name.clone()}</h4>
                                                        {item
                                                            .product
                                                            .unit
                                                            .clone()
                                                            .map(|unit| view! { <p class="muted">{unit}</p> })}
                                                        <span class="product-price">
                                                            {item.product.price * quantity} " Br"
                                                        </span>
                                                        <input
                                                            type="text"
                                                            class="note-input"
                                                            placeholder="Add a note (e.g., extra ripe)"
                                                            prop:value=item.note.clone().unwrap_or_default()
                                                            on:input=move |ev| {
                                                                let text = event_target_value(&ev);
                                                                let note = (!text.is_empty()).then_some(text);
                                                                store_set_item_note(&store, &id_note, note);
                                                            }
                                                        />
                                                    </div>
                                                    <div class="quantity-stepper">
                                                        <button on:click=move |_| {
                                                            store_update_quantity(&store, &id_dec, quantity - 1)
                                                        }>
                                                            {if quantity == 1 { "🗑" } else { "−" }}
                                                        </button>
                                                        <span>{quantity}</span>
                                                        <button on:click=move |_| {
                                                            store_update_quantity(&store, &id_inc, quantity + 1)
                                                        }>
                                                            "+"
                                                        </button>
                                                    </div>
                                                </div>
                                            }
                                        }
                                    />
                                </div>

                                <div class="totals-footer card-elevated">
                                    <div class="totals-row">
                                        <span>"Subtotal"</span>
                                        <span>{move || cart_total(&store)} " Br"</span>
                                    </div>
                                    <div class="totals-row">
                                        <span>"Delivery fee"</span>
                                        <span>{delivery_fee} " Br"</span>
                                    </div>
                                    <div class="totals-row grand">
                                        <span>"Total"</span>
                                        <span>{move || cart_total(&store) + delivery_fee()} " Br"</span>
                                    </div>
                                    <button
                                        class="btn-accent"
                                        on:click=move |_| ctx.navigate(Screen::Checkout)
                                    >
                                        "Proceed to Checkout"
                                    </button>
                                </div>
                            </div>
                        }
                            .into_any()
                    }
                }}
            </div>
            <BottomNav/>
        </MobileLayout>
    }
}
