//! Checkout Screen
//!
//! Address, payment method, order summary, and the simulated placement
//! flow: an empty cart redirects back to the cart screen instead of
//! checking out nothing.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::MobileLayout;
use crate::context::{use_app_context, Screen};
use crate::order::{DELIVERY_FEE, PLACE_ORDER_DELAY_MS};
use crate::store::{cart_total, store_clear_cart, use_app_store, AppStateStoreFields};

struct PaymentMethod {
    id: &'static str,
    name: &'static str,
    icon: &'static str,
    available: bool,
}

const PAYMENT_METHODS: &[PaymentMethod] = &[
    PaymentMethod { id: "cash", name: "Cash on Delivery", icon: "💵", available: true },
    PaymentMethod { id: "telebirr", name: "Telebirr", icon: "📱", available: false },
    PaymentMethod { id: "cbe", name: "CBE Card", icon: "💳", available: false },
];

#[component]
pub fn CheckoutScreen() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (selected_payment, set_selected_payment) = signal("cash");
    let (is_placing, set_is_placing) = signal(false);

    // Guard: nothing to check out
    Effect::new(move |_| {
        if store.cart().read().is_empty() && !is_placing.get_untracked() {
            ctx.navigate(Screen::Cart);
        }
    });

    let total = move || cart_total(&store) + DELIVERY_FEE;

    let place_order = move |_| {
        if is_placing.get() {
            return;
        }
        set_is_placing.set(true);
        spawn_local(async move {
            // Simulated network latency; there is no backend to call
            TimeoutFuture::new(PLACE_ORDER_DELAY_MS).await;
            web_sys::console::log_1(&"[CHECKOUT] order placed".into());
            store_clear_cart(&store);
            ctx.navigate(Screen::OrderTracking);
        });
    };

    view! {
        <MobileLayout>
            <div class="screen-body">
                <header class="screen-header">
                    <button class="back-btn" on:click=move |_| ctx.navigate(Screen::Cart)>
                        "‹"
                    </button>
                    <h1>"Checkout"</h1>
                </header>

                <section class="checkout-section">
                    <h3>"Delivery Address"</h3>
                    <div class="card-flat address-card">
                        <p>{move || store.current_location().get()}</p>
                        <p class="muted">"Near Friendship Hotel"</p>
                    </div>
                </section>

                <section class="checkout-section">
                    <h3>"Payment Method"</h3>
                    <div class="payment-list">
                        {PAYMENT_METHODS
                            .iter()
                            .map(|method| {
                                let id = method.id;
                                let available = method.available;
                                let is_selected = move || selected_payment.get() == id;
                                view! {
                                    <button
                                        class=move || {
                                            if is_selected() {
                                                "payment-row card-flat selected"
                                            } else {
                                                "payment-row card-flat"
                                            }
                                        }
                                        disabled=!available
                                        on:click=move |_| {
                                            if available {
                                                set_selected_payment.set(id);
                                            }
                                        }
                                    >
                                        <span class="payment-icon">{method.icon}</span>
                                        <span class="payment-name">{method.name}</span>
                                        {(!available)
                                            .then(|| view! { <span class="menu-badge">"Coming soon"</span> })}
                                        {move || is_selected().then(|| view! { <span>"✔"</span> })}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </section>

                <section class="checkout-section">
                    <h3>"Order Summary"</h3>
                    <div class="card-flat">
                        <For
                            each=move || store.cart().get()
                            key=|item| item.product.id.clone()
                            children=|item| {
                                view! {
                                    <div class="totals-row">
                                        <span class="muted">
                                            {item.product.name.clone()} " x " {item.quantity}
                                        </span>
                                        <span>{item.product.price * item.quantity} " Br"</span>
                                    </div>
                                }
                            }
                        />
                        <div class="totals-row">
                            <span class="muted">"Subtotal"</span>
                            <span>{move || cart_total(&store)} " Br"</span>
                        </div>
                        <div class="totals-row">
                            <span class="muted">"Delivery fee"</span>
                            <span>{DELIVERY_FEE} " Br"</span>
                        </div>
                        <div class="totals-row grand">
                            <span>"Total"</span>
                            <span>{total} " Br"</span>
                        </div>
                    </div>
                </section>

                <button class="btn-accent place-order" disabled=is_placing on:click=place_order>
                    {move || {
                        if is_placing.get() {
                            "Placing Order...".to_string()
                        } else {
                            format!("Place Order • {} Br", total())
                        }
                    }}
                </button>
            </div>
        </MobileLayout>
    }
}
