//! Order Tracking Screen
//!
//! Five-step timeline animated by a one-shot timeout chain. Each advance
//! schedules the next tick; the terminal stage schedules nothing, and the
//! pending handle is cancelled when the screen goes away.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::catalog;
use crate::components::MobileLayout;
use crate::context::{use_app_context, Screen};
use crate::models::Vehicle;
use crate::order::{OrderStage, STAGE_ADVANCE_MS};

#[component]
pub fn OrderTrackingScreen() -> impl IntoView {
    let ctx = use_app_context();
    let order = catalog::sample_order();

    let (stage, set_stage) = signal(order.status);
    let pending = StoredValue::new_local(None::<Timeout>);

    let cancel_pending = move || {
        pending.update_value(|slot| {
            if let Some(timeout) = slot.take() {
                timeout.cancel();
            }
        });
    };

    // Re-arm on every stage change; Delivered is absorbing, so nothing is
    // scheduled once it is reached.
    Effect::new(move |_| {
        let current = stage.get();
        cancel_pending();
        if let Some(next) = current.next() {
            pending.set_value(Some(Timeout::new(STAGE_ADVANCE_MS, move || {
                set_stage.set(next);
            })));
        }
    });

    on_cleanup(cancel_pending);

    let stage_index = move || stage.get().index();

    view! {
        <MobileLayout>
            <div class="screen-body">
                <header class="screen-header">
                    <button class="back-btn" on:click=move |_| ctx.navigate(Screen::Home)>
                        "‹"
                    </button>
                    <div>
                        <h1>"Order #" {order.id.clone()}</h1>
                        <p class="muted">"Estimated delivery: " {order.estimated_delivery.clone()}</p>
                    </div>
                </header>

                <div class="confirm-banner">
                    <div class="confirm-icon">"✔"</div>
                    <h2>"Order Confirmed!"</h2>
                    <p>"Your order is being prepared by " {order.shop.name.clone()}</p>
                </div>

                <section class="tracking-section">
                    <h3>"Order Status"</h3>
                    <div class="timeline">
                        {OrderStage::ALL
                            .iter()
                            .map(|step| {
                                let step = *step;
                                let state = move || {
                                    let current = stage_index();
                                    if step.index() < current {
                                        "timeline-step done"
                                    } else if step.index() == current {
                                        "timeline-step active"
                                    } else {
                                        "timeline-step"
                                    }
                                };
                                view! {
                                    <div class=state>
                                        <span class="timeline-dot"></span>
                                        <span class="timeline-label">{step.label()}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </section>

                {order
                    .runner
                    .clone()
                    .map(|runner| {
                        view! {
                            <section class="tracking-section">
                                {move || {
                                    (stage.get().index() >= OrderStage::PickedUp.index())
                                        .then(|| {
                                            let vehicle = match runner.vehicle {
                                                Vehicle::Bike => "🚲",
                                                Vehicle::Scooter => "🛵",
                                            };
                                            view! {
                                                <div class="card-elevated runner-card">
                                                    <h3>"Your Runner"</h3>
                                                    <p>
                                                        {runner.name.clone()} " " {vehicle} " ★ "
                                                        {format!("{:.1}", runner.rating)}
                                                    </p>
                                                </div>
                                            }
                                        })
                                }}
                            </section>
                        }
                    })}

                <section class="tracking-section">
                    <h3>"Order Details"</h3>
                    <div class="card-flat">
                        {order
                            .items
                            .iter()
                            .map(|item| {
                                view! {
                                    <div class="totals-row">
                                        <span class="muted">
                                            {item.product.name.clone()} " x " {item.quantity}
                                        </span>
                                        <span>{item.product.price * item.quantity} " Br"</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                        <div class="totals-row">
                            <span class="muted">"Subtotal"</span>
                            <span>{order.total} " Br"</span>
                        </div>
                        <div class="totals-row">
                            <span class="muted">"Delivery fee"</span>
                            <span>{order.delivery_fee} " Br"</span>
                        </div>
                        <div class="totals-row grand">
                            <span>"Total"</span>
                            <span>{order.total + order.delivery_fee} " Br"</span>
                        </div>
                        <div class="totals-row">
                            <span class="muted">"Payment"</span>
                            <span>{order.payment_method.clone()}</span>
                        </div>
                    </div>
                </section>

                <button class="btn-secondary" on:click=move |_| ctx.navigate(Screen::Home)>
                    "Back to Home"
                </button>
            </div>
        </MobileLayout>
    }
}
