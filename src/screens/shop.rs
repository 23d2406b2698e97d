//! Shop Screen
//!
//! Storefront for a single shop, reached with an opaque shop id. An
//! unknown id lands on the first catalog shop (`shop_or_first`).

use leptos::prelude::*;

use crate::catalog;
use crate::components::{BottomNav, MobileLayout, ProductCard};
use crate::context::{use_app_context, Screen};

#[derive(Clone, Copy, PartialEq)]
enum ShopTab {
    Products,
    Info,
    Reviews,
}

impl ShopTab {
    const ALL: [(ShopTab, &'static str); 3] = [
        (ShopTab::Products, "Products"),
        (ShopTab::Info, "Info"),
        (ShopTab::Reviews, "Reviews"),
    ];
}

#[component]
pub fn ShopScreen(shop_id: String) -> impl IntoView {
    let ctx = use_app_context();
    let shop = catalog::shop_or_first(&shop_id);
    let (active_tab, set_active_tab) = signal(ShopTab::Products);
    let (active_category, set_active_category) = signal("All".to_string());

    // Demo dataset: every shop lists the full catalog
    let shop_products = move || {
        let selected = active_category.get();
        catalog::products()
            .iter()
            .filter(|p| selected == "All" || p.category == selected)
            .cloned()
            .collect::<Vec<_>>()
    };

    view! {
        <MobileLayout>
            <div class="screen-body">
                <div class="shop-hero">
                    <button class="back-btn" on:click=move |_| ctx.navigate(Screen::Home)>
                        "‹"
                    </button>
                </div>

                <div class="shop-info card-elevated">
                    <div class="shop-info-head">
                        <div>
                            <h1>
                                {shop.name.clone()}
                                {shop.is_verified.then(|| view! { <span class="verified">"✔"</span> })}
                            </h1>
                            <p class="shop-address">{shop.address.clone()}</p>
                        </div>
                        <span class=if shop.is_open { "open-badge" } else { "open-badge closed" }>
                            {if shop.is_open { "Open" } else { "Closed" }}
                        </span>
                    </div>
                    <div class="shop-meta">
                        <span>"★ " {format!("{:.1}", shop.rating)} " (128 reviews)"</span>
                        <span>{shop.delivery_time.clone()}</span>
                    </div>
                    <button class="btn-primary" on:click=move |_| ctx.navigate(Screen::Messages)>
                        "💬 Chat with Shop"
                    </button>
                </div>

                <div class="tab-row">
                    {ShopTab::ALL
                        .iter()
                        .map(|(tab, label)| {
                            let tab = *tab;
                            view! {
                                <button
                                    class=move || {
                                        if active_tab.get() == tab { "tab-btn active" } else { "tab-btn" }
                                    }
                                    on:click=move |_| set_active_tab.set(tab)
                                >
                                    {*label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                {move || match active_tab.get() {
                    ShopTab::Products => {
                        view! {
                            <div>
                                <div class="chip-rail">
                                    {["All"]
                                        .into_iter()
                                        .map(str::to_string)
                                        .chain(catalog::categories().iter().map(|c| c.name.clone()))
                                        .take(6)
                                        .map(|name| {
                                            let pill_name = name.clone();
                                            view! {
                                                <button
                                                    class=move || {
                                                        if active_category.get() == pill_name {
                                                            "category-pill active"
                                                        } else {
                                                            "category-pill"
                                                        }
                                                    }
                                                    on:click={
                                                        let name = name.clone();
                                                        move |_| set_active_category.set(name.clone())
                                                    }
                                                >
                                                    {name.clone()}
                                                </button>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                                <div class="product-grid">
                                    {move || {
                                        shop_products()
                                            .into_iter()
                                            .map(|product| view! { <ProductCard product=product/> })
                                            .collect_view()
                                    }}
                                </div>
                            </div>
                        }
                            .into_any()
                    }
                    ShopTab::Info => {
                        view! {
                            <div class="shop-tab-body">
                                <div class="card-flat">
                                    <h3>"About"</h3>
                                    <p>
                                        "Local neighborhood grocery serving fresh products and daily essentials for over 10 years."
                                    </p>
                                </div>
                                <div class="card-flat">
                                    <h3>"Opening Hours"</h3>
                                    <p>"Mon - Sat: 7:00 AM - 9:00 PM"</p>
                                    <p>"Sunday: 8:00 AM - 6:00 PM"</p>
                                </div>
                            </div>
                        }
                            .into_any()
                    }
                    ShopTab::Reviews => {
                        view! {
                            <div class="empty-state">
                                <h3>"No reviews yet"</h3>
                                <p>"Be the first to review this shop"</p>
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
