//! Search Screen
//!
//! Live query over the catalog with tabbed product/shop results. A query
//! with no matches shows an empty state, never an error.

use leptos::prelude::*;

use crate::catalog;
use crate::components::{BottomNav, MobileLayout, ProductCard, ShopCard};
use crate::context::{use_app_context, Screen};

const RECENT_SEARCHES: &[&str] = &["Tomatoes", "Milk", "Bread", "Eggs"];

#[derive(Clone, Copy, PartialEq)]
enum SearchTab {
    Products,
    Shops,
}

#[component]
pub fn SearchScreen() -> impl IntoView {
    let ctx = use_app_context();
    let (query, set_query) = signal(String::new());
    let (active_tab, set_active_tab) = signal(SearchTab::Products);

    let matched_products = move || catalog::search_products(&query.get());
    let matched_shops = move || catalog::search_shops(&query.get());

    view! {
        <MobileLayout>
            <div class="screen-body">
                <header class="screen-header">
                    <button class="back-btn" on:click=move |_| ctx.navigate(Screen::Home)>
                        "‹"
                    </button>
                    <input
                        type="text"
                        class="input-field"
                        placeholder="Search products or shops..."
                        prop:value=move || query.get()
                        on:input=move |ev| set_query.set(event_target_value(&ev))
                    />
                    {move || {
                        (!query.get().is_empty())
                            .then(|| {
                                view! {
                                    <button class="link-btn" on:click=move |_| set_query.set(String::new())>
                                        "✕"
                                    </button>
                                }
                            })
                    }}
                </header>

                {move || {
                    if query.get().is_empty() {
                        view! {
                            <div>
                                <section class="home-section">
                                    <h3>"Recent Searches"</h3>
                                    <div class="chip-rail">
                                        {RECENT_SEARCHES
                                            .iter()
                                            .map(|term| {
                                                view! {
                                                    <button
                                                        class="category-pill"
                                                        on:click=move |_| set_query.set(term.to_string())
                                                    >
                                                        {*term}
                                                    </button>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </section>
                                <section class="home-section">
                                    <h3>"Popular Categories"</h3>
                                    <div class="chip-rail">
                                        {catalog::categories()
                                            .iter()
                                            .take(4)
                                            .map(|category| {
                                                let name = category.name.clone();
                                                view! {
                                                    <button
                                                        class="category-card"
                                                        on:click=move |_| set_query.set(name.clone())
                                                    >
                                                        <span class="category-icon">
                                                            {category.icon.clone()}
                                                        </span>
                                                        <span class="category-name">
                                                            {category.name.clone()}
                                                        </span>
                                                    </button>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </section>
                            </div>
                        }
                            .into_any()
                    } else {
                        view! {
                            <div>
                                <div class="tab-row">
                                    <button
                                        class=move || {
                                            if active_tab.get() == SearchTab::Products {
                                                "tab-btn active"
                                            } else {
                                                "tab-btn"
                                            }
                                        }
                                        on:click=move |_| set_active_tab.set(SearchTab::Products)
                                    >
                                        {move || format!("Products ({})", matched_products().len())}
                                    </button>
                                    <button
                                        class=move || {
                                            if active_tab.get() == SearchTab::Shops {
                                                "tab-btn active"
                                            } else {
                                                "tab-btn"
                                            }
                                        }
                                        on:click=move |_| set_active_tab.set(SearchTab::Shops)
                                    >
                                        {move || format!("Shops ({})", matched_shops().len())}
                                    </button>
                                </div>

                                {move || match active_tab.get() {
                                    SearchTab::Products => {
                                        let hits = matched_products();
                                        if hits.is_empty() {
                                            view! {
                                                <div class="empty-state">
                                                    <div class="empty-icon">"🔍"</div>
                                                    <h3>"No products found"</h3>
                                                    <p>"Try searching for something else"</p>
                                                </div>
                                            }
                                                .into_any()
                                        } else {
                                            view! {
                                                <div class="product-grid">
                                                    {hits
                                                        .into_iter()
                                                        .map(|product| {
                                                            view! { <ProductCard product=product.clone()/> }
                                                        })
                                                        .collect_view()}
                                                </div>
                                            }
                                                .into_any()
                                        }
                                    }
                                    SearchTab::Shops => {
                                        let hits = matched_shops();
                                        if hits.is_empty() {
                                            view! {
                                                <div class="empty-state">
                                                    <div class="empty-icon">"🏪"</div>
                                                    <h3>"No shops found"</h3>
                                                    <p>"Try a different shop name"</p>
                                                </div>
                                            }
                                                .into_any()
                                        } else {
                                            view! {
                                                <div class="shop-list">
                                                    {hits
                                                        .into_iter()
                                                        .map(|shop| view! { <ShopCard shop=shop.clone()/> })
                                                        .collect_view()}
                                                </div>
                                            }
                                                .into_any()
                                        }
                                    }
                                }}
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
