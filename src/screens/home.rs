//! Home Screen
//!
//! Greeting, location, category chips, open-shop rail, and product grids.

use leptos::prelude::*;

use crate::catalog;
use crate::components::{BottomNav, CategoryCard, MobileLayout, ProductCard, ShopCard, ThemeToggle};
use crate::context::{use_app_context, Screen};
use crate::store::{use_app_store, AppStateStoreFields};

fn greeting(hour: u32) -> &'static str {
    match hour {
        0..=11 => "Good morning",
        12..=16 => "Good afternoon",
        _ => "Good evening",
    }
}

#[component]
pub fn HomeScreen() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (selected_category, set_selected_category) = signal(None::<String>);

    let hour = js_sys::Date::new_0().get_hours();

    let filtered_products = move || {
        let products = catalog::products();
        match selected_category.get() {
            Some(name) => products.iter().filter(|p| p.category == name).cloned().collect::<Vec<_>>(),
            None => products.to_vec(),
        }
    };

    view! {
        <MobileLayout>
            <div class="screen-body">
                <header class="home-header">
                    <div class="home-greeting">
                        <p class="greeting-line">
                            {greeting(hour)} ", "
                            {move || {
                                store
                                    .user()
                                    .with(|user| {
                                        user.as_ref().map(|u| u.name.clone()).unwrap_or_else(|| "Guest".to_string())
                                    })
                            }} " 👋"
                        </p>
                        <button class="location-row" on:click=move |_| ctx.navigate(Screen::Profile)>
                            "📍 " {move || store.current_location().get()}
                        </button>
                    </div>
                    <ThemeToggle/>
                </header>

                <button class="search-bar" on:click=move |_| ctx.navigate(Screen::Search)>
                    "🔍 Search products or shops..."
                </button>

                <div class="hero-banner">
                    <span class="hero-badge">"🚀 Fast Delivery"</span>
                    <h2>"Fresh Grocery Delivery in Addis"</h2>
                    <p>"Support your local shops 💚"</p>
                </div>

                <section class="home-section">
                    <h3>"Categories"</h3>
                    <div class="chip-rail">
                        {catalog::categories()
                            .iter()
                            .take(6)
                            .map(|category| {
                                view! {
                                    <CategoryCard
                                        category=category.clone()
                                        selected=selected_category
                                        set_selected=set_selected_category
                                    />
                                }
                            })
                            .collect_view()}
                    </div>
                </section>

                <section class="home-section">
                    <h3>"Nearby Shops"</h3>
                    <div class="shop-rail">
                        {catalog::shops()
                            .iter()
                            .filter(|shop| shop.is_open)
                            .map(|shop| view! { <ShopCard shop=shop.clone()/> })
                            .collect_view()}
                    </div>
                </section>

                <section class="home-section">
                    <div class="section-head">
                        <h3>
                            {move || selected_category.get().unwrap_or_else(|| "Popular Today".to_string())}
                        </h3>
                        {move || {
                            selected_category
                                .get()
                                .is_some()
                                .then(|| {
                                    view! {
                                        <button
                                            class="link-btn"
                                            on:click=move |_| set_selected_category.set(None)
                                        >
                                            "Clear filter"
                                        </button>
                                    }
                                })
                        }}
                    </div>
                    <div class="product-grid">
                        {move || {
                            filtered_products()
                                .into_iter()
                                .take(6)
                                .map(|product| view! { <ProductCard product=product/> })
                                .collect_view()
                        }}
                    </div>
                </section>

                <section class="home-section">
                    <h3>"Fresh & Fruits 🍎"</h3>
                    <div class="product-rail">
                        {catalog::products()
                            .iter()
                            .filter(|p| p.category == "Vegetables & Fruits")
                            .map(|product| view! { <ProductCard product=product.clone()/> })
                            .collect_view()}
                    </div>
                </section>

                <section class="home-section">
                    <h3>"Daily Essentials"</h3>
                    <div class="product-grid">
                        {catalog::products()
                            .iter()
                            .filter(|p| p.category == "Dairy & Eggs" || p.category == "Bread & Bakery")
                            .take(4)
                            .map(|product| view! { <ProductCard product=product.clone()/> })
                            .collect_view()}
                    </div>
                </section>
            </div>
            <BottomNav/>
        </MobileLayout>
    }
}

#[cfg(test)]
mod tests {
    use super::greeting;

    #[test]
    fn greeting_boundaries() {
        assert_eq!(greeting(0), "Good morning");
        assert_eq!(greeting(11), "Good morning");
        assert_eq!(greeting(12), "Good afternoon");
        assert_eq!(greeting(16), "Good afternoon");
        assert_eq!(greeting(17), "Good evening");
        assert_eq!(greeting(23), "Good evening");
    }
}
