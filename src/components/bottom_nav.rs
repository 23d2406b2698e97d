//! Bottom Navigation Component
//!
//! Fixed tab bar shown on the main screens. The cart tab carries a badge
//! with the derived unit count.

use leptos::prelude::*;

use crate::context::{use_app_context, Screen};
use crate::store::{cart_items_count, use_app_store};

const TABS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("search", "Search"),
    ("cart", "Cart"),
    ("messages", "Messages"),
    ("profile", "Profile"),
];

fn tab_screen(tab: &str) -> Screen {
    match tab {
        "search" => Screen::Search,
        "cart" => Screen::Cart,
        "messages" => Screen::Messages,
        "profile" => Screen::Profile,
        _ => Screen::Home,
    }
}

fn tab_icon(tab: &str) -> &'static str {
    match tab {
        "search" => "🔍",
        "cart" => "🛒",
        "messages" => "💬",
        "profile" => "👤",
        _ => "🏠",
    }
}

#[component]
pub fn BottomNav() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    view! {
        <nav class="bottom-nav">
            {TABS
                .iter()
                .map(|(tab, label)| {
                    let target = tab_screen(tab);
                    let active_target = target.clone();
                    let is_active = move || ctx.screen.get() == active_target;
                    let is_cart = *tab == "cart";
                    view! {
                        <button
                            class=move || if is_active() { "nav-item active" } else { "nav-item" }
                            on:click=move |_| ctx.navigate(target.clone())
                        >
                            <span class="nav-icon">
                                {tab_icon(tab)}
                                {move || {
                                    let count = cart_items_count(&store);
                                    (is_cart && count > 0)
                                        .then(|| view! { <span class="nav-badge">{count}</span> })
                                }}
                            </span>
                            <span class="nav-label">{*label}</span>
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
