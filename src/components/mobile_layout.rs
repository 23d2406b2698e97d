//! Mobile Layout Component
//!
//! Phone-width shell wrapping every screen.

use leptos::prelude::*;

#[component]
pub fn MobileLayout(children: Children) -> impl IntoView {
    view! {
        <div class="mobile-container">
            {children()}
        </div>
    }
}
