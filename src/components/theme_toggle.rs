//! Theme Toggle Component

use leptos::prelude::*;

use crate::store::{store_toggle_theme, use_app_store, AppStateStoreFields};

/// Flips the global dark-mode flag; the app shell mirrors it onto the
/// document root so every screen restyles at once.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let store = use_app_store();

    view! {
        <button
            class="theme-toggle"
            aria-label="Toggle dark mode"
            on:click=move |_| store_toggle_theme(&store)
        >
            {move || if store.dark_mode().get() { "☀" } else { "🌙" }}
        </button>
    }
}
