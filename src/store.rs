//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store is
//! the single owner of the cart, the session, and app preferences; screens
//! go through the helpers below and keep only transient view state.
//!
//! The store is created once at app start and handed down via context —
//! `use_app_store` outside the provider scope is a programming error and
//! halts immediately.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::cart::{self, CartError};
use crate::models::{CartItem, Product, User};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Cart contents, insertion-ordered, at most one item per product id
    pub cart: Vec<CartItem>,
    /// Signed-in session; `None` is guest mode
    pub user: Option<User>,
    /// Dark-mode flag, mirrored onto the document root by the app shell
    pub dark_mode: bool,
    /// Whether the intro slides were completed or skipped
    pub has_seen_onboarding: bool,
    /// Free-text delivery location label
    pub current_location: String,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            current_location: "Bole, Addis Ababa".to_string(),
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Cart Operations
// ========================

/// Add `quantity` of a product to the cart, merging with an existing line
pub fn store_add_to_cart(store: &AppStore, product: &Product, quantity: u32) -> Result<(), CartError> {
    cart::add_item(&mut store.cart().write(), product, quantity)
}

/// Remove a product's line from the cart; no-op if absent
pub fn store_remove_from_cart(store: &AppStore, product_id: &str) {
    cart::remove_item(&mut store.cart().write(), product_id);
}

/// Set a line's quantity exactly; 0 removes the line
pub fn store_update_quantity(store: &AppStore, product_id: &str, quantity: u32) {
    cart::set_quantity(&mut store.cart().write(), product_id, quantity);
}

/// Attach or clear the free-text note on a cart line
pub fn store_set_item_note(store: &AppStore, product_id: &str, note: Option<String>) {
    cart::set_note(&mut store.cart().write(), product_id, note);
}

pub fn store_clear_cart(store: &AppStore) {
    store.cart().write().clear();
}

/// Derived: Σ price × quantity over the current cart, recomputed on read.
/// Reading inside a reactive closure subscribes to cart changes.
pub fn cart_total(store: &AppStore) -> u32 {
    cart::total(&store.cart().read())
}

/// Derived: Σ quantity over the current cart (unit count, not line count)
pub fn cart_items_count(store: &AppStore) -> u32 {
    cart::items_count(&store.cart().read())
}

// ========================
// Session & Preferences
// ========================

/// Replace the session atomically; `None` returns the app to guest mode
pub fn store_set_user(store: &AppStore, user: Option<User>) {
    store.user().set(user);
}

/// Derived: true iff there is no session
pub fn is_guest(store: &AppStore) -> bool {
    store.user().read().is_none()
}

pub fn store_toggle_theme(store: &AppStore) {
    store.dark_mode().update(|dark| *dark = !*dark);
}

pub fn store_set_has_seen_onboarding(store: &AppStore, seen: bool) {
    store.has_seen_onboarding().set(seen);
}

pub fn store_set_current_location(store: &AppStore, location: String) {
    store.current_location().set(location);
}
