//! Application Context
//!
//! Screen graph and navigation, provided via the Leptos Context API. One
//! variant per screen; the shop screen carries the opaque shop id it was
//! opened with (resolved through `catalog::shop_or_first`).

use leptos::prelude::*;

/// Every screen in the app
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Screen {
    Splash,
    Intro,
    Login,
    Home,
    Shop(String),
    Cart,
    Checkout,
    OrderTracking,
    Search,
    Messages,
    Profile,
}

/// App-wide navigation handle provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Currently displayed screen - read
    pub screen: ReadSignal<Screen>,
    /// Currently displayed screen - write
    set_screen: WriteSignal<Screen>,
}

impl AppContext {
    pub fn new(screen: (ReadSignal<Screen>, WriteSignal<Screen>)) -> Self {
        Self {
            screen: screen.0,
            set_screen: screen.1,
        }
    }

    /// Switch to another screen
    pub fn navigate(&self, to: Screen) {
        self.set_screen.set(to);
    }
}

/// Get the navigation context; panics outside the provider scope
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
