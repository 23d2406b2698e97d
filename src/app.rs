//! App Shell
//!
//! Creates the state container and navigation context at app start,
//! provides both to every screen, mirrors the theme flag onto the
//! document, and dispatches the current screen.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::context::{AppContext, Screen};
use crate::screens::{
    CartScreen, CheckoutScreen, HomeScreen, IntroScreen, LoginScreen, MessagesScreen,
    OrderTrackingScreen, ProfileScreen, SearchScreen, ShopScreen, SplashScreen,
};
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new());
    let (screen, set_screen) = signal(Screen::Splash);

    // Provide the container and navigation to all children; anything
    // rendered outside this scope has no business touching app state.
    provide_context(store);
    provide_context(AppContext::new((screen, set_screen)));

    // Mirror dark mode onto the document root so every screen restyles
    // at once (the flag itself lives in the store)
    Effect::new(move |_| {
        let dark = store.dark_mode().get();
        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };
        let class_list = root.class_list();
        let result = if dark {
            class_list.add_1("dark")
        } else {
            class_list.remove_1("dark")
        };
        if result.is_err() {
            web_sys::console::warn_1(&"[APP] failed to update theme class".into());
        }
    });

    view! {
        <div class="app-root">
            {move || match screen.get() {
                Screen::Splash => view! { <SplashScreen/> }.into_any(),
                Screen::Intro => view! { <IntroScreen/> }.into_any(),
                Screen::Login => view! { <LoginScreen/> }.into_any(),
                Screen::Home => view! { <HomeScreen/> }.into_any(),
                Screen::Shop(id) => view! { <ShopScreen shop_id=id/> }.into_any(),
                Screen::Cart => view! { <CartScreen/> }.into_any(),
                Screen::Checkout => view! { <CheckoutScreen/> }.into_any(),
                Screen::OrderTracking => view! { <OrderTrackingScreen/> }.into_any(),
                Screen::Search => view! { <SearchScreen/> }.into_any(),
                Screen::Messages => view! { <MessagesScreen/> }.into_any(),
                Screen::Profile => view! { <ProfileScreen/> }.into_any(),
            }}
        </div>
    }
}
