//! Splash Screen
//!
//! Brand screen shown on launch; redirects after a short delay. The
//! pending timeout is cancelled if the screen is torn down first.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::context::{use_app_context, Screen};
use crate::store::{use_app_store, AppStateStoreFields};

const SPLASH_MS: u32 = 2_500;

#[component]
pub fn SplashScreen() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let redirect = StoredValue::new_local(None::<Timeout>);
    redirect.set_value(Some(Timeout::new(SPLASH_MS, move || {
        if store.has_seen_onboarding().get_untracked() {
            ctx.navigate(Screen::Home);
        } else {
            ctx.navigate(Screen::Intro);
        }
    })));

    on_cleanup(move || {
        redirect.update_value(|pending| {
            if let Some(timeout) = pending.take() {
                timeout.cancel();
            }
        });
    });

    view! {
        <div class="mobile-container splash-screen">
            <div class="splash-logo">"🛒"</div>
            <h1 class="splash-title">"Sefer Market"</h1>
            <p class="splash-tagline">"Your nearest grocery, delivered fast."</p>
            <div class="splash-dots">
                <span class="dot"></span>
                <span class="dot"></span>
                <span class="dot"></span>
            </div>
        </div>
    }
}
