//! Profile Screen
//!
//! Session card, stats, menu rows. Logging out drops the session; the app
//! is immediately back in guest mode everywhere.

use leptos::prelude::*;

use crate::components::{BottomNav, MenuRow, MobileLayout, ThemeToggle};
use crate::context::{use_app_context, Screen};
use crate::store::{
    is_guest, store_set_current_location, store_set_user, use_app_store, AppStateStoreFields,
};

const ACCOUNT_MENU: &[(&str, &str, Option<&str>)] = &[
    ("📦", "My Orders", None),
    ("❤", "Favorites", None),
    ("📍", "Saved Addresses", None),
];

const GENERAL_MENU: &[(&str, &str, Option<&str>)] = &[
    ("💳", "Payment Methods", Some("Coming soon")),
    ("🎁", "Promo Codes", None),
    ("🔔", "Notifications", None),
    ("❓", "Help & Support", None),
    ("⚙", "Settings", None),
];

#[component]
pub fn ProfileScreen() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    view! {
        <MobileLayout>
            <div class="screen-body">
                <header class="screen-header">
                    <h1>"Profile"</h1>
                    <ThemeToggle/>
                </header>

                <div class="profile-card">
                    <div class="profile-avatar">"👤"</div>
                    <div class="profile-identity">
                        <h2>
                            {move || {
                                store
                                    .user()
                                    .with(|user| {
                                        user.as_ref().map(|u| u.name.clone()).unwrap_or_else(|| "Guest".to_string())
                                    })
                            }}
                        </h2>
                        <p class="muted">
                            {move || {
                                store
                                    .user()
                                    .with(|user| match user {
                                        Some(u) => format!("+251 {}", u.phone),
                                        None => "Sign in to sync data".to_string(),
                                    })
                            }}
                        </p>
                    </div>
                </div>

                {move || {
                    if is_guest(&store) {
                        view! {
                            <button class="btn-primary signin-cta" on:click=move |_| ctx.navigate(Screen::Login)>
                                "Sign in or Register"
                            </button>
                        }
                            .into_any()
                    } else {
                        view! {
                            <div class="stats-row">
                                <div class="stat-tile">
                                    <span class="stat-value">"12"</span>
                                    <span class="stat-label">"Orders"</span>
                                </div>
                                <div class="stat-tile">
                                    <span class="stat-value">"4.8"</span>
                                    <span class="stat-label">"Rating"</span>
                                </div>
                                <div class="stat-tile">
                                    <span class="stat-value">"Pro"</span>
                                    <span class="stat-label">"Member"</span>
                                </div>
                            </div>
                        }
                            .into_any()
                    }
                }}

                <section class="menu-section">
                    <h3>"Delivery Location"</h3>
                    <div class="card-flat">
                        <input
                            type="text"
                            class="input-field"
                            placeholder="Area, city"
                            prop:value=move || store.current_location().get()
                            on:input=move |ev| {
                                store_set_current_location(&store, event_target_value(&ev))
                            }
                        />
                    </div>
                </section>

                <section class="menu-section">
                    <h3>"Account"</h3>
                    <div class="menu-group card-flat">
                        {ACCOUNT_MENU
                            .iter()
                            .map(|(icon, label, badge)| {
                                view! { <MenuRow icon=*icon label=*label badge=*badge/> }
                            })
                            .collect_view()}
                    </div>
                </section>

                <section class="menu-section">
                    <h3>"General"</h3>
                    <div class="menu-group card-flat">
                        {GENERAL_MENU
                            .iter()
                            .map(|(icon, label, badge)| {
                                view! { <MenuRow icon=*icon label=*label badge=*badge/> }
                            })
                            .collect_view()}
                    </div>
                </section>

                {move || {
                    (!is_guest(&store))
                        .then(|| {
                            view! {
                                <button
                                    class="btn-secondary destructive"
                                    on:click=move |_| store_set_user(&store, None)
                                >
                                    "Log Out"
                                </button>
                            }
                        })
                }}
            </div>
            <BottomNav/>
        </MobileLayout>
    }
}
