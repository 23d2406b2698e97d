//! Menu Row Component
//!
//! One row of the profile menu.

use leptos::prelude::*;

#[component]
pub fn MenuRow(
    icon: &'static str,
    label: &'static str,
    #[prop(optional)] badge: Option<&'static str>,
) -> impl IntoView {
    view! {
        <button class="menu-row">
            <span class="menu-icon">{icon}</span>
            <span class="menu-label">{label}</span>
            {badge.map(|text| view! { <span class="menu-badge">{text}</span> })}
            <span class="menu-chevron">"›"</span>
        </button>
    }
}
