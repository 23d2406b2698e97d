//! Category Card Component
//!
//! Filter chip; clicking toggles the selection it is bound to.

use leptos::prelude::*;

use crate::models::Category;

#[component]
pub fn CategoryCard(
    category: Category,
    selected: ReadSignal<Option<String>>,
    set_selected: WriteSignal<Option<String>>,
) -> impl IntoView {
    let name = category.name.clone();
    let toggle_name = category.name.clone();
    let is_active = move || selected.get().as_deref() == Some(name.as_str());

    view! {
        <button
            class=move || if is_active() { "category-card active" } else { "category-card" }
            on:click=move |_| {
                set_selected
                    .update(|current| {
                        *current = if current.as_deref() == Some(toggle_name.as_str()) {
                            None
                        } else {
                            Some(toggle_name.clone())
                        };
                    })
            }
        >
            <span class="category-icon">{category.icon.clone()}</span>
            <span class="category-name">{category.name.clone()}</span>
        </button>
    }
}
