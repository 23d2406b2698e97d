//! Messages Screen
//!
//! Chat-thread previews from the catalog fixtures.

use leptos::prelude::*;

use crate::catalog;
use crate::components::{BottomNav, MobileLayout};
use crate::models::ThreadKind;

/// Compact relative-time label for a message age in minutes
fn relative_time_label(minutes: u32) -> String {
    match minutes {
        0 => "just now".to_string(),
        1..=59 => format!("{} min ago", minutes),
        60..=1439 => format!("{} h ago", minutes / 60),
        _ => format!("{} d ago", minutes / 1440),
    }
}

#[component]
pub fn MessagesScreen() -> impl IntoView {
    let threads = catalog::chat_threads();

    view! {
        <MobileLayout>
            <div class="screen-body">
                <header class="screen-header">
                    <h1>"Messages"</h1>
                </header>

                {if threads.is_empty() {
                    view! {
                        <div class="empty-state">
                            <div class="empty-icon">"💬"</div>
                            <h3>"No messages yet"</h3>
                            <p>"Chats with shops and runners will show up here"</p>
                        </div>
                    }
                        .into_any()
                } else {
                    view! {
                        <div class="thread-list">
                            {threads
                                .iter()
                                .map(|thread| {
                                    let avatar = match thread.kind {
                                        ThreadKind::Shop => "🏪",
                                        ThreadKind::Runner => "🚴",
                                    };
                                    view! {
                                        <button class="thread-row card-flat">
                                            <span class="thread-avatar">
                                                {avatar}
                                                {(thread.unread_count > 0)
                                                    .then(|| {
                                                        view! {
                                                            <span class="nav-badge">{thread.unread_count}</span>
                                                        }
                                                    })}
                                            </span>
                                            <span class="thread-body">
                                                <span class="thread-head">
                                                    <span class="thread-name">
                                                        {thread.participant_name.clone()}
                                                    </span>
                                                    <span class="muted">
                                                        {relative_time_label(thread.minutes_ago)}
                                                    </span>
                                                </span>
                                                <span class={if thread.unread_count > 0 {
                                                    "thread-preview unread"
                                                } else {
                                                    "thread-preview"
                                                }}>{thread.last_message.clone()}</span>
                                            </span>
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                        .into_any()
                }}
            </div>
            <BottomNav/>
        </MobileLayout>
    }
}

#[cfg(test)]
mod tests {
    use super::relative_time_label;

    #[test]
    fn relative_time_buckets() {
        assert_eq!(relative_time_label(0), "just now");
        assert_eq!(relative_time_label(1), "1 min ago");
        assert_eq!(relative_time_label(59), "59 min ago");
        assert_eq!(relative_time_label(60), "1 h ago");
        assert_eq!(relative_time_label(190), "3 h ago");
        assert_eq!(relative_time_label(2880), "2 d ago");
    }
}
