//! Intro Screen
//!
//! Onboarding slides shown on first launch. Completing or skipping them
//! marks onboarding as seen, so the splash redirect goes straight to home
//! next time.

use leptos::prelude::*;

use crate::context::{use_app_context, Screen};
use crate::store::{store_set_has_seen_onboarding, use_app_store};

struct Slide {
    title: &'static str,
    description: &'static str,
    icon: &'static str,
}

const SLIDES: &[Slide] = &[
    Slide {
        title: "Fresh Groceries",
        description: "Get the freshest produce from your local shop delivered to your doorstep.",
        icon: "🛍",
    },
    Slide {
        title: "Fast Delivery",
        description: "Our runners bring your order within minutes, not hours.",
        icon: "🚴",
    },
    Slide {
        title: "Support Local",
        description: "Every order supports small shops and runners in your neighborhood.",
        icon: "💚",
    },
    Slide {
        title: "You're All Set!",
        description: "Start shopping and see how easy groceries can be.",
        icon: "✅",
    },
];

#[component]
pub fn IntroScreen() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (current, set_current) = signal(0usize);

    let complete = move || {
        store_set_has_seen_onboarding(&store, true);
        ctx.navigate(Screen::Login);
    };

    let next = move |_| {
        if current.get() + 1 < SLIDES.len() {
            set_current.update(|i| *i += 1);
        } else {
            complete();
        }
    };

    view! {
        <div class="mobile-container intro-screen">
            <div class="intro-top">
                {move || {
                    (current.get() + 1 < SLIDES.len())
                        .then(|| {
                            view! {
                                <button class="skip-btn" on:click=move |_| complete()>
                                    "Skip"
                                </button>
                            }
                        })
                }}
            </div>

            {move || {
                let slide = &SLIDES[current.get()];
                view! {
                    <div class="intro-slide">
                        <div class="intro-icon">{slide.icon}</div>
                        <h2 class="intro-title">{slide.title}</h2>
                        <p class="intro-description">{slide.description}</p>
                    </div>
                }
            }}

            <div class="intro-dots">
                {(0..SLIDES.len())
                    .map(|i| {
                        view! {
                            <span class=move || {
                                if current.get() == i { "dot active" } else { "dot" }
                            }></span>
                        }
                    })
                    .collect_view()}
            </div>

            <button class="btn-primary intro-next" on:click=next>
                {move || if current.get() + 1 < SLIDES.len() { "Next" } else { "Get Started" }}
            </button>
        </div>
    }
}
