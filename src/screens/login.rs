//! Login Screen
//!
//! Simulated OTP flow: phone entry, then a six-cell code. Validation is
//! advisory only — incomplete input disables the button, it never errors.
//! Verifying installs the fixture session; guests skip straight to home.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::catalog;
use crate::context::{use_app_context, Screen};
use crate::store::{store_set_user, use_app_store};

const OTP_LEN: usize = 6;
const PHONE_LEN: usize = 9;

/// Strip everything but digits and cap at the local-number length
fn sanitize_phone(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).take(PHONE_LEN).collect()
}

fn phone_is_valid(phone: &str) -> bool {
    phone.len() >= PHONE_LEN
}

fn otp_complete(cells: &[String]) -> bool {
    cells.iter().all(|cell| !cell.is_empty())
}

fn focus_otp_cell(index: usize) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(element) = document.get_element_by_id(&format!("otp-{index}")) {
        if let Ok(input) = element.dyn_into::<web_sys::HtmlInputElement>() {
            let _ = input.focus();
        }
    }
}

#[component]
pub fn LoginScreen() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (phone, set_phone) = signal(String::new());
    let (show_otp, set_show_otp) = signal(false);
    let otp = RwSignal::new(vec![String::new(); OTP_LEN]);

    let send_otp = move |_| {
        if phone_is_valid(&phone.get()) {
            set_show_otp.set(true);
        }
    };

    let verify = move |_| {
        let number = phone.get();
        web_sys::console::log_1(&format!("[LOGIN] verified +251 {}", number).into());
        store_set_user(&store, Some(catalog::demo_user(&number)));
        ctx.navigate(Screen::Home);
    };

    let continue_as_guest = move |_| ctx.navigate(Screen::Home);

    let on_otp_input = move |index: usize, value: String| {
        let digit: String = value.chars().filter(char::is_ascii_digit).take(1).collect();
        otp.update(|cells| cells[index] = digit.clone());
        if !digit.is_empty() && index + 1 < OTP_LEN {
            focus_otp_cell(index + 1);
        }
    };

    view! {
        <div class="mobile-container login-screen">
            <div class="login-header">
                <div class="login-logo">"🛒"</div>
                <h1>{move || if show_otp.get() { "Verify Your Number" } else { "Welcome Back" }}</h1>
                <p class="login-subtitle">
                    {move || {
                        if show_otp.get() {
                            format!("Enter the code sent to +251 {}", phone.get())
                        } else {
                            "Enter your phone number to continue".to_string()
                        }
                    }}
                </p>
            </div>

            {move || {
                if !show_otp.get() {
                    view! {
                        <div class="login-form">
                            <div class="phone-row">
                                <span class="phone-prefix">"+251"</span>
                                <input
                                    type="tel"
                                    class="input-field"
                                    placeholder="9X XXX XXXX"
                                    prop:value=move || phone.get()
                                    on:input=move |ev| set_phone.set(sanitize_phone(&event_target_value(&ev)))
                                />
                            </div>
                            <button
                                class="btn-primary"
                                disabled=move || !phone_is_valid(&phone.get())
                                on:click=send_otp
                            >
                                "Continue"
                            </button>

                            <div class="divider">"or"</div>
                            <button class="btn-secondary" on:click=continue_as_guest>
                                "Continue as Guest"
                            </button>
                            <p class="guest-hint">
                                "Browse products without an account. Some features will be limited."
                            </p>
                        </div>
                    }
                        .into_any()
                } else {
                    view! {
                        <div class="login-form">
                            <div class="otp-row">
                                {(0..OTP_LEN)
                                    .map(|i| {
                                        view! {
                                            <input
                                                id=format!("otp-{i}")
                                                type="text"
                                                inputmode="numeric"
                                                maxlength="1"
                                                class="otp-cell"
                                                prop:value=move || otp.with(|cells| cells[i].clone())
                                                on:input=move |ev| on_otp_input(i, event_target_value(&ev))
                                            />
                                        }
                                    })
                                    .collect_view()}
                            </div>
                            <button
                                class="btn-accent"
                                disabled=move || otp.with(|cells| !otp_complete(cells))
                                on:click=verify
                            >
                                "Verify & Continue"
                            </button>
                            <button class="link-btn" on:click=move |_| set_show_otp.set(false)>
                                "Change phone number"
                            </button>
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_keeps_digits_and_caps_length() {
        assert_eq!(sanitize_phone("91 234 5678"), "912345678");
        assert_eq!(sanitize_phone("9123456789999"), "912345678");
        assert_eq!(sanitize_phone("abc"), "");
    }

    #[test]
    fn phone_valid_at_nine_digits() {
        assert!(!phone_is_valid("91234567"));
        assert!(phone_is_valid("912345678"));
    }

    #[test]
    fn otp_complete_requires_every_cell() {
        let mut cells = vec!["1", "2", "3", "4", "5", ""].into_iter().map(String::from).collect::<Vec<_>>();
        assert!(!otp_complete(&cells));
        cells[5] = "6".to_string();
        assert!(otp_complete(&cells));
    }
}
