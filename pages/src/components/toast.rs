//! Success toast.
//!
//! Server-side this only renders the current state. The auto-dismiss timer
//! runs in the page script, which reads `data-duration` and cancels any
//! pending timer before re-arming.

use leptos::prelude::*;

use super::{ICON_CHECK_CIRCLE, ICON_X, Icon};
use crate::types::ToastView;

/// Dismissible success banner.
#[component]
pub fn SuccessToast(toast: ToastView) -> impl IntoView {
    let ToastView {
        message,
        visible,
        duration_ms,
    } = toast;

    let class = if visible {
        "toast toast-success visible"
    } else {
        "toast toast-success"
    };
    let state = if visible { "visible" } else { "hidden" };
    let data_message = message.clone();

    view! {
        <div
            id="success-toast"
            class=class
            role="status"
            aria-live="polite"
            data-state=state
            data-duration=duration_ms.to_string()
            data-message=data_message
            hidden=!visible
        >
            <Icon path=ICON_CHECK_CIRCLE class="toast-icon" />
            <span class="toast-message">{message}</span>
            <button
                type="button"
                class="toast-dismiss"
                data-role="toast-dismiss"
                aria-label="Dismiss notification"
            >
                <Icon path=ICON_X size="16" />
            </button>
        </div>
    }
}

/// Contact form that triggers the toast on submit.
#[component]
pub fn ContactForm() -> impl IntoView {
    view! {
        <section class="contact" aria-label="Contact us">
            <div class="container">
                <form class="contact-form" data-role="contact-form" method="post">
                    <label>
                        "Name"
                        <input type="text" name="name" required=true autocomplete="name" />
                    </label>
                    <label>
                        "Email"
                        <input type="email" name="email" required=true autocomplete="email" />
                    </label>
                    <label>
                        "Phone"
                        <input type="tel" name="phone" autocomplete="tel" />
                    </label>
                    <label>
                        "What can we help with?"
                        <select name="service">
                            <option value="wallpapers">"Wallpapers"</option>
                            <option value="flooring">"Flooring"</option>
                            <option value="blinds">"Blinds"</option>
                        </select>
                    </label>
                    <label>
                        "Message"
                        <textarea name="message" rows="5"></textarea>
                    </label>
                    <button type="submit" class="btn btn-primary">"Request a free quote"</button>
                </form>
            </div>
        </section>
    }
}
