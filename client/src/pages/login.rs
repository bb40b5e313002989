//! Placeholder login page.
//!
//! The real sign-in form is not built yet; the page only exercises the toast
//! context.

use leptos::prelude::*;

use crate::components::toast::use_toast;
use crate::state::toast::ToastLevel;

pub const WELCOME_MESSAGE: &str = "Welcome back";

#[component]
pub fn LoginPage() -> impl IntoView {
    let toasts = use_toast();

    view! {
        <div class="login-page">
            <button
                class="login-button"
                type="button"
                on:click=move |_| toasts.show(WELCOME_MESSAGE, ToastLevel::Success)
            >
                "Show Success Toast"
            </button>
        </div>
    }
}
