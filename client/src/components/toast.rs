//! Toast context, provider, and on-screen stack.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ToastProvider` sits outermost in the app so every page and the auth layer
//! can raise notifications. `ToastContainer` renders inside the router, after
//! the routed page.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastLevel, ToastState};
use crate::util::clock::now_ms;

/// Handle to the toast queue, provided via context.
#[derive(Clone, Copy)]
pub struct ToastContext {
    state: RwSignal<ToastState>,
}

impl ToastContext {
    pub fn new(state: RwSignal<ToastState>) -> Self {
        Self { state }
    }

    /// Show a toast. Fire-and-forget: it removes itself after the display
    /// duration.
    pub fn show(&self, message: impl Into<String>, level: ToastLevel) {
        let Some(id) = self.state.try_update(|s| s.push(message, level, now_ms())) else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let state = self.state;
            let duration_ms = state.with_untracked(ToastState::duration_ms);
            log::debug!("toast {id} ({level}) shown for {duration_ms}ms");
            gloo_timers::callback::Timeout::new(duration_ms, move || {
                state.try_update(|s| {
                    s.dismiss(id);
                    s.prune(now_ms());
                });
            })
            .forget();
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    }

    pub fn dismiss(&self, id: u64) {
        self.state.update(|s| {
            s.dismiss(id);
        });
    }

    /// Live toasts, tracked for reactive rendering.
    pub fn live(&self) -> Vec<Toast> {
        self.state.with(|s| s.toasts().to_vec())
    }
}

/// Fetch the toast handle installed by `ToastProvider`.
pub fn use_toast() -> ToastContext {
    expect_context::<ToastContext>()
}

/// Provides a fresh toast queue to all children.
#[component]
pub fn ToastProvider(children: Children) -> impl IntoView {
    provide_context(ToastContext::new(RwSignal::new(ToastState::default())));
    children()
}

/// Renders live toasts, oldest first.
#[component]
pub fn ToastContainer() -> impl IntoView {
    let toasts = use_toast();

    view! {
        <div class="toast-stack" aria-live="polite">
            <For
                each=move || toasts.live()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast_class(toast.level) role="status" data-level=toast.level.as_str()>
                            <span class="toast__message">{toast.message}</span>
                            <button
                                class="toast__close"
                                type="button"
                                aria-label="Dismiss"
                                on:click=move |_| toasts.dismiss(id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

fn toast_class(level: ToastLevel) -> String {
    format!("toast toast--{level}")
}
