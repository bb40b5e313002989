//! Session provider.
//!
//! Installs `RwSignal<AuthState>` into context in the pending state, then (in
//! the browser) probes `/api/auth/me` once and records the outcome. On the
//! server the state stays pending so the guard renders nothing and leaves the
//! decision to the hydrated client.

#[cfg(test)]
#[path = "auth_provider_test.rs"]
mod auth_provider_test;

use leptos::prelude::*;

use crate::state::auth::AuthState;

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let auth = RwSignal::new(AuthState::pending());
    provide_context(auth);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let user = crate::net::api::fetch_current_user().await;
        log::debug!("session probe: authenticated={}", user.is_some());
        auth.update(|state| state.resolve(user));
    });

    children()
}

/// Clear the session locally and on the backend.
pub fn sign_out(auth: RwSignal<AuthState>) {
    auth.update(AuthState::sign_out);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(crate::net::api::logout());
}
