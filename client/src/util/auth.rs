//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The route guard and the wildcard fallback must apply identical redirect
//! behavior: go to `/login`, replace the history entry, keep no return URL.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::routes::{Resolution, resolve};
use crate::state::auth::AuthState;

/// Navigation options for guard redirects.
pub fn replace_history() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Where the guard should send the user, if anywhere.
///
/// Returns `None` while the session is still loading.
pub fn guard_redirect(state: &AuthState, path: &str) -> Option<&'static str> {
    match resolve(path, state.status()?) {
        Resolution::Redirect(target) => Some(target),
        Resolution::Render(_) => None,
    }
}

/// Redirect whenever auth has loaded and the current path is not allowed.
pub fn install_route_guard<F>(auth: RwSignal<AuthState>, pathname: Memo<String>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = auth.get();
        let path = pathname.get();
        if let Some(target) = guard_redirect(&state, &path) {
            #[cfg(feature = "hydrate")]
            log::debug!("route guard: {path} -> {target}");
            navigate(target, replace_history());
        }
    });
}
