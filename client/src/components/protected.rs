//! Route guard wrapping the protected route group.

use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::auth::AuthState;
use crate::util::auth::install_route_guard;

/// Renders nested routes for signed-in users; everyone else is sent to
/// `/login` once the session is known.
#[component]
pub fn Protected() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let location = use_location();

    install_route_guard(auth, location.pathname, navigate);

    view! {
        <Show when=move || auth.with(AuthState::is_authenticated)>
            <Outlet/>
        </Show>
    }
}
