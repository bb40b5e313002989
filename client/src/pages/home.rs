//! Index of the protected group. Intentionally blank until the rooms list
//! replaces it.

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! { <main class="home-placeholder"></main> }
}
