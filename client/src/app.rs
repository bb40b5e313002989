//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Redirect, Route, Router, Routes},
};

use crate::components::{
    auth_provider::AuthProvider,
    protected::Protected,
    toast::{ToastContainer, ToastProvider},
};
use crate::pages::{home::HomePage, login::LoginPage};
use crate::routes::LOGIN_PATH;
use crate::util::auth::replace_history;

/// HTML shell rendered on the server for SSR + hydration.
///
/// Asset URLs derive from `output_name`, which the host rewrites to the
/// build-stamped name before rendering.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let stylesheet = format!("/{}/{}.css", options.site_pkg_dir, options.output_name);
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="stylesheet" href=stylesheet/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Toast sits outside auth so the session layer can raise notifications.
/// Explicit paths are declared first, then the protected group, and anything
/// else falls back to a redirect to `/login`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Chat Rooms"/>

        <ToastProvider>
            <AuthProvider>
                <Router>
                    <Routes fallback=|| view! { <Redirect path=LOGIN_PATH options=replace_history()/> }>
                        <Route path=StaticSegment("login") view=LoginPage/>
                        <ParentRoute path=StaticSegment("") view=Protected>
                            <Route path=StaticSegment("") view=HomePage/>
                        </ParentRoute>
                    </Routes>
                    <ToastContainer/>
                </Router>
            </AuthProvider>
        </ToastProvider>
    }
}
