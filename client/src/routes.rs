//! Route table for the single-page shell.
//!
//! DESIGN
//! ======
//! Resolution is a pure function of `(path, session status)`. Entries are
//! checked in declaration order: explicit public paths, then the protected
//! group, then the catch-all redirect. The `<Routes>` tree in `app` declares
//! the same paths; the route guard consults this table so both agree.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::state::auth::SessionStatus;

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/";

/// Pages the shell can render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Login,
    /// Index of the protected group; blank until the rooms list exists.
    Home,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Access {
    Public,
    Protected,
}

/// Outcome of matching a path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    Render(Page),
    Redirect(&'static str),
}

struct RouteEntry {
    path: &'static str,
    page: Page,
    access: Access,
}

const ROUTES: &[RouteEntry] = &[
    RouteEntry { path: LOGIN_PATH, page: Page::Login, access: Access::Public },
    RouteEntry { path: HOME_PATH, page: Page::Home, access: Access::Protected },
];

/// Strip query string, fragment, and trailing slashes. Empty becomes `/`.
pub fn normalize_path(raw: &str) -> &str {
    let end = raw.find(['?', '#']).unwrap_or(raw.len());
    let trimmed = raw[..end].trim_end_matches('/');
    if trimmed.is_empty() { HOME_PATH } else { trimmed }
}

/// Map a location to the page it renders or the path it redirects to.
pub fn resolve(path: &str, status: SessionStatus) -> Resolution {
    let path = normalize_path(path);
    let Some(route) = ROUTES.iter().find(|r| r.path == path) else {
        return Resolution::Redirect(LOGIN_PATH);
    };
    match (route.access, status) {
        (Access::Public, _) | (Access::Protected, SessionStatus::Authenticated) => Resolution::Render(route.page),
        (Access::Protected, SessionStatus::Anonymous) => Resolution::Redirect(LOGIN_PATH),
    }
}


/// Paths declared in the table, in match order.
pub fn declared_paths() -> impl Iterator<Item = &'static str> {
    ROUTES.iter().map(|r| r.path)
}
