//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the route guard and the auth provider. The backend session itself
//! is opaque; this model only records whether the last probe found a user.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Whether the current browser session belongs to a signed-in user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    Authenticated,
    Anonymous,
}

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// State used before the first session probe completes.
    pub fn pending() -> Self {
        Self { user: None, loading: true }
    }

    /// Known session status, or `None` while still loading.
    pub fn status(&self) -> Option<SessionStatus> {
        if self.loading {
            return None;
        }
        Some(if self.user.is_some() { SessionStatus::Authenticated } else { SessionStatus::Anonymous })
    }

    pub fn is_authenticated(&self) -> bool {
        self.status() == Some(SessionStatus::Authenticated)
    }

    /// Record the outcome of a session probe.
    pub fn resolve(&mut self, user: Option<User>) {
        self.user = user;
        self.loading = false;
    }

    pub fn sign_in(&mut self, user: User) {
        self.resolve(Some(user));
    }

    pub fn sign_out(&mut self) {
        self.resolve(None);
    }
}
