//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `toast`) so the providers, the route
//! guard, and pages can each depend on a small focused model.

pub mod auth;
pub mod toast;
