//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Providers own the shared stores and hand them to descendants through Leptos
//! context; the guard and toast stack read those stores back.

pub mod auth_provider;
pub mod protected;
pub mod toast;
