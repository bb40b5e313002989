//! Toast notification queue.
//!
//! DESIGN
//! ======
//! Toasts live in a bounded FIFO: new toasts append at the back and the oldest
//! is evicted once the live cap is exceeded. Each toast carries an absolute
//! deadline in milliseconds so expiry can be evaluated against any clock. The
//! browser schedules one timer per toast; tests pass explicit instants.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How long a toast stays visible unless dismissed first.
pub const DEFAULT_TOAST_DURATION_MS: u32 = 4000;

/// Maximum number of toasts rendered at once.
pub const MAX_LIVE_TOASTS: usize = 5;

/// Severity of a toast; drives its styling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastLevel {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl ToastLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for ToastLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToastLevel {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "info" => Ok(Self::Info),
            "success" => Ok(Self::Success),
            "warning" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            other => Err(format!("unknown toast level: {other}")),
        }
    }
}

/// A single live notification.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub level: ToastLevel,
    /// Clock reading (ms) at which the toast stops being shown.
    pub expires_at_ms: f64,
}

impl Toast {
    pub fn is_expired(&self, now_ms: f64) -> bool {
        now_ms >= self.expires_at_ms
    }
}

/// Bounded queue of live toasts.
#[derive(Clone, Debug, PartialEq)]
pub struct ToastState {
    toasts: Vec<Toast>,
    next_id: u64,
    duration_ms: u32,
    capacity: usize,
}

impl Default for ToastState {
    fn default() -> Self {
        Self::with_limits(DEFAULT_TOAST_DURATION_MS, MAX_LIVE_TOASTS)
    }
}

impl ToastState {
    /// Build a queue with a custom display duration and live cap.
    /// A zero cap is treated as one.
    pub fn with_limits(duration_ms: u32, capacity: usize) -> Self {
        Self { toasts: Vec::new(), next_id: 1, duration_ms, capacity: capacity.max(1) }
    }

    /// Enqueue a toast shown from `now_ms`; returns its id.
    pub fn push(&mut self, message: impl Into<String>, level: ToastLevel, now_ms: f64) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            message: message.into(),
            level,
            expires_at_ms: now_ms + f64::from(self.duration_ms),
        });
        if self.toasts.len() > self.capacity {
            let overflow = self.toasts.len() - self.capacity;
            self.toasts.drain(..overflow);
        }
        id
    }

    /// Remove a toast by id. Returns whether anything was removed.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    /// Drop every toast whose deadline has passed; returns how many were dropped.
    pub fn prune(&mut self, now_ms: f64) -> usize {
        let before = self.toasts.len();
        self.toasts.retain(|t| !t.is_expired(now_ms));
        before - self.toasts.len()
    }

    /// Live toasts, oldest first.
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
