//! Wall-clock reading in milliseconds.
//!
//! Browser builds read `Date.now()`. Server rendering has no timers, so it
//! reports zero and nothing rendered there ever expires.

pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}
