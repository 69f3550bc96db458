//! Booking page components module.
//!
//! Provides the reservation form component, submission sinks, the
//! accessibility announcement region and HTML rendering.

pub use lemon_pages::*;
