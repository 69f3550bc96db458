//! Reservation settings module.
//!
//! # Examples
//!
//! ```rust,no_run
//! use little_lemon::conf::ReservationSettings;
//!
//! let settings = ReservationSettings::load("reservations.toml").unwrap();
//! println!("up to {} guests", settings.max_guests);
//! ```

pub use lemon_conf::*;
