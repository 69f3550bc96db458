//! # Little Lemon Configuration
//!
//! Layered settings for the reservation form: built-in defaults, an optional
//! TOML file, and `LITTLE_LEMON_*` environment variables, merged in that
//! order of increasing priority.
//!
//! ## Example
//!
//! ```toml
//! # reservations.toml
//! default_time_slots = ["17:00", "18:00", "19:00", "20:00", "21:00"]
//! max_guests = 8
//! ```
//!
//! ```
//! use lemon_conf::ReservationSettings;
//!
//! let settings = ReservationSettings::load("reservations.toml").unwrap();
//! assert!(settings.min_guests >= 1);
//! ```

pub mod builder;
pub mod settings;
pub mod sources;

/// Prefix for environment variables read by [`sources::EnvSource::default`].
pub const ENV_PREFIX: &str = "LITTLE_LEMON_";

pub use builder::SettingsBuilder;
pub use settings::{
	DEFAULT_FAILURE_MESSAGE, DEFAULT_TIME_SLOTS, ReservationSettings, SettingsError,
};
pub use sources::{ConfigSource, SourceError};
