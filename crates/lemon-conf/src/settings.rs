//! Reservation settings and their validation

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::builder::SettingsBuilder;
use crate::sources::{DefaultSource, EnvSource, SourceError, TomlFileSource};

/// Time labels offered when the caller supplies no time slots.
pub const DEFAULT_TIME_SLOTS: [&str; 4] = ["17:00", "18:00", "19:00", "20:00"];

/// Generic message shown when the submission sink fails.
pub const DEFAULT_FAILURE_MESSAGE: &str =
	"Sorry, we couldn't complete your reservation. Please try again.";

/// Errors raised while assembling settings
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	#[error("Failed to load {source_name}: {error}")]
	Source {
		source_name: String,
		#[source]
		error: SourceError,
	},

	#[error("Failed to deserialize settings: {0}")]
	Deserialize(#[from] serde_json::Error),

	#[error("Invalid settings: {0}")]
	Invalid(String),
}

/// Settings that shape the booking form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReservationSettings {
	/// Time labels used when the time-slot provider yields nothing
	pub default_time_slots: Vec<String>,
	/// Smallest accepted party size (inclusive)
	pub min_guests: u8,
	/// Largest accepted party size (inclusive)
	pub max_guests: u8,
	/// Message announced when the submission sink fails
	pub submission_failure_message: String,
}

impl Default for ReservationSettings {
	fn default() -> Self {
		Self {
			default_time_slots: DEFAULT_TIME_SLOTS.iter().map(|s| s.to_string()).collect(),
			min_guests: 1,
			max_guests: 10,
			submission_failure_message: DEFAULT_FAILURE_MESSAGE.to_string(),
		}
	}
}

impl ReservationSettings {
	/// Load settings from defaults, an optional TOML file and the environment
	///
	/// # Examples
	///
	/// ```
	/// use lemon_conf::ReservationSettings;
	///
	/// let settings = ReservationSettings::load("does-not-exist.toml").unwrap();
	/// assert_eq!(settings.max_guests, 10);
	/// ```
	pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
		let defaults =
			DefaultSource::reservation_defaults().map_err(|error| SettingsError::Source {
				source_name: "Default values".to_string(),
				error,
			})?;

		SettingsBuilder::new()
			.add_source(defaults)
			.add_source(TomlFileSource::new(path.as_ref()))
			.add_source(EnvSource::default())
			.build()
	}

	/// Reject combinations the booking form cannot work with
	///
	/// # Examples
	///
	/// ```
	/// use lemon_conf::ReservationSettings;
	///
	/// let mut settings = ReservationSettings::default();
	/// assert!(settings.validate().is_ok());
	///
	/// settings.min_guests = 12;
	/// assert!(settings.validate().is_err());
	/// ```
	pub fn validate(&self) -> Result<(), SettingsError> {
		if self.min_guests == 0 {
			return Err(SettingsError::Invalid(
				"min_guests must be at least 1".to_string(),
			));
		}
		if self.min_guests > self.max_guests {
			return Err(SettingsError::Invalid(format!(
				"min_guests ({}) exceeds max_guests ({})",
				self.min_guests, self.max_guests
			)));
		}
		if self.default_time_slots.is_empty() {
			return Err(SettingsError::Invalid(
				"default_time_slots must not be empty".to_string(),
			));
		}
		if self.submission_failure_message.trim().is_empty() {
			return Err(SettingsError::Invalid(
				"submission_failure_message must not be empty".to_string(),
			));
		}
		Ok(())
	}

	/// Resolve the caller's time slots, falling back to the defaults when empty
	///
	/// # Examples
	///
	/// ```
	/// use lemon_conf::ReservationSettings;
	///
	/// let settings = ReservationSettings::default();
	/// assert_eq!(settings.resolve_time_slots(vec![]).len(), 4);
	/// assert_eq!(settings.resolve_time_slots(vec!["12:00".into()]), vec!["12:00"]);
	/// ```
	pub fn resolve_time_slots(&self, provided: Vec<String>) -> Vec<String> {
		if provided.is_empty() {
			self.default_time_slots.clone()
		} else {
			provided
		}
	}
}
