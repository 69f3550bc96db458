//! Merging configuration sources into [`ReservationSettings`]

use indexmap::IndexMap;
use serde_json::Value;

use crate::settings::{ReservationSettings, SettingsError};
use crate::sources::ConfigSource;

/// Collects configuration sources and merges them by priority
///
/// # Examples
///
/// ```
/// use lemon_conf::SettingsBuilder;
/// use lemon_conf::sources::DefaultSource;
/// use serde_json::json;
///
/// let settings = SettingsBuilder::new()
///     .add_source(DefaultSource::new().with_value("max_guests", json!(6)))
///     .build()
///     .unwrap();
///
/// assert_eq!(settings.max_guests, 6);
/// assert_eq!(settings.min_guests, 1);
/// ```
pub struct SettingsBuilder {
	sources: Vec<Box<dyn ConfigSource>>,
}

impl SettingsBuilder {
	pub fn new() -> Self {
		Self { sources: vec![] }
	}

	pub fn add_source<S: ConfigSource + 'static>(mut self, source: S) -> Self {
		self.sources.push(Box::new(source));
		self
	}

	/// Merge all layers, lowest priority first, and validate the result
	pub fn build(mut self) -> Result<ReservationSettings, SettingsError> {
		self.sources.sort_by_key(|s| s.priority());

		let mut merged: IndexMap<String, Value> = IndexMap::new();
		for source in &self.sources {
			let layer = source.load().map_err(|error| SettingsError::Source {
				source_name: source.description(),
				error,
			})?;
			tracing::debug!(
				source = %source.description(),
				keys = layer.len(),
				"merging settings layer"
			);
			merged.extend(layer);
		}

		let object: serde_json::Map<String, Value> = merged.into_iter().collect();
		let settings: ReservationSettings = serde_json::from_value(Value::Object(object))?;
		settings.validate()?;
		Ok(settings)
	}
}

impl Default for SettingsBuilder {
	fn default() -> Self {
		Self::new()
	}
}
