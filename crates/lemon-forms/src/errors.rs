//! Per-field validation messages

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered mapping from field name to a single human-readable message
///
/// Order follows the order in which fields were validated, which is the
/// form's declaration order. Only the first message recorded for a field is
/// kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors {
	messages: IndexMap<String, String>,
}

impl ValidationErrors {
	pub fn new() -> Self {
		Self::default()
	}

	/// Record a message for `field` unless one is already present
	///
	/// # Examples
	///
	/// ```
	/// use lemon_forms::ValidationErrors;
	///
	/// let mut errors = ValidationErrors::new();
	/// errors.insert("date", "Please choose a date.");
	/// errors.insert("date", "ignored");
	/// assert_eq!(errors.get("date"), Some("Please choose a date."));
	/// assert_eq!(errors.len(), 1);
	/// ```
	pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
		self.messages.entry(field.into()).or_insert_with(|| message.into());
	}

	pub fn get(&self, field: &str) -> Option<&str> {
		self.messages.get(field).map(String::as_str)
	}

	pub fn contains(&self, field: &str) -> bool {
		self.messages.contains_key(field)
	}

	pub fn len(&self) -> usize {
		self.messages.len()
	}

	pub fn is_empty(&self) -> bool {
		self.messages.is_empty()
	}

	pub fn clear(&mut self) {
		self.messages.clear();
	}

	/// Field names carrying an error, in validation order
	pub fn fields(&self) -> impl Iterator<Item = &str> {
		self.messages.keys().map(String::as_str)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.messages.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}
}

impl<'a> IntoIterator for &'a ValidationErrors {
	type Item = (&'a String, &'a String);
	type IntoIter = indexmap::map::Iter<'a, String, String>;

	fn into_iter(self) -> Self::IntoIter {
		self.messages.iter()
	}
}
