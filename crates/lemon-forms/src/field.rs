//! Field trait, widget kinds and field-level errors

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Error produced when a single field fails to clean
///
/// The display form is the user-facing message rendered beside the field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
	#[error("{0}")]
	Required(String),
	#[error("{0}")]
	Invalid(String),
	#[error("{0}")]
	Validation(String),
}

impl FieldError {
	/// Build a `Required` error, falling back to the generic message
	///
	/// # Examples
	///
	/// ```
	/// use lemon_forms::FieldError;
	///
	/// assert_eq!(FieldError::required(None).to_string(), "This field is required.");
	/// assert_eq!(
	///     FieldError::required(Some("Please choose a date.")).to_string(),
	///     "Please choose a date."
	/// );
	/// ```
	pub fn required(message: Option<&str>) -> Self {
		Self::Required(message.unwrap_or("This field is required.").to_string())
	}

	/// The user-facing message carried by this error
	pub fn message(&self) -> &str {
		match self {
			Self::Required(m) | Self::Invalid(m) | Self::Validation(m) => m,
		}
	}
}

pub type FieldResult<T> = Result<T, FieldError>;

/// How a field is presented to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Widget {
	NumberInput,
	DateInput,
	Select,
}

impl Widget {
	/// The HTML `type` attribute for input widgets, `None` for selects
	pub fn input_type(&self) -> Option<&'static str> {
		match self {
			Widget::NumberInput => Some("number"),
			Widget::DateInput => Some("date"),
			Widget::Select => None,
		}
	}
}

/// A single form field that can clean a raw submitted value
pub trait FormField: Send + Sync {
	fn name(&self) -> &str;

	fn label(&self) -> Option<&str>;

	fn required(&self) -> bool;

	fn widget(&self) -> &Widget;

	/// Extra HTML attributes describing client-side constraints (`min`, `max`, ...)
	fn constraint_attrs(&self) -> Vec<(String, String)> {
		vec![]
	}

	/// `(value, label)` pairs for select widgets
	fn choices(&self) -> &[(String, String)] {
		&[]
	}

	/// Placeholder option shown by a select before a choice is made
	fn empty_label(&self) -> Option<&str> {
		None
	}

	/// Clean a raw value into its normalized JSON representation
	fn clean(&self, value: Option<&serde_json::Value>) -> FieldResult<serde_json::Value>;
}

/// Look up a configured message or use the fallback
pub(crate) fn message_or<'a>(
	messages: &'a HashMap<String, String>,
	key: &str,
	fallback: &'a str,
) -> &'a str {
	messages.get(key).map(String::as_str).unwrap_or(fallback)
}

/// Extract the trimmed string form of a raw value
///
/// `None`, JSON null and blank strings all count as "not provided".
pub(crate) fn trimmed_input(value: Option<&serde_json::Value>) -> FieldResult<Option<String>> {
	match value {
		None | Some(serde_json::Value::Null) => Ok(None),
		Some(serde_json::Value::String(s)) => {
			let s = s.trim();
			Ok((!s.is_empty()).then(|| s.to_string()))
		}
		Some(serde_json::Value::Number(n)) => Ok(Some(n.to_string())),
		Some(_) => Err(FieldError::Invalid("Expected string".to_string())),
	}
}
