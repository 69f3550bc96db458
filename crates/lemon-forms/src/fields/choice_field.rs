use crate::field::{FieldError, FieldResult, FormField, Widget, message_or, trimmed_input};
use std::collections::HashMap;

/// A field whose value must be one of an ordered set of choices
///
/// Choices are `(value, label)` pairs; matching is on the value and is
/// case-sensitive.
pub struct ChoiceField {
	pub name: String,
	pub label: Option<String>,
	pub required: bool,
	pub widget: Widget,
	pub choices: Vec<(String, String)>,
	/// Placeholder option label shown before a choice is made
	pub empty_label: Option<String>,
	pub error_messages: HashMap<String, String>,
}

impl ChoiceField {
	/// Create a new ChoiceField
	///
	/// # Examples
	///
	/// ```
	/// use lemon_forms::FormField;
	/// use lemon_forms::fields::ChoiceField;
	///
	/// let field = ChoiceField::new("time", vec![("17:00".into(), "17:00".into())]);
	/// assert_eq!(field.name(), "time");
	/// assert!(field.clean(Some(&serde_json::json!("17:00"))).is_ok());
	/// assert!(field.clean(Some(&serde_json::json!("23:00"))).is_err());
	/// ```
	pub fn new(name: impl Into<String>, choices: Vec<(String, String)>) -> Self {
		Self {
			name: name.into(),
			label: None,
			required: true,
			widget: Widget::Select,
			choices,
			empty_label: None,
			error_messages: HashMap::new(),
		}
	}

	/// Build choices whose value doubles as the label
	pub fn from_values<I, S>(name: impl Into<String>, values: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let choices = values
			.into_iter()
			.map(|v| {
				let v = v.into();
				(v.clone(), v)
			})
			.collect();
		Self::new(name, choices)
	}

	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	pub fn with_empty_label(mut self, label: impl Into<String>) -> Self {
		self.empty_label = Some(label.into());
		self
	}

	/// Override a message (`required` or `invalid_choice`)
	pub fn with_error_message(mut self, key: &str, message: impl Into<String>) -> Self {
		self.error_messages.insert(key.to_string(), message.into());
		self
	}

	fn is_valid_choice(&self, value: &str) -> bool {
		self.choices.iter().any(|(v, _)| v == value)
	}
}

impl FormField for ChoiceField {
	fn name(&self) -> &str {
		&self.name
	}

	fn label(&self) -> Option<&str> {
		self.label.as_deref()
	}

	fn required(&self) -> bool {
		self.required
	}

	fn widget(&self) -> &Widget {
		&self.widget
	}

	fn choices(&self) -> &[(String, String)] {
		&self.choices
	}

	fn empty_label(&self) -> Option<&str> {
		self.empty_label.as_deref()
	}

	fn clean(&self, value: Option<&serde_json::Value>) -> FieldResult<serde_json::Value> {
		let Some(s) = trimmed_input(value)? else {
			if self.required {
				return Err(FieldError::required(
					self.error_messages.get("required").map(String::as_str),
				));
			}
			return Ok(serde_json::Value::Null);
		};

		if !self.is_valid_choice(&s) {
			return Err(FieldError::Validation(
				message_or(
					&self.error_messages,
					"invalid_choice",
					"Select a valid choice.",
				)
				.to_string(),
			));
		}

		Ok(serde_json::json!(s))
	}
}
