use crate::field::{FieldError, FieldResult, FormField, Widget, message_or, trimmed_input};
use std::collections::HashMap;

/// IntegerField for whole-number input with inclusive bounds
pub struct IntegerField {
	pub name: String,
	pub label: Option<String>,
	pub required: bool,
	pub widget: Widget,
	pub min_value: Option<i64>,
	pub max_value: Option<i64>,
	pub error_messages: HashMap<String, String>,
}

impl IntegerField {
	/// Create a new IntegerField with the given name
	///
	/// # Examples
	///
	/// ```
	/// use lemon_forms::FormField;
	/// use lemon_forms::fields::IntegerField;
	///
	/// let field = IntegerField::new("guests".to_string()).with_bounds(1, 10);
	/// assert_eq!(field.clean(Some(&serde_json::json!("4"))).unwrap(), serde_json::json!(4));
	/// assert!(field.clean(Some(&serde_json::json!("11"))).is_err());
	/// ```
	pub fn new(name: String) -> Self {
		Self {
			name,
			label: None,
			required: true,
			widget: Widget::NumberInput,
			min_value: None,
			max_value: None,
			error_messages: HashMap::new(),
		}
	}

	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	pub fn with_bounds(mut self, min: i64, max: i64) -> Self {
		self.min_value = Some(min);
		self.max_value = Some(max);
		self
	}

	/// Override a message (`required`, `invalid` or `out_of_range`)
	pub fn with_error_message(mut self, key: &str, message: impl Into<String>) -> Self {
		self.error_messages.insert(key.to_string(), message.into());
		self
	}

	fn out_of_range(&self) -> FieldError {
		let fallback = match (self.min_value, self.max_value) {
			(Some(min), Some(max)) => format!("Ensure this value is between {} and {}.", min, max),
			(Some(min), None) => format!("Ensure this value is greater than or equal to {}.", min),
			(None, Some(max)) => format!("Ensure this value is less than or equal to {}.", max),
			(None, None) => "Enter a whole number.".to_string(),
		};
		FieldError::Validation(
			self.error_messages
				.get("out_of_range")
				.cloned()
				.unwrap_or(fallback),
		)
	}
}

impl FormField for IntegerField {
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

	fn constraint_attrs(&self) -> Vec<(String, String)> {
		let mut attrs = vec![];
		if let Some(min) = self.min_value {
			attrs.push(("min".to_string(), min.to_string()));
		}
		if let Some(max) = self.max_value {
			attrs.push(("max".to_string(), max.to_string()));
		}
		attrs
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

		let num = s.parse::<i64>().map_err(|_| {
			FieldError::Invalid(
				message_or(&self.error_messages, "invalid", "Enter a whole number.").to_string(),
			)
		})?;

		if let Some(min) = self.min_value
			&& num < min
		{
			return Err(self.out_of_range());
		}
		if let Some(max) = self.max_value
			&& num > max
		{
			return Err(self.out_of_range());
		}

		Ok(serde_json::json!(num))
	}
}
