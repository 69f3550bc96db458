use crate::field::{FieldError, FieldResult, FormField, Widget, message_or, trimmed_input};
use chrono::{Datelike, NaiveDate};
use std::collections::HashMap;

/// DateField for calendar date input
///
/// Values are cleaned to ISO 8601 (`YYYY-MM-DD`). When `min_date` is set,
/// strictly earlier dates are rejected; the bound itself is accepted.
pub struct DateField {
	pub name: String,
	pub label: Option<String>,
	pub required: bool,
	pub widget: Widget,
	pub input_formats: Vec<String>,
	pub min_date: Option<NaiveDate>,
	pub error_messages: HashMap<String, String>,
}

impl DateField {
	/// Create a new DateField with the given name
	///
	/// # Examples
	///
	/// ```
	/// use lemon_forms::fields::DateField;
	///
	/// let field = DateField::new("date".to_string());
	/// assert_eq!(field.name, "date");
	/// assert!(field.required);
	/// ```
	pub fn new(name: String) -> Self {
		Self {
			name,
			label: None,
			required: true,
			widget: Widget::DateInput,
			input_formats: vec!["%Y-%m-%d".to_string()],
			min_date: None,
			error_messages: HashMap::new(),
		}
	}

	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	/// Reject dates before `min_date`
	///
	/// # Examples
	///
	/// ```
	/// use chrono::NaiveDate;
	/// use lemon_forms::FormField;
	/// use lemon_forms::fields::DateField;
	///
	/// let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
	/// let field = DateField::new("date".to_string()).with_min_date(today);
	/// assert!(field.clean(Some(&serde_json::json!("2025-06-01"))).is_ok());
	/// assert!(field.clean(Some(&serde_json::json!("2025-05-31"))).is_err());
	/// ```
	pub fn with_min_date(mut self, min_date: NaiveDate) -> Self {
		self.min_date = Some(min_date);
		self
	}

	/// Override a message (`required`, `invalid` or `min_date`)
	pub fn with_error_message(mut self, key: &str, message: impl Into<String>) -> Self {
		self.error_messages.insert(key.to_string(), message.into());
		self
	}

	fn parse_date(&self, s: &str) -> Result<NaiveDate, String> {
		for format in &self.input_formats {
			if let Ok(date) = NaiveDate::parse_from_str(s, format) {
				// Reject years outside the 4-digit range (1000-9999)
				if !(1000..=9999).contains(&date.year()) {
					continue;
				}
				return Ok(date);
			}
		}
		Err(message_or(&self.error_messages, "invalid", "Enter a valid date.").to_string())
	}
}

impl FormField for DateField {
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
		self.min_date
			.map(|d| vec![("min".to_string(), d.format("%Y-%m-%d").to_string())])
			.unwrap_or_default()
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

		let date = self.parse_date(&s).map_err(FieldError::Invalid)?;

		if let Some(min) = self.min_date
			&& date < min
		{
			return Err(FieldError::Validation(
				message_or(
					&self.error_messages,
					"min_date",
					"Ensure this date is not in the past.",
				)
				.to_string(),
			));
		}

		Ok(serde_json::json!(date.format("%Y-%m-%d").to_string()))
	}
}
