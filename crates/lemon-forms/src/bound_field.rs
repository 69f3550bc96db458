use crate::field::{FormField, Widget};

/// A field paired with the value and error it currently carries
pub struct BoundField<'a> {
	field: &'a dyn FormField,
	data: Option<&'a serde_json::Value>,
	error: Option<&'a str>,
	prefix: &'a str,
}

impl<'a> BoundField<'a> {
	/// Create a bound view over a field
	///
	/// # Examples
	///
	/// ```
	/// use lemon_forms::{BoundField, FormField};
	/// use lemon_forms::fields::IntegerField;
	///
	/// let field: Box<dyn FormField> = Box::new(IntegerField::new("guests".to_string()));
	/// let data = serde_json::json!("2");
	///
	/// let bound = BoundField::new(field.as_ref(), Some(&data), None, "book");
	/// assert_eq!(bound.name(), "guests");
	/// assert_eq!(bound.value_str(), "2");
	/// ```
	pub fn new(
		field: &'a dyn FormField,
		data: Option<&'a serde_json::Value>,
		error: Option<&'a str>,
		prefix: &'a str,
	) -> Self {
		Self {
			field,
			data,
			error,
			prefix,
		}
	}

	pub fn name(&self) -> &str {
		self.field.name()
	}

	/// The HTML `name` attribute, which is the bare field name
	pub fn html_name(&self) -> &str {
		self.field.name()
	}

	/// The HTML `id` attribute, prefixed when the form has a prefix
	///
	/// # Examples
	///
	/// ```
	/// use lemon_forms::{BoundField, FormField};
	/// use lemon_forms::fields::DateField;
	///
	/// let field: Box<dyn FormField> = Box::new(DateField::new("date".to_string()));
	///
	/// let bound = BoundField::new(field.as_ref(), None, None, "book");
	/// assert_eq!(bound.id_for_label(), "book-date");
	///
	/// let bare = BoundField::new(field.as_ref(), None, None, "");
	/// assert_eq!(bare.id_for_label(), "date");
	/// ```
	pub fn id_for_label(&self) -> String {
		if self.prefix.is_empty() {
			self.field.name().to_string()
		} else {
			format!("{}-{}", self.prefix, self.field.name())
		}
	}

	/// The id of the element carrying this field's error message
	pub fn error_id(&self) -> String {
		format!("{}-error", self.id_for_label())
	}

	pub fn label(&self) -> Option<&str> {
		self.field.label()
	}

	pub fn value(&self) -> Option<&serde_json::Value> {
		self.data
	}

	/// The current value as display text, empty when unset
	pub fn value_str(&self) -> String {
		match self.data {
			None | Some(serde_json::Value::Null) => String::new(),
			Some(serde_json::Value::String(s)) => s.clone(),
			Some(other) => other.to_string(),
		}
	}

	pub fn error(&self) -> Option<&str> {
		self.error
	}

	pub fn is_invalid(&self) -> bool {
		self.error.is_some()
	}

	pub fn widget(&self) -> &Widget {
		self.field.widget()
	}

	pub fn is_required(&self) -> bool {
		self.field.required()
	}

	pub fn constraint_attrs(&self) -> Vec<(String, String)> {
		self.field.constraint_attrs()
	}

	pub fn choices(&self) -> &[(String, String)] {
		self.field.choices()
	}

	pub fn empty_label(&self) -> Option<&str> {
		self.field.empty_label()
	}
}
