use crate::errors::ValidationErrors;
use crate::field::FormField;
use std::collections::HashMap;

#[derive(Debug, thiserror::Error)]
pub enum FormError {
	#[error("Form has not been validated successfully")]
	NotValidated,
	#[error("Cleaned value for {0} is missing or has the wrong type")]
	CleanedValue(String),
}

pub type FormResult<T> = Result<T, FormError>;

/// An ordered set of fields validated together against bound data
///
/// Validation is a full pass: every field is cleaned on every call to
/// [`Form::is_valid`], and every failure is recorded. Errors from a previous
/// pass are discarded first.
pub struct Form {
	fields: Vec<Box<dyn FormField>>,
	data: HashMap<String, serde_json::Value>,
	cleaned: HashMap<String, serde_json::Value>,
	errors: ValidationErrors,
	is_bound: bool,
	prefix: String,
}

impl Form {
	/// Create a new form whose element ids are prefixed
	///
	/// # Examples
	///
	/// ```
	/// use lemon_forms::Form;
	///
	/// let form = Form::with_prefix("book".to_string());
	/// assert_eq!(form.prefix(), "book");
	/// ```
	pub fn with_prefix(prefix: String) -> Self {
		Self {
			fields: vec![],
			data: HashMap::new(),
			cleaned: HashMap::new(),
			errors: ValidationErrors::new(),
			is_bound: false,
			prefix,
		}
	}

	/// Add a field to the form
	///
	/// # Examples
	///
	/// ```
	/// use lemon_forms::Form;
	/// use lemon_forms::fields::IntegerField;
	///
	/// let mut form = Form::with_prefix("book".to_string());
	/// form.add_field(Box::new(IntegerField::new("guests".to_string())));
	/// assert_eq!(form.field_count(), 1);
	/// ```
	pub fn add_field(&mut self, field: Box<dyn FormField>) {
		self.fields.push(field);
	}

	/// Bind submitted data for validation
	pub fn bind(&mut self, data: HashMap<String, serde_json::Value>) {
		self.data = data;
		self.is_bound = true;
	}

	/// Validate every field and return true if none failed
	///
	/// # Examples
	///
	/// ```
	/// use lemon_forms::Form;
	/// use lemon_forms::fields::{ChoiceField, IntegerField};
	/// use std::collections::HashMap;
	/// use serde_json::json;
	///
	/// let mut form = Form::with_prefix("book".to_string());
	/// form.add_field(Box::new(ChoiceField::from_values("time", ["17:00"])));
	/// form.add_field(Box::new(IntegerField::new("guests".to_string())));
	///
	/// form.bind(HashMap::new());
	/// assert!(!form.is_valid());
	/// assert_eq!(form.errors().len(), 2);
	/// ```
	pub fn is_valid(&mut self) -> bool {
		if !self.is_bound {
			return false;
		}

		self.errors.clear();
		self.cleaned.clear();

		for field in &self.fields {
			let value = self.data.get(field.name());

			match field.clean(value) {
				Ok(cleaned) => {
					self.cleaned.insert(field.name().to_string(), cleaned);
				}
				Err(e) => {
					self.errors.insert(field.name(), e.to_string());
				}
			}
		}

		self.errors.is_empty()
	}

	pub fn errors(&self) -> &ValidationErrors {
		&self.errors
	}

	pub fn is_bound(&self) -> bool {
		self.is_bound
	}

	pub fn fields(&self) -> &[Box<dyn FormField>] {
		&self.fields
	}

	pub fn get_field(&self, name: &str) -> Option<&dyn FormField> {
		self.fields
			.iter()
			.find(|f| f.name() == name)
			.map(|f| f.as_ref())
	}

	pub fn field_count(&self) -> usize {
		self.fields.len()
	}

	pub fn prefix(&self) -> &str {
		&self.prefix
	}

	/// Take a cleaned string value after successful validation
	pub fn cleaned_str(&self, name: &str) -> FormResult<&str> {
		if !self.errors.is_empty() {
			return Err(FormError::NotValidated);
		}
		self.cleaned
			.get(name)
			.and_then(|v| v.as_str())
			.ok_or_else(|| FormError::CleanedValue(name.to_string()))
	}

	/// Take a cleaned integer value after successful validation
	pub fn cleaned_i64(&self, name: &str) -> FormResult<i64> {
		if !self.errors.is_empty() {
			return Err(FormError::NotValidated);
		}
		self.cleaned
			.get(name)
			.and_then(|v| v.as_i64())
			.ok_or_else(|| FormError::CleanedValue(name.to_string()))
	}
}
