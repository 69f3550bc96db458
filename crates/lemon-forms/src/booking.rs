//! The four-field booking form and its validation entry point

use crate::draft::{Occasion, ReservationDraft, ReservationPayload};
use crate::errors::ValidationErrors;
use crate::fields::{ChoiceField, DateField, IntegerField};
use crate::form::Form;
use chrono::NaiveDate;
use lemon_conf::ReservationSettings;

/// Prefix for element ids rendered for the booking form
pub const FORM_PREFIX: &str = "book";

pub const DATE_REQUIRED: &str = "Please choose a date.";
pub const DATE_INVALID: &str = "Please enter a valid date.";
pub const DATE_IN_PAST: &str = "Date cannot be in the past.";
pub const TIME_REQUIRED: &str = "Please choose a time.";
pub const TIME_UNAVAILABLE: &str = "Please choose an available time.";
pub const GUESTS_REQUIRED: &str = "Please enter the number of guests.";
pub const OCCASION_REQUIRED: &str = "Please choose an occasion.";
pub const OCCASION_INVALID: &str = "Please choose a valid occasion.";

/// Message for a party size that is not a whole number within bounds
pub fn guests_out_of_range(min: u8, max: u8) -> String {
	format!("Number of guests must be between {} and {}.", min, max)
}

/// Assembles the booking form's fields
pub struct ReservationFormSpec;

impl ReservationFormSpec {
	/// Build an unbound booking form
	///
	/// Fields are declared in the order date, time, guests, occasion, which is
	/// also the order errors are reported in. An empty `time_slots` falls back
	/// to the configured default slots.
	///
	/// # Examples
	///
	/// ```
	/// use chrono::NaiveDate;
	/// use lemon_conf::ReservationSettings;
	/// use lemon_forms::ReservationFormSpec;
	///
	/// let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
	/// let form = ReservationFormSpec::build(today, &ReservationSettings::default(), &[]);
	///
	/// assert_eq!(form.field_count(), 4);
	/// assert_eq!(form.get_field("time").unwrap().choices().len(), 4);
	/// ```
	pub fn build(today: NaiveDate, settings: &ReservationSettings, time_slots: &[String]) -> Form {
		let slots = settings.resolve_time_slots(time_slots.to_vec());
		let guests_message = guests_out_of_range(settings.min_guests, settings.max_guests);

		let mut form = Form::with_prefix(FORM_PREFIX.to_string());

		form.add_field(Box::new(
			DateField::new("date".to_string())
				.with_label("Choose Date:")
				.with_min_date(today)
				.with_error_message("required", DATE_REQUIRED)
				.with_error_message("invalid", DATE_INVALID)
				.with_error_message("min_date", DATE_IN_PAST),
		));
		form.add_field(Box::new(
			ChoiceField::from_values("time", slots)
				.with_label("Choose Time:")
				.with_empty_label("Select a Time")
				.with_error_message("required", TIME_REQUIRED)
				.with_error_message("invalid_choice", TIME_UNAVAILABLE),
		));
		form.add_field(Box::new(
			IntegerField::new("guests".to_string())
				.with_label("Number of Guests:")
				.with_bounds(i64::from(settings.min_guests), i64::from(settings.max_guests))
				.with_error_message("required", GUESTS_REQUIRED)
				.with_error_message("invalid", guests_message.clone())
				.with_error_message("out_of_range", guests_message),
		));
		form.add_field(Box::new(
			ChoiceField::from_values("occasion", Occasion::all().iter().map(Occasion::as_str))
				.with_label("Occasion:")
				.with_empty_label("Select an Option")
				.with_error_message("required", OCCASION_REQUIRED)
				.with_error_message("invalid_choice", OCCASION_INVALID),
		));

		form
	}
}

/// Validate a draft in a single full pass
///
/// Returns the normalized payload, or one message per failing field.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use lemon_conf::ReservationSettings;
/// use lemon_forms::{ReservationDraft, validate_draft};
///
/// let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
/// let settings = ReservationSettings::default();
///
/// let errors = validate_draft(&ReservationDraft::default(), today, &settings, &[]).unwrap_err();
/// assert_eq!(errors.len(), 4);
///
/// let draft = ReservationDraft::default()
///     .with_date("2025-06-01")
///     .with_time("17:00")
///     .with_guests("2")
///     .with_occasion("Birthday");
/// let payload = validate_draft(&draft, today, &settings, &[]).unwrap();
/// assert_eq!(payload.guests, 2);
/// ```
pub fn validate_draft(
	draft: &ReservationDraft,
	today: NaiveDate,
	settings: &ReservationSettings,
	time_slots: &[String],
) -> Result<ReservationPayload, ValidationErrors> {
	let mut form = ReservationFormSpec::build(today, settings, time_slots);
	form.bind(draft.to_form_data());

	if !form.is_valid() {
		tracing::debug!(error_count = form.errors().len(), "reservation draft rejected");
		return Err(form.errors().clone());
	}

	payload_from(&form, settings)
}

fn payload_from(
	form: &Form,
	settings: &ReservationSettings,
) -> Result<ReservationPayload, ValidationErrors> {
	let field_error = |field: &str, message: String| {
		let mut errors = ValidationErrors::new();
		errors.insert(field, message);
		errors
	};

	let guests = form
		.cleaned_i64("guests")
		.ok()
		.and_then(|n| u8::try_from(n).ok())
		.ok_or_else(|| {
			field_error(
				"guests",
				guests_out_of_range(settings.min_guests, settings.max_guests),
			)
		})?;

	let text = |name: &str, message: &str| {
		form.cleaned_str(name)
			.map(str::to_string)
			.map_err(|_| field_error(name, message.to_string()))
	};

	Ok(ReservationPayload {
		date: text("date", DATE_INVALID)?,
		time: text("time", TIME_UNAVAILABLE)?,
		guests,
		occasion: text("occasion", OCCASION_INVALID)?,
	})
}
