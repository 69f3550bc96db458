//! Reservation input as typed by the user and as handed to a sink

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Fixed set of occasions a table can be booked for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Occasion {
	Birthday,
	Anniversary,
	Graduation,
	Engagement,
}

impl Occasion {
	/// Every occasion, in the order offered to the user
	pub fn all() -> [Occasion; 4] {
		[
			Occasion::Birthday,
			Occasion::Anniversary,
			Occasion::Graduation,
			Occasion::Engagement,
		]
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			Occasion::Birthday => "Birthday",
			Occasion::Anniversary => "Anniversary",
			Occasion::Graduation => "Graduation",
			Occasion::Engagement => "Engagement",
		}
	}
}

impl fmt::Display for Occasion {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown occasion: {0}")]
pub struct UnknownOccasion(pub String);

impl FromStr for Occasion {
	type Err = UnknownOccasion;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Occasion::all()
			.into_iter()
			.find(|o| o.as_str() == s)
			.ok_or_else(|| UnknownOccasion(s.to_string()))
	}
}

/// The in-progress reservation, holding raw input
///
/// A draft is replaced wholesale on every edit: each `with_*` method consumes
/// the draft and returns the updated one.
///
/// # Examples
///
/// ```
/// use lemon_forms::ReservationDraft;
///
/// let draft = ReservationDraft::default()
///     .with_date("2025-06-01")
///     .with_guests("2");
/// assert_eq!(draft.date, "2025-06-01");
/// assert_eq!(draft.time, "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationDraft {
	pub date: String,
	pub time: String,
	pub guests: String,
	pub occasion: String,
}

impl ReservationDraft {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_date(self, date: impl Into<String>) -> Self {
		Self {
			date: date.into(),
			..self
		}
	}

	pub fn with_time(self, time: impl Into<String>) -> Self {
		Self {
			time: time.into(),
			..self
		}
	}

	pub fn with_guests(self, guests: impl Into<String>) -> Self {
		Self {
			guests: guests.into(),
			..self
		}
	}

	pub fn with_occasion(self, occasion: impl Into<String>) -> Self {
		Self {
			occasion: occasion.into(),
			..self
		}
	}

	pub fn is_empty(&self) -> bool {
		self.date.is_empty()
			&& self.time.is_empty()
			&& self.guests.is_empty()
			&& self.occasion.is_empty()
	}

	/// The draft as form data keyed by field name
	pub fn to_form_data(&self) -> HashMap<String, Value> {
		[
			("date", &self.date),
			("time", &self.time),
			("guests", &self.guests),
			("occasion", &self.occasion),
		]
		.into_iter()
		.map(|(k, v)| (k.to_string(), Value::String(v.clone())))
		.collect()
	}
}

/// Normalized reservation handed to a submission sink
///
/// `guests` is numeric and serializes as a JSON number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationPayload {
	pub date: String,
	pub time: String,
	pub guests: u8,
	pub occasion: String,
}
