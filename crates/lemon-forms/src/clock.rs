//! Source of "today" for date validation
//!
//! Validation never reads ambient time directly. A [`Clock`] is handed to
//! whatever needs the current date, so tests can pin it.

use chrono::NaiveDate;

/// Provides the current calendar date in the user's local timezone
pub trait Clock: Send + Sync {
	fn today(&self) -> NaiveDate;
}

/// Reads the system clock in the local timezone
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
	fn today(&self) -> NaiveDate {
		chrono::Local::now().date_naive()
	}
}

/// Always reports the same date
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use lemon_forms::{Clock, FixedClock};
///
/// let day = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
/// assert_eq!(FixedClock::new(day).today(), day);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl FixedClock {
	pub fn new(date: NaiveDate) -> Self {
		Self(date)
	}
}

impl Clock for FixedClock {
	fn today(&self) -> NaiveDate {
		self.0
	}
}
