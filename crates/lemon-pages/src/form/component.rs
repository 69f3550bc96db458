//! Reservation form component
//!
//! `ReservationForm` owns the draft a user is typing, validates it on every
//! submission attempt, and hands valid reservations to an injected
//! [`SubmissionSink`].
//!
//! ## State machine
//!
//! ```text
//! Idle ──attempt──▶ Validating ──errors──▶ Invalid
//!                        │
//!                        └──ok──▶ Submitting ──▶ Succeeded
//!                                      │
//!                                      └──────▶ Failed
//! ```
//!
//! Every state except `Submitting` accepts a new attempt. While submitting,
//! further attempts return [`AttemptOutcome::Busy`] without reaching the sink.
//! An attempt dropped mid-submission leaves the form in `Failed`.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use lemon_conf::ReservationSettings;
//! use lemon_forms::LocalClock;
//! use lemon_pages::{FnSink, ReservationForm};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let sink = FnSink::new(|_payload| async { Ok(()) });
//! let form = ReservationForm::new(
//!     ReservationSettings::default(),
//!     vec!["17:00".to_string()],
//!     Arc::new(sink),
//!     Arc::new(LocalClock),
//! );
//!
//! let outcome = form.attempt_reservation().await;
//! assert!(outcome.is_invalid());
//! # }
//! ```

use crate::announcer::{Announcement, Announcer};
use crate::callback::Callback;
use crate::sink::SubmissionSink;
use chrono::NaiveDate;
use lemon_conf::ReservationSettings;
use lemon_forms::{Clock, ReservationDraft, ReservationPayload, ValidationErrors, validate_draft};
use parking_lot::Mutex;
use std::sync::Arc;

/// Where the form is in its submission cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
	Idle,
	Validating,
	Invalid,
	Submitting,
	Succeeded,
	Failed,
}

impl FormState {
	/// Whether the submit control accepts input in this state
	pub fn accepts_submit(&self) -> bool {
		!matches!(self, FormState::Validating | FormState::Submitting)
	}
}

/// Result of one call to [`ReservationForm::attempt_reservation`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptOutcome {
	/// Another submission was in flight; nothing was done
	Busy,
	/// The draft failed validation; the sink was not called
	Invalid(ValidationErrors),
	/// The sink reported a failure; the user may retry
	Failed,
	/// The sink accepted the reservation
	Submitted(ReservationPayload),
}

impl AttemptOutcome {
	pub fn is_invalid(&self) -> bool {
		matches!(self, AttemptOutcome::Invalid(_))
	}

	pub fn is_submitted(&self) -> bool {
		matches!(self, AttemptOutcome::Submitted(_))
	}
}

struct FormInner {
	draft: ReservationDraft,
	errors: ValidationErrors,
	state: FormState,
	announcer: Announcer,
}

/// The booking form component
///
/// Safe to share behind an `Arc`: all mutable state sits behind one lock
/// that is never held across the sink await.
pub struct ReservationForm {
	settings: ReservationSettings,
	time_slots: Vec<String>,
	sink: Arc<dyn SubmissionSink>,
	clock: Arc<dyn Clock>,
	date_observer: Option<Callback<String>>,
	inner: Mutex<FormInner>,
}

impl ReservationForm {
	/// Create a form with an empty draft
	///
	/// An empty `time_slots` falls back to the configured default slots.
	pub fn new(
		settings: ReservationSettings,
		time_slots: Vec<String>,
		sink: Arc<dyn SubmissionSink>,
		clock: Arc<dyn Clock>,
	) -> Self {
		let time_slots = settings.resolve_time_slots(time_slots);
		Self {
			settings,
			time_slots,
			sink,
			clock,
			date_observer: None,
			inner: Mutex::new(FormInner {
				draft: ReservationDraft::default(),
				errors: ValidationErrors::new(),
				state: FormState::Idle,
				announcer: Announcer::new(),
			}),
		}
	}

	/// Notify `observer` with the raw value of every date edit
	pub fn with_date_observer(mut self, observer: Callback<String>) -> Self {
		self.date_observer = Some(observer);
		self
	}

	pub fn set_date(&self, value: impl Into<String>) {
		let value = value.into();
		self.edit("date", |draft| draft.with_date(value.clone()));
		// Called without the lock held so the observer may read the form
		if let Some(observer) = &self.date_observer {
			observer.call(value);
		}
	}

	pub fn set_time(&self, value: impl Into<String>) {
		let value = value.into();
		self.edit("time", |draft| draft.with_time(value));
	}

	pub fn set_guests(&self, value: impl Into<String>) {
		let value = value.into();
		self.edit("guests", |draft| draft.with_guests(value));
	}

	pub fn set_occasion(&self, value: impl Into<String>) {
		let value = value.into();
		self.edit("occasion", |draft| draft.with_occasion(value));
	}

	fn edit(&self, field: &str, f: impl FnOnce(ReservationDraft) -> ReservationDraft) {
		let mut inner = self.inner.lock();
		let draft = std::mem::take(&mut inner.draft);
		inner.draft = f(draft);
		tracing::debug!(field, "reservation draft updated");
	}

	/// Validate the draft and, if it is valid, submit it
	///
	/// Validation runs in full on every call. A sink failure is reported in
	/// the announcement region and never returned as an error. If the returned
	/// future is dropped while the sink is pending, for example by a timeout,
	/// the form is moved to `Failed` as though the sink had reported an error.
	///
	/// On success the draft is reset, unless it was edited while the sink was
	/// pending; those newer edits are kept.
	pub async fn attempt_reservation(&self) -> AttemptOutcome {
		let (payload, submitted_draft) = {
			let mut inner = self.inner.lock();
			if inner.state == FormState::Submitting {
				tracing::debug!("reservation attempt ignored while submitting");
				return AttemptOutcome::Busy;
			}

			self.transition(&mut inner, FormState::Validating);
			let today = self.clock.today();

			match validate_draft(&inner.draft, today, &self.settings, &self.time_slots) {
				Err(errors) => {
					inner.announcer.announce_errors(errors.len());
					inner.errors = errors.clone();
					self.transition(&mut inner, FormState::Invalid);
					return AttemptOutcome::Invalid(errors);
				}
				Ok(payload) => {
					inner.errors.clear();
					inner.announcer.clear();
					self.transition(&mut inner, FormState::Submitting);
					(payload, inner.draft.clone())
				}
			}
		};

		let guard = SubmissionGuard::new(self);
		let result = self.sink.submit(payload.clone()).await;
		guard.disarm();

		let mut inner = self.inner.lock();
		match result {
			Ok(()) => {
				tracing::info!(
					date = %payload.date,
					time = %payload.time,
					guests = payload.guests,
					"reservation submitted"
				);
				if inner.draft == submitted_draft {
					inner.draft = ReservationDraft::default();
				} else {
					tracing::debug!("keeping draft edited during submission");
				}
				self.transition(&mut inner, FormState::Succeeded);
				AttemptOutcome::Submitted(payload)
			}
			Err(e) => {
				tracing::warn!(error = %e, "reservation submission failed");
				self.fail_submission(&mut inner);
				AttemptOutcome::Failed
			}
		}
	}

	fn fail_submission(&self, inner: &mut FormInner) {
		inner
			.announcer
			.announce_failure(self.settings.submission_failure_message.clone());
		self.transition(inner, FormState::Failed);
	}

	fn transition(&self, inner: &mut FormInner, next: FormState) {
		tracing::debug!(from = ?inner.state, to = ?next, "reservation form state");
		inner.state = next;
	}

	pub fn draft(&self) -> ReservationDraft {
		self.inner.lock().draft.clone()
	}

	/// Errors from the most recent attempt
	pub fn errors(&self) -> ValidationErrors {
		self.inner.lock().errors.clone()
	}

	pub fn state(&self) -> FormState {
		self.inner.lock().state
	}

	pub fn is_submit_enabled(&self) -> bool {
		self.state().accepts_submit()
	}

	pub fn announcement(&self) -> Announcement {
		self.inner.lock().announcer.snapshot()
	}

	pub fn time_slots(&self) -> &[String] {
		&self.time_slots
	}

	pub fn settings(&self) -> &ReservationSettings {
		&self.settings
	}

	/// The date the "not in the past" rule compares against
	pub fn today(&self) -> NaiveDate {
		self.clock.today()
	}
}

/// Moves a form out of `Submitting` if an attempt is dropped mid-submission
struct SubmissionGuard<'a> {
	form: &'a ReservationForm,
	armed: bool,
}

impl<'a> SubmissionGuard<'a> {
	fn new(form: &'a ReservationForm) -> Self {
		Self { form, armed: true }
	}

	fn disarm(mut self) {
		self.armed = false;
	}
}

impl Drop for SubmissionGuard<'_> {
	fn drop(&mut self) {
		if !self.armed {
			return;
		}
		let mut inner = self.form.inner.lock();
		if inner.state == FormState::Submitting {
			tracing::warn!("reservation submission abandoned before the sink completed");
			self.form.fail_submission(&mut inner);
		}
	}
}

impl std::fmt::Debug for ReservationForm {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let inner = self.inner.lock();
		f.debug_struct("ReservationForm")
			.field("time_slots", &self.time_slots)
			.field("draft", &inner.draft)
			.field("state", &inner.state)
			.finish_non_exhaustive()
	}
}
