//! # Little Lemon
//!
//! Table reservations for the Little Lemon restaurant: a booking form with
//! client-side validation and an asynchronous submission flow.
//!
//! ## Feature Flags
//!
//! - `conf` - Layered reservation settings (defaults, TOML file, environment)
//! - `forms` - Field types, full-pass validation, drafts and payloads
//! - `pages` - The `ReservationForm` component, submission sinks and HTML rendering
//!
//! All three are enabled by default.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use little_lemon::prelude::*;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let settings = ReservationSettings::default();
//! let sink = FnSink::new(|payload: ReservationPayload| async move {
//!     println!("booking {} guests at {}", payload.guests, payload.time);
//!     Ok(())
//! });
//! let form = ReservationForm::new(settings, vec![], Arc::new(sink), Arc::new(LocalClock));
//!
//! form.set_date(chrono::Local::now().date_naive().format("%Y-%m-%d").to_string());
//! form.set_time("19:00");
//! form.set_guests("4");
//! form.set_occasion("Anniversary");
//!
//! assert!(form.attempt_reservation().await.is_submitted());
//! # }
//! ```

#[cfg(feature = "conf")]
pub mod conf;
#[cfg(feature = "forms")]
pub mod forms;
#[cfg(feature = "pages")]
pub mod pages;

#[cfg(feature = "conf")]
pub use lemon_conf::{ReservationSettings, SettingsBuilder, SettingsError};

#[cfg(feature = "forms")]
pub use lemon_forms::{
	Clock, FixedClock, LocalClock, Occasion, ReservationDraft, ReservationPayload,
	ValidationErrors, validate_draft,
};

#[cfg(feature = "pages")]
pub use lemon_pages::{
	AttemptOutcome, Callback, FnSink, FormState, ReservationForm, SubmissionError,
	SubmissionSink, render_form,
};

/// Commonly used types
pub mod prelude {
	#[cfg(feature = "conf")]
	pub use crate::{ReservationSettings, SettingsBuilder};

	#[cfg(feature = "forms")]
	pub use crate::{
		Clock, FixedClock, LocalClock, Occasion, ReservationDraft, ReservationPayload,
		ValidationErrors,
	};

	#[cfg(feature = "pages")]
	pub use crate::{
		AttemptOutcome, Callback, FnSink, FormState, ReservationForm, SubmissionError,
		SubmissionSink, render_form,
	};
}
