//! # Little Lemon Pages
//!
//! The booking page's interactive pieces: the [`ReservationForm`] component,
//! the [`SubmissionSink`] it reports to, the accessibility [`Announcer`], and
//! HTML rendering.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use lemon_conf::ReservationSettings;
//! use lemon_forms::LocalClock;
//! use lemon_pages::{Callback, FnSink, ReservationForm, render_form};
//!
//! let form = ReservationForm::new(
//!     ReservationSettings::default(),
//!     vec![],
//!     Arc::new(FnSink::new(|_payload| async { Ok(()) })),
//!     Arc::new(LocalClock),
//! )
//! .with_date_observer(Callback::new(|date: String| println!("picked {}", date)));
//!
//! form.set_guests("2");
//! assert!(render_form(&form).contains("Make Your Reservation"));
//! ```

pub mod announcer;
pub mod callback;
pub mod form;
pub mod sink;

pub use announcer::{Announcement, Announcer, Politeness};
pub use callback::Callback;
pub use form::{AttemptOutcome, FormState, ReservationForm, render_form};
pub use sink::{FnSink, SubmissionError, SubmissionSink};
