//! Form processing and validation for Little Lemon reservations
//!
//! This crate provides:
//! - Field types (date, choice, integer) that clean raw input into JSON values
//! - A full-pass form validator that records one message per failing field
//! - The reservation draft and the normalized payload handed to a sink
//! - An injectable [`Clock`] used for "not in the past" checks

pub mod booking;
pub mod bound_field;
pub mod clock;
pub mod draft;
pub mod errors;
pub mod field;
pub mod fields;
pub mod form;

pub use booking::{FORM_PREFIX, ReservationFormSpec, validate_draft};
pub use bound_field::BoundField;
pub use clock::{Clock, FixedClock, LocalClock};
pub use draft::{Occasion, ReservationDraft, ReservationPayload, UnknownOccasion};
pub use errors::ValidationErrors;
pub use field::{FieldError, FieldResult, FormField, Widget};
pub use fields::{ChoiceField, DateField, IntegerField};
pub use form::{Form, FormError, FormResult};
