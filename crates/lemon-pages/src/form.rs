//! The reservation form component and its HTML rendering

pub mod component;
pub mod rendering;

pub use component::{AttemptOutcome, FormState, ReservationForm};
pub use rendering::{html_escape, render_form};
