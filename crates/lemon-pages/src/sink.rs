//! Destination for validated reservations
//!
//! The form does not know what "making a reservation" means. It hands the
//! normalized payload to a [`SubmissionSink`] supplied by the embedding
//! application and reports any failure to the user.

use async_trait::async_trait;
use lemon_forms::ReservationPayload;
use std::future::Future;

/// Error returned by a sink that could not complete a reservation
///
/// The form treats every variant the same way: one generic message, and the
/// user may retry.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SubmissionError {
	#[error("Reservation rejected: {0}")]
	Rejected(String),
	#[error("Reservation service unavailable: {0}")]
	Unavailable(String),
	#[error(transparent)]
	Other(#[from] anyhow::Error),
}

/// Performs the actual booking for a validated payload
#[async_trait]
pub trait SubmissionSink: Send + Sync {
	async fn submit(&self, payload: ReservationPayload) -> Result<(), SubmissionError>;
}

/// Adapts an async closure into a [`SubmissionSink`]
///
/// # Examples
///
/// ```
/// use lemon_pages::{FnSink, SubmissionError};
///
/// let sink = FnSink::new(|payload: lemon_forms::ReservationPayload| async move {
///     if payload.guests > 8 {
///         return Err(SubmissionError::Rejected("party too large".to_string()));
///     }
///     Ok(())
/// });
/// # let _ = sink;
/// ```
pub struct FnSink<F> {
	f: F,
}

impl<F, Fut> FnSink<F>
where
	F: Fn(ReservationPayload) -> Fut + Send + Sync,
	Fut: Future<Output = Result<(), SubmissionError>> + Send,
{
	pub fn new(f: F) -> Self {
		Self { f }
	}
}

#[async_trait]
impl<F, Fut> SubmissionSink for FnSink<F>
where
	F: Fn(ReservationPayload) -> Fut + Send + Sync,
	Fut: Future<Output = Result<(), SubmissionError>> + Send,
{
	async fn submit(&self, payload: ReservationPayload) -> Result<(), SubmissionError> {
		(self.f)(payload).await
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn payload(guests: u8) -> ReservationPayload {
		ReservationPayload {
			date: "2025-06-01".to_string(),
			time: "17:00".to_string(),
			guests,
			occasion: "Birthday".to_string(),
		}
	}

	#[rstest]
	#[tokio::test]
	async fn test_fn_sink_forwards_payload() {
		let sink = FnSink::new(|p: ReservationPayload| async move {
			if p.guests == 2 {
				Ok(())
			} else {
				Err(SubmissionError::Rejected(format!("{} guests", p.guests)))
			}
		});

		assert!(sink.submit(payload(2)).await.is_ok());
		assert!(matches!(
			sink.submit(payload(3)).await,
			Err(SubmissionError::Rejected(msg)) if msg == "3 guests"
		));
	}

	#[rstest]
	#[tokio::test]
	async fn test_fn_sink_as_trait_object() {
		let sink: Box<dyn SubmissionSink> = Box::new(FnSink::new(|_| async {
			Err(SubmissionError::Unavailable("offline".to_string()))
		}));

		let err = sink.submit(payload(2)).await.unwrap_err();

		assert_eq!(err.to_string(), "Reservation service unavailable: offline");
	}

	#[rstest]
	fn test_submission_error_from_anyhow() {
		let err: SubmissionError = anyhow::anyhow!("connection reset").into();

		assert!(matches!(err, SubmissionError::Other(_)));
		assert_eq!(err.to_string(), "connection reset");
	}
}
