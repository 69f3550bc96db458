//! Reservation Form Integration Tests
//!
//! Tests for the ReservationForm component's validation, submission
//! and accessibility behaviour, driven through its public API.
//!
//! Success Criteria:
//! 1. Incomplete or invalid drafts never reach the sink
//! 2. Valid drafts reach the sink exactly once with a numeric party size
//! 3. Sink failures surface one message and re-enable submission
//! 4. At most one submission is in flight per form
//! 5. Date edits reach the observer regardless of validity
//!
//! Test Categories:
//! - Category 1: Validation
//! - Category 2: Submission
//! - Category 3: Concurrency
//! - Category 4: Date Observer and Rendering

use async_trait::async_trait;
use chrono::NaiveDate;
use lemon_conf::{DEFAULT_FAILURE_MESSAGE, ReservationSettings};
use lemon_forms::{FixedClock, ReservationPayload};
use lemon_pages::{
	AttemptOutcome, Callback, FnSink, FormState, ReservationForm, SubmissionError,
	SubmissionSink, render_form,
};
use parking_lot::Mutex;
use rstest::{fixture, rstest};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::{Notify, oneshot};

/// Sink that records every payload it receives
#[derive(Default)]
struct RecordingSink {
	payloads: Mutex<Vec<ReservationPayload>>,
}

#[async_trait]
impl SubmissionSink for RecordingSink {
	async fn submit(&self, payload: ReservationPayload) -> Result<(), SubmissionError> {
		self.payloads.lock().push(payload);
		Ok(())
	}
}

/// Sink that blocks until released, signalling when it is entered
struct GatedSink {
	entered: Arc<Notify>,
	release: Mutex<Option<oneshot::Receiver<()>>>,
	calls: AtomicUsize,
}

#[async_trait]
impl SubmissionSink for GatedSink {
	async fn submit(&self, _payload: ReservationPayload) -> Result<(), SubmissionError> {
		self.calls.fetch_add(1, Ordering::SeqCst);
		self.entered.notify_one();
		let release = self.release.lock().take();
		if let Some(release) = release {
			let _ = release.await;
		}
		Ok(())
	}
}

/// Sink whose first call never completes; later calls succeed
#[derive(Default)]
struct StalledOnceSink {
	calls: AtomicUsize,
}

#[async_trait]
impl SubmissionSink for StalledOnceSink {
	async fn submit(&self, _payload: ReservationPayload) -> Result<(), SubmissionError> {
		if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
			std::future::pending::<()>().await;
		}
		Ok(())
	}
}

#[fixture]
fn today() -> NaiveDate {
	NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
}

fn slots() -> Vec<String> {
	vec!["17:00".to_string(), "18:00".to_string()]
}

fn form_with(sink: Arc<dyn SubmissionSink>, today: NaiveDate) -> ReservationForm {
	ReservationForm::new(
		ReservationSettings::default(),
		slots(),
		sink,
		Arc::new(FixedClock::new(today)),
	)
}

fn fill_valid(form: &ReservationForm, today: NaiveDate) {
	form.set_date(today.format("%Y-%m-%d").to_string());
	form.set_time("17:00");
	form.set_guests("2");
	form.set_occasion("Birthday");
}

// ============================================================================
// Category 1: Validation
// ============================================================================

/// Tests that all-empty drafts report one message per field and skip the sink
#[rstest]
#[tokio::test]
async fn test_all_fields_empty(today: NaiveDate) {
	let sink = Arc::new(RecordingSink::default());
	let form = form_with(sink.clone(), today);

	let outcome = form.attempt_reservation().await;

	let AttemptOutcome::Invalid(errors) = outcome else {
		panic!("expected invalid outcome, got {:?}", outcome);
	};
	assert_eq!(
		errors.fields().collect::<Vec<_>>(),
		vec!["date", "time", "guests", "occasion"]
	);
	assert!(sink.payloads.lock().is_empty());
}

/// Tests that leaving out any single field rejects the draft
#[rstest]
#[case::date("date")]
#[case::time("time")]
#[case::guests("guests")]
#[case::occasion("occasion")]
#[tokio::test]
async fn test_missing_field_rejected(today: NaiveDate, #[case] missing: &str) {
	let sink = Arc::new(RecordingSink::default());
	let form = form_with(sink.clone(), today);
	fill_valid(&form, today);
	match missing {
		"date" => form.set_date(""),
		"time" => form.set_time(""),
		"guests" => form.set_guests(""),
		_ => form.set_occasion(""),
	}

	let outcome = form.attempt_reservation().await;

	assert!(outcome.is_invalid());
	assert_eq!(form.errors().fields().collect::<Vec<_>>(), vec![missing]);
	assert!(sink.payloads.lock().is_empty());
}

/// Tests that yesterday is rejected as a past date while today is accepted
#[rstest]
#[tokio::test]
async fn test_past_date_rejected_today_accepted(today: NaiveDate) {
	let sink = Arc::new(RecordingSink::default());
	let form = form_with(sink.clone(), today);
	fill_valid(&form, today);

	let yesterday = today.pred_opt().unwrap();
	form.set_date(yesterday.format("%Y-%m-%d").to_string());
	let outcome = form.attempt_reservation().await;
	assert!(outcome.is_invalid());
	assert_eq!(form.errors().get("date"), Some("Date cannot be in the past."));

	form.set_date(today.format("%Y-%m-%d").to_string());
	let outcome = form.attempt_reservation().await;
	assert!(outcome.is_submitted());
	assert_eq!(sink.payloads.lock().len(), 1);
}

/// Tests the guest-count range, including both boundaries
#[rstest]
#[case(0, false)]
#[case(1, true)]
#[case(5, true)]
#[case(10, true)]
#[case(11, false)]
#[case(250, false)]
#[tokio::test]
async fn test_guest_range(today: NaiveDate, #[case] guests: u32, #[case] accepted: bool) {
	let sink = Arc::new(RecordingSink::default());
	let form = form_with(sink.clone(), today);
	fill_valid(&form, today);
	form.set_guests(guests.to_string());

	let outcome = form.attempt_reservation().await;

	assert_eq!(outcome.is_submitted(), accepted);
	if !accepted {
		assert_eq!(
			form.errors().get("guests"),
			Some("Number of guests must be between 1 and 10.")
		);
	}
}

/// Tests that a time outside the provider's slots is rejected
#[rstest]
#[tokio::test]
async fn test_unavailable_time_rejected(today: NaiveDate) {
	let form = form_with(Arc::new(RecordingSink::default()), today);
	fill_valid(&form, today);
	form.set_time("19:00");

	form.attempt_reservation().await;

	assert_eq!(form.errors().get("time"), Some("Please choose an available time."));
}

// ============================================================================
// Category 2: Submission
// ============================================================================

/// Tests the happy-path scenario with a two-slot provider
#[rstest]
#[tokio::test]
async fn test_valid_reservation_scenario(today: NaiveDate) {
	let sink = Arc::new(RecordingSink::default());
	let form = form_with(sink.clone(), today);
	fill_valid(&form, today);

	let outcome = form.attempt_reservation().await;

	let expected = ReservationPayload {
		date: "2025-06-01".to_string(),
		time: "17:00".to_string(),
		guests: 2,
		occasion: "Birthday".to_string(),
	};
	assert_eq!(outcome, AttemptOutcome::Submitted(expected.clone()));
	assert_eq!(*sink.payloads.lock(), vec![expected]);
	assert!(form.errors().is_empty());
	assert_eq!(form.announcement().text, None);
}

/// Tests that the payload handed to the sink carries guests as a number
#[rstest]
#[tokio::test]
async fn test_payload_guests_is_numeric(today: NaiveDate) {
	let sink = Arc::new(RecordingSink::default());
	let form = form_with(sink.clone(), today);
	fill_valid(&form, today);

	form.attempt_reservation().await;

	let payloads = sink.payloads.lock();
	assert_eq!(payloads.len(), 1);
	let json = serde_json::to_value(&payloads[0]).unwrap();
	assert_eq!(json["guests"], serde_json::json!(2));
	assert!(json["guests"].is_number());
}

/// Tests that a rejecting sink yields one failure message and a usable form
#[rstest]
#[tokio::test]
async fn test_rejecting_sink(today: NaiveDate) {
	let calls = Arc::new(AtomicUsize::new(0));
	let sink = FnSink::new({
		let calls = Arc::clone(&calls);
		move |_| {
			calls.fetch_add(1, Ordering::SeqCst);
			async { Err(SubmissionError::Rejected("fully booked".to_string())) }
		}
	});
	let form = form_with(Arc::new(sink), today);
	fill_valid(&form, today);

	let outcome = form.attempt_reservation().await;

	assert_eq!(outcome, AttemptOutcome::Failed);
	assert_eq!(calls.load(Ordering::SeqCst), 1);
	assert!(form.is_submit_enabled());
	assert!(form.errors().is_empty());
	assert_eq!(
		form.announcement().text.as_deref(),
		Some(DEFAULT_FAILURE_MESSAGE)
	);

	// Retrying reaches the sink again
	form.attempt_reservation().await;
	assert_eq!(calls.load(Ordering::SeqCst), 2);
}

/// Tests that the configured failure message is used
#[rstest]
#[tokio::test]
async fn test_configured_failure_message(today: NaiveDate) {
	let settings = ReservationSettings {
		submission_failure_message: "Please call us instead.".to_string(),
		..ReservationSettings::default()
	};
	let form = ReservationForm::new(
		settings,
		slots(),
		Arc::new(FnSink::new(|_| async {
			Err(SubmissionError::Other(anyhow::anyhow!("timeout")))
		})),
		Arc::new(FixedClock::new(today)),
	);
	fill_valid(&form, today);

	form.attempt_reservation().await;

	assert_eq!(
		form.announcement().text.as_deref(),
		Some("Please call us instead.")
	);
}

// ============================================================================
// Category 3: Concurrency
// ============================================================================

/// Tests that a second attempt while one is in flight does not reach the sink
#[rstest]
#[tokio::test]
async fn test_second_attempt_while_submitting_is_busy(today: NaiveDate) {
	let entered = Arc::new(Notify::new());
	let (release_tx, release_rx) = oneshot::channel();
	let sink = Arc::new(GatedSink {
		entered: Arc::clone(&entered),
		release: Mutex::new(Some(release_rx)),
		calls: AtomicUsize::new(0),
	});
	let form = Arc::new(form_with(sink.clone(), today));
	fill_valid(&form, today);

	let first = tokio::spawn({
		let form = Arc::clone(&form);
		async move { form.attempt_reservation().await }
	});
	entered.notified().await;

	assert_eq!(form.state(), FormState::Submitting);
	assert!(!form.is_submit_enabled());
	assert!(render_form(&form).contains("disabled>Make Your Reservation"));
	assert_eq!(form.attempt_reservation().await, AttemptOutcome::Busy);

	release_tx.send(()).unwrap();
	let outcome = first.await.unwrap();

	assert!(outcome.is_submitted());
	assert_eq!(sink.calls.load(Ordering::SeqCst), 1);
	assert!(form.is_submit_enabled());
}

/// Tests that a timed-out attempt leaves the form failed and retryable
#[rstest]
#[tokio::test]
async fn test_timed_out_attempt_can_be_retried(today: NaiveDate) {
	let sink = Arc::new(StalledOnceSink::default());
	let form = form_with(sink.clone(), today);
	fill_valid(&form, today);

	let timed_out = tokio::time::timeout(Duration::from_millis(20), form.attempt_reservation()).await;

	assert!(timed_out.is_err());
	assert_eq!(form.state(), FormState::Failed);
	assert!(form.is_submit_enabled());
	assert_eq!(
		form.announcement().text.as_deref(),
		Some(DEFAULT_FAILURE_MESSAGE)
	);
	assert_eq!(form.draft().guests, "2");

	let outcome = form.attempt_reservation().await;

	assert!(outcome.is_submitted());
	assert_eq!(sink.calls.load(Ordering::SeqCst), 2);
	assert_eq!(form.state(), FormState::Succeeded);
}

/// Tests that aborting the task running an attempt releases the form
#[rstest]
#[tokio::test]
async fn test_aborted_attempt_releases_form(today: NaiveDate) {
	let entered = Arc::new(Notify::new());
	let (_release_tx, release_rx) = oneshot::channel::<()>();
	let sink = Arc::new(GatedSink {
		entered: Arc::clone(&entered),
		release: Mutex::new(Some(release_rx)),
		calls: AtomicUsize::new(0),
	});
	let form = Arc::new(form_with(sink, today));
	fill_valid(&form, today);

	let attempt = tokio::spawn({
		let form = Arc::clone(&form);
		async move { form.attempt_reservation().await }
	});
	entered.notified().await;
	assert_eq!(form.state(), FormState::Submitting);

	attempt.abort();
	assert!(attempt.await.unwrap_err().is_cancelled());

	assert_eq!(form.state(), FormState::Failed);
	assert!(form.is_submit_enabled());
}

/// Tests that edits made while a submission is in flight survive its success
#[rstest]
#[tokio::test]
async fn test_edits_during_submission_are_kept(today: NaiveDate) {
	let entered = Arc::new(Notify::new());
	let (release_tx, release_rx) = oneshot::channel();
	let sink = Arc::new(GatedSink {
		entered: Arc::clone(&entered),
		release: Mutex::new(Some(release_rx)),
		calls: AtomicUsize::new(0),
	});
	let form = Arc::new(form_with(sink, today));
	fill_valid(&form, today);

	let attempt = tokio::spawn({
		let form = Arc::clone(&form);
		async move { form.attempt_reservation().await }
	});
	entered.notified().await;
	form.set_guests("5");

	release_tx.send(()).unwrap();
	let AttemptOutcome::Submitted(payload) = attempt.await.unwrap() else {
		panic!("expected submitted outcome");
	};

	assert_eq!(payload.guests, 2);
	assert_eq!(form.state(), FormState::Succeeded);
	assert_eq!(form.draft().guests, "5");
	assert_eq!(form.draft().time, "17:00");
}

/// Tests that separate form instances do not share state
#[rstest]
#[tokio::test]
async fn test_instances_are_independent(today: NaiveDate) {
	let sink = Arc::new(RecordingSink::default());
	let a = form_with(sink.clone(), today);
	let b = form_with(sink.clone(), today);
	fill_valid(&a, today);

	let (first, second) = futures::join!(a.attempt_reservation(), b.attempt_reservation());

	assert!(first.is_submitted());
	assert!(second.is_invalid());
	assert_eq!(sink.payloads.lock().len(), 1);
}

// ============================================================================
// Category 4: Date Observer and Rendering
// ============================================================================

/// Tests that every date edit reaches the observer, valid or not
#[rstest]
fn test_date_observer_sees_every_edit(today: NaiveDate) {
	let seen = Arc::new(Mutex::new(Vec::new()));
	let form = form_with(Arc::new(RecordingSink::default()), today).with_date_observer(
		Callback::new({
			let seen = Arc::clone(&seen);
			move |date: String| seen.lock().push(date)
		}),
	);

	form.set_date("2025-06-0");
	form.set_date("2025-06-02");
	form.set_date("1999-01-01");
	form.set_time("17:00");

	assert_eq!(
		*seen.lock(),
		vec![
			"2025-06-0".to_string(),
			"2025-06-02".to_string(),
			"1999-01-01".to_string()
		]
	);
}

/// Tests that the observer may read the form it observes
#[rstest]
fn test_date_observer_can_read_form(today: NaiveDate) {
	let seen = Arc::new(Mutex::new(None));
	let form = Arc::new_cyclic(|weak: &std::sync::Weak<ReservationForm>| {
		let weak = weak.clone();
		let seen = Arc::clone(&seen);
		form_with(Arc::new(RecordingSink::default()), today).with_date_observer(Callback::new(
			move |_: String| {
				if let Some(form) = weak.upgrade() {
					*seen.lock() = Some(form.draft().date);
				}
			},
		))
	});

	form.set_date("2025-06-03");

	assert_eq!(*seen.lock(), Some("2025-06-03".to_string()));
}

/// Tests that rendering reflects a successful submission's reset draft
#[rstest]
#[tokio::test]
async fn test_render_after_success(today: NaiveDate) {
	let form = form_with(Arc::new(RecordingSink::default()), today);
	fill_valid(&form, today);

	form.attempt_reservation().await;
	let html = render_form(&form);

	assert!(form.draft().is_empty());
	assert!(!html.contains("aria-invalid"));
	assert!(!html.contains(r#"<option value="Birthday" selected>"#));
	assert!(html.contains(r#"<button type="submit">Make Your Reservation</button>"#));
}
