//! Scripted backend for tests
//!
//! Enabled for downstream crates via the `test-helpers` feature.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use shiftlog_core::Submission;
use tokio::sync::Notify;

use crate::backend::{Receipt, ShiftBackend};
use crate::error::SubmitError;

/// Backend that records every submission and answers from a queue of
/// scripted outcomes. Once the queue is empty it answers `Ok("Morning")`.
///
/// When `hold()` is active, `submit` blocks until `release()` is called so
/// tests can observe the in-flight state.
#[derive(Debug, Clone, Default)]
pub struct FakeBackend {
    inner: Arc<FakeInner>,
}

#[derive(Debug, Default)]
struct FakeInner {
    outcomes: Mutex<VecDeque<Result<Receipt, SubmitError>>>,
    received: Mutex<Vec<Submission>>,
    held: Mutex<bool>,
    gate: Notify,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response assigning `shift`
    pub fn respond_with_shift(&self, shift: &str) -> &Self {
        self.push(Ok(Receipt::new(shift)))
    }

    /// Queue a failure
    pub fn respond_with_error(&self, err: SubmitError) -> &Self {
        self.push(Err(err))
    }

    fn push(&self, outcome: Result<Receipt, SubmitError>) -> &Self {
        self.inner
            .outcomes
            .lock()
            .expect("fake backend lock")
            .push_back(outcome);
        self
    }

    /// Make subsequent submissions wait for [`FakeBackend::release`]
    pub fn hold(&self) {
        *self.inner.held.lock().expect("fake backend lock") = true;
    }

    /// Let held submissions complete
    pub fn release(&self) {
        *self.inner.held.lock().expect("fake backend lock") = false;
        self.inner.gate.notify_waiters();
    }

    /// Everything submitted so far, in order
    pub fn received(&self) -> Vec<Submission> {
        self.inner
            .received
            .lock()
            .expect("fake backend lock")
            .clone()
    }

    pub fn submit_count(&self) -> usize {
        self.inner.received.lock().expect("fake backend lock").len()
    }
}

impl ShiftBackend for FakeBackend {
    async fn submit(&self, submission: &Submission) -> Result<Receipt, SubmitError> {
        self.inner
            .received
            .lock()
            .expect("fake backend lock")
            .push(submission.clone());

        loop {
            let notified = self.inner.gate.notified();
            let held = *self.inner.held.lock().expect("fake backend lock");
            if !held {
                break;
            }
            notified.await;
        }

        self.inner
            .outcomes
            .lock()
            .expect("fake backend lock")
            .pop_front()
            .unwrap_or_else(|| Ok(Receipt::new("Morning")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use shiftlog_core::DowntimeRecord;

    fn downtime() -> Submission {
        DowntimeRecord {
            operator_name: "Ravi".into(),
            description: "Jam".into(),
            timestamp: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
        }
        .into()
    }

    #[tokio::test]
    async fn test_scripted_outcomes_in_order() {
        let fake = FakeBackend::new();
        fake.respond_with_shift("Night")
            .respond_with_error(SubmitError::transport("Network down"));

        assert_eq!(fake.submit(&downtime()).await.unwrap().shift, "Night");
        assert!(fake.submit(&downtime()).await.is_err());
        assert_eq!(fake.submit(&downtime()).await.unwrap().shift, "Morning");
        assert_eq!(fake.submit_count(), 3);
    }

    #[tokio::test]
    async fn test_hold_blocks_until_release() {
        let fake = FakeBackend::new();
        fake.hold();

        let task = tokio::spawn({
            let fake = fake.clone();
            async move { fake.submit(&downtime()).await }
        });

        tokio::task::yield_now().await;
        assert!(!task.is_finished());

        fake.release();
        let receipt = task.await.unwrap().unwrap();
        assert_eq!(receipt.shift, "Morning");
    }
}
