//! Mock implementations of port traits
//!
//! In-memory implementations that can be scripted for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::domain::entities::ContributionRecord;
use crate::domain::ports::ContributionSource;
use crate::error::FetchError;

// ============================================================================
// Mock Contribution Source
// ============================================================================

/// Scripted answer for one user
#[derive(Debug, Clone)]
enum Scripted {
    Record(ContributionRecord),
    Empty,
    Failure,
}

/// Contribution source answering from a per-user script
///
/// Users without a script behave like unknown users (`MissingContribution`).
#[derive(Default)]
pub struct MockContributionSource {
    script: HashMap<String, Scripted>,
    calls: Mutex<Vec<(String, Option<String>)>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl MockContributionSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `user_id` with `record`
    pub fn with_record(mut self, user_id: &str, record: ContributionRecord) -> Self {
        self.script
            .insert(user_id.to_string(), Scripted::Record(record));
        self
    }

    /// Answer `user_id` with an empty contribution object
    pub fn with_empty(mut self, user_id: &str) -> Self {
        self.script.insert(user_id.to_string(), Scripted::Empty);
        self
    }

    /// Fail every lookup of `user_id` as if the server returned 500
    pub fn with_failure(mut self, user_id: &str) -> Self {
        self.script.insert(user_id.to_string(), Scripted::Failure);
        self
    }

    /// Every `(user_id, release)` queried so far, in call order
    pub fn calls(&self) -> Vec<(String, Option<String>)> {
        self.calls.lock().unwrap().clone()
    }

    /// Highest number of lookups that were running at the same time
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContributionSource for MockContributionSource {
    async fn fetch_contribution(
        &self,
        user_id: &str,
        release: Option<&str>,
    ) -> Result<Option<ContributionRecord>, FetchError> {
        self.calls
            .lock()
            .unwrap()
            .push((user_id.to_string(), release.map(str::to_string)));

        let running = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(running, Ordering::SeqCst);
        tokio::task::yield_now().await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        match self.script.get(user_id) {
            Some(Scripted::Record(record)) => Ok(Some(*record)),
            Some(Scripted::Empty) => Ok(None),
            Some(Scripted::Failure) => Err(FetchError::Status(500)),
            None => Err(FetchError::MissingContribution),
        }
    }
}
