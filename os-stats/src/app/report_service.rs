//! Report service
//!
//! Fetches contribution data for one or many users and folds it into a single
//! record. Users are queried strictly one after another.

use std::sync::Arc;

use crate::domain::entities::{aggregate, AggregateReport, ContributionRecord, UserSet};
use crate::domain::ports::ContributionSource;

/// Service for collecting contribution reports
pub struct ReportService<S>
where
    S: ContributionSource,
{
    source: Arc<S>,
}

impl<S> ReportService<S>
where
    S: ContributionSource,
{
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    /// Contributions of a single user, `None` when nothing could be found
    ///
    /// Fetch failures are logged and treated the same as a user without
    /// contributions.
    pub async fn fetch(
        &self,
        user_id: &str,
        release: Option<&str>,
    ) -> Option<ContributionRecord> {
        match self.source.fetch_contribution(user_id, release).await {
            Ok(Some(record)) => Some(record),
            Ok(None) => {
                tracing::debug!(user_id, "No contributions recorded");
                None
            }
            Err(e) => {
                tracing::warn!(user_id, error = %e, "Failed to fetch contributions");
                None
            }
        }
    }

    /// Sum the contributions of every user in `users`
    ///
    /// Users without data are listed in `not_found` (sorted). When no user has
    /// data the total is `None` rather than a zeroed record.
    pub async fn aggregate_users(
        &self,
        users: &UserSet,
        release: Option<&str>,
    ) -> AggregateReport {
        let mut found = Vec::with_capacity(users.len());
        let mut not_found = Vec::new();

        for user_id in users.iter() {
            match self.fetch(user_id, release).await {
                Some(record) => found.push(record),
                None => not_found.push(user_id.to_string()),
            }
        }
        not_found.sort();

        tracing::info!(
            users = users.len(),
            found = found.len(),
            not_found = not_found.len(),
            "Aggregated contributions"
        );

        let total = if found.is_empty() {
            None
        } else {
            Some(aggregate(&found))
        };
        AggregateReport { total, not_found }
    }
}
