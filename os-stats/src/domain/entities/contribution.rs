//! Contribution record domain entity
//!
//! A flat set of contribution counters for one user (or the sum over several
//! users). The schema is fixed: every metric the report knows about has its own
//! field, so summing records can never hit an unknown key.

use serde::Serialize;

/// Contribution counters as reported by Stackalytics
///
/// Fields are declared in alphabetical order so that serializing a record
/// yields key-sorted output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ContributionRecord {
    pub abandoned_change_requests_count: u64,
    pub change_request_count: u64,
    pub commit_count: u64,
    pub completed_blueprint_count: u64,
    pub drafted_blueprint_count: u64,
    pub email_count: u64,
    pub filed_bug_count: u64,
    pub loc: u64,
    /// Review votes of every value (-2, -1, +1, +2, ...) rolled into one count
    pub marks: u64,
    pub patch_set_count: u64,
    pub resolved_bug_count: u64,
    pub translations: u64,
}

impl ContributionRecord {
    /// The record with every counter at zero
    pub fn zero() -> Self {
        Self::default()
    }

    /// Field-by-field sum of two records
    pub fn merged(&self, other: &Self) -> Self {
        Self {
            abandoned_change_requests_count: self
                .abandoned_change_requests_count
                .saturating_add(other.abandoned_change_requests_count),
            change_request_count: self
                .change_request_count
                .saturating_add(other.change_request_count),
            commit_count: self.commit_count.saturating_add(other.commit_count),
            completed_blueprint_count: self
                .completed_blueprint_count
                .saturating_add(other.completed_blueprint_count),
            drafted_blueprint_count: self
                .drafted_blueprint_count
                .saturating_add(other.drafted_blueprint_count),
            email_count: self.email_count.saturating_add(other.email_count),
            filed_bug_count: self.filed_bug_count.saturating_add(other.filed_bug_count),
            loc: self.loc.saturating_add(other.loc),
            marks: self.marks.saturating_add(other.marks),
            patch_set_count: self.patch_set_count.saturating_add(other.patch_set_count),
            resolved_bug_count: self
                .resolved_bug_count
                .saturating_add(other.resolved_bug_count),
            translations: self.translations.saturating_add(other.translations),
        }
    }
}

/// Sum a collection of records into one combined record
///
/// Starts from the zero record; the inputs are left untouched and the result
/// does not depend on their order.
pub fn aggregate<'a, I>(records: I) -> ContributionRecord
where
    I: IntoIterator<Item = &'a ContributionRecord>,
{
    records
        .into_iter()
        .fold(ContributionRecord::zero(), |acc, record| acc.merged(record))
}
