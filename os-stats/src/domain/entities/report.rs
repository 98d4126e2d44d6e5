//! Aggregate report domain entity

use super::contribution::ContributionRecord;

/// Combined contributions of a group of users
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregateReport {
    /// Sum over every user with data, `None` when nobody had any
    pub total: Option<ContributionRecord>,
    /// Users without contribution data, sorted
    pub not_found: Vec<String>,
}

