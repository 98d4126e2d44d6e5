//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use std::path::PathBuf;

use tempfile::TempDir;

use crate::domain::entities::ContributionRecord;

/// Create a record with the given commits, lines of code and review marks
pub fn test_record(commit_count: u64, loc: u64, marks: u64) -> ContributionRecord {
    ContributionRecord {
        commit_count,
        loc,
        marks,
        ..ContributionRecord::zero()
    }
}

/// Create a record with every counter set to a distinct non-zero value
pub fn test_record_full() -> ContributionRecord {
    ContributionRecord {
        abandoned_change_requests_count: 1,
        change_request_count: 2,
        commit_count: 3,
        completed_blueprint_count: 4,
        drafted_blueprint_count: 5,
        email_count: 6,
        filed_bug_count: 7,
        loc: 8,
        marks: 9,
        patch_set_count: 10,
        resolved_bug_count: 11,
        translations: 12,
    }
}

/// Write `contents` to `name` inside a fresh temporary directory
///
/// The directory lives as long as the returned `TempDir`.
pub fn write_input_file(name: &str, contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    (dir, path)
}
