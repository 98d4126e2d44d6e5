//! Contribution source port trait
//!
//! Defines the interface for looking up one user's contribution counters.

use async_trait::async_trait;

use crate::domain::entities::ContributionRecord;
use crate::error::FetchError;

/// Project type used when filtering by release
pub const PROJECT_TYPE: &str = "openstack";

/// A remote system that knows per-user contribution counters
///
/// Implementations perform exactly one lookup per call and keep no state
/// between calls.
#[async_trait]
pub trait ContributionSource: Send + Sync {
    /// Look up the contributions of `user_id`, optionally limited to `release`
    ///
    /// `Ok(None)` means the source answered but has nothing for this user.
    async fn fetch_contribution(
        &self,
        user_id: &str,
        release: Option<&str>,
    ) -> Result<Option<ContributionRecord>, FetchError>;
}
