//! Domain entities
//!
//! Pure domain models for contribution reporting.

pub mod contribution;
pub mod identity;
pub mod report;

pub use contribution::{aggregate, ContributionRecord};
pub use identity::{email_prefix, IdentityMapping, UserSet};
pub use report::AggregateReport;
