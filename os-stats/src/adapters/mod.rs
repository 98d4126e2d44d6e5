//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod stackalytics;

pub use stackalytics::StackalyticsClient;
