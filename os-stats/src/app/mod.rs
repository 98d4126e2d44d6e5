//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and external systems.

pub mod identity_service;
pub mod report_service;

pub use report_service::ReportService;
