//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! The contribution source is mocked by hand: responses are scripted per user
//! and every call is recorded so tests can check what was queried. Adapter
//! tests talk to a one-shot local HTTP stub instead of the real API.

pub mod fixtures;
pub mod http_stub;
pub mod mocks;

pub use fixtures::*;
pub use http_stub::*;
pub use mocks::*;
