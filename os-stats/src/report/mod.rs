//! Report module
//!
//! Plain-text rendering of contribution reports.

pub mod renderer;

pub use renderer::{render_aggregate, render_contributions, render_unexpected_input};
