//! Stackalytics adapter
//!
//! Implementation of the contribution source for the Stackalytics REST API.

pub mod client;

pub use client::StackalyticsClient;
