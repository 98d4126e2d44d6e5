//! Error types for os-stats
//!
//! - `InputError`: problems with the user-supplied email list or alias file.
//!   These are fatal and end the run with a non-zero exit status.
//! - `FetchError`: problems retrieving one user's contribution data.
//!   These never escape the adapter; they are logged and turned into "no data".

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading input files
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Failed to read file `{}`", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed alias entry `{entry}` in `{}` (expected `prefix:id`)", .path.display())]
    MalformedAlias { path: PathBuf, entry: String },
}

/// Stackalytics client errors
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API returned status {0}")]
    Status(u16),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Response has no contribution data")]
    MissingContribution,
}
