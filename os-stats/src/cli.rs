//! Command-line argument definitions.

use std::path::PathBuf;

use clap::Parser;

use crate::config::DEFAULT_BASE_URL;

/// Show OpenStack contribution statistics from Stackalytics
#[derive(Parser, Debug)]
#[command(name = "os-stats", version, about, long_about = None)]
pub struct Args {
    /// The user whose stats to show; this is the user's Gerrit ID for
    /// review.openstack.org (takes precedence over --file)
    #[arg(short = 'u', long)]
    pub user: Option<String>,

    /// File with a comma-delimited set of email addresses (e.g.
    /// me@mycompany.com) whose stats are aggregated; duplicates are dropped
    #[arg(short = 'f', long)]
    pub file: Option<String>,

    /// File with comma-delimited `email-prefix:gerrit-id` mappings (e.g.
    /// jane:jane-gerrit), for users whose email prefix is not their Gerrit ID
    #[arg(short = 'm', long = "map-file")]
    pub map_file: Option<String>,

    /// The OpenStack release (e.g. kilo) to query; defaults to the current one
    #[arg(short = 'r', long)]
    pub release: Option<String>,

    /// Base URL of the Stackalytics instance
    #[arg(long, env = "STACKALYTICS_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,
}

/// What a run should report on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Stats for one user
    User(String),
    /// Summed stats for every user in an email list
    Aggregate {
        file: PathBuf,
        map_file: Option<PathBuf>,
    },
    /// Neither a user nor a file was given
    Unexpected,
}

impl Args {
    /// Pick the report to run; blank values count as not given
    pub fn mode(&self) -> Mode {
        if let Some(user) = given(&self.user) {
            Mode::User(user.to_string())
        } else if let Some(file) = given(&self.file) {
            Mode::Aggregate {
                file: PathBuf::from(file),
                map_file: given(&self.map_file).map(PathBuf::from),
            }
        } else {
            Mode::Unexpected
        }
    }
}

fn given(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}
