//! os-stats
//!
//! Prints OpenStack contribution statistics pulled from Stackalytics, either
//! for a single user or summed over every user in an email list.
//! Uses ports & adapters: the report logic only sees a `ContributionSource`.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod adapters;
mod app;
mod cli;
mod config;
mod domain;
mod error;
mod report;

#[cfg(test)]
mod test_utils;


use adapters::StackalyticsClient;
use app::{identity_service, ReportService};
use cli::{Args, Mode};
use config::Config;
use domain::ports::ContributionSource;

#[tokio::main]
async fn main() -> Result<()> {
    Config::load_dotenv();
    let args = Args::parse();

    // Logs go to stderr, stdout carries the report
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_args(&args);
    tracing::info!(base_url = %config.base_url, release = ?config.release, "Starting os-stats");

    let client = StackalyticsClient::new(&config.base_url)?;
    let service = ReportService::new(Arc::new(client));

    let output = run(&args.mode(), &config, &service).await?;
    print!("{output}");

    Ok(())
}

/// Produce the report text for `mode`
///
/// Only unreadable or malformed input files are errors; missing contribution
/// data is part of the report.
async fn run<S>(mode: &Mode, config: &Config, service: &ReportService<S>) -> Result<String>
where
    S: ContributionSource,
{
    let release = config.release.as_deref();

    let output = match mode {
        Mode::User(user) => {
            let record = service.fetch(user, release).await;
            report::render_contributions(record.as_ref())?
        }
        Mode::Aggregate { file, map_file } => {
            let users = identity_service::resolve(file, map_file.as_deref())?;
            let aggregate = service.aggregate_users(&users, release).await;
            report::render_aggregate(&aggregate)?
        }
        Mode::Unexpected => report::render_unexpected_input(),
    };

    Ok(output)
}
