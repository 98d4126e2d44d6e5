//! Stackalytics API client implementation
//!
//! See http://stackalytics.readthedocs.org/en/latest/userdoc/api_v1.0.html
//! for the shape of the contribution endpoint.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::domain::entities::ContributionRecord;
use crate::domain::ports::contributions::PROJECT_TYPE;
use crate::domain::ports::ContributionSource;
use crate::error::FetchError;

const CONTRIBUTION_PATH: &str = "/api/1.0/contribution";

/// HTTP client for the Stackalytics contribution API
#[derive(Clone)]
pub struct StackalyticsClient {
    http: Client,
    base_url: String,
}

impl StackalyticsClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let http = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    #[cfg(test)]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn contribution_url(&self) -> String {
        format!("{}{}", self.base_url, CONTRIBUTION_PATH)
    }
}

/// Query parameters for one contribution lookup
fn contribution_query<'a>(
    user_id: &'a str,
    release: Option<&'a str>,
) -> Vec<(&'static str, &'a str)> {
    let mut query = vec![("user_id", user_id)];
    if let Some(release) = release {
        query.push(("project_type", PROJECT_TYPE));
        query.push(("release", release));
    }
    query
}

#[async_trait]
impl ContributionSource for StackalyticsClient {
    async fn fetch_contribution(
        &self,
        user_id: &str,
        release: Option<&str>,
    ) -> Result<Option<ContributionRecord>, FetchError> {
        let url = self.contribution_url();
        tracing::debug!(user_id, ?release, %url, "Fetching contribution");

        let response = self
            .http
            .get(&url)
            .query(&contribution_query(user_id, release))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        parse_contribution(&body)
    }
}

/// Response envelope of the contribution endpoint
#[derive(Deserialize)]
struct ContributionResponse {
    contribution: Option<Map<String, Value>>,
}

/// Contribution object as sent by the API, before `marks` is collapsed
#[derive(Deserialize)]
struct RawContribution {
    #[serde(default)]
    abandoned_change_requests_count: u64,
    #[serde(default)]
    change_request_count: u64,
    #[serde(default)]
    commit_count: u64,
    #[serde(default)]
    completed_blueprint_count: u64,
    #[serde(default)]
    drafted_blueprint_count: u64,
    #[serde(default)]
    email_count: u64,
    #[serde(default)]
    filed_bug_count: u64,
    #[serde(default)]
    loc: u64,
    /// Vote value ("-2", "-1", "1", ...) to number of votes
    #[serde(default)]
    marks: BTreeMap<String, u64>,
    #[serde(default)]
    patch_set_count: u64,
    #[serde(default)]
    resolved_bug_count: u64,
    #[serde(default)]
    translations: u64,
    #[serde(flatten)]
    unknown: BTreeMap<String, Value>,
}

impl From<RawContribution> for ContributionRecord {
    fn from(raw: RawContribution) -> Self {
        Self {
            abandoned_change_requests_count: raw.abandoned_change_requests_count,
            change_request_count: raw.change_request_count,
            commit_count: raw.commit_count,
            completed_blueprint_count: raw.completed_blueprint_count,
            drafted_blueprint_count: raw.drafted_blueprint_count,
            email_count: raw.email_count,
            filed_bug_count: raw.filed_bug_count,
            loc: raw.loc,
            marks: raw
                .marks
                .values()
                .fold(0u64, |total, votes| total.saturating_add(*votes)),
            patch_set_count: raw.patch_set_count,
            resolved_bug_count: raw.resolved_bug_count,
            translations: raw.translations,
        }
    }
}

/// Decode a contribution response body
///
/// An empty `contribution` object means the user has no contributions and
/// yields `Ok(None)`. Metrics the record has no field for are dropped.
pub fn parse_contribution(body: &str) -> Result<Option<ContributionRecord>, FetchError> {
    let envelope: ContributionResponse =
        serde_json::from_str(body).map_err(|e| FetchError::Deserialization(e.to_string()))?;

    let Some(contribution) = envelope.contribution else {
        return Err(FetchError::MissingContribution);
    };
    if contribution.is_empty() {
        return Ok(None);
    }

    let raw: RawContribution = serde_json::from_value(Value::Object(contribution))
        .map_err(|e| FetchError::Deserialization(e.to_string()))?;
    if !raw.unknown.is_empty() {
        tracing::debug!(
            fields = ?raw.unknown.keys().collect::<Vec<_>>(),
            "Ignoring unknown contribution fields"
        );
    }

    Ok(Some(raw.into()))
}
