//! Report renderer
//!
//! Renders contribution records as indented, key-sorted JSON under a short
//! header. Output is deterministic so it can be compared verbatim.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::domain::entities::{AggregateReport, ContributionRecord};

pub const CONTRIBUTIONS_HEADER: &str = "Contributions:";
pub const NO_DATA_MESSAGE: &str = "Could not find any OpenStack contribution data for that user.";
pub const UNEXPECTED_INPUT_MESSAGE: &str = "Unexpected input.";

const RULE: &str = "----------------------------------------";
const NOT_FOUND_TITLE: &str = "Users not found on review.openstack.org:";

/// Render one record, or the "no data" message when there is none
pub fn render_contributions(record: Option<&ContributionRecord>) -> serde_json::Result<String> {
    let Some(record) = record else {
        return Ok(format!("{NO_DATA_MESSAGE}\n"));
    };

    let mut buf = String::new();
    buf.push_str(CONTRIBUTIONS_HEADER);
    buf.push('\n');
    buf.push_str(&to_pretty_json(record)?);
    buf.push('\n');
    Ok(buf)
}

/// Render an aggregate report: the users without data, then the combined record
pub fn render_aggregate(report: &AggregateReport) -> serde_json::Result<String> {
    let mut buf = String::new();

    buf.push_str(RULE);
    buf.push('\n');
    buf.push_str(NOT_FOUND_TITLE);
    buf.push('\n');
    buf.push_str(RULE);
    buf.push('\n');
    buf.push_str(&report.not_found.join(", "));
    buf.push('\n');
    buf.push_str(RULE);
    buf.push('\n');

    buf.push_str(&render_contributions(report.total.as_ref())?);
    Ok(buf)
}

pub fn render_unexpected_input() -> String {
    format!("{UNEXPECTED_INPUT_MESSAGE}\n")
}

/// JSON with four-space indentation
fn to_pretty_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    let mut out: Vec<u8> = Vec::new();
    let mut ser = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut ser)?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}
