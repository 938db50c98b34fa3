//! Playbook run events.
//!
//! Matches the run event schema consumed downstream: a `{ event_type,
//! payload }` wrapper whose payload fields serialize in the declared
//! property order with absent optionals omitted.

use crate::column;
use crate::labels;
use cdc_types::{EventType, Result, TransformError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use url::Url;

/// Columns projected into [`RunPayload`]; everything else in the row image
/// lands in the open extension map.
const COLUMNS: [&str; 15] = [
    "id",
    "account",
    "recipient",
    "correlation_id",
    "service",
    "url",
    "labels",
    "playbook_name",
    "playbook_run_url",
    "sat_id",
    "sat_org_id",
    "status",
    "timeout",
    "created_at",
    "updated_at",
];

/// A versioned domain event describing a playbook run mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunEvent {
    pub event_type: EventType,
    pub payload: RunPayload,
}

impl RunEvent {
    pub fn new(event_type: EventType, payload: RunPayload) -> Self {
        RunEvent {
            event_type,
            payload,
        }
    }
}

/// Lifecycle state of a playbook run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    Running,
    Success,
    Failure,
    Timeout,
    Canceled,
}

impl RunStatus {
    /// Parses the status column value; anything outside the enum is a
    /// build error, never silently coerced.
    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "running" => Ok(RunStatus::Running),
            "success" => Ok(RunStatus::Success),
            "failure" => Ok(RunStatus::Failure),
            "timeout" => Ok(RunStatus::Timeout),
            "canceled" => Ok(RunStatus::Canceled),
            other => Err(TransformError::UnknownStatus(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RunStatus::Running => "running",
            RunStatus::Success => "success",
            RunStatus::Failure => "failure",
            RunStatus::Timeout => "timeout",
            RunStatus::Canceled => "canceled",
        }
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload of a [`RunEvent`].
///
/// Field declaration order is the wire order. Timestamps and URL columns
/// are carried verbatim as the source rendered them, not reparsed or
/// normalized; the URL columns are merely validated during construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunPayload {
    pub id: String,
    pub account: String,
    pub recipient: String,
    pub correlation_id: String,
    pub service: String,
    pub url: String,
    pub labels: Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playbook_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playbook_run_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sat_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sat_org_id: Option<String>,
    pub status: RunStatus,
    pub timeout: i64,
    pub created_at: String,
    pub updated_at: String,
    /// Unrecognized source columns, re-emitted after the fixed fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RunPayload {
    /// Projects a Debezium row image into a run payload.
    ///
    /// Required columns abort construction when absent or malformed; the
    /// `labels` column degrades to an empty document on parse failure.
    pub fn from_row(row: &Map<String, Value>) -> Result<Self> {
        let id = column::required_str(row, "id")?;

        let labels = match column::optional_str(row, "labels")? {
            Some(raw) => labels::parse_or_default(&raw, &id, Map::new()),
            None => Map::new(),
        };

        Ok(RunPayload {
            account: column::required_str(row, "account")?,
            recipient: column::required_str(row, "recipient")?,
            correlation_id: column::required_str(row, "correlation_id")?,
            service: column::required_str(row, "service")?,
            url: checked_url(column::required_str(row, "url")?, "url")?,
            labels,
            playbook_name: column::optional_str(row, "playbook_name")?,
            playbook_run_url: column::optional_str(row, "playbook_run_url")?
                .map(|raw| checked_url(raw, "playbook_run_url"))
                .transpose()?,
            sat_id: column::optional_str(row, "sat_id")?,
            sat_org_id: column::optional_str(row, "sat_org_id")?,
            status: RunStatus::parse(&column::required_str(row, "status")?)?,
            timeout: column::required_i64(row, "timeout")?,
            created_at: column::required_str(row, "created_at")?,
            updated_at: column::required_str(row, "updated_at")?,
            extra: column::extension_map(row, &COLUMNS),
            id,
        })
    }
}

/// Validates a URL column, returning the raw string untouched.
///
/// Downstream consumers receive the column exactly as the source rendered
/// it; parsing only guards against syntactically invalid URLs. The parsed
/// form is discarded because `Url` re-serializes in normalized form
/// (trailing slash, lowercased host), which would alter the wire value.
fn checked_url(raw: String, col: &'static str) -> Result<String> {
    Url::parse(&raw).map_err(|e| TransformError::InvalidUrl {
        column: col,
        message: e.to_string(),
    })?;
    Ok(raw)
}
