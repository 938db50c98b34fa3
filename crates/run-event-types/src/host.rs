//! Per-host playbook run events.

use crate::column;
use cdc_types::{EventType, Result, TransformError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Columns projected into [`HostPayload`]; everything else in the row
/// image lands in the open extension map.
const COLUMNS: [&str; 10] = [
    "id",
    "run_id",
    "inventory_id",
    "host",
    "log",
    "sat_sequence",
    "status",
    "timeout",
    "created_at",
    "updated_at",
];

/// A versioned domain event describing a run-host mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunHostEvent {
    pub event_type: EventType,
    pub payload: HostPayload,
}

impl RunHostEvent {
    pub fn new(event_type: EventType, payload: HostPayload) -> Self {
        RunHostEvent {
            event_type,
            payload,
        }
    }
}

/// Lifecycle state of a playbook run on a single host.
///
/// Deliberately independent of [`crate::RunStatus`] even though the value
/// sets currently coincide; each entity kind's schema is authoritative for
/// its own enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostStatus {
    Running,
    Success,
    Failure,
    Timeout,
    Canceled,
}

impl HostStatus {
    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "running" => Ok(HostStatus::Running),
            "success" => Ok(HostStatus::Success),
            "failure" => Ok(HostStatus::Failure),
            "timeout" => Ok(HostStatus::Timeout),
            "canceled" => Ok(HostStatus::Canceled),
            other => Err(TransformError::UnknownStatus(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HostStatus::Running => "running",
            HostStatus::Success => "success",
            HostStatus::Failure => "failure",
            HostStatus::Timeout => "timeout",
            HostStatus::Canceled => "canceled",
        }
    }
}

impl fmt::Display for HostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload of a [`RunHostEvent`].
///
/// Field declaration order is the wire order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostPayload {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_id: Option<String>,
    pub inventory_id: String,
    pub host: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log: Option<String>,
    /// Satellite playbook sequence number; present only when the source
    /// column is non-null.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sat_sequence: Option<i64>,
    pub status: HostStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<i64>,
    pub created_at: String,
    pub updated_at: String,
    /// Unrecognized source columns, re-emitted after the fixed fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl HostPayload {
    /// Projects a Debezium row image into a run-host payload.
    pub fn from_row(row: &Map<String, Value>) -> Result<Self> {
        Ok(HostPayload {
            id: column::required_str(row, "id")?,
            run_id: column::optional_str(row, "run_id")?,
            inventory_id: column::required_str(row, "inventory_id")?,
            host: column::required_str(row, "host")?,
            log: column::optional_str(row, "log")?,
            sat_sequence: column::optional_i64(row, "sat_sequence")?,
            status: HostStatus::parse(&column::required_str(row, "status")?)?,
            timeout: column::optional_i64(row, "timeout")?,
            created_at: column::required_str(row, "created_at")?,
            updated_at: column::required_str(row, "updated_at")?,
            extra: column::extension_map(row, &COLUMNS),
        })
    }
}
