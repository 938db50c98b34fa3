//! Per-entity-kind descriptors.
//!
//! The two pipelines share one generic engine; everything that differs
//! between them (payload construction, output headers, the extra
//! heartbeat-key check) lives behind [`EventDescriptor`]. Descriptors are
//! stateless; the engine calls their associated functions.

use cdc_types::{EventType, Result};
use run_event_types::{HostPayload, RunEvent, RunHostEvent, RunPayload};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::info;

/// Topic prefix of synthetic Debezium heartbeat records.
pub const HEARTBEAT_TOPIC_PREFIX: &str = "__debezium-heartbeat-pd";

/// Key id of the synthetic run-host heartbeat row.
///
/// These rows are written into the source table itself to keep the
/// replication slot advancing, so they arrive without the heartbeat topic
/// prefix and must be suppressed by key.
pub const HEARTBEAT_SENTINEL_ID: &str = "98875b33-b37e-4c35-be8b-d74f321bac28";

const HEADER_EVENT_TYPE: &str = "event_type";
const HEADER_SERVICE: &str = "service";
const HEADER_STATUS: &str = "status";
const HEADER_ACCOUNT: &str = "account";

/// Entity-kind specific behavior of the transform pipeline.
pub trait EventDescriptor {
    /// Serialized event produced for this entity kind.
    type Event: Serialize;

    /// Builds the domain event from the selected row image.
    fn build(event_type: EventType, image: &Map<String, Value>) -> Result<Self::Event>;

    /// Output key for the event; always the row id.
    fn key(event: &Self::Event) -> &str;

    /// Advisory metadata headers attached to the output record.
    fn headers(event: &Self::Event) -> Vec<(String, String)>;

    /// Recognizes entity-specific heartbeat records by their key document.
    fn is_heartbeat_key(_key: &Value) -> bool {
        false
    }

    /// Per-record processed log line.
    fn log_processed(key: &str, event: &Self::Event);
}

/// Descriptor for the playbook run pipeline.
pub struct RunEvents;

impl EventDescriptor for RunEvents {
    type Event = RunEvent;

    fn build(event_type: EventType, image: &Map<String, Value>) -> Result<RunEvent> {
        Ok(RunEvent::new(event_type, RunPayload::from_row(image)?))
    }

    fn key(event: &RunEvent) -> &str {
        &event.payload.id
    }

    fn headers(event: &RunEvent) -> Vec<(String, String)> {
        vec![
            (
                HEADER_EVENT_TYPE.to_string(),
                event.event_type.as_str().to_string(),
            ),
            (HEADER_SERVICE.to_string(), event.payload.service.clone()),
            (
                HEADER_STATUS.to_string(),
                event.payload.status.as_str().to_string(),
            ),
            (HEADER_ACCOUNT.to_string(), event.payload.account.clone()),
        ]
    }

    fn log_processed(key: &str, event: &RunEvent) {
        info!(
            key,
            event_type = %event.event_type,
            service = %event.payload.service,
            "processed record"
        );
    }
}

/// Descriptor for the run-host pipeline.
pub struct RunHostEvents;

impl EventDescriptor for RunHostEvents {
    type Event = RunHostEvent;

    fn build(event_type: EventType, image: &Map<String, Value>) -> Result<RunHostEvent> {
        Ok(RunHostEvent::new(event_type, HostPayload::from_row(image)?))
    }

    fn key(event: &RunHostEvent) -> &str {
        &event.payload.id
    }

    fn headers(event: &RunHostEvent) -> Vec<(String, String)> {
        vec![
            (
                HEADER_EVENT_TYPE.to_string(),
                event.event_type.as_str().to_string(),
            ),
            (
                HEADER_STATUS.to_string(),
                event.payload.status.as_str().to_string(),
            ),
        ]
    }

    fn is_heartbeat_key(key: &Value) -> bool {
        key.get("id").and_then(Value::as_str) == Some(HEARTBEAT_SENTINEL_ID)
    }

    fn log_processed(key: &str, event: &RunHostEvent) {
        info!(key, event_type = %event.event_type, "processed record");
    }
}
