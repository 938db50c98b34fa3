//! The per-record transform engine.

use crate::config::TransformConfig;
use crate::descriptor::{EventDescriptor, RunEvents, RunHostEvents, HEARTBEAT_TOPIC_PREFIX};
use cdc_types::{ChangeRecord, EventType, Outcome, Result, SinkRecord, TransformError};
use serde_json::Value;
use std::marker::PhantomData;
use tracing::info;

/// Transform for the playbook run pipeline.
pub type RunEventTransform = Transform<RunEvents>;

/// Transform for the run-host pipeline.
pub type RunHostEventTransform = Transform<RunHostEvents>;

/// A configured transform instance for one entity kind.
///
/// Holds nothing but the immutable configuration, so a single instance
/// can be applied concurrently from any number of worker threads.
pub struct Transform<D> {
    config: TransformConfig,
    _descriptor: PhantomData<fn() -> D>,
}

impl<D: EventDescriptor> Transform<D> {
    pub fn new(config: TransformConfig) -> Self {
        info!(topic = %config.topic, table = %config.table, "transform configured");
        Transform {
            config,
            _descriptor: PhantomData,
        }
    }

    pub fn config(&self) -> &TransformConfig {
        &self.config
    }

    /// Decides the fate of a single change record.
    ///
    /// Returns [`Outcome::Drop`] for heartbeats, [`Outcome::Unchanged`]
    /// for records that are not a relevant row mutation (wrong shape,
    /// wrong table, unmapped operation code), and [`Outcome::Emit`] with
    /// the transformed record otherwise. Build and serialization failures
    /// abort the record with an error; the host runtime decides whether
    /// to retry or dead-letter it.
    pub fn apply(&self, record: &ChangeRecord) -> Result<Outcome> {
        // Stage 1: heartbeat & shape filter.
        if record.topic.starts_with(HEARTBEAT_TOPIC_PREFIX) {
            info!(topic = %record.topic, "received heartbeat");
            return Ok(Outcome::Drop);
        }

        if let Some(key) = record.key.as_ref() {
            if D::is_heartbeat_key(key) {
                info!("received heartbeat");
                return Ok(Outcome::Drop);
            }
        }

        // Schema-change events, tombstones and scalar-keyed records are
        // not row mutations; forward them untouched.
        if !record.key.as_ref().is_some_and(Value::is_object) {
            return Ok(Outcome::Unchanged);
        }
        let Some(value) = record.value.as_ref().and_then(Value::as_object) else {
            return Ok(Outcome::Unchanged);
        };
        let Some(op) = value.get("op").and_then(Value::as_str) else {
            return Ok(Outcome::Unchanged);
        };

        // Stage 2: table router.
        let table = value
            .get("source")
            .and_then(|source| source.get("table"))
            .and_then(Value::as_str);
        if table != Some(self.config.table.as_str()) {
            return Ok(Outcome::Unchanged);
        }

        // Stage 3: operation classifier.
        let Some(event_type) = EventType::from_op(op) else {
            info!(op, "ignoring operation without event mapping");
            return Ok(Outcome::Unchanged);
        };

        // Stage 4: snapshot selector.
        let image_field = event_type.row_image().field();
        let image = value
            .get(image_field)
            .and_then(Value::as_object)
            .ok_or(TransformError::MissingImage(image_field))?;

        // Stage 5: payload builder.
        let event = D::build(event_type, image)?;

        // Stage 6: header & key composer.
        let key = D::key(&event).to_string();
        let headers = D::headers(&event);

        // Stage 7: serializer & router.
        let body = serde_json::to_string(&event)?;
        D::log_processed(&key, &event);

        Ok(Outcome::Emit(SinkRecord {
            topic: self.config.topic.clone(),
            partition: record.partition,
            key,
            value: body,
            headers,
            timestamp: record.timestamp,
        }))
    }
}
