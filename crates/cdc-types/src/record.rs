//! Record envelopes and the per-record transform outcome.

use serde_json::Value;

/// An incoming CDC record as handed over by the host runtime.
///
/// Key and value are the deserialized Kafka Connect documents; either may
/// be absent (tombstones) or carry a non-object shape (schema-change
/// events). The transform only ever reads this structure.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeRecord {
    /// Topic the record was consumed from
    pub topic: String,
    /// Partition assignment, preserved on emitted records
    pub partition: Option<i32>,
    /// Record key document (if any)
    pub key: Option<Value>,
    /// Record value document (if any)
    pub value: Option<Value>,
    /// Record timestamp in milliseconds since epoch (if available)
    pub timestamp: Option<i64>,
}

/// A transformed record addressed to the destination topic.
#[derive(Debug, Clone, PartialEq)]
pub struct SinkRecord {
    /// Destination topic name
    pub topic: String,
    /// Partition inherited from the input record
    pub partition: Option<i32>,
    /// Output key, always the row id
    pub key: String,
    /// Serialized event body
    pub value: String,
    /// Advisory routing/observability metadata
    pub headers: Vec<(String, String)>,
    /// Timestamp inherited from the input record
    pub timestamp: Option<i64>,
}

/// Terminal outcome of transforming a single change record.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Heartbeat or otherwise discarded record; emit nothing.
    Drop,
    /// Not a relevant row mutation; forward the original record untouched.
    Unchanged,
    /// Transformed record to emit in place of the input.
    Emit(SinkRecord),
}

impl Outcome {
    pub fn is_drop(&self) -> bool {
        matches!(self, Outcome::Drop)
    }

    pub fn is_unchanged(&self) -> bool {
        matches!(self, Outcome::Unchanged)
    }
}
