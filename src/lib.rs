//! Dispatcher Event Streams
//!
//! A library for transforming Debezium change-data-capture records from the
//! playbook dispatcher's `runs` and `run_hosts` tables into versioned domain
//! event streams.
//!
//! # Crates
//!
//! The workspace is split the same way the processing is:
//!
//! - `cdc-types` - change-record envelopes, outcomes, operation
//!   classification and the shared error taxonomy
//! - `run-event-types` - the run and run-host event/payload types and
//!   their construction from row images
//! - `run-event-transform` - the configured per-record transform engine
//!
//! # Usage
//!
//! ```ignore
//! use dispatcher_event_streams::{Outcome, RunEventTransform, TransformConfig};
//!
//! let transform = RunEventTransform::new(TransformConfig::new(
//!     "platform.playbook-dispatcher.runs",
//!     "runs",
//! )?);
//!
//! for record in consumer {
//!     match transform.apply(&record)? {
//!         Outcome::Emit(sink) => producer.send(sink),
//!         Outcome::Unchanged => producer.forward(record),
//!         Outcome::Drop => {}
//!     }
//! }
//! ```

// Re-export the member crates for convenience
pub use cdc_types::{
    ChangeRecord, EventType, Outcome, Result, RowImageKind, SinkRecord, TransformError,
};
pub use run_event_transform::{
    ConfigError, EventDescriptor, RunEventTransform, RunEvents, RunHostEventTransform,
    RunHostEvents, Transform, TransformConfig, HEARTBEAT_SENTINEL_ID, HEARTBEAT_TOPIC_PREFIX,
};
pub use run_event_types::labels;
pub use run_event_types::{HostPayload, HostStatus, RunEvent, RunHostEvent, RunPayload, RunStatus};
