//! Debezium change record to domain event transform.
//!
//! This crate implements the per-record decision engine that turns raw CDC
//! records from the `runs` and `run_hosts` tables into the strongly-typed
//! event streams consumed downstream. Each record goes through a linear,
//! single-pass pipeline:
//!
//! 1. Heartbeat & shape filter - drops keep-alive records, passes through
//!    anything that is not a row-mutation event
//! 2. Table router - passes through records for other tables
//! 3. Operation classifier - maps the Debezium op code to an event kind
//! 4. Snapshot selector - picks the `after` or `before` row image
//! 5. Payload builder - projects the image into the domain payload
//! 6. Header & key composer - derives the output key and metadata headers
//! 7. Serializer & router - renders the event and addresses the output
//!
//! The engine is pure and synchronous: it performs no I/O, holds no
//! mutable state beyond its configuration, and is safe to share across
//! worker threads.
//!
//! # Example
//!
//! ```ignore
//! use run_event_transform::{Outcome, RunEventTransform, TransformConfig};
//!
//! let transform = RunEventTransform::new(TransformConfig::new(
//!     "platform.playbook-dispatcher.runs",
//!     "runs",
//! )?);
//!
//! match transform.apply(&record)? {
//!     Outcome::Emit(sink) => producer.send(sink),
//!     Outcome::Unchanged => producer.forward(record),
//!     Outcome::Drop => {}
//! }
//! ```

pub mod config;
pub mod descriptor;
pub mod transform;

// Re-export main types for convenient access
pub use cdc_types::Outcome;
pub use config::{ConfigError, TransformConfig};
pub use descriptor::{
    EventDescriptor, RunEvents, RunHostEvents, HEARTBEAT_SENTINEL_ID, HEARTBEAT_TOPIC_PREFIX,
};
pub use transform::{RunEventTransform, RunHostEventTransform, Transform};
