//! Change-data-capture record model for the event transform pipelines.
//!
//! This crate defines the types shared by both transform pipelines:
//!
//! - [`ChangeRecord`] - the incoming CDC record envelope as handed over by
//!   the host record-processing runtime
//! - [`SinkRecord`] - the transformed record addressed to a destination topic
//! - [`Outcome`] - the per-record decision (drop, pass through, emit)
//! - [`EventType`] - domain event kind derived from the Debezium operation code
//! - [`TransformError`] - shared failure taxonomy for payload construction
//!   and serialization
//!
//! # Dependency Direction
//!
//! This crate defines the shared types that both `run-event-types` and
//! `run-event-transform` depend on. It has no knowledge of any concrete
//! entity kind.

pub mod error;
pub mod event_type;
pub mod record;

// Re-export main types for convenient access
pub use error::{Result, TransformError};
pub use event_type::{EventType, RowImageKind};
pub use record::{ChangeRecord, Outcome, SinkRecord};
