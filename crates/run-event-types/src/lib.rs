//! Domain event types for the run and run-host pipelines.
//!
//! This crate defines the two strongly-typed event families produced by the
//! CDC transform, together with their construction from Debezium row images:
//!
//! - [`RunEvent`] / [`RunPayload`] / [`RunStatus`] - playbook run events
//! - [`RunHostEvent`] / [`HostPayload`] / [`HostStatus`] - per-host run events
//!
//! Both payload types serialize in a fixed, schema-declared property order,
//! omit absent optional fields entirely (never an explicit `null`), and
//! carry an open extension map of unrecognized source columns that is
//! re-emitted after the fixed fields.
//!
//! The [`labels::parse_or_default`] helper implements the lenient JSON
//! sub-parse used for the run payload's `labels` column.

pub mod host;
pub mod labels;
pub mod run;

mod column;

// Re-export main types for convenient access
pub use host::{HostPayload, HostStatus, RunHostEvent};
pub use run::{RunEvent, RunPayload, RunStatus};
