//! Domain event kinds and their mapping from Debezium operation codes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of row mutation a domain event describes.
///
/// One-to-one with the Debezium operation codes `c`/`r`/`u`/`d`. Operation
/// codes outside that set (e.g. `t` for truncate, `m` for message) have no
/// event kind and must be passed through by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Create,
    Read,
    Update,
    Delete,
}

impl EventType {
    /// Maps a Debezium operation code to an event kind.
    ///
    /// Returns `None` for any code outside `c`/`r`/`u`/`d`.
    pub fn from_op(op: &str) -> Option<Self> {
        match op {
            "c" => Some(EventType::Create),
            "r" => Some(EventType::Read),
            "u" => Some(EventType::Update),
            "d" => Some(EventType::Delete),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Create => "create",
            EventType::Read => "read",
            EventType::Update => "update",
            EventType::Delete => "delete",
        }
    }

    /// Which row image carries the data for this event kind.
    ///
    /// Creates, snapshot reads and updates describe the row after the
    /// mutation; deletes only carry the row as it was before.
    pub fn row_image(&self) -> RowImageKind {
        match self {
            EventType::Create | EventType::Read | EventType::Update => RowImageKind::After,
            EventType::Delete => RowImageKind::Before,
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifies one of the two row images of a change record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowImageKind {
    Before,
    After,
}

impl RowImageKind {
    /// Field name of this image in the change record value document.
    pub fn field(&self) -> &'static str {
        match self {
            RowImageKind::Before => "before",
            RowImageKind::After => "after",
        }
    }
}
