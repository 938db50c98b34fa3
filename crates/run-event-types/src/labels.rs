//! Lenient parsing for JSON-encoded document columns.

use serde_json::{Map, Value};
use tracing::warn;

/// Parses a JSON-encoded string column into a document, falling back to
/// `default` when the content is not a valid JSON object.
///
/// Parse failure is not an error: upstream rows occasionally carry labels
/// that never were valid JSON, and a broken labels column must not stop
/// the row from being dispatched. The failure is logged with the row id
/// and the raw content so it can be traced back to the source row.
pub fn parse_or_default(
    raw: &str,
    row_id: &str,
    default: Map<String, Value>,
) -> Map<String, Value> {
    match serde_json::from_str(raw) {
        Ok(parsed) => parsed,
        Err(e) => {
            warn!(
                id = row_id,
                raw,
                error = %e,
                "ignoring malformed JSON column, substituting default"
            );
            default
        }
    }
}
