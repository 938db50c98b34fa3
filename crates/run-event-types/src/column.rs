//! Typed accessors over a Debezium row image.
//!
//! A row image is a flat JSON object of column name to value. Required
//! accessors fail fast on absent or null columns; optional accessors map
//! null to `None`. A present, non-null column of the wrong JSON type is
//! always an error.

use cdc_types::{Result, TransformError};
use serde_json::{Map, Value};

pub(crate) fn required_str(row: &Map<String, Value>, column: &'static str) -> Result<String> {
    match row.get(column) {
        None | Some(Value::Null) => Err(TransformError::MissingColumn(column)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(TransformError::ColumnType {
            column,
            expected: "string",
            value: other.to_string(),
        }),
    }
}

pub(crate) fn optional_str(row: &Map<String, Value>, column: &'static str) -> Result<Option<String>> {
    match row.get(column) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(TransformError::ColumnType {
            column,
            expected: "string",
            value: other.to_string(),
        }),
    }
}

pub(crate) fn required_i64(row: &Map<String, Value>, column: &'static str) -> Result<i64> {
    match row.get(column) {
        None | Some(Value::Null) => Err(TransformError::MissingColumn(column)),
        Some(value) => value.as_i64().ok_or_else(|| TransformError::ColumnType {
            column,
            expected: "integer",
            value: value.to_string(),
        }),
    }
}

pub(crate) fn optional_i64(row: &Map<String, Value>, column: &'static str) -> Result<Option<i64>> {
    match row.get(column) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .as_i64()
            .map(Some)
            .ok_or_else(|| TransformError::ColumnType {
                column,
                expected: "integer",
                value: value.to_string(),
            }),
    }
}

/// Collects the columns outside `known` into an extension map.
///
/// Null-valued unknown columns are skipped so that they follow the same
/// omission rule as declared optional fields.
pub(crate) fn extension_map(row: &Map<String, Value>, known: &[&str]) -> Map<String, Value> {
    row.iter()
        .filter(|(name, value)| !known.contains(&name.as_str()) && !value.is_null())
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}
