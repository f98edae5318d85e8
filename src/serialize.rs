//! Renderings for the presentation boundary.

use serde::Serialize;

use crate::error::SerializeError;
use crate::types::{ErrorMap, FieldValues, ValidatedRecord};

fn to_json<T: Serialize>(value: &T, what: &str) -> Result<String, SerializeError> {
    serde_json::to_string(value).map_err(|e| SerializeError {
        message: format!("failed to serialize {} to JSON: {}", what, e),
    })
}

/// Serialize a validated record to JSON with camelCase keys. `companyName` is
/// omitted when absent.
pub fn serialize_record(record: &ValidatedRecord) -> Result<String, SerializeError> {
    to_json(record, "record")
}

/// Serialize an error map to a JSON object keyed by field path.
pub fn serialize_errors(errors: &ErrorMap) -> Result<String, SerializeError> {
    to_json(errors, "error map")
}

/// Serialize a snapshot to YAML. The output is accepted by
/// [`parse`](crate::parse::parse).
pub fn serialize_values(values: &FieldValues) -> Result<String, SerializeError> {
    // Convert to serde_json::Value first for consistent field ordering
    let value = serde_json::to_value(values).map_err(|e| SerializeError {
        message: format!("failed to convert snapshot to JSON value: {}", e),
    })?;

    serde_saphyr::to_string(&value).map_err(|e| SerializeError {
        message: format!("failed to serialize to YAML: {}", e),
    })
}
