use crate::enums::FieldName;
use crate::error::{ParseError, ParseErrorKind};
use crate::types::FieldValues;

/// Parse a snapshot written as a YAML or JSON mapping into [`FieldValues`].
///
/// Performs deserialization and type mapping only. Does NOT validate the
/// values. Keys are the camelCase field paths; omitted and `null` fields take
/// their defaults.
pub fn parse(input: &str) -> Result<FieldValues, ParseError> {
    if input.trim().is_empty() {
        return Err(ParseError {
            kind: ParseErrorKind::Syntax,
            message: "empty input".to_string(),
            path: None,
            line: None,
            column: None,
        });
    }

    // YAML is a superset of JSON, so one deserializer covers both forms.
    let value: serde_json::Value = serde_saphyr::from_str(input).map_err(|e| ParseError {
        kind: ParseErrorKind::Syntax,
        message: e.to_string(),
        path: None,
        line: None,
        column: None,
    })?;

    let serde_json::Value::Object(mut obj) = value else {
        return Err(ParseError {
            kind: ParseErrorKind::TypeMismatch,
            message: "snapshot root must be a mapping".to_string(),
            path: None,
            line: None,
            column: None,
        });
    };

    for key in obj.keys() {
        key.parse::<FieldName>()?;
    }
    obj.retain(|_, v| !v.is_null());

    for (key, v) in &obj {
        if !v.is_string() {
            return Err(ParseError {
                kind: ParseErrorKind::TypeMismatch,
                message: format!("field '{}' must be a string, got {}", key, v),
                path: Some(key.clone()),
                line: None,
                column: None,
            });
        }
    }

    let values: FieldValues =
        serde_json::from_value(serde_json::Value::Object(obj)).map_err(|e| ParseError {
            kind: ParseErrorKind::TypeMismatch,
            message: e.to_string(),
            path: None,
            line: None,
            column: None,
        })?;

    Ok(values)
}
