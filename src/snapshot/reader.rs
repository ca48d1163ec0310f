//! Snapshot loading: read, parse, validate.
//!
//! Loading is staged so each failure is distinguishable: an unreadable
//! file, malformed JSON, and a well-formed document that does not
//! match the four-table shape are three different typed errors.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::combine::Combine;
use crate::store::{Form, FormField, FormSchema, FormSchemaField, TableKind, Tables};

use super::errors::{SnapshotError, SnapshotResult};

/// Loads the snapshot document at `path`.
///
/// # Returns
///
/// - `Ok(tables)` on success
/// - `Err(NotFound)` when the file cannot be opened or read
/// - `Err(Parse)` when the bytes are not well-formed JSON
/// - `Err(Validation)` when the document does not match the shape
///
/// Nothing is partially constructed on failure.
pub fn load(path: &Path) -> SnapshotResult<Tables> {
    let bytes = fs::read_to_string(path)
        .map_err(|_| SnapshotError::not_found(path.display().to_string()))?;

    let document: Value =
        serde_json::from_str(&bytes).map_err(|e| SnapshotError::parse(e.to_string()))?;

    from_document(document)
}

/// Maps an already-parsed document onto the four-table shape.
///
/// The four tables are checked independently and the failures joined,
/// so a snapshot with several malformed tables reports all of them at
/// once instead of only the first.
pub fn from_document(document: Value) -> SnapshotResult<Tables> {
    let mut map = match document {
        Value::Object(map) => map,
        other => {
            return Err(SnapshotError::validation(format!(
                "snapshot root must be an object, got {}",
                json_type_name(&other)
            )))
        }
    };

    let combined = (
        take_table::<FormSchema>(&mut map, TableKind::FormSchema),
        take_table::<FormSchemaField>(&mut map, TableKind::FormSchemaField),
        take_table::<Form>(&mut map, TableKind::Form),
        take_table::<FormField>(&mut map, TableKind::FormField),
    )
        .combine();

    match combined {
        Ok((form_schema, form_schema_field, form, form_field)) => Ok(Tables {
            form_schema,
            form_schema_field,
            form,
            form_field,
        }),
        Err(messages) => Err(SnapshotError::validation(messages.join("; "))),
    }
}

/// Extracts and deserializes one table array from the document root.
fn take_table<R: DeserializeOwned>(
    map: &mut serde_json::Map<String, Value>,
    kind: TableKind,
) -> Result<Vec<R>, String> {
    let value = map
        .remove(kind.key())
        .ok_or_else(|| format!("missing table '{}'", kind.key()))?;

    serde_json::from_value(value).map_err(|e| format!("table '{}': {}", kind.key(), e))
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_document_loads() {
        let document = json!({
            "formSchema": [],
            "formSchemaField": [],
            "form": [],
            "formField": [],
        });

        let tables = from_document(document).unwrap();
        assert_eq!(tables.row_count(), 0);
    }

    #[test]
    fn test_non_object_root_is_validation_error() {
        let err = from_document(json!([1, 2, 3])).unwrap_err();
        match err {
            SnapshotError::Validation { message } => {
                assert!(message.contains("must be an object"));
            }
            other => panic!("expected Validation, got {:?}", other),
        }
    }

    #[test]
    fn test_all_missing_tables_reported_together() {
        let err = from_document(json!({ "formSchema": [] })).unwrap_err();
        match err {
            SnapshotError::Validation { message } => {
                assert!(message.contains("missing table 'formSchemaField'"));
                assert!(message.contains("missing table 'form'"));
                assert!(message.contains("missing table 'formField'"));
            }
            other => panic!("expected Validation, got {:?}", other),
        }
    }

    #[test]
    fn test_wrong_field_type_names_table() {
        let document = json!({
            "formSchema": [{
                "seriesId": "abc",
                "revision": "zero",
                "name": "Intake",
                "description": "",
                "isDraft": true,
            }],
            "formSchemaField": [],
            "form": [],
            "formField": [],
        });

        let err = from_document(document).unwrap_err();
        match err {
            SnapshotError::Validation { message } => {
                assert!(message.contains("table 'formSchema'"));
            }
            other => panic!("expected Validation, got {:?}", other),
        }
    }
}
