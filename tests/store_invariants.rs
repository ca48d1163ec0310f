//! Store Invariant Tests
//!
//! Invariants pinned here:
//! - Natural-key uniqueness per table; failed creates change nothing
//! - Revisions are store-assigned, strictly increasing, append-only
//! - delete/publish compute their matched set before mutating
//! - Operations a kind does not support report a typed error

use formdb::store::{
    FieldType, Form, FormField, FormSchema, FormSchemaField, FormSchemaPatch, Operation,
    StoreError, TableKind, TableStore,
};

// =============================================================================
// Helper Functions
// =============================================================================

fn schema(series_id: &str, revision: u64) -> FormSchema {
    FormSchema {
        series_id: series_id.to_string(),
        revision,
        name: format!("Schema {}", series_id),
        description: format!("Description {}", revision),
        is_draft: true,
    }
}

fn schema_field(series_id: &str, revision: u64, id: &str) -> FormSchemaField {
    FormSchemaField {
        schema_series_id: series_id.to_string(),
        schema_revision: revision,
        id: id.to_string(),
        page: 1,
        weight: 10,
        name: "Email".to_string(),
        description: "Contact email".to_string(),
        field_type: FieldType::Email,
        required: true,
    }
}

fn form(series_id: &str, revision: u64) -> Form {
    Form {
        schema_series_id: "schema-a".to_string(),
        schema_revision: 0,
        series_id: series_id.to_string(),
        revision,
        name: "Submission".to_string(),
        description: "".to_string(),
    }
}

fn form_field(series_id: &str, revision: u64, field_id: &str) -> FormField {
    FormField {
        form_series_id: series_id.to_string(),
        form_revision: revision,
        field_schema_id: field_id.to_string(),
        value: "alice@example.com".to_string(),
    }
}

// =============================================================================
// Create / Read Tests
// =============================================================================

/// Every successful create is visible to a universal read.
#[test]
fn test_created_rows_all_readable() {
    let mut store = TableStore::new();

    store.create(schema("123", 0)).unwrap();
    store.create(schema("456", 0)).unwrap();
    store.create(schema("123", 1)).unwrap();

    let rows = store.read::<FormSchema>(|_| true).unwrap();
    assert_eq!(rows.len(), 3);
}

/// A specific predicate narrows to exactly the matching row.
#[test]
fn test_read_with_specific_predicate() {
    let mut store = TableStore::new();
    store.create(schema("123", 0)).unwrap();
    store.create(schema("456", 0)).unwrap();

    let rows = store
        .read::<FormSchema>(|row| row.series_id == "123" && row.revision == 0)
        .unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].series_id, "123");
    assert_eq!(rows[0].revision, 0);
}

/// Read on an empty table returns an empty set, not an error.
#[test]
fn test_read_empty_table() {
    let store = TableStore::new();
    let rows = store.read::<FormSchema>(|_| true).unwrap();
    assert!(rows.is_empty());
}

/// Duplicate (seriesId, revision) fails and leaves the table unchanged.
#[test]
fn test_duplicate_create_rejected_table_unchanged() {
    let mut store = TableStore::new();
    store.create(schema("123", 0)).unwrap();
    let before = store.read::<FormSchema>(|_| true).unwrap();

    let result = store.create(schema("123", 0));

    match result {
        Err(StoreError::PrimaryKey { table, key }) => {
            assert_eq!(table, TableKind::FormSchema);
            assert_eq!(key, "123/0");
        }
        other => panic!("expected PrimaryKey, got {:?}", other),
    }

    let after = store.read::<FormSchema>(|_| true).unwrap();
    assert_eq!(before, after);
}

/// Same series at a different revision is not a collision.
#[test]
fn test_same_series_different_revision_allowed() {
    let mut store = TableStore::new();
    store.create(schema("123", 0)).unwrap();
    store.create(schema("123", 1)).unwrap();

    let rows = store.read::<FormSchema>(|row| row.series_id == "123").unwrap();
    assert_eq!(rows.len(), 2);
}

/// Each dependent kind enforces its own natural key on create.
#[test]
fn test_dependent_kind_natural_keys() {
    let mut store = TableStore::new();

    store.create(schema_field("s", 0, "f1")).unwrap();
    store.create(schema_field("s", 0, "f2")).unwrap();
    store.create(schema_field("s", 1, "f1")).unwrap();
    let dup_field = store.create(schema_field("s", 0, "f1"));
    assert!(matches!(
        dup_field,
        Err(StoreError::PrimaryKey {
            table: TableKind::FormSchemaField,
            ..
        })
    ));

    store.create(form("sub", 0)).unwrap();
    let dup_form = store.create(form("sub", 0));
    assert!(matches!(
        dup_form,
        Err(StoreError::PrimaryKey {
            table: TableKind::Form,
            ..
        })
    ));

    store.create(form_field("sub", 0, "f1")).unwrap();
    store.create(form_field("sub", 0, "f2")).unwrap();
    let dup_value = store.create(form_field("sub", 0, "f1"));
    assert!(matches!(
        dup_value,
        Err(StoreError::PrimaryKey {
            table: TableKind::FormField,
            ..
        })
    ));
}

// =============================================================================
// Revise Tests
// =============================================================================

/// Revise on an unknown series fails and changes nothing.
#[test]
fn test_revise_unknown_series_not_found() {
    let mut store = TableStore::new();

    let result = store.revise::<FormSchema>(FormSchemaPatch::new("missing"));

    match result {
        Err(StoreError::NotFound(message)) => assert!(message.contains("missing")),
        other => panic!("expected NotFound, got {:?}", other),
    }
    assert!(store.read::<FormSchema>(|_| true).unwrap().is_empty());
}

/// Revise appends exactly one row at R+1, carrying unspecified fields
/// forward and leaving existing rows untouched.
#[test]
fn test_revise_appends_next_revision() {
    let mut store = TableStore::new();
    store.create(schema("123", 0)).unwrap();
    let original = store.read::<FormSchema>(|row| row.revision == 0).unwrap();

    store
        .revise::<FormSchema>(FormSchemaPatch::new("123").description("New Description"))
        .unwrap();

    let all = store.read::<FormSchema>(|_| true).unwrap();
    assert_eq!(all.len(), 2);

    let revised = store.read::<FormSchema>(|row| row.revision == 1).unwrap();
    assert_eq!(revised.len(), 1);
    assert_eq!(revised[0].description, "New Description");
    assert_eq!(revised[0].name, original[0].name);
    assert_eq!(revised[0].is_draft, original[0].is_draft);

    let untouched = store.read::<FormSchema>(|row| row.revision == 0).unwrap();
    assert_eq!(untouched, original);
}

/// With revisions 0 and 1 present, revise yields revision 2.
#[test]
fn test_revise_picks_highest_revision() {
    let mut store = TableStore::new();
    store.create(schema("S", 0)).unwrap();
    store
        .revise::<FormSchema>(FormSchemaPatch::new("S").name("Renamed"))
        .unwrap();

    store
        .revise::<FormSchema>(FormSchemaPatch::new("S").description("x"))
        .unwrap();

    let latest = store.read::<FormSchema>(|row| row.revision == 2).unwrap();
    assert_eq!(latest.len(), 1);
    assert_eq!(latest[0].description, "x");
    assert_eq!(latest[0].name, "Renamed");
}

/// A later revision can itself be created as a draft.
#[test]
fn test_revise_after_publish_can_redraft() {
    let mut store = TableStore::new();
    store.create(schema("123", 0)).unwrap();
    store
        .publish::<FormSchema>(|row| row.series_id == "123")
        .unwrap();

    store
        .revise::<FormSchema>(FormSchemaPatch::new("123").is_draft(true))
        .unwrap();

    let revised = store.read::<FormSchema>(|row| row.revision == 1).unwrap();
    assert!(revised[0].is_draft);

    let published = store.read::<FormSchema>(|row| row.revision == 0).unwrap();
    assert!(!published[0].is_draft);
}

// =============================================================================
// Delete Tests
// =============================================================================

/// Delete with no matches fails and changes nothing.
#[test]
fn test_delete_no_match_not_found() {
    let mut store = TableStore::new();
    store.create(schema("123", 0)).unwrap();

    let result = store.delete::<FormSchema>(|row| row.series_id == "999");

    assert!(matches!(result, Err(StoreError::NotFound(_))));
    assert_eq!(store.read::<FormSchema>(|_| true).unwrap().len(), 1);
}

/// Delete removes exactly the matched rows.
#[test]
fn test_delete_removes_matched_rows_only() {
    let mut store = TableStore::new();
    store.create(schema("123", 0)).unwrap();
    store.create(schema("123", 1)).unwrap();
    store.create(schema("456", 0)).unwrap();

    store
        .delete::<FormSchema>(|row| row.series_id == "123")
        .unwrap();

    let remaining = store.read::<FormSchema>(|_| true).unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].series_id, "456");
}

// =============================================================================
// Publish Tests
// =============================================================================

/// Publish with no matches fails and changes nothing.
#[test]
fn test_publish_no_match_not_found() {
    let mut store = TableStore::new();
    store.create(schema("123", 0)).unwrap();

    let result = store.publish::<FormSchema>(|row| row.series_id == "999");

    assert!(matches!(result, Err(StoreError::NotFound(_))));
    let rows = store.read::<FormSchema>(|_| true).unwrap();
    assert!(rows[0].is_draft);
}

/// Publish clears the draft flag on matched rows and nothing else.
#[test]
fn test_publish_flips_matched_rows_only() {
    let mut store = TableStore::new();
    store.create(schema("123", 0)).unwrap();
    store.create(schema("123", 1)).unwrap();
    store.create(schema("456", 0)).unwrap();
    let other_before = store.read::<FormSchema>(|row| row.series_id == "456").unwrap();

    store
        .publish::<FormSchema>(|row| row.series_id == "123")
        .unwrap();

    let published = store.read::<FormSchema>(|row| row.series_id == "123").unwrap();
    assert_eq!(published.len(), 2);
    assert!(published.iter().all(|row| !row.is_draft));

    let other_after = store.read::<FormSchema>(|row| row.series_id == "456").unwrap();
    assert_eq!(other_before, other_after);
}

/// Publishing a published row again is not an error.
#[test]
fn test_publish_is_idempotent_per_row() {
    let mut store = TableStore::new();
    store.create(schema("123", 0)).unwrap();

    store
        .publish::<FormSchema>(|row| row.series_id == "123")
        .unwrap();
    store
        .publish::<FormSchema>(|row| row.series_id == "123")
        .unwrap();

    let rows = store.read::<FormSchema>(|_| true).unwrap();
    assert!(!rows[0].is_draft);
}

// =============================================================================
// Unsupported Operation Tests
// =============================================================================

/// Kinds without defined delete/publish behavior report a typed error
/// instead of failing fatally.
#[test]
fn test_unsupported_operations_are_typed() {
    let mut store = TableStore::new();
    store.create(form_field("sub", 0, "f1")).unwrap();

    let delete = store.delete::<FormField>(|_| true);
    assert_eq!(
        delete,
        Err(StoreError::Unsupported {
            table: TableKind::FormField,
            operation: Operation::Delete,
        })
    );

    let publish = store.publish::<FormSchemaField>(|_| true);
    assert_eq!(
        publish,
        Err(StoreError::Unsupported {
            table: TableKind::FormSchemaField,
            operation: Operation::Publish,
        })
    );

    // Nothing was removed by the rejected delete
    assert_eq!(store.read::<FormField>(|_| true).unwrap().len(), 1);
}
