//! Table collection, kind dispatch, and per-kind row capabilities.
//!
//! The original design dispatched on a table identifier per call. Here
//! the kind is an enumerated value ([`TableKind`]) with an explicit
//! operation dispatch table, and each row type declares its table,
//! natural key, and lifecycle capabilities through [`TableRow`].

use std::fmt;

use serde::{Deserialize, Serialize};

use super::types::{Form, FormField, FormSchema, FormSchemaField, FormSchemaPatch};

/// The four record tables, serde-shaped as the snapshot document.
///
/// Row order is insertion order and is preserved across snapshot
/// round-trips.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tables {
    #[serde(rename = "formSchema")]
    pub form_schema: Vec<FormSchema>,
    #[serde(rename = "formSchemaField")]
    pub form_schema_field: Vec<FormSchemaField>,
    pub form: Vec<Form>,
    #[serde(rename = "formField")]
    pub form_field: Vec<FormField>,
}

impl Tables {
    /// Total row count across all four tables.
    pub fn row_count(&self) -> usize {
        self.form_schema.len()
            + self.form_schema_field.len()
            + self.form.len()
            + self.form_field.len()
    }
}

/// Enumerated discriminator selecting which table an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    FormSchema,
    FormSchemaField,
    Form,
    FormField,
}

impl TableKind {
    /// Every kind, in snapshot document order.
    pub const ALL: [TableKind; 4] = [
        TableKind::FormSchema,
        TableKind::FormSchemaField,
        TableKind::Form,
        TableKind::FormField,
    ];

    /// Snapshot document key for this table.
    pub fn key(&self) -> &'static str {
        match self {
            TableKind::FormSchema => "formSchema",
            TableKind::FormSchemaField => "formSchemaField",
            TableKind::Form => "form",
            TableKind::FormField => "formField",
        }
    }

    /// Operation dispatch table.
    ///
    /// Create and read are defined for every kind. Revise, delete, and
    /// publish are defined only for the schema table; the dependent
    /// kinds report unsupported instead of failing fatally.
    pub fn supports(&self, operation: Operation) -> bool {
        match operation {
            Operation::Create | Operation::Read => true,
            Operation::Revise | Operation::Delete | Operation::Publish => {
                matches!(self, TableKind::FormSchema)
            }
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Store operations, named for unsupported-operation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Read,
    Revise,
    Delete,
    Publish,
}

impl Operation {
    /// Returns the operation name.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Create => "create",
            Operation::Read => "read",
            Operation::Revise => "revise",
            Operation::Delete => "delete",
            Operation::Publish => "publish",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A record type stored in one of the four tables.
///
/// Implementations declare which table they live in, how their natural
/// key is derived, and whether they carry a draft lifecycle. The store
/// never hands out references into the live tables; reads clone.
pub trait TableRow: Clone {
    /// The table this record belongs to.
    const KIND: TableKind;

    /// Borrows this record's table.
    fn table(tables: &Tables) -> &Vec<Self>;

    /// Mutably borrows this record's table.
    fn table_mut(tables: &mut Tables) -> &mut Vec<Self>;

    /// Natural key rendered for error messages.
    fn primary_key(&self) -> String;

    /// Whether two rows collide on the natural key.
    fn same_key(&self, other: &Self) -> bool;

    /// Whether this row is still a draft. `None` for kinds without a
    /// draft lifecycle.
    fn is_draft(&self) -> Option<bool> {
        None
    }

    /// Clears the draft flag. No-op for kinds without a draft
    /// lifecycle; such kinds are rejected before this is reached.
    fn clear_draft(&mut self) {}
}

/// Rows that form revision series and support `revise`.
///
/// Only the schema table implements this today. Forms are versioned in
/// shape, but their revise semantics were never defined, so they stay
/// off this trait rather than guessing a merge.
pub trait SeriesRow: TableRow {
    /// Partial update applied on top of the latest revision.
    type Patch;

    /// Series this row belongs to.
    fn series_id(&self) -> &str;

    /// Revision of this row within its series.
    fn revision(&self) -> u64;

    /// Series targeted by a patch.
    fn patch_series_id(patch: &Self::Patch) -> &str;

    /// Builds the next revision: every field from `base`, overridden
    /// by the fields present in `patch`, at the store-assigned
    /// `revision`.
    fn merge(base: Self, patch: Self::Patch, revision: u64) -> Self;
}

impl TableRow for FormSchema {
    const KIND: TableKind = TableKind::FormSchema;

    fn table(tables: &Tables) -> &Vec<Self> {
        &tables.form_schema
    }

    fn table_mut(tables: &mut Tables) -> &mut Vec<Self> {
        &mut tables.form_schema
    }

    fn primary_key(&self) -> String {
        format!("{}/{}", self.series_id, self.revision)
    }

    fn same_key(&self, other: &Self) -> bool {
        self.series_id == other.series_id && self.revision == other.revision
    }

    fn is_draft(&self) -> Option<bool> {
        Some(self.is_draft)
    }

    fn clear_draft(&mut self) {
        self.is_draft = false;
    }
}

impl SeriesRow for FormSchema {
    type Patch = FormSchemaPatch;

    fn series_id(&self) -> &str {
        &self.series_id
    }

    fn revision(&self) -> u64 {
        self.revision
    }

    fn patch_series_id(patch: &Self::Patch) -> &str {
        &patch.series_id
    }

    fn merge(base: Self, patch: Self::Patch, revision: u64) -> Self {
        Self {
            series_id: base.series_id,
            revision,
            name: patch.name.unwrap_or(base.name),
            description: patch.description.unwrap_or(base.description),
            is_draft: patch.is_draft.unwrap_or(base.is_draft),
        }
    }
}

impl TableRow for FormSchemaField {
    const KIND: TableKind = TableKind::FormSchemaField;

    fn table(tables: &Tables) -> &Vec<Self> {
        &tables.form_schema_field
    }

    fn table_mut(tables: &mut Tables) -> &mut Vec<Self> {
        &mut tables.form_schema_field
    }

    fn primary_key(&self) -> String {
        format!(
            "{}/{}/{}",
            self.schema_series_id, self.schema_revision, self.id
        )
    }

    fn same_key(&self, other: &Self) -> bool {
        self.schema_series_id == other.schema_series_id
            && self.schema_revision == other.schema_revision
            && self.id == other.id
    }
}

impl TableRow for Form {
    const KIND: TableKind = TableKind::Form;

    fn table(tables: &Tables) -> &Vec<Self> {
        &tables.form
    }

    fn table_mut(tables: &mut Tables) -> &mut Vec<Self> {
        &mut tables.form
    }

    fn primary_key(&self) -> String {
        format!("{}/{}", self.series_id, self.revision)
    }

    fn same_key(&self, other: &Self) -> bool {
        self.series_id == other.series_id && self.revision == other.revision
    }
}

impl TableRow for FormField {
    const KIND: TableKind = TableKind::FormField;

    fn table(tables: &Tables) -> &Vec<Self> {
        &tables.form_field
    }

    fn table_mut(tables: &mut Tables) -> &mut Vec<Self> {
        &mut tables.form_field
    }

    fn primary_key(&self) -> String {
        format!(
            "{}/{}/{}",
            self.form_series_id, self.form_revision, self.field_schema_id
        )
    }

    fn same_key(&self, other: &Self) -> bool {
        self.form_series_id == other.form_series_id
            && self.form_revision == other.form_revision
            && self.field_schema_id == other.field_schema_id
    }
}
