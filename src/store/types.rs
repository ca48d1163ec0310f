//! Record type definitions for the four tables.
//!
//! Field names serialize camelCase to match the snapshot document.

use serde::{Deserialize, Serialize};

/// Field content type for a schema field.
///
/// `static-*` variants render fixed content; the rest collect input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldType {
    StaticTitle,
    StaticParagraph,
    StaticUrl,
    StaticImage,
    Text,
    Paragraph,
    Number,
    Date,
    Email,
    Url,
    Checkbox,
    Radio,
    Multi,
}

impl FieldType {
    /// Returns the serialized name, for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::StaticTitle => "static-title",
            FieldType::StaticParagraph => "static-paragraph",
            FieldType::StaticUrl => "static-url",
            FieldType::StaticImage => "static-image",
            FieldType::Text => "text",
            FieldType::Paragraph => "paragraph",
            FieldType::Number => "number",
            FieldType::Date => "date",
            FieldType::Email => "email",
            FieldType::Url => "url",
            FieldType::Checkbox => "checkbox",
            FieldType::Radio => "radio",
            FieldType::Multi => "multi",
        }
    }
}

/// One revision of a form schema series.
///
/// `(series_id, revision)` is the primary key. Rows are append-only:
/// a revision is never edited in place once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSchema {
    /// Series identifier shared by every revision of one schema
    pub series_id: String,
    /// Revision number, strictly increasing within a series
    pub revision: u64,
    /// Schema name
    pub name: String,
    /// Schema description
    pub description: String,
    /// Draft flag; cleared by publish, never set back
    pub is_draft: bool,
}

impl FormSchema {
    /// First revision of a new series: revision 0, created as a draft.
    pub fn new_series(
        series_id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            series_id: series_id.into(),
            revision: 0,
            name: name.into(),
            description: description.into(),
            is_draft: true,
        }
    }
}

/// Partial update applied on top of a series' latest revision.
///
/// `None` fields carry forward from the previous revision. There is no
/// revision field here: the store assigns revisions, callers never do.
#[derive(Debug, Clone)]
pub struct FormSchemaPatch {
    /// Series to revise
    pub series_id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_draft: Option<bool>,
}

impl FormSchemaPatch {
    /// Patch that carries everything forward unchanged.
    pub fn new(series_id: impl Into<String>) -> Self {
        Self {
            series_id: series_id.into(),
            name: None,
            description: None,
            is_draft: None,
        }
    }

    /// Override the schema name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Override the schema description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Override the draft flag.
    pub fn is_draft(mut self, is_draft: bool) -> Self {
        self.is_draft = Some(is_draft);
        self
    }
}

/// A field definition belonging to one schema revision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSchemaField {
    /// Owning schema series
    pub schema_series_id: String,
    /// Owning schema revision
    pub schema_revision: u64,
    /// Field identifier, unique within the schema revision
    pub id: String,
    /// Page the field appears on
    pub page: u32,
    /// Ordering weight within the page
    pub weight: u32,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub required: bool,
}

/// One revision of a form filled against a schema revision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Form {
    /// Schema series this form was filled against
    pub schema_series_id: String,
    /// Schema revision this form was filled against
    pub schema_revision: u64,
    /// Series identifier shared by every revision of one form
    pub series_id: String,
    /// Revision number within the form series
    pub revision: u64,
    pub name: String,
    pub description: String,
}

/// A value captured for one schema field on one form revision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormField {
    /// Owning form series
    pub form_series_id: String,
    /// Owning form revision
    pub form_revision: u64,
    /// Schema field this value answers
    pub field_schema_id: String,
    /// Captured value
    pub value: String,
}
