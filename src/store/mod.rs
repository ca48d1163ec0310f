//! Record store subsystem.
//!
//! Four typed tables held in memory behind a single owner, with
//! kind-dispatched create/read/revise/delete/publish operations.
//!
//! # Design Principles
//!
//! - Natural-key uniqueness enforced at create
//! - Append-only revision history; revise never edits in place
//! - Draft-to-published is a one-way flag flip
//! - Typed errors for every expected failure, including operations a
//!   kind does not support
//! - Single-writer: no interior locking, callers serialize access

mod errors;
mod table_store;
mod tables;
mod types;

pub use errors::{StoreError, StoreResult};
pub use table_store::TableStore;
pub use tables::{Operation, SeriesRow, TableKind, TableRow, Tables};
pub use types::{FieldType, Form, FormField, FormSchema, FormSchemaField, FormSchemaPatch};
