//! Store error types.
//!
//! Every expected failure is a typed, recoverable value returned
//! through the `Result` channel. Nothing here aborts the caller's
//! control flow; operations without defined behavior for a kind
//! report [`StoreError::Unsupported`] instead of panicking.

use thiserror::Error;

use super::tables::{Operation, TableKind};

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Constraint and lookup failures reported by the table store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A create would duplicate an existing natural key.
    #[error("primary key violation on {table}: {key}")]
    PrimaryKey { table: TableKind, key: String },

    /// A referenced parent row does not exist.
    ///
    /// No kind currently enforces its foreign keys; the variant keeps
    /// the taxonomy complete so enforcement can be added per kind
    /// without changing the contract.
    #[error("foreign key violation: {0}")]
    ForeignKey(String),

    /// revise/delete/publish matched no rows.
    #[error("{0}")]
    NotFound(String),

    /// The operation has no defined behavior for the table kind.
    #[error("{operation} is not supported for {table}")]
    Unsupported {
        table: TableKind,
        operation: Operation,
    },
}

impl StoreError {
    /// Primary key violation on `table` for the rendered `key`.
    pub fn primary_key(table: TableKind, key: impl Into<String>) -> Self {
        StoreError::PrimaryKey {
            table,
            key: key.into(),
        }
    }

    /// Series lookup miss during revise.
    pub fn series_not_found(table: TableKind, series_id: &str) -> Self {
        StoreError::NotFound(format!("{} series '{}' not found", table, series_id))
    }

    /// Empty matched set during delete/publish.
    pub fn no_rows_matched(table: TableKind) -> Self {
        StoreError::NotFound(format!("no {} rows matched", table))
    }

    /// Operation undefined for the kind.
    pub fn unsupported(table: TableKind, operation: Operation) -> Self {
        StoreError::Unsupported { table, operation }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_key_display_names_table_and_key() {
        let err = StoreError::primary_key(TableKind::FormSchema, "abc/0");
        assert_eq!(
            err.to_string(),
            "primary key violation on formSchema: abc/0"
        );
    }

    #[test]
    fn test_not_found_display_names_series() {
        let err = StoreError::series_not_found(TableKind::FormSchema, "abc");
        assert_eq!(err.to_string(), "formSchema series 'abc' not found");
    }

    #[test]
    fn test_unsupported_display_names_operation_and_table() {
        let err = StoreError::unsupported(TableKind::FormField, Operation::Publish);
        assert_eq!(err.to_string(), "publish is not supported for formField");
    }
}
