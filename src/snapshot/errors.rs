//! Snapshot error types.

use thiserror::Error;

/// Result type for snapshot operations
pub type SnapshotResult<T> = Result<T, SnapshotError>;

/// Failures crossing the snapshot file boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    /// The snapshot file could not be opened or read.
    #[error("snapshot not found: {path}")]
    NotFound { path: String },

    /// The snapshot bytes are not well-formed JSON.
    #[error("snapshot parse failed: {message}")]
    Parse { message: String },

    /// The parsed document does not match the four-table shape.
    #[error("snapshot validation failed: {message}")]
    Validation { message: String },

    /// Serializing or writing the snapshot failed.
    #[error("snapshot save failed: {message}")]
    Save { message: String },
}

impl SnapshotError {
    /// Unreadable snapshot at `path`.
    pub fn not_found(path: impl Into<String>) -> Self {
        SnapshotError::NotFound { path: path.into() }
    }

    /// Malformed snapshot bytes.
    pub fn parse(message: impl Into<String>) -> Self {
        SnapshotError::Parse {
            message: message.into(),
        }
    }

    /// Structurally invalid snapshot document.
    pub fn validation(message: impl Into<String>) -> Self {
        SnapshotError::Validation {
            message: message.into(),
        }
    }

    /// Failed write.
    pub fn save(message: impl Into<String>) -> Self {
        SnapshotError::Save {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_context() {
        assert_eq!(
            SnapshotError::not_found("./data/formdb.json").to_string(),
            "snapshot not found: ./data/formdb.json"
        );
        assert_eq!(
            SnapshotError::validation("missing table 'form'").to_string(),
            "snapshot validation failed: missing table 'form'"
        );
    }
}
