//! Snapshot saving.
//!
//! Serializes the full table state as human-readable JSON. The write
//! goes to a sibling temp file first and is renamed into place, so an
//! interrupted save never leaves a truncated snapshot behind.

use std::fs;
use std::path::Path;

use crate::store::Tables;

use super::errors::{SnapshotError, SnapshotResult};

/// Serializes `tables` to `path`, replacing prior contents.
///
/// Any serialization or I/O failure is reported as
/// [`SnapshotError::Save`]; the previous snapshot, if any, is left
/// intact in that case.
pub fn save(path: &Path, tables: &Tables) -> SnapshotResult<()> {
    let body = serde_json::to_string_pretty(tables)
        .map_err(|e| SnapshotError::save(e.to_string()))?;

    let tmp_path = temp_path(path);
    fs::write(&tmp_path, body).map_err(|e| {
        SnapshotError::save(format!("write {}: {}", tmp_path.display(), e))
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        SnapshotError::save(format!("rename into {}: {}", path.display(), e))
    })?;

    Ok(())
}

fn temp_path(path: &Path) -> std::path::PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "snapshot".into());
    name.push(".tmp");
    path.with_file_name(name)
}
