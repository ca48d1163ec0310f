//! Snapshot Load/Save Routes
//!
//! The two data-plane endpoints. The wire format is the snapshot
//! document itself; the file holds the same JSON, so the boundary has
//! a single encoding.
//!
//! Saves replace the persisted state wholesale: last writer wins, no
//! merge, no concurrency token.

use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use tokio::sync::Mutex;

use crate::observability::Logger;
use crate::snapshot::{self, SnapshotError};
use crate::store::Tables;

use super::errors::ApiResult;

/// Snapshot state shared across handlers.
///
/// `io_lock` serializes access to the snapshot file: at most one save
/// in flight per location, and loads never interleave with a save.
pub struct SnapshotState {
    data_path: PathBuf,
    io_lock: Mutex<()>,
}

impl SnapshotState {
    pub fn new(data_path: PathBuf) -> Self {
        Self {
            data_path,
            io_lock: Mutex::new(()),
        }
    }

    /// Path of the snapshot file this server persists to.
    pub fn data_path(&self) -> &PathBuf {
        &self.data_path
    }
}

/// Build snapshot routes
pub fn snapshot_routes(state: Arc<SnapshotState>) -> Router {
    Router::new()
        .route("/load", get(load_snapshot))
        .route("/save", post(save_snapshot))
        .with_state(state)
}

/// GET /load - return the current snapshot document.
///
/// A missing file is not an error here: the caller gets the empty
/// document, mirroring the fall-back-to-empty startup policy.
async fn load_snapshot(State(state): State<Arc<SnapshotState>>) -> ApiResult<Json<Tables>> {
    let _guard = state.io_lock.lock().await;

    match snapshot::load(&state.data_path) {
        Ok(tables) => Ok(Json(tables)),
        Err(SnapshotError::NotFound { .. }) => Ok(Json(Tables::default())),
        Err(err) => {
            Logger::error("SNAPSHOT_LOAD_FAILED", &[("error", &err.to_string())]);
            Err(err.into())
        }
    }
}

/// POST /save - replace the persisted snapshot wholesale.
///
/// Malformed bodies are rejected by typed deserialization before this
/// handler runs.
async fn save_snapshot(
    State(state): State<Arc<SnapshotState>>,
    Json(tables): Json<Tables>,
) -> ApiResult<StatusCode> {
    let _guard = state.io_lock.lock().await;

    if let Err(err) = snapshot::save(&state.data_path, &tables) {
        Logger::error("SNAPSHOT_SAVE_FAILED", &[("error", &err.to_string())]);
        return Err(err.into());
    }

    Logger::info(
        "SNAPSHOT_SAVED",
        &[("rows", &tables.row_count().to_string())],
    );
    Ok(StatusCode::OK)
}
