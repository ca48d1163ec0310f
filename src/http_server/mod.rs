//! # HTTP Server Module
//!
//! Minimal load/save boundary for the form schema UI.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/load` - Fetch the current snapshot document
//! - `/save` - Replace the persisted snapshot wholesale

pub mod config;
pub mod errors;
pub mod server;
pub mod snapshot_routes;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use server::HttpServer;
pub use snapshot_routes::SnapshotState;
