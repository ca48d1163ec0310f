//! # HTTP Server
//!
//! Main HTTP server combining the snapshot routes and the health
//! check behind one router.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::observability::Logger;

use super::config::HttpServerConfig;
use super::snapshot_routes::{snapshot_routes, SnapshotState};

/// HTTP server for the form schema UI
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server persisting to `data_path`
    pub fn new(config: HttpServerConfig, data_path: PathBuf) -> Self {
        let router = Self::build_router(&config, data_path);
        Self { config, router }
    }

    /// Build the combined router
    fn build_router(config: &HttpServerConfig, data_path: PathBuf) -> Router {
        let snapshot_state = Arc::new(SnapshotState::new(data_path));

        let cors = if config.cors_origins.is_empty() {
            // If no origins configured, use permissive for development
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            use tower_http::cors::AllowOrigin;
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .route("/health", get(health))
            .merge(snapshot_routes(snapshot_state))
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

        Logger::info("SERVER_START", &[("addr", &addr.to_string())]);

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

/// GET /health - liveness probe
async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
