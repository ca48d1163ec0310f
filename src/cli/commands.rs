//! CLI command implementations
//!
//! Commands stay thin: they read the config file, then delegate to
//! the snapshot, store, and http_server subsystems.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::Logger;
use crate::snapshot::{self, SnapshotError};
use crate::store::{FormSchema, FormSchemaPatch, TableStore, Tables};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Snapshot file path (default "./data/formdb.json")
    #[serde(default = "default_data_path")]
    pub data_path: PathBuf,

    /// HTTP server settings
    #[serde(default)]
    pub http: HttpServerConfig,
}

fn default_data_path() -> PathBuf {
    PathBuf::from("./data/formdb.json")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
            http: HttpServerConfig::default(),
        }
    }
}

/// Parse arguments and dispatch to the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Command::Init { config } => init(&config),
        Command::Serve { config } => serve(&config),
        Command::Seed { config } => seed(&config),
    }
}

/// Directory the snapshot lives in, when the path names one.
fn data_dir(data_path: &Path) -> Option<&Path> {
    data_path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
}

/// Loads the config file, falling back to defaults when it is absent.
fn load_config(path: &Path) -> CliResult<Config> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Logger::warn(
                "CONFIG_DEFAULTED",
                &[("path", &path.display().to_string())],
            );
            return Ok(Config::default());
        }
        Err(e) => {
            return Err(CliError::config_error(format!(
                "failed to read {}: {}",
                path.display(),
                e
            )))
        }
    };

    serde_json::from_str(&raw).map_err(|e| {
        CliError::config_error(format!("failed to parse {}: {}", path.display(), e))
    })
}

/// formdb init - create the data directory and an empty snapshot.
///
/// Refuses to clobber an existing snapshot.
pub fn init(config_path: &Path) -> CliResult<()> {
    let config = load_config(config_path)?;

    if config.data_path.exists() {
        return Err(CliError::already_initialized(
            config.data_path.display().to_string(),
        ));
    }

    if let Some(parent) = data_dir(&config.data_path) {
        fs::create_dir_all(parent).map_err(|e| {
            CliError::config_error(format!(
                "failed to create {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    snapshot::save(&config.data_path, &Tables::default())
        .map_err(|e| CliError::config_error(e.to_string()))?;

    Logger::info(
        "INIT_COMPLETE",
        &[("data_path", &config.data_path.display().to_string())],
    );
    Ok(())
}

/// formdb serve - start the HTTP load/save server.
pub fn serve(config_path: &Path) -> CliResult<()> {
    let config = load_config(config_path)?;

    let server = HttpServer::new(config.http, config.data_path);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("failed to build runtime: {}", e)))?;

    rt.block_on(server.start())
        .map_err(|e| CliError::serve_failed(e.to_string()))
}

/// formdb seed - exercise the store end to end.
///
/// Loads the snapshot (empty store when the file is missing), creates
/// a fresh draft schema series, revises its description, and saves.
pub fn seed(config_path: &Path) -> CliResult<()> {
    let config = load_config(config_path)?;

    let tables = match snapshot::load(&config.data_path) {
        Ok(tables) => tables,
        Err(SnapshotError::NotFound { .. }) => {
            Logger::warn(
                "SNAPSHOT_MISSING",
                &[("data_path", &config.data_path.display().to_string())],
            );
            Tables::default()
        }
        Err(e) => return Err(CliError::seed_failed(e.to_string())),
    };

    let mut store = TableStore::from_tables(tables);
    let series_id = Uuid::new_v4().to_string();

    store
        .create(FormSchema::new_series(
            series_id.clone(),
            "Application Security Form",
            "Form to collect security information for new applications..",
        ))
        .map_err(|e| CliError::seed_failed(e.to_string()))?;

    store
        .revise::<FormSchema>(
            FormSchemaPatch::new(series_id.clone())
                .description("Form to collect security information for new applications."),
        )
        .map_err(|e| CliError::seed_failed(e.to_string()))?;

    if let Some(parent) = data_dir(&config.data_path) {
        fs::create_dir_all(parent).map_err(|e| {
            CliError::seed_failed(format!("failed to create {}: {}", parent.display(), e))
        })?;
    }

    snapshot::save(&config.data_path, store.tables())
        .map_err(|e| CliError::seed_failed(e.to_string()))?;

    Logger::info(
        "SEED_COMPLETE",
        &[
            ("data_path", &config.data_path.display().to_string()),
            ("series_id", &series_id),
        ],
    );
    Ok(())
}
