//! CLI-specific error types
//!
//! CLI errors terminate the process at the outermost shell; every
//! layer below reports through typed `Result`s.

use std::fmt;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file error
    ConfigError,
    /// Data directory already initialized
    AlreadyInitialized,
    /// Server failed to start or crashed
    ServeFailed,
    /// Seed flow failed
    SeedFailed,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "FORMDB_CLI_CONFIG_ERROR",
            Self::AlreadyInitialized => "FORMDB_CLI_ALREADY_INITIALIZED",
            Self::ServeFailed => "FORMDB_CLI_SERVE_FAILED",
            Self::SeedFailed => "FORMDB_CLI_SEED_FAILED",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    /// Already initialized
    pub fn already_initialized(path: impl Into<String>) -> Self {
        Self::new(
            CliErrorCode::AlreadyInitialized,
            format!("snapshot already exists at {}", path.into()),
        )
    }

    /// Serve failed
    pub fn serve_failed(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ServeFailed, msg)
    }

    /// Seed failed
    pub fn seed_failed(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::SeedFailed, msg)
    }

    /// Returns the error code
    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            CliErrorCode::ConfigError.code(),
            "FORMDB_CLI_CONFIG_ERROR"
        );
        assert_eq!(
            CliErrorCode::AlreadyInitialized.code(),
            "FORMDB_CLI_ALREADY_INITIALIZED"
        );
    }

    #[test]
    fn test_display_includes_code_and_message() {
        let err = CliError::config_error("bad json");
        let display = format!("{}", err);
        assert!(display.contains("FORMDB_CLI_CONFIG_ERROR"));
        assert!(display.contains("bad json"));
    }
}
