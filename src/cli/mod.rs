//! CLI module for formdb
//!
//! Provides command-line interface for:
//! - init: create the data directory and an empty snapshot
//! - serve: start the HTTP load/save server
//! - seed: create and revise a sample schema series, then save

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{init, run, seed, serve, Config};
pub use errors::{CliError, CliErrorCode, CliResult};
