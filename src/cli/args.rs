//! CLI argument definitions using clap
//!
//! Commands:
//! - formdb init --config <path>
//! - formdb serve --config <path>
//! - formdb seed --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// formdb - a file-backed, append-only form schema database
#[derive(Parser, Debug)]
#[command(name = "formdb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize the data directory and write an empty snapshot
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./formdb.json")]
        config: PathBuf,
    },

    /// Start the HTTP load/save server
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./formdb.json")]
        config: PathBuf,
    },

    /// Create and revise a sample schema series, then save
    Seed {
        /// Path to configuration file
        #[arg(long, default_value = "./formdb.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
