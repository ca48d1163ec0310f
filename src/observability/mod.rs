//! Observability subsystem.
//!
//! Structured JSON logging for the CLI and HTTP boundaries. The store
//! and snapshot core stay silent and report through their `Result`
//! channels.
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. No side effects on execution
//! 3. No async or background threads
//! 4. Deterministic output

mod logger;

pub use logger::{Logger, Severity};
