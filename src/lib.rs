//! formdb - a file-backed, append-only form schema database
//!
//! A single-operator store for versioned form schema records and their
//! dependent field, form, and value records. State lives in memory as
//! four typed tables, persists as a flat JSON snapshot, and is exposed
//! over a minimal HTTP load/save boundary.

pub mod cli;
pub mod combine;
pub mod http_server;
pub mod observability;
pub mod snapshot;
pub mod store;
