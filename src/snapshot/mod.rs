//! Snapshot persistence subsystem.
//!
//! Moves the full table state to and from a single JSON file.
//!
//! # Design Principles
//!
//! - One encoding at the file and wire boundaries: the snapshot
//!   document itself
//! - Staged loading with a typed error per stage (read, parse,
//!   validate); no partially constructed state on failure
//! - Validation checks every table independently and reports all
//!   failures at once
//! - Saves replace the file atomically via temp-then-rename
//! - No automatic or background flush; callers save explicitly

mod errors;
mod reader;
mod writer;

pub use errors::{SnapshotError, SnapshotResult};
pub use reader::{from_document, load};
pub use writer::save;
