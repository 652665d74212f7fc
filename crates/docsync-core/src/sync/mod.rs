//! SyncEngine for moving collections between disk and the document store
//!
//! - **export**: local files become documents (create or update)
//! - **import**: documents become local files (skip, write or overwrite)
//! - **report**: per-item outcomes of either direction

mod engine;
mod export;
mod import;
mod report;

pub use engine::{DEFAULT_CONCURRENCY, SyncEngine, SyncOptions};
pub use report::{ItemOutcome, ItemStatus, SyncReport};
