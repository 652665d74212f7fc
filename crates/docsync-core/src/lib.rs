//! Sync orchestration for docsync
//!
//! Sits between the configuration and the document store:
//!
//! ```text
//!                  docsync-cli
//!                       |
//!                  docsync-core
//!                       |
//!     +-----------+-----+------+-------------+
//!     |           |            |             |
//! docsync-fs docsync-content docsync-meta docsync-store
//! ```
//!
//! - [`walker`]: enumerate the relative paths of a collection
//! - [`SyncEngine`]: export local files as documents and import documents
//!   back into files, one [`ItemOutcome`] per item

pub mod error;
pub mod sync;
pub mod walker;

pub use error::{Error, Result};
pub use sync::{
    DEFAULT_CONCURRENCY, ItemOutcome, ItemStatus, SyncEngine, SyncOptions, SyncReport,
};
