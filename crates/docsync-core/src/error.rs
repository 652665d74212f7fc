//! Error types for docsync-core

use std::path::PathBuf;

/// Result type for docsync-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while syncing
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required directory is absent and `force` was not given
    #[error("Directory {path} does not exist (use --Force to create it)")]
    MissingDirectory { path: PathBuf },

    /// No document stored under the computed id
    #[error("No document found for {id}")]
    MissingDocument { id: String },

    /// A stored document carries no relative path
    #[error("Document {id} has no path")]
    MissingPath { id: String },

    /// The stored path differs from the configured one
    #[error("Document {id} has path '{found}', expected '{expected}'")]
    PathMismatch {
        id: String,
        expected: String,
        found: String,
    },

    // Transparent wrappers for underlying crate errors
    /// Filesystem error from docsync-fs
    #[error(transparent)]
    Fs(#[from] docsync_fs::Error),

    /// Codec error from docsync-content
    #[error(transparent)]
    Content(#[from] docsync_content::Error),

    /// Store error from docsync-store
    #[error(transparent)]
    Store(#[from] docsync_store::Error),

    /// Path could not be mapped to a document id
    #[error(transparent)]
    Id(#[from] docsync_store::IdError),

    /// A blocking write task panicked or was cancelled
    #[error(transparent)]
    Join(#[from] tokio::task::JoinError),
}
