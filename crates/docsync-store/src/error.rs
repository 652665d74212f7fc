//! Error types for docsync-store

use std::path::PathBuf;

use crate::id::IdError;

/// Result type for docsync-store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur talking to a document store
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Document already exists: {id}")]
    AlreadyExists { id: String },

    #[error("Document not found: {id}")]
    NotFound { id: String },

    #[error("Store rejected write to {id}: {message}")]
    WriteRejected { id: String, message: String },

    #[error("Corrupt document {id}: {message}")]
    Corrupt { id: String, message: String },

    #[error("Invalid project name '{name}'")]
    InvalidProject { name: String },

    #[error(
        "Missing credentials: pass a key file (--authkey, -k) or set {}",
        crate::auth::CREDENTIALS_ENV
    )]
    MissingCredentials,

    #[error("Invalid credentials file {path}: {message}")]
    InvalidCredentials { path: PathBuf, message: String },

    #[error(transparent)]
    Id(#[from] IdError),

    #[error(transparent)]
    Fs(#[from] docsync_fs::Error),

    #[error("Store task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl Error {
    pub(crate) fn corrupt(id: impl ToString, message: impl Into<String>) -> Self {
        Self::Corrupt {
            id: id.to_string(),
            message: message.into(),
        }
    }
}
