//! Collection configuration for docsync.
//!
//! Loads the static sync configuration (collections plus backend options)
//! from YAML, JSON or TOML and validates it before any transfer runs.

pub mod config;
pub mod error;
pub mod loader;
pub mod validation;

pub use config::{
    BackendConfig, Collection, CollectionSource, FileEntry, FirebaseBackend, LocalBackend,
    SyncConfig,
};
pub use error::{Error, Result};
pub use loader::load_config;
pub use validation::{ValidationReport, validate};
