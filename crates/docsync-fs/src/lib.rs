//! Filesystem abstraction for docsync
//!
//! Provides forward-slash normalized paths, relative path validation,
//! atomic writes and format-agnostic config loading.

pub mod config;
pub mod error;
pub mod io;
pub mod path;

pub use config::ConfigStore;
pub use error::{Error, Result};
pub use path::{NormalizedPath, validate_relative_path};
