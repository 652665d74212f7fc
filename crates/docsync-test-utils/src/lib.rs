//! Shared test utilities for the docsync workspace.
//!
//! Dev-dependency only, never published.
//!
//! - [`tree`]: [`ContentTree`] builder for a temporary content directory
//!   with a sync configuration and credentials

pub mod tree;

pub use tree::ContentTree;

/// Front-matter sample used across scenario tests.
pub const HELLO_POST: &str = "---\ntitle: \"Hi\"\n---\nBody text";
