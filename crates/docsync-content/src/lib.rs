//! Content codec for docsync
//!
//! Converts between on-disk content files and the record shape stored in the
//! document database:
//!
//! - [`front_matter`] splits a markdown/MDX source into YAML metadata and body
//! - [`FileRecord::encode`] builds the outgoing record, optionally indexing data
//! - [`decode`] turns stored content back into file bytes, optionally
//!   rewriting front-matter as an `export const meta` declaration

pub mod error;
pub mod format;
pub mod front_matter;
pub mod meta;
pub mod record;

pub use error::{Error, Result};
pub use format::{Format, IndexFormat, SYNC_EXTENSIONS, is_sync_extension};
pub use front_matter::{FrontMatter, ParsedMatter};
pub use meta::{decode, meta_export};
pub use record::{FileRecord, extract_data};
