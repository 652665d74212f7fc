//! Document store boundary for docsync
//!
//! - [`id`]: the path/id mapper, `posts` + `content/posts/a.md` becomes
//!   `posts/content___posts___a.md`
//! - [`Document`]: the stored record shape
//! - [`DocumentStore`]: async get/list/create/update, implemented by
//!   [`MemoryStore`] and the directory-backed [`LocalStore`]
//! - [`auth`]: credential resolution from a key file or the environment

pub mod auth;
pub mod document;
pub mod error;
pub mod id;
pub mod local;
pub mod memory;
pub mod store;

pub use auth::{CREDENTIALS_ENV, CredentialSource, Credentials, connect};
pub use document::Document;
pub use error::{Error, Result};
pub use id::{DocumentId, ID_DELIMITER, IdError, to_id};
pub use local::LocalStore;
pub use memory::{MemoryStore, StoreStats};
pub use store::DocumentStore;
