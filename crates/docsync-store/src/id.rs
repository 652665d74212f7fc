//! Path/ID mapping between collection files and stored documents
//!
//! A document id is the collection name, a `/`, then the file's relative
//! path with every separator replaced by [`ID_DELIMITER`]. Paths that already
//! contain the delimiter, or that put an underscore next to a separator, are
//! refused: either would merge with the delimiter and collide with another
//! path.

use std::fmt;

use docsync_fs::NormalizedPath;

/// Replaces `/` in relative paths when building a document key.
pub const ID_DELIMITER: &str = "___";

/// Errors raised while mapping paths to document ids
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    #[error("Collection name is empty")]
    EmptyCollection,

    #[error("Collection name '{name}' must not contain '/'")]
    InvalidCollection { name: String },

    #[error("Relative path is empty in collection '{collection}'")]
    EmptyPath { collection: String },

    #[error("Path '{path}' contains the reserved id delimiter '___'")]
    ReservedDelimiter { path: String },

    #[error("Path '{path}' has a segment starting or ending with '_'")]
    UnderscoreAtSeparator { path: String },
}

/// Identifier of a document inside a collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId {
    collection: String,
    key: String,
}

impl DocumentId {
    /// Build the id for a collection-scoped relative path.
    ///
    /// Pure: the same collection and path always give the same id, which is
    /// what makes export an idempotent create-or-update.
    pub fn new(collection: &str, relative_path: &str) -> Result<Self, IdError> {
        check_collection(collection)?;
        let normalized = NormalizedPath::new(relative_path);
        let path = normalized.as_str();
        if path.is_empty() {
            return Err(IdError::EmptyPath {
                collection: collection.to_string(),
            });
        }
        check_path(path)?;

        Ok(Self {
            collection: collection.to_string(),
            key: path.replace('/', ID_DELIMITER),
        })
    }

    /// Wrap a key as found in the store, without re-deriving it.
    pub fn from_key(collection: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            key: key.into(),
        }
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// The document key inside its collection.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Recover the relative path this id was built from.
    pub fn relative_path(&self) -> String {
        self.key.replace(ID_DELIMITER, "/")
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.collection, self.key)
    }
}

/// Build the full `collection/key` id string for a relative path.
pub fn to_id(collection: &str, relative_path: &str) -> Result<String, IdError> {
    DocumentId::new(collection, relative_path).map(|id| id.to_string())
}

/// Reject paths that cannot be mapped to an unambiguous id.
///
/// With no `___` in the path and no `_` touching a `/`, every run of
/// underscores in a key is either a whole number of delimiters or shorter
/// than one, so the key decodes back to exactly one path.
pub fn check_path(relative_path: &str) -> Result<(), IdError> {
    let path = relative_path.replace('\\', "/");
    if path.contains(ID_DELIMITER) {
        return Err(IdError::ReservedDelimiter {
            path: relative_path.to_string(),
        });
    }
    if path.contains("_/") || path.contains("/_") {
        return Err(IdError::UnderscoreAtSeparator {
            path: relative_path.to_string(),
        });
    }
    Ok(())
}

/// Reject collection names that would not form a single id segment.
pub fn check_collection(collection: &str) -> Result<(), IdError> {
    if collection.trim().is_empty() {
        return Err(IdError::EmptyCollection);
    }
    if collection.contains('/') {
        return Err(IdError::InvalidCollection {
            name: collection.to_string(),
        });
    }
    Ok(())
}
