//! Configuration types for docsync
//!
//! The shape follows a CMS `config.yml`: a `collections` list where each
//! collection is either a `folder` of files or an explicit `files` list, and
//! a `backend` section. Keys docsync does not use are ignored, so an
//! existing CMS config can be pointed at directly.

use std::collections::BTreeMap;
use std::path::PathBuf;

use docsync_content::IndexFormat;
use docsync_fs::NormalizedPath;
use serde::{Deserialize, Serialize};

/// Root sync configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SyncConfig {
    #[serde(default)]
    pub collections: Vec<Collection>,
    #[serde(default)]
    pub backend: BackendConfig,
}

impl SyncConfig {
    /// Look up a collection by name.
    pub fn collection(&self, name: &str) -> Option<&Collection> {
        self.collections.iter().find(|c| c.name == name)
    }

    /// Data indexing mode configured for a collection, if any.
    pub fn index_format(&self, collection: &str) -> Option<IndexFormat> {
        self.backend
            .firebase
            .as_ref()
            .and_then(|fb| fb.index_data.get(collection))
            .copied()
    }
}

/// A named group of content files
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Collection {
    /// Unique collection name, also the remote collection
    pub name: String,
    /// Folder whose top-level content files form the collection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
    /// Explicit list of files forming the collection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<FileEntry>>,
    /// Declared content flavour, e.g. `mdx`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
}

/// One entry of an explicit-files collection
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FileEntry {
    /// Relative path of the file
    pub file: String,
    /// Declared content flavour, e.g. `mdx`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
}

impl FileEntry {
    pub fn new(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            extension: None,
        }
    }
}

/// Where a collection's items come from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionSource<'a> {
    Folder(&'a str),
    Files(&'a [FileEntry]),
}

impl Collection {
    pub fn folder(name: impl Into<String>, folder: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            folder: Some(folder.into()),
            ..Self::default()
        }
    }

    pub fn files(name: impl Into<String>, files: Vec<FileEntry>) -> Self {
        Self {
            name: name.into(),
            files: Some(files),
            ..Self::default()
        }
    }

    /// The collection's item source.
    ///
    /// Validation guarantees exactly one of `folder`/`files`; `folder` wins
    /// if both are somehow set.
    pub fn source(&self) -> CollectionSource<'_> {
        match (&self.folder, &self.files) {
            (Some(folder), _) => CollectionSource::Folder(folder),
            (None, Some(files)) => CollectionSource::Files(files),
            (None, None) => CollectionSource::Files(&[]),
        }
    }

    /// Whether a destination file should get meta export.
    ///
    /// The entry's declared extension wins, then the collection's; with
    /// nothing declared the destination's own extension decides.
    pub fn is_mdx_like(&self, entry: Option<&FileEntry>, destination: &NormalizedPath) -> bool {
        let declared = entry
            .and_then(|e| e.extension.as_deref())
            .or(self.extension.as_deref());
        match declared {
            Some(ext) => ext == "mdx",
            None => destination.extension() == Some("mdx"),
        }
    }
}

/// Backend options
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BackendConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firebase: Option<FirebaseBackend>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local: Option<LocalBackend>,
}

/// Document database options
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FirebaseBackend {
    /// Per-collection data indexing on export
    #[serde(default)]
    pub index_data: BTreeMap<String, IndexFormat>,
}

/// Directory-backed store options
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LocalBackend {
    /// Root directory holding one subdirectory per project
    #[serde(default)]
    pub root: Option<PathBuf>,
}
