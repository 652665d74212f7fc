//! Directory-backed document store
//!
//! Layout mirrors the remote one: `<root>/<collection>/<key>.json`, one JSON
//! file per document with binary content base64-encoded.

use std::io::ErrorKind;

use async_trait::async_trait;
use docsync_fs::{NormalizedPath, io};

use crate::document::Document;
use crate::error::{Error, Result};
use crate::id::DocumentId;
use crate::store::DocumentStore;

const DOCUMENT_EXTENSION: &str = "json";

/// Document store persisted as JSON files under a root directory.
#[derive(Debug, Clone)]
pub struct LocalStore {
    root: NormalizedPath,
}

impl LocalStore {
    /// Open a store rooted at `root`. The directory is created lazily on
    /// first write.
    pub fn open(root: impl Into<NormalizedPath>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &NormalizedPath {
        &self.root
    }

    fn document_path(&self, id: &DocumentId) -> NormalizedPath {
        self.root
            .join(id.collection())
            .join(&format!("{}.{DOCUMENT_EXTENSION}", id.key()))
    }

    async fn read(&self, id: &DocumentId) -> Result<Option<Document>> {
        let path = self.document_path(id);
        let bytes = match tokio::fs::read(path.to_native()).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(docsync_fs::Error::io(path.to_native(), e).into()),
        };
        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|e| Error::corrupt(id, e.to_string()))
    }

    async fn write(&self, id: &DocumentId, document: &Document) -> Result<()> {
        let path = self.document_path(id);
        let bytes = serde_json::to_vec_pretty(document).map_err(|e| Error::WriteRejected {
            id: id.to_string(),
            message: e.to_string(),
        })?;
        tokio::task::spawn_blocking(move || io::write_atomic(&path, &bytes)).await??;
        Ok(())
    }

    async fn exists(&self, id: &DocumentId) -> Result<bool> {
        let path = self.document_path(id);
        tokio::fs::try_exists(path.to_native())
            .await
            .map_err(|e| docsync_fs::Error::io(path.to_native(), e).into())
    }
}

#[async_trait]
impl DocumentStore for LocalStore {
    async fn get(&self, id: &DocumentId) -> Result<Option<Document>> {
        self.read(id).await
    }

    async fn list(&self, collection: &str) -> Result<Vec<(DocumentId, Document)>> {
        let dir = self.root.join(collection);
        let mut entries = match tokio::fs::read_dir(dir.to_native()).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(docsync_fs::Error::io(dir.to_native(), e).into()),
        };

        let mut keys = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| docsync_fs::Error::io(dir.to_native(), e))?
        {
            let name = entry.file_name().to_string_lossy().to_string();
            // In-flight temp files end in `.tmp` and fail the suffix match
            if let Some(key) = name.strip_suffix(&format!(".{DOCUMENT_EXTENSION}")) {
                keys.push(key.to_string());
            }
        }
        keys.sort();

        let mut documents = Vec::with_capacity(keys.len());
        for key in keys {
            let id = DocumentId::from_key(collection, key);
            if let Some(document) = self.read(&id).await? {
                documents.push((id, document));
            }
        }
        Ok(documents)
    }

    async fn create(&self, id: &DocumentId, document: &Document) -> Result<()> {
        if self.exists(id).await? {
            return Err(Error::AlreadyExists { id: id.to_string() });
        }
        self.write(id, document).await?;
        tracing::debug!(%id, "created document");
        Ok(())
    }

    async fn update(&self, id: &DocumentId, document: &Document) -> Result<()> {
        if !self.exists(id).await? {
            return Err(Error::NotFound { id: id.to_string() });
        }
        self.write(id, document).await?;
        tracing::debug!(%id, "updated document");
        Ok(())
    }
}
