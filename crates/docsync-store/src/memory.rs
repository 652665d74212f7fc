//! In-memory document store

use std::collections::{BTreeMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::document::Document;
use crate::error::{Error, Result};
use crate::id::DocumentId;
use crate::store::DocumentStore;

/// Counters of successful writes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreStats {
    pub creates: usize,
    pub updates: usize,
}

/// Document store held entirely in memory.
///
/// Used by tests and dry runs. Writes to ids registered with
/// [`MemoryStore::reject_writes`] fail with [`Error::WriteRejected`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<BTreeMap<String, BTreeMap<String, Document>>>,
    rejected: RwLock<HashSet<DocumentId>>,
    creates: AtomicUsize,
    updates: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a document directly, bypassing create/update bookkeeping.
    pub async fn insert(&self, id: &DocumentId, document: Document) {
        self.collections
            .write()
            .await
            .entry(id.collection().to_string())
            .or_default()
            .insert(id.key().to_string(), document);
    }

    /// Make every later write to `id` fail.
    pub async fn reject_writes(&self, id: &DocumentId) {
        self.rejected.write().await.insert(id.clone());
    }

    /// Number of documents in a collection.
    pub async fn len(&self, collection: &str) -> usize {
        self.collections
            .read()
            .await
            .get(collection)
            .map_or(0, BTreeMap::len)
    }

    pub fn stats(&self) -> StoreStats {
        StoreStats {
            creates: self.creates.load(Ordering::SeqCst),
            updates: self.updates.load(Ordering::SeqCst),
        }
    }

    async fn check_writable(&self, id: &DocumentId) -> Result<()> {
        if self.rejected.read().await.contains(id) {
            return Err(Error::WriteRejected {
                id: id.to_string(),
                message: "permission denied".into(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn get(&self, id: &DocumentId) -> Result<Option<Document>> {
        Ok(self
            .collections
            .read()
            .await
            .get(id.collection())
            .and_then(|docs| docs.get(id.key()))
            .cloned())
    }

    async fn list(&self, collection: &str) -> Result<Vec<(DocumentId, Document)>> {
        Ok(self
            .collections
            .read()
            .await
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .map(|(key, doc)| (DocumentId::from_key(collection, key.clone()), doc.clone()))
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn create(&self, id: &DocumentId, document: &Document) -> Result<()> {
        self.check_writable(id).await?;
        let mut collections = self.collections.write().await;
        let docs = collections.entry(id.collection().to_string()).or_default();
        if docs.contains_key(id.key()) {
            return Err(Error::AlreadyExists { id: id.to_string() });
        }
        docs.insert(id.key().to_string(), document.clone());
        self.creates.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn update(&self, id: &DocumentId, document: &Document) -> Result<()> {
        self.check_writable(id).await?;
        let mut collections = self.collections.write().await;
        let slot = collections
            .get_mut(id.collection())
            .and_then(|docs| docs.get_mut(id.key()))
            .ok_or_else(|| Error::NotFound { id: id.to_string() })?;
        *slot = document.clone();
        self.updates.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
