//! DocumentStore trait

use async_trait::async_trait;

use crate::Result;
use crate::document::Document;
use crate::id::DocumentId;

/// Async access to a document database organised in named collections.
///
/// `create` fails with [`Error::AlreadyExists`](crate::Error::AlreadyExists)
/// and `update` with [`Error::NotFound`](crate::Error::NotFound), so callers
/// decide between them with a prior [`get`](DocumentStore::get).
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch a single document, `None` when absent.
    async fn get(&self, id: &DocumentId) -> Result<Option<Document>>;

    /// Fetch every document of a collection, ordered by key.
    async fn list(&self, collection: &str) -> Result<Vec<(DocumentId, Document)>>;

    /// Store a new document.
    async fn create(&self, id: &DocumentId, document: &Document) -> Result<()>;

    /// Overwrite an existing document in place.
    async fn update(&self, id: &DocumentId, document: &Document) -> Result<()>;
}
