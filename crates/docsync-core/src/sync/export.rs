//! Export: local collection files to stored documents

use docsync_content::{FileRecord, IndexFormat};
use docsync_fs::NormalizedPath;
use docsync_meta::{Collection, CollectionSource};
use docsync_store::{Document, DocumentId};
use futures::stream::{self, StreamExt};

use super::engine::SyncEngine;
use super::report::{ItemOutcome, ItemStatus, SyncReport};
use crate::error::Result;
use crate::walker;

impl SyncEngine {
    /// Export every configured collection.
    ///
    /// Each file becomes a document under its computed id, updated in place
    /// when it already exists. A failing item or an unreadable folder is
    /// recorded in the report and the run carries on.
    pub async fn export(&self) -> Result<SyncReport> {
        let mut report = SyncReport::default();

        for collection in &self.config.collections {
            let index = self.config.index_format(&collection.name);
            let items = match walker::collect(&self.root, collection).await {
                Ok(items) => items,
                Err(e) => {
                    tracing::warn!(collection = %collection.name, error = %e, "cannot list collection");
                    let folder = match collection.source() {
                        CollectionSource::Folder(folder) => folder,
                        CollectionSource::Files(_) => "",
                    };
                    report.push(ItemOutcome::new(
                        &collection.name,
                        folder,
                        None,
                        ItemStatus::Failed(e.to_string()),
                    ));
                    continue;
                }
            };

            tracing::debug!(collection = %collection.name, items = items.len(), ?index, "exporting collection");
            let outcomes: Vec<ItemOutcome> = stream::iter(items)
                .map(|relative| self.export_item(collection, relative, index))
                .buffered(self.concurrency())
                .collect()
                .await;
            report.extend(outcomes);
        }

        Ok(report)
    }

    async fn export_item(
        &self,
        collection: &Collection,
        relative: NormalizedPath,
        index: Option<IndexFormat>,
    ) -> ItemOutcome {
        let id = match DocumentId::new(&collection.name, relative.as_str()) {
            Ok(id) => id,
            Err(e) => {
                tracing::warn!(path = %relative, error = %e, "cannot map path to a document id");
                return ItemOutcome::new(
                    &collection.name,
                    relative.as_str(),
                    None,
                    ItemStatus::Failed(e.to_string()),
                );
            }
        };

        let status = match self.push_file(&id, &relative, index).await {
            Ok(status) => {
                tracing::debug!(%id, %status, "exported");
                status
            }
            Err(e) => {
                tracing::warn!(%id, error = %e, "export failed");
                ItemStatus::Failed(e.to_string())
            }
        };
        ItemOutcome::new(&collection.name, relative.as_str(), Some(id.to_string()), status)
    }

    async fn push_file(
        &self,
        id: &DocumentId,
        relative: &NormalizedPath,
        index: Option<IndexFormat>,
    ) -> Result<ItemStatus> {
        let source = self.root.join(relative.as_str());
        let content = tokio::fs::read(source.to_native())
            .await
            .map_err(|e| docsync_fs::Error::io(source.to_native(), e))?;
        let document = Document::from(FileRecord::encode(relative, content, index)?);

        if self.store.get(id).await?.is_some() {
            self.store.update(id, &document).await?;
            Ok(ItemStatus::Updated)
        } else {
            self.store.create(id, &document).await?;
            Ok(ItemStatus::Created)
        }
    }
}
