//! Import: stored documents to local files

use std::collections::BTreeSet;

use docsync_content::decode;
use docsync_fs::{NormalizedPath, io, validate_relative_path};
use docsync_meta::{Collection, CollectionSource, FileEntry};
use docsync_store::{Document, DocumentId};
use futures::stream::{self, StreamExt};

use super::engine::SyncEngine;
use super::report::{ItemOutcome, ItemStatus, SyncReport};
use crate::error::{Error, Result};

const EXISTS_REASON: &str = "file exists (use --Force to overwrite)";

impl SyncEngine {
    /// Import every configured collection into `outdir`.
    ///
    /// All destination directories are checked first; a missing one is
    /// fatal unless `force` is set, in which case it is created. Per-item
    /// problems are recorded in the report and the run carries on.
    pub async fn import(&self, outdir: &NormalizedPath) -> Result<SyncReport> {
        self.prepare_directories(outdir).await?;

        let mut report = SyncReport::default();
        for collection in &self.config.collections {
            match collection.source() {
                CollectionSource::Folder(folder) => {
                    self.import_folder(collection, folder, outdir, &mut report)
                        .await;
                }
                CollectionSource::Files(files) => {
                    let outcomes: Vec<ItemOutcome> = stream::iter(files)
                        .map(|entry| self.import_entry(collection, entry, outdir))
                        .buffered(self.concurrency())
                        .collect()
                        .await;
                    report.extend(outcomes);
                }
            }
        }

        Ok(report)
    }

    /// Directories an import writes into, in configuration order.
    fn required_directories(&self, outdir: &NormalizedPath) -> Vec<NormalizedPath> {
        let mut seen = BTreeSet::new();
        let mut dirs = vec![outdir.clone()];

        for collection in &self.config.collections {
            match collection.source() {
                CollectionSource::Folder(folder) => dirs.push(outdir.join(folder)),
                CollectionSource::Files(files) => {
                    dirs.extend(files.iter().filter_map(|f| outdir.join(&f.file).parent()));
                }
            }
        }

        dirs.retain(|dir| seen.insert(dir.as_str().trim_end_matches('/').to_string()));
        dirs
    }

    async fn prepare_directories(&self, outdir: &NormalizedPath) -> Result<()> {
        let missing: Vec<NormalizedPath> = self
            .required_directories(outdir)
            .into_iter()
            .filter(|dir| !dir.is_dir())
            .collect();

        if !self.options.force {
            if let Some(dir) = missing.first() {
                return Err(Error::MissingDirectory {
                    path: dir.to_native(),
                });
            }
            return Ok(());
        }

        for dir in &missing {
            tracing::debug!(path = %dir, "creating directory");
            tokio::fs::create_dir_all(dir.to_native())
                .await
                .map_err(|e| docsync_fs::Error::io(dir.to_native(), e))?;
        }
        Ok(())
    }

    async fn import_folder(
        &self,
        collection: &Collection,
        folder: &str,
        outdir: &NormalizedPath,
        report: &mut SyncReport,
    ) {
        let documents = match self.store.list(&collection.name).await {
            Ok(documents) => documents,
            Err(e) => {
                tracing::warn!(collection = %collection.name, error = %e, "cannot list documents");
                report.push(ItemOutcome::new(
                    &collection.name,
                    folder,
                    None,
                    ItemStatus::Failed(e.to_string()),
                ));
                return;
            }
        };

        tracing::debug!(collection = %collection.name, documents = documents.len(), "importing collection");
        let outcomes: Vec<ItemOutcome> = stream::iter(documents)
            .map(|(id, document)| self.import_document(collection, id, document, outdir))
            .buffered(self.concurrency())
            .collect()
            .await;
        report.extend(outcomes);
    }

    async fn import_document(
        &self,
        collection: &Collection,
        id: DocumentId,
        document: Document,
        outdir: &NormalizedPath,
    ) -> ItemOutcome {
        let path = document.path().unwrap_or_default().to_string();
        let result = match document.path() {
            None => Err(Error::MissingPath { id: id.to_string() }),
            Some(relative) => match validate_relative_path(relative) {
                Ok(()) => {
                    let destination = outdir.join(relative);
                    self.pull_document(collection, None, &document, destination)
                        .await
                }
                Err(e) => Err(e.into()),
            },
        };
        finish(collection, path, id, result)
    }

    async fn import_entry(
        &self,
        collection: &Collection,
        entry: &FileEntry,
        outdir: &NormalizedPath,
    ) -> ItemOutcome {
        let relative = NormalizedPath::new(&entry.file);
        let id = match DocumentId::new(&collection.name, relative.as_str()) {
            Ok(id) => id,
            Err(e) => {
                return ItemOutcome::new(
                    &collection.name,
                    relative.as_str(),
                    None,
                    ItemStatus::Failed(e.to_string()),
                );
            }
        };

        let destination = outdir.join(relative.as_str());
        let result = if destination.exists() && !self.options.force {
            Ok(ItemStatus::Skipped(EXISTS_REASON.into()))
        } else {
            self.fetch_entry(collection, entry, &id, &relative, destination)
                .await
        };
        finish(collection, relative.as_str().to_string(), id, result)
    }

    async fn fetch_entry(
        &self,
        collection: &Collection,
        entry: &FileEntry,
        id: &DocumentId,
        relative: &NormalizedPath,
        destination: NormalizedPath,
    ) -> Result<ItemStatus> {
        let document = self
            .store
            .get(id)
            .await?
            .ok_or_else(|| Error::MissingDocument { id: id.to_string() })?;

        let found = document.path().map(|p| p.replace('\\', "/"));
        if found.as_deref() != Some(relative.as_str()) {
            return Err(Error::PathMismatch {
                id: id.to_string(),
                expected: relative.as_str().to_string(),
                found: found.unwrap_or_default(),
            });
        }

        self.pull_document(collection, Some(entry), &document, destination)
            .await
    }

    /// Decode `document` and write it to `destination`, honoring `force`.
    async fn pull_document(
        &self,
        collection: &Collection,
        entry: Option<&FileEntry>,
        document: &Document,
        destination: NormalizedPath,
    ) -> Result<ItemStatus> {
        let existed = destination.exists();
        if existed && !self.options.force {
            return Ok(ItemStatus::Skipped(EXISTS_REASON.into()));
        }

        let mdx_like = collection.is_mdx_like(entry, &destination);
        let bytes = decode(&document.content, self.options.meta, mdx_like)?.into_owned();
        tokio::task::spawn_blocking(move || io::write_atomic(&destination, &bytes)).await??;
        Ok(if existed {
            ItemStatus::Overwritten
        } else {
            ItemStatus::Written
        })
    }
}

fn finish(
    collection: &Collection,
    path: String,
    id: DocumentId,
    result: Result<ItemStatus>,
) -> ItemOutcome {
    let status = match result {
        Ok(ItemStatus::Skipped(reason)) => {
            tracing::warn!(%id, path = %path, "{reason}");
            ItemStatus::Skipped(reason)
        }
        Ok(status) => {
            tracing::debug!(%id, path = %path, %status, "imported");
            status
        }
        Err(e) => {
            tracing::warn!(%id, error = %e, "import failed");
            ItemStatus::Failed(e.to_string())
        }
    };
    ItemOutcome::new(&collection.name, path, Some(id.to_string()), status)
}
