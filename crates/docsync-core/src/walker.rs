//! Collection walker
//!
//! Turns a collection into the ordered list of relative paths a sync pass
//! works on.

use std::io::ErrorKind;

use docsync_content::is_sync_extension;
use docsync_fs::NormalizedPath;
use docsync_meta::{Collection, CollectionSource};

use crate::error::{Error, Result};

/// Relative paths of every item in `collection`.
///
/// Folder collections are listed from disk under `root`; explicit-files
/// collections yield their declared list verbatim.
pub async fn collect(root: &NormalizedPath, collection: &Collection) -> Result<Vec<NormalizedPath>> {
    match collection.source() {
        CollectionSource::Folder(folder) => walk_folder(root, folder).await,
        CollectionSource::Files(files) => Ok(files
            .iter()
            .map(|entry| NormalizedPath::new(&entry.file))
            .collect()),
    }
}

/// List the content files directly inside `folder`.
///
/// Only regular files with a syncable extension are kept; subdirectories are
/// not descended into. Results are sorted by file name and returned as
/// `folder/<name>`.
pub async fn walk_folder(root: &NormalizedPath, folder: &str) -> Result<Vec<NormalizedPath>> {
    let dir = root.join(folder);
    let mut entries = match tokio::fs::read_dir(dir.to_native()).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(Error::MissingDirectory {
                path: dir.to_native(),
            });
        }
        Err(e) => return Err(docsync_fs::Error::io(dir.to_native(), e).into()),
    };

    let mut names = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| docsync_fs::Error::io(dir.to_native(), e))?
    {
        let file_type = entry
            .file_type()
            .await
            .map_err(|e| docsync_fs::Error::io(entry.path(), e))?;
        if !file_type.is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().to_string();
        let keep = NormalizedPath::new(&name)
            .extension()
            .is_some_and(is_sync_extension);
        if keep {
            names.push(name);
        }
    }
    names.sort();

    let base = NormalizedPath::new(folder.trim_end_matches(['/', '\\']));
    tracing::debug!(folder, files = names.len(), "walked collection folder");
    Ok(names.iter().map(|name| base.join(name)).collect())
}
