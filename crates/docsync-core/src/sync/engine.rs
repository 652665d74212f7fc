//! SyncEngine implementation

use std::sync::Arc;

use docsync_fs::NormalizedPath;
use docsync_meta::SyncConfig;
use docsync_store::DocumentStore;

/// Default number of in-flight store calls per collection
pub const DEFAULT_CONCURRENCY: usize = 8;

/// Options for export and import runs
#[derive(Debug, Clone)]
pub struct SyncOptions {
    /// Create missing directories and overwrite existing files on import
    pub force: bool,
    /// Rewrite front-matter as `export const meta` for MDX-like imports
    pub meta: bool,
    /// Upper bound on concurrent store calls; results keep their order
    pub concurrency: usize,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            force: false,
            meta: false,
            concurrency: DEFAULT_CONCURRENCY,
        }
    }
}

/// Engine moving collections between a content root and a document store
///
/// - **export**: read each collection item under `root` and store it
/// - **import**: write stored documents into an output directory
pub struct SyncEngine {
    /// Directory collection paths are resolved against
    pub(super) root: NormalizedPath,
    pub(super) config: SyncConfig,
    pub(super) store: Arc<dyn DocumentStore>,
    pub(super) options: SyncOptions,
}

impl SyncEngine {
    pub fn new(
        root: NormalizedPath,
        config: SyncConfig,
        store: Arc<dyn DocumentStore>,
        options: SyncOptions,
    ) -> Self {
        Self {
            root,
            config,
            store,
            options,
        }
    }

    pub fn root(&self) -> &NormalizedPath {
        &self.root
    }

    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    pub fn options(&self) -> &SyncOptions {
        &self.options
    }

    pub(super) fn concurrency(&self) -> usize {
        self.options.concurrency.max(1)
    }
}
