//! Run context: configuration, credentials and store selection

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use docsync_core::{SyncEngine, SyncOptions};
use docsync_fs::NormalizedPath;
use docsync_meta::{SyncConfig, load_config};
use docsync_store::{CredentialSource, Credentials, DocumentStore, connect};

use crate::cli::Cli;
use crate::error::{CliError, Result};

/// Environment variable overriding the default store directory
pub const STORE_ROOT_ENV: &str = "DOCSYNC_STORE_ROOT";

/// Everything a command needs once arguments have been checked
pub struct RunContext {
    pub project: String,
    pub engine: SyncEngine,
}

impl RunContext {
    /// Resolve configuration, credentials and the project's store.
    ///
    /// `cwd` is the directory collection paths are resolved against.
    pub fn build(cli: &Cli, project: Option<&str>, cwd: &Path) -> Result<Self> {
        let project = project
            .filter(|p| !p.trim().is_empty())
            .ok_or_else(|| CliError::user("Missing project name"))?
            .to_string();
        let config_path = cli
            .config
            .as_deref()
            .ok_or_else(|| CliError::user("Missing --config option"))?;

        let credentials = Credentials::load(CredentialSource::resolve(cli.authkey.clone())?)?;
        let config = load_config(&NormalizedPath::new(cwd.join(config_path)))?;

        let store_root = resolve_store_root(
            cli.store.as_deref().map(|p| cwd.join(p)),
            &config,
            std::env::var_os(STORE_ROOT_ENV),
        )?;
        let store: Arc<dyn DocumentStore> = Arc::new(connect(&project, &credentials, &store_root)?);

        let options = SyncOptions {
            force: cli.force,
            meta: cli.meta,
            concurrency: cli.concurrency,
        };
        let engine = SyncEngine::new(NormalizedPath::new(cwd), config, store, options);

        Ok(Self { project, engine })
    }
}

/// Pick the store directory.
///
/// Order: `--store`, `backend.local.root`, [`STORE_ROOT_ENV`], then the
/// platform data directory.
pub fn resolve_store_root(
    flag: Option<PathBuf>,
    config: &SyncConfig,
    env_value: Option<OsString>,
) -> Result<PathBuf> {
    if let Some(path) = flag {
        return Ok(path);
    }
    if let Some(path) = config.backend.local.as_ref().and_then(|l| l.root.clone()) {
        return Ok(path);
    }
    if let Some(value) = env_value.filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(value));
    }
    dirs::data_dir()
        .map(|dir| dir.join("docsync"))
        .ok_or_else(|| CliError::user("Cannot determine a store directory; pass --store"))
}
