//! Configuration loading

use docsync_fs::{ConfigStore, NormalizedPath};

use crate::config::SyncConfig;
use crate::error::{Error, Result};
use crate::validation::validate;

/// Load and validate a sync configuration file.
///
/// Format is chosen by extension (`.yml`/`.yaml`, `.json`, `.toml`).
/// Validation errors are returned together; warnings are logged.
pub fn load_config(path: &NormalizedPath) -> Result<SyncConfig> {
    if !path.is_file() {
        return Err(Error::ConfigNotFound {
            path: path.to_native(),
        });
    }

    let config: SyncConfig = ConfigStore::new().load(path)?;
    let report = validate(&config);

    for warning in &report.warnings {
        tracing::warn!(config = %path, "{warning}");
    }
    if !report.is_valid() {
        return Err(Error::InvalidConfig {
            path: path.to_native(),
            problems: report.errors,
        });
    }

    tracing::debug!(
        config = %path,
        collections = config.collections.len(),
        "loaded sync configuration"
    );
    Ok(config)
}
