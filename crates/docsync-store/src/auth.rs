//! Credential resolution and store connection

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::local::LocalStore;

/// Environment variable naming an application-default credentials file.
pub const CREDENTIALS_ENV: &str = "GOOGLE_APPLICATION_CREDENTIALS";

/// Where credentials come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialSource {
    /// A key file passed explicitly
    KeyFile(PathBuf),
    /// The file named by [`CREDENTIALS_ENV`]
    ApplicationDefault(PathBuf),
}

impl CredentialSource {
    /// Resolve from an explicit key file, falling back to the environment.
    pub fn resolve(key_file: Option<PathBuf>) -> Result<Self> {
        Self::resolve_with(key_file, std::env::var_os(CREDENTIALS_ENV))
    }

    /// Resolve from an explicit key file or a given environment value.
    pub fn resolve_with(key_file: Option<PathBuf>, env_value: Option<OsString>) -> Result<Self> {
        if let Some(path) = key_file {
            return Ok(Self::KeyFile(path));
        }
        match env_value {
            Some(value) if !value.is_empty() => Ok(Self::ApplicationDefault(PathBuf::from(value))),
            _ => Err(Error::MissingCredentials),
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Self::KeyFile(path) | Self::ApplicationDefault(path) => path,
        }
    }
}

/// Service-account credentials read from a JSON key file.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub source: CredentialSource,
    pub project_id: Option<String>,
    pub client_email: Option<String>,
}

#[derive(Debug, Deserialize)]
struct KeyFile {
    #[serde(default)]
    project_id: Option<String>,
    #[serde(default)]
    client_email: Option<String>,
}

impl Credentials {
    /// Read and validate the key file behind `source`.
    ///
    /// The file must exist and hold a JSON object; the known service
    /// account fields are optional.
    pub fn load(source: CredentialSource) -> Result<Self> {
        let path = source.path().to_path_buf();
        let bytes = std::fs::read(&path).map_err(|e| Error::InvalidCredentials {
            path: path.clone(),
            message: e.to_string(),
        })?;
        let key: KeyFile = serde_json::from_slice(&bytes).map_err(|e| Error::InvalidCredentials {
            path: path.clone(),
            message: e.to_string(),
        })?;

        Ok(Self {
            source,
            project_id: key.project_id,
            client_email: key.client_email,
        })
    }
}

/// Open the store for `project` under `store_root`.
///
/// Each project gets its own subdirectory. A key file naming a different
/// project is reported but not refused.
pub fn connect(project: &str, credentials: &Credentials, store_root: &Path) -> Result<LocalStore> {
    if project.trim().is_empty()
        || project.contains(['/', '\\'])
        || project == "."
        || project == ".."
    {
        return Err(Error::InvalidProject {
            name: project.to_string(),
        });
    }

    if let Some(key_project) = credentials.project_id.as_deref() {
        if key_project != project {
            tracing::warn!(
                project,
                key_project,
                "credentials were issued for a different project"
            );
        }
    }

    let root = store_root.join(project);
    tracing::debug!(root = %root.display(), account = ?credentials.client_email, "opening document store");
    Ok(LocalStore::open(root))
}
