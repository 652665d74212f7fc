//! Structural validation of a sync configuration

use std::collections::HashSet;

use docsync_fs::validate_relative_path;
use docsync_store::id;

use crate::config::{CollectionSource, SyncConfig};

/// Problems found in a configuration.
///
/// Errors make the configuration unusable; warnings are logged and the run
/// proceeds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validate collections and backend options.
pub fn validate(config: &SyncConfig) -> ValidationReport {
    let mut report = ValidationReport::default();
    let mut names = HashSet::new();

    for (index, collection) in config.collections.iter().enumerate() {
        let label = if collection.name.is_empty() {
            format!("collections[{index}]")
        } else {
            format!("collection '{}'", collection.name)
        };

        if let Err(e) = id::check_collection(&collection.name) {
            report.errors.push(format!("{label}: {e}"));
        } else if !names.insert(collection.name.as_str()) {
            report.errors.push(format!("{label}: duplicate collection name"));
        }

        match (&collection.folder, &collection.files) {
            (Some(_), Some(_)) => {
                report
                    .errors
                    .push(format!("{label}: declares both 'folder' and 'files'"));
                continue;
            }
            (None, None) => {
                report
                    .errors
                    .push(format!("{label}: declares neither 'folder' nor 'files'"));
                continue;
            }
            _ => {}
        }

        match collection.source() {
            CollectionSource::Folder(folder) => {
                check_path(&mut report, &label, "folder", folder);
            }
            CollectionSource::Files(files) => {
                if files.is_empty() {
                    report.warnings.push(format!("{label}: 'files' is empty"));
                }
                let mut seen = HashSet::new();
                for entry in files {
                    check_path(&mut report, &label, "file", &entry.file);
                    if !seen.insert(entry.file.replace('\\', "/")) {
                        report
                            .errors
                            .push(format!("{label}: file '{}' is listed twice", entry.file));
                    }
                }
            }
        }
    }

    if let Some(firebase) = &config.backend.firebase {
        for name in firebase.index_data.keys() {
            if config.collection(name).is_none() {
                report.warnings.push(format!(
                    "backend.firebase.index_data: '{name}' does not name a collection"
                ));
            }
        }
    }

    report
}

fn check_path(report: &mut ValidationReport, label: &str, field: &str, path: &str) {
    if let Err(e) = validate_relative_path(path) {
        report.errors.push(format!("{label}: {field} {e}"));
        return;
    }
    if let Err(e) = id::check_path(path) {
        report.errors.push(format!("{label}: {field} {e}"));
    }
}
