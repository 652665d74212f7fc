//! [`ContentTree`] builder for docsync test scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary content directory with helper methods for test setup and
/// assertion.
///
/// # Example
///
/// ```rust,no_run
/// use docsync_test_utils::ContentTree;
///
/// let tree = ContentTree::new();
/// tree.write_file("content/posts/hello.md", "---\ntitle: Hi\n---\nBody");
/// tree.write_config("collections:\n  - name: posts\n    folder: content/posts\n");
/// tree.assert_file_contains("content/posts/hello.md", "title: Hi");
/// ```
pub struct ContentTree {
    temp_dir: TempDir,
}

impl Default for ContentTree {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentTree {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `path` relative to the root.
    pub fn path(&self, path: &str) -> PathBuf {
        self.root().join(path)
    }

    /// Write `content` at `path`, creating parent directories.
    pub fn write_file(&self, path: &str, content: impl AsRef<[u8]>) -> PathBuf {
        let full_path = self.path(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full_path, content).unwrap();
        full_path
    }

    /// Create the directory `path` and its parents.
    pub fn create_dir(&self, path: &str) -> PathBuf {
        let full_path = self.path(path);
        fs::create_dir_all(&full_path).unwrap();
        full_path
    }

    /// Write a YAML sync configuration as `config.yml` at the root.
    pub fn write_config(&self, yaml: &str) -> PathBuf {
        self.write_file("config.yml", yaml)
    }

    /// Write a service-account key file for `project` as `key.json`.
    pub fn write_key(&self, project: &str) -> PathBuf {
        self.write_file(
            "key.json",
            format!(
                "{{\"type\": \"service_account\", \"project_id\": \"{project}\", \"client_email\": \"ci@{project}.example\"}}"
            ),
        )
    }

    /// Read the file at `path` as bytes.
    pub fn read(&self, path: &str) -> Vec<u8> {
        let full_path = self.path(path);
        fs::read(&full_path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", full_path.display()))
    }

    /// Read the file at `path` as text.
    pub fn read_text(&self, path: &str) -> String {
        String::from_utf8(self.read(path)).unwrap()
    }

    /// Assert that `path` (relative to the root) exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, path: &str) {
        let full_path = self.path(path);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `path` (relative to the root) does **not** exist.
    pub fn assert_file_not_exists(&self, path: &str) {
        let full_path = self.path(path);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }

    /// Assert that the file at `path` contains `content`.
    pub fn assert_file_contains(&self, path: &str, content: &str) {
        let file_content = self.read_text(path);
        assert!(
            file_content.contains(content),
            "File {path} does not contain expected content.\nExpected: {content}\nActual: {file_content}"
        );
    }

    /// Assert that the file at `path` holds exactly `content`.
    pub fn assert_file_eq(&self, path: &str, content: impl AsRef<[u8]>) {
        let actual = self.read(path);
        assert!(
            actual == content.as_ref(),
            "File {path} differs.\nExpected: {:?}\nActual: {:?}",
            String::from_utf8_lossy(content.as_ref()),
            String::from_utf8_lossy(&actual)
        );
    }
}
