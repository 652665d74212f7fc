//! Content formats and data indexing modes

use std::fmt;

use serde::{Deserialize, Serialize};

/// File extensions picked up when walking a collection folder.
pub const SYNC_EXTENSIONS: &[&str] = &["md", "mdx", "json", "yaml", "yml"];

/// Check whether a file extension is eligible for sync.
///
/// Matching is case-sensitive, so `POST.MD` is not picked up.
pub fn is_sync_extension(ext: &str) -> bool {
    SYNC_EXTENSIONS.contains(&ext)
}

/// Supported content file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Markdown,
    Mdx,
    Json,
    Yaml,
}

impl Format {
    /// Detect format from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "md" => Some(Self::Markdown),
            "mdx" => Some(Self::Mdx),
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    /// Whether front-matter in this format can be exported as an MDX
    /// `meta` declaration.
    pub fn is_mdx_like(&self) -> bool {
        matches!(self, Self::Mdx)
    }
}

/// How document data is indexed when a collection is exported.
///
/// Configured per collection under `backend.firebase.index_data`. Any value
/// other than `json` or `mdx` falls back to markdown front-matter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexFormat {
    /// Parse the whole file as JSON
    Json,
    /// Parse YAML front-matter (MDX source)
    Mdx,
    /// Parse YAML front-matter
    #[serde(other)]
    Md,
}

impl IndexFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Md => "md",
            Self::Mdx => "mdx",
        }
    }
}

impl fmt::Display for IndexFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
