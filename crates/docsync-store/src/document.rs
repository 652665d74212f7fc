//! Stored document record

use base64::prelude::*;
use docsync_content::FileRecord;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A content file as persisted in the document store.
///
/// `content` holds the exact file bytes; `raw` is the same bytes in base64
/// for consumers that cannot read binary fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(with = "base64_bytes")]
    pub content: Vec<u8>,
    /// Collection-scoped relative path the document was exported from
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub raw: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl Document {
    /// Build the stored form of a file record.
    pub fn from_record(record: &FileRecord) -> Self {
        Self {
            raw: BASE64_STANDARD.encode(&record.content),
            content: record.content.clone(),
            path: record.path.clone(),
            slug: record.slug.clone(),
            data: record.data.clone(),
        }
    }

    /// The stored relative path, `None` when the field is missing or empty.
    pub fn path(&self) -> Option<&str> {
        Some(self.path.as_str()).filter(|p| !p.is_empty())
    }
}

impl From<FileRecord> for Document {
    fn from(record: FileRecord) -> Self {
        Self {
            raw: BASE64_STANDARD.encode(&record.content),
            content: record.content,
            path: record.path,
            slug: record.slug,
            data: record.data,
        }
    }
}

mod base64_bytes {
    use base64::prelude::*;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&BASE64_STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        BASE64_STANDARD
            .decode(encoded.as_bytes())
            .map_err(serde::de::Error::custom)
    }
}
