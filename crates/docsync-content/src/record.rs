//! Outgoing file records

use docsync_fs::NormalizedPath;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::format::IndexFormat;
use crate::front_matter;

/// A content file read from disk, ready to be stored as a document.
///
/// Records are built per sync pass and dropped once transferred.
#[derive(Debug, Clone, PartialEq)]
pub struct FileRecord {
    /// Collection-scoped relative path, forward slashes
    pub path: String,
    /// File name without its trailing extension
    pub slug: String,
    /// Raw file bytes
    pub content: Vec<u8>,
    /// Indexed data, present only when the collection indexes data
    pub data: Option<Value>,
}

impl FileRecord {
    /// Build a record from raw bytes.
    ///
    /// With `index` set, structured data is extracted from the content;
    /// a parse failure is returned as an error for this file only.
    pub fn encode(
        path: &NormalizedPath,
        content: Vec<u8>,
        index: Option<IndexFormat>,
    ) -> Result<Self> {
        let data = match index {
            Some(format) => Some(extract_data(&content, format)?),
            None => None,
        };

        Ok(Self {
            path: path.as_str().to_string(),
            slug: path.file_stem().unwrap_or_default().to_string(),
            content,
            data,
        })
    }
}

/// Extract indexable data from file content.
///
/// `json` parses the whole file; `md` and `mdx` parse YAML front-matter,
/// yielding an empty object when the file has none.
pub fn extract_data(content: &[u8], format: IndexFormat) -> Result<Value> {
    match format {
        IndexFormat::Json => {
            serde_json::from_slice(content).map_err(|e| Error::parse("JSON", e.to_string()))
        }
        IndexFormat::Md | IndexFormat::Mdx => {
            let text = std::str::from_utf8(content)?;
            Ok(front_matter::parse(text)?.data)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_encode_without_index_has_no_data() {
        let path = NormalizedPath::new("content/posts/hello.md");
        let record = FileRecord::encode(&path, b"---\ntitle: Hi\n---\nBody".to_vec(), None).unwrap();
        assert_eq!(record.slug, "hello");
        assert_eq!(record.path, "content/posts/hello.md");
        assert!(record.data.is_none());
    }

    #[test]
    fn test_encode_markdown_index() {
        let path = NormalizedPath::new("content/posts/hello.md");
        let record = FileRecord::encode(
            &path,
            b"---\ntitle: Hi\n---\nBody text".to_vec(),
            Some(IndexFormat::Md),
        )
        .unwrap();
        assert_eq!(record.data, Some(json!({"title": "Hi"})));
        assert_eq!(record.content, b"---\ntitle: Hi\n---\nBody text");
    }

    #[test]
    fn test_encode_json_index() {
        let path = NormalizedPath::new("data/nav.json");
        let record = FileRecord::encode(
            &path,
            br#"{"items": [1, 2]}"#.to_vec(),
            Some(IndexFormat::Json),
        )
        .unwrap();
        assert_eq!(record.slug, "nav");
        assert_eq!(record.data, Some(json!({"items": [1, 2]})));
    }

    #[test]
    fn test_encode_malformed_json_is_error() {
        let path = NormalizedPath::new("data/nav.json");
        let result = FileRecord::encode(&path, b"{not json".to_vec(), Some(IndexFormat::Json));
        assert!(matches!(result, Err(Error::ParseError { .. })));
    }

    #[test]
    fn test_encode_front_matter_index_rejects_invalid_utf8() {
        let path = NormalizedPath::new("content/posts/bad.md");
        let result = FileRecord::encode(&path, vec![0xff, 0xfe], Some(IndexFormat::Md));
        assert!(matches!(result, Err(Error::InvalidUtf8(_))));
    }

    #[test]
    fn test_slug_keeps_inner_dots() {
        let path = NormalizedPath::new("content/posts/2020.01.hello.mdx");
        let record = FileRecord::encode(&path, Vec::new(), None).unwrap();
        assert_eq!(record.slug, "2020.01.hello");
    }
}
