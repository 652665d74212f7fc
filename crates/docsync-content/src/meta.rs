//! Meta export: front-matter rewritten as an MDX `meta` declaration

use std::borrow::Cow;

use crate::error::{Error, Result};
use crate::front_matter;

/// Rewrite a front-matter source as `export const meta = {...}` followed by
/// a blank line and the unchanged body.
///
/// The object is pretty-printed with two-space indentation and keeps the
/// key order of the YAML block.
pub fn meta_export(source: &str) -> Result<String> {
    let parsed = front_matter::parse(source)?;
    let meta = serde_json::to_string_pretty(&parsed.data)
        .map_err(|e| Error::parse("JSON", e.to_string()))?;
    Ok(format!("export const meta = {meta}\n\n{}", parsed.body))
}

/// Turn stored document content back into file bytes.
///
/// Content passes through untouched unless meta export was requested and
/// the destination is MDX-like.
pub fn decode(content: &[u8], meta: bool, mdx_like: bool) -> Result<Cow<'_, [u8]>> {
    if !(meta && mdx_like) {
        return Ok(Cow::Borrowed(content));
    }
    let source = std::str::from_utf8(content)?;
    Ok(Cow::Owned(meta_export(source)?.into_bytes()))
}
