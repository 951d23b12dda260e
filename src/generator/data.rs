//! Page list for the site builder's sidebar.
//!
//! The gallery, contents and tags pages come first, followed by one entry per
//! example in manifest order:
//!
//! ```text
//! module.exports=[{"slug":"index"},{"slug":"all"},{"slug":"examples-tags"},{"slug":"hello-world"}]
//! ```

use super::{INDEX_PAGE, TAGS_PAGE, TOC_PAGE};
use crate::example::Example;
use serde::Serialize;
use std::path::Path;

/// A single sidebar entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageEntry<'a> {
    pub slug: &'a str,
}

/// Sidebar entries: fixed pages, then examples.
pub fn page_entries(examples: &[Example]) -> Vec<PageEntry<'_>> {
    [INDEX_PAGE, TOC_PAGE, TAGS_PAGE]
        .into_iter()
        .chain(examples.iter().map(Example::slug))
        .map(|slug| PageEntry { slug })
        .collect()
}

/// Serialize the page list for `path`.
///
/// `.json` targets get plain JSON; anything else (`examples.js`) a CommonJS
/// module.
pub fn render_site_data(examples: &[Example], path: &Path) -> serde_json::Result<String> {
    let json = serde_json::to_string(&page_entries(examples))?;
    if path.extension().is_some_and(|ext| ext == "json") {
        Ok(json)
    } else {
        Ok(format!("module.exports={json}"))
    }
}
