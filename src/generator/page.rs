//! Single example page.
//!
//! ```text
//! ---
//! title: Plot / Area
//! keywords:
//!   - plot
//!   - area
//! ---
//!
//! import useBaseUrl from '@docusaurus/useBaseUrl';
//!
//! <description>
//!
//! <div className='cover' ... />
//!
//! ```py
//! <code>
//! ```
//!
//! **Tags**:  <a ...>plot</a>  <a ...>area</a>
//! ```
//!
//! Examples without keywords get a title-only front-matter, no import and no
//! tags footer.

use super::{RenderContext, TAGS_PAGE, header};
use crate::example::Example;

pub fn render_page(example: &Example, ctx: &RenderContext) -> String {
    let mut out = if example.keywords().is_empty() {
        format!("---\ntitle: {}\n---\n\n", example.title())
    } else {
        let keywords: String = example
            .keywords()
            .iter()
            .map(|k| format!("\n  - {k}"))
            .collect();
        header(&[("title", example.title()), ("keywords", keywords.as_str())])
    };

    out.push_str(example.description());
    out.push_str("\n\n");
    out.push_str(&format!(
        "<div className='cover' style={{{{ backgroundImage: {} }}}} />\n\n",
        ctx.thumbnail(example.slug())
    ));
    let fence = code_fence(example.code());
    out.push_str(&format!(
        "{fence}{}\n{}\n{fence}\n",
        ctx.code_lang,
        example.code()
    ));

    if !example.keywords().is_empty() {
        let links: Vec<String> = example
            .keywords()
            .iter()
            .map(|k| ctx.link(&format!("{TAGS_PAGE}#{k}"), k))
            .collect();
        out.push_str(&format!("\n**Tags**:  {}\n", links.join("  ")));
    }

    out
}

/// Backtick fence one longer than any backtick run in `code`, at least three.
fn code_fence(code: &str) -> String {
    let longest = code
        .split(|c| c != '`')
        .map(str::len)
        .max()
        .unwrap_or(0);
    "`".repeat((longest + 1).max(3))
}
