//! Table of contents: `title: subtitle` per example, in manifest order.

use super::{RenderContext, header};
use crate::example::Example;

const TOC_ROUTE: &str = "/examples/all";

pub fn render_toc(examples: &[Example], ctx: &RenderContext) -> String {
    let mut out = header(&[("title", "All Examples"), ("slug", TOC_ROUTE)]);
    let entries: Vec<String> = examples
        .iter()
        .map(|e| format!("- {}: {}", ctx.link(e.slug(), e.title()), e.subtitle()))
        .collect();
    out.push_str(&entries.join("\n\n"));
    out.push('\n');
    out
}
