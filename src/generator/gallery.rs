//! Gallery index page: one thumbnail link per example.

use super::{RenderContext, header};
use crate::example::Example;

/// Docusaurus route of the gallery.
const GALLERY_ROUTE: &str = "/examples";

pub fn render_index(examples: &[Example], ctx: &RenderContext) -> String {
    let mut out = header(&[("title", "Gallery"), ("slug", GALLERY_ROUTE)]);
    let thumbnails: Vec<String> = examples.iter().map(|e| thumbnail_link(e, ctx)).collect();
    out.push_str(&thumbnails.join("\n\n"));
    out.push('\n');
    out
}

fn thumbnail_link(example: &Example, ctx: &RenderContext) -> String {
    format!(
        "<a class='thumbnail' href={}><div style={{{{backgroundImage:{}}}}}></div>{}</a>",
        ctx.href(example.slug()),
        ctx.thumbnail(example.slug()),
        example.title()
    )
}
