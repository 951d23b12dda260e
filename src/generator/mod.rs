//! Markdown page generation.
//!
//! Every renderer is a pure function from parsed examples to page text.
//!
//! | Page                    | Renderer                  | Order               |
//! |-------------------------|---------------------------|---------------------|
//! | `{slug}.md`             | [`page::render_page`]     | -                   |
//! | `index.md` (gallery)    | [`gallery::render_index`] | manifest            |
//! | `all.md` (contents)     | [`toc::render_toc`]       | manifest            |
//! | `examples-tags.md`      | [`tags::render_tag_index`]| keyword, manifest   |
//! | `examples.js` (data)    | [`data::render_site_data`]| fixed pages, manifest |

pub mod data;
pub mod gallery;
pub mod page;
pub mod tags;
pub mod toc;

use crate::config::SiteConfig;

/// Page name of the gallery.
pub const INDEX_PAGE: &str = "index";
/// Page name of the table of contents.
pub const TOC_PAGE: &str = "all";
/// Page name of the tag index.
pub const TAGS_PAGE: &str = "examples-tags";

const USE_BASE_URL_IMPORT: &str = "import useBaseUrl from '@docusaurus/useBaseUrl';";

/// Settings shared by all renderers.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// Site path the example pages live under, e.g. `docs/examples`
    pub link_prefix: &'a str,
    /// Thumbnail directory relative to the pages, e.g. `assets`
    pub thumbnails: &'a str,
    /// Language tag of the fenced code block
    pub code_lang: &'a str,
}

impl Default for RenderContext<'static> {
    fn default() -> Self {
        Self {
            link_prefix: "docs/examples",
            thumbnails: "assets",
            code_lang: "py",
        }
    }
}

impl<'a> RenderContext<'a> {
    pub fn from_config(config: &'a SiteConfig) -> Self {
        Self {
            link_prefix: &config.build.link_prefix,
            thumbnails: &config.build.thumbnails,
            code_lang: &config.build.code_lang,
        }
    }

    /// `{useBaseUrl('docs/examples/target')}`
    fn href(&self, target: &str) -> String {
        format!("{{useBaseUrl('{}/{target}')}}", self.link_prefix)
    }

    /// `<a href={useBaseUrl('docs/examples/target')}>text</a>`
    fn link(&self, target: &str, text: &str) -> String {
        format!("<a href={}>{text}</a>", self.href(target))
    }

    /// JSX expression resolving a slug's thumbnail image.
    fn thumbnail(&self, slug: &str) -> String {
        format!(
            "'url(' + require('./{}/{slug}.png').default + ')'",
            self.thumbnails
        )
    }
}

/// Front-matter block followed by the `useBaseUrl` import.
fn header(front_matter: &[(&str, &str)]) -> String {
    let mut out = String::from("---\n");
    for (key, value) in front_matter {
        // block values (yaml lists) start on the next line
        if value.starts_with('\n') {
            out.push_str(&format!("{key}:{value}\n"));
        } else {
            out.push_str(&format!("{key}: {value}\n"));
        }
    }
    out.push_str("---\n\n");
    out.push_str(USE_BASE_URL_IMPORT);
    out.push_str("\n\n");
    out
}

#[cfg(test)]
pub(crate) mod test_helpers {
    use crate::example::Example;

    /// Build an example from its parts through the real parser.
    pub fn example(filename: &str, title: &str, subtitle: &str, keywords: &[&str]) -> Example {
        let source = format!(
            "# {title}\n# {subtitle}\n# {}\n# ---\nprint('{title}')\n",
            keywords.join(", ")
        );
        Example::parse(filename, &source).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_uses_prefix() {
        let ctx = RenderContext::default();
        assert_eq!(
            ctx.link("plot-area", "Plot"),
            "<a href={useBaseUrl('docs/examples/plot-area')}>Plot</a>"
        );
    }

    #[test]
    fn test_thumbnail_uses_directory() {
        let ctx = RenderContext {
            thumbnails: "img",
            ..RenderContext::default()
        };
        assert_eq!(
            ctx.thumbnail("flex"),
            "'url(' + require('./img/flex.png').default + ')'"
        );
    }

    #[test]
    fn test_header_layout() {
        let out = header(&[("title", "Tags")]);
        assert_eq!(
            out,
            "---\ntitle: Tags\n---\n\nimport useBaseUrl from '@docusaurus/useBaseUrl';\n\n"
        );
    }

    #[test]
    fn test_helper_keywords_round_trip() {
        let e = test_helpers::example("a_b.py", "AB", "Sub.", &["x", "y"]);
        assert_eq!(e.keywords(), ["x", "y"]);
        assert_eq!(e.subtitle(), "Sub.");

        let e = test_helpers::example("c.py", "C", "Sub.", &[]);
        assert!(e.keywords().is_empty());
    }
}
