//! Keyword index and the tags page.

use super::{RenderContext, header};
use crate::example::Example;
use std::collections::BTreeMap;

/// Keyword → examples carrying it.
///
/// Keywords iterate in lexicographic order; each keyword's examples keep the
/// order they were given in.
#[derive(Debug, Default)]
pub struct KeywordIndex<'a> {
    groups: BTreeMap<&'a str, Vec<&'a Example>>,
}

impl<'a> KeywordIndex<'a> {
    pub fn from_examples(examples: &'a [Example]) -> Self {
        let mut groups: BTreeMap<&str, Vec<&Example>> = BTreeMap::new();
        for example in examples {
            for keyword in example.keywords() {
                groups.entry(keyword.as_str()).or_default().push(example);
            }
        }
        Self { groups }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &[&'a Example])> {
        self.groups.iter().map(|(k, v)| (*k, v.as_slice()))
    }

    #[cfg(test)]
    pub fn get(&self, keyword: &str) -> Option<&[&'a Example]> {
        self.groups.get(keyword).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

pub fn render_tag_index(index: &KeywordIndex, ctx: &RenderContext) -> String {
    let mut out = header(&[("title", "Tags")]);
    let groups: Vec<String> = index
        .iter()
        .map(|(keyword, examples)| {
            let links: Vec<String> = examples
                .iter()
                .map(|e| ctx.link(e.slug(), e.title()))
                .collect();
            format!("### {keyword}\n{}\n", links.join("  "))
        })
        .collect();
    out.push_str(&groups.join("\n\n"));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::test_helpers::example;

    fn titles<'a>(examples: &[&'a Example]) -> Vec<&'a str> {
        examples.iter().map(|e| e.title()).collect()
    }

    #[test]
    fn test_index_groups_by_keyword() {
        let examples = [
            example("e1.py", "E1", "One.", &["y", "x"]),
            example("e2.py", "E2", "Two.", &["y"]),
        ];
        let index = KeywordIndex::from_examples(&examples);

        assert_eq!(index.len(), 2);
        let keywords: Vec<&str> = index.iter().map(|(k, _)| k).collect();
        assert_eq!(keywords, ["x", "y"]);
        assert_eq!(titles(index.get("x").unwrap()), ["E1"]);
        assert_eq!(titles(index.get("y").unwrap()), ["E1", "E2"]);
        assert!(index.get("z").is_none());
    }

    #[test]
    fn test_index_keeps_manifest_order_within_keyword() {
        let examples = [
            example("z.py", "Zulu", "Z.", &["plot"]),
            example("a.py", "Alpha", "A.", &["plot"]),
        ];
        let index = KeywordIndex::from_examples(&examples);
        assert_eq!(titles(index.get("plot").unwrap()), ["Zulu", "Alpha"]);
    }

    #[test]
    fn test_index_empty_without_keywords() {
        let examples = [example("a.py", "A", "Prose here.", &[])];
        assert!(KeywordIndex::from_examples(&examples).is_empty());
    }

    #[test]
    fn test_render_tag_index() {
        let examples = [
            example("e1.py", "E1", "One.", &["x", "y"]),
            example("e2.py", "E2", "Two.", &["y"]),
        ];
        let index = KeywordIndex::from_examples(&examples);
        let page = render_tag_index(&index, &RenderContext::default());

        assert!(page.starts_with("---\ntitle: Tags\n---\n"));
        let body = page.split_once("';\n\n").unwrap().1;
        assert_eq!(
            body,
            "### x\n<a href={useBaseUrl('docs/examples/e1')}>E1</a>\n\
             \n\n\
             ### y\n<a href={useBaseUrl('docs/examples/e1')}>E1</a>  \
             <a href={useBaseUrl('docs/examples/e2')}>E2</a>\n"
        );
    }
}
