//! Annotated example files.
//!
//! An example file starts with a comment header, followed by a separator line
//! and the code body:
//!
//! ```text
//! # Plot / Area
//! # Make an area plot.
//! # plot, area
//! # ---
//! from h2o_wave import site, ui
//! ...
//! ```
//!
//! The first header line is the title, the rest is the description. The
//! second-to-last description line may hold a comma-separated keyword list.
//! With a `# ---` separator that line is the last one carrying text, because
//! the separator's own comment marker contributes an empty trailing line.

use crate::{error::TourError, utils::slug};
use regex::Regex;
use std::{fs, path::Path, sync::LazyLock};
use thiserror::Error;

/// A header/body separator: optional comment markers, then at least three hyphens.
static RE_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t#]*(-{3,})[ \t]*\r?$").unwrap());

/// Why an example file could not be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("missing `---` separator between header and code")]
    MissingSeparator,

    #[error("header needs a title line followed by a description")]
    MissingDescription,
}

/// One documented code sample.
///
/// Built once by [`Example::parse`] and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Example {
    filename: String,
    name: String,
    slug: String,
    title: String,
    subtitle: String,
    description: String,
    keywords: Vec<String>,
    code: String,
}

impl Example {
    /// Parse the contents of an example file.
    pub fn parse(filename: &str, contents: &str) -> Result<Self, ParseError> {
        let sep = RE_SEPARATOR
            .captures(contents)
            .and_then(|caps| caps.get(1))
            .ok_or(ParseError::MissingSeparator)?;

        let header = contents[..sep.start()].trim();
        let code = contents[sep.end()..].trim();

        let mut lines = header.lines().map(strip_comment);
        let title = lines.next().ok_or(ParseError::MissingDescription)?;
        let description: Vec<&str> = lines.collect();
        if description.is_empty() {
            return Err(ParseError::MissingDescription);
        }

        let keywords = description
            .len()
            .checked_sub(2)
            .map(|i| keywords_from_line(description[i]))
            .unwrap_or_default();

        let name = slug::example_name(filename);
        Ok(Self {
            filename: filename.to_owned(),
            slug: slug::slugify_name(&name),
            name,
            title: title.to_owned(),
            subtitle: description[0].trim().to_owned(),
            description: description.join("\n"),
            keywords,
            code: code.to_owned(),
        })
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// First line of the description.
    pub fn subtitle(&self) -> &str {
        &self.subtitle
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn code(&self) -> &str {
        &self.code
    }
}

/// Read and parse `dir/filename`.
pub fn load_example(dir: &Path, filename: &str) -> Result<Example, TourError> {
    let path = dir.join(filename);
    let contents = fs::read_to_string(&path).map_err(TourError::missing(&path))?;
    Example::parse(filename, &contents)
        .map_err(|source| TourError::MalformedExample { path, source })
}

/// Remove surrounding comment markers and spaces.
fn strip_comment(line: &str) -> &str {
    line.trim_matches(|c| c == ' ' || c == '#')
}

/// Interpret a description line as a keyword list.
///
/// The line counts as prose, yielding no keywords, if it contains a period or
/// any comma-separated token contains a space. This misreads short prose
/// without punctuation (`"Simple"`) as a one-keyword list.
///
/// Empty tokens are dropped and repeated ones kept once, so a blank tag line
/// yields no keywords at all. Wave's `sync_examples.py` returns a single empty
/// keyword (`[""]`) for the same line.
pub fn keywords_from_line(line: &str) -> Vec<String> {
    if line.contains('.') {
        return Vec::new();
    }

    let tokens: Vec<&str> = line.split(',').map(str::trim).collect();
    if tokens.iter().any(|t| t.contains(' ')) {
        return Vec::new();
    }

    let mut keywords: Vec<String> = Vec::with_capacity(tokens.len());
    for token in tokens {
        if !token.is_empty() && !keywords.iter().any(|k| k == token) {
            keywords.push(token.to_owned());
        }
    }
    keywords
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const AREA: &str = "\
# Plot / Area
# Make an area plot.
# plot, area
# ---
from h2o_wave import site, ui

page = site['/demo']
page.save()
";

    #[test]
    fn test_parse_header_fields() {
        let e = Example::parse("plot_area.py", AREA).unwrap();
        assert_eq!(e.filename(), "plot_area.py");
        assert_eq!(e.name(), "plot_area");
        assert_eq!(e.slug(), "plot-area");
        assert_eq!(e.title(), "Plot / Area");
        assert_eq!(e.subtitle(), "Make an area plot.");
        assert_eq!(e.description(), "Make an area plot.\nplot, area\n");
        assert_eq!(e.keywords(), ["plot", "area"]);
    }

    #[test]
    fn test_parse_code_body_verbatim() {
        let e = Example::parse("plot_area.py", AREA).unwrap();
        assert_eq!(
            e.code(),
            "from h2o_wave import site, ui\n\npage = site['/demo']\npage.save()"
        );
    }

    #[test]
    fn test_parse_prose_tag_line() {
        let src = "# Flex\n# No description available.\n# ---\nimport random\n";
        let e = Example::parse("flex.py", src).unwrap();
        assert_eq!(e.title(), "Flex");
        assert_eq!(e.subtitle(), "No description available.");
        assert!(e.keywords().is_empty());
    }

    #[test]
    fn test_parse_bare_separator() {
        // A separator without comment marker leaves no empty trailing header line
        let src = "# Form\n# Use a form.\n# form, input\n# Second line\n---\nprint()\n";
        let e = Example::parse("form.py", src).unwrap();
        assert_eq!(e.keywords(), ["form", "input"]);
        assert_eq!(e.code(), "print()");
    }

    #[test]
    fn test_parse_only_first_separator_splits() {
        let src = "# Title\n# Desc.\n# ---\nx = 1\n# ---\ny = 2\n";
        let e = Example::parse("t.py", src).unwrap();
        assert_eq!(e.code(), "x = 1\n# ---\ny = 2");
    }

    #[test]
    fn test_parse_missing_separator() {
        let src = "# Title\n# Description\nprint('hi')\n";
        assert_eq!(
            Example::parse("t.py", src),
            Err(ParseError::MissingSeparator)
        );
    }

    #[test]
    fn test_parse_two_hyphens_is_not_a_separator() {
        let src = "# Title\n# Description\n# --\nprint('hi')\n";
        assert_eq!(
            Example::parse("t.py", src),
            Err(ParseError::MissingSeparator)
        );
    }

    #[test]
    fn test_parse_missing_description() {
        assert_eq!(
            Example::parse("t.py", "# Title only\n---\ncode\n"),
            Err(ParseError::MissingDescription)
        );
        assert_eq!(
            Example::parse("t.py", "---\ncode\n"),
            Err(ParseError::MissingDescription)
        );
    }

    #[test]
    fn test_keywords_from_tag_line() {
        assert_eq!(keywords_from_line("a, b, c"), ["a", "b", "c"]);
        assert_eq!(keywords_from_line("  table ,form"), ["table", "form"]);
    }

    #[test]
    fn test_keywords_from_prose_with_period() {
        assert!(keywords_from_line("This is a sentence.").is_empty());
        assert!(keywords_from_line("plot, v1.2").is_empty());
    }

    #[test]
    fn test_keywords_from_prose_with_space() {
        assert!(keywords_from_line("foo bar, baz").is_empty());
        assert!(keywords_from_line("Use a form").is_empty());
    }

    #[test]
    fn test_keywords_drop_empty_and_duplicate_tokens() {
        assert!(keywords_from_line("").is_empty());
        assert_eq!(keywords_from_line("a,, b, a"), ["a", "b"]);
    }

    #[test]
    fn test_parse_blank_tag_line_has_no_keywords() {
        let e = Example::parse("t.py", "# Title\n# Desc.\n#\n# ---\nx = 1\n").unwrap();
        assert!(e.keywords().is_empty());
    }

    #[test]
    fn test_strip_comment() {
        assert_eq!(strip_comment("# Title #"), "Title");
        assert_eq!(strip_comment("## Title"), "Title");
        assert_eq!(strip_comment("#"), "");
    }

    #[test]
    fn test_load_example_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = load_example(dir.path(), "nope.py").unwrap_err();
        assert!(matches!(err, TourError::MissingFile(..)));
    }

    #[test]
    fn test_load_example_malformed() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("bad.py"), "# Title\nno separator\n").unwrap();
        let err = load_example(dir.path(), "bad.py").unwrap_err();
        match err {
            TourError::MalformedExample { path, source } => {
                assert!(path.ends_with("bad.py"));
                assert_eq!(source, ParseError::MissingSeparator);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
