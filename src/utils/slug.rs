//! Name and slug derivation for example files.
//!
//! | filename           | name         | slug         |
//! |--------------------|--------------|--------------|
//! | `my_example.py`    | `my_example` | `my-example` |
//! | `plot_area.py`     | `plot_area`  | `plot-area`  |
//! | `flex`             | `flex`       | `flex`       |

use std::path::Path;

/// Strip the extension from an example filename.
///
/// Directory components, if any, are kept out: only the file stem counts.
pub fn example_name(filename: &str) -> String {
    Path::new(filename)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| filename.to_owned())
}

/// Turn an identifier-style name into its URL form.
pub fn slugify_name(name: &str) -> String {
    name.replace('_', "-")
}

/// Slug for an example filename, e.g. `"my_example.py"` → `"my-example"`.
pub fn example_slug(filename: &str) -> String {
    slugify_name(&example_name(filename))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_name_strips_extension() {
        assert_eq!(example_name("my_example.py"), "my_example");
        assert_eq!(example_name("flex"), "flex");
        assert_eq!(example_name("archive.tar.gz"), "archive.tar");
    }

    #[test]
    fn test_example_slug() {
        assert_eq!(example_slug("my_example.py"), "my-example");
        assert_eq!(example_slug("plot_area_stacked.py"), "plot-area-stacked");
        assert_eq!(example_slug("hello.py"), "hello");
    }

    #[test]
    fn test_slugify_is_idempotent() {
        let once = example_slug("my_example.py");
        assert_eq!(slugify_name(&once), once);
        assert_eq!(example_slug("my_example.py"), once);
    }
}
