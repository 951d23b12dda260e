//! The tour manifest.
//!
//! One example filename per line, in display order. Blank lines and lines
//! starting with `#` are skipped.
//!
//! ```text
//! # Getting started
//! hello_world.py
//! plot_area.py
//! ```

use crate::{error::TourError, utils::slug::example_slug};
use std::{collections::HashMap, ffi::OsStr, fs, path::Path};

/// Ordered list of example filenames.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    entries: Vec<String>,
}

impl Manifest {
    /// Parse manifest text. Entries are trimmed; order is kept.
    pub fn parse(text: &str) -> Self {
        let entries = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_owned)
            .collect();
        Self { entries }
    }

    /// Load and validate the manifest at `path`.
    ///
    /// Two entries mapping to the same slug would overwrite each other's page,
    /// so they are rejected.
    pub fn load(path: &Path) -> Result<Self, TourError> {
        let text = fs::read_to_string(path).map_err(TourError::missing(path))?;
        let manifest = Self::parse(&text);

        let mut seen: HashMap<String, &str> = HashMap::new();
        for filename in &manifest.entries {
            if let Some(previous) = seen.insert(example_slug(filename), filename) {
                return Err(TourError::MalformedManifest {
                    path: path.to_path_buf(),
                    reason: format!("`{previous}` and `{filename}` share a slug"),
                });
            }
        }

        Ok(manifest)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Whether an entry names `filename`, ignoring any leading directory
    /// such as `./`.
    pub fn contains(&self, filename: &str) -> bool {
        self.entries
            .iter()
            .any(|e| Path::new(e).file_name() == Some(OsStr::new(filename)))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
