//! Filesystem helpers for reading the tour and writing pages.

use crate::error::TourError;
use std::{
    fs,
    path::{Path, PathBuf},
};
use walkdir::WalkDir;

/// Files to ignore when listing the examples directory
pub const IGNORED_FILES: &[&str] = &[".DS_Store"];

/// Write `text` to `path`, replacing any existing file.
///
/// Missing parent directories are created.
pub fn write_file(path: &Path, text: &str) -> Result<(), TourError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|err| TourError::Io(parent.to_path_buf(), err))?;
    }
    fs::write(path, text).map_err(|err| TourError::Io(path.to_path_buf(), err))
}

/// Path of the thumbnail image for `slug`.
pub fn thumbnail_path(dir: &Path, slug: &str) -> PathBuf {
    dir.join(format!("{slug}.png"))
}

/// Whether `dir/{slug}.png` exists.
pub fn thumbnail_exists(dir: &Path, slug: &str) -> bool {
    thumbnail_path(dir, slug).is_file()
}

/// File names directly inside `dir`, sorted, skipping hidden and ignored files.
pub fn list_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| e.file_name().to_str().map(str::to_owned))
        .filter(|name| !name.starts_with('.') && !IGNORED_FILES.contains(&name.as_str()))
        .collect();
    names.sort();
    names
}
