//! Errors raised while loading and writing the tour.

use crate::example::ParseError;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal pipeline errors. Any of these aborts the run.
#[derive(Debug, Error)]
pub enum TourError {
    #[error("malformed example `{path}`: {source}")]
    MalformedExample {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("malformed manifest `{path}`: {reason}")]
    MalformedManifest { path: PathBuf, reason: String },

    #[error("file not found: `{0}`")]
    MissingFile(PathBuf, #[source] std::io::Error),

    #[error("IO error when writing `{0}`")]
    Io(PathBuf, #[source] std::io::Error),
}

impl TourError {
    /// Map a read failure on `path` to `MissingFile`.
    pub fn missing(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |err| Self::MissingFile(path, err)
    }
}
