//! Loading rule files from disk.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failure to read a rule file.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("cannot find file '{}'", .0.display())]
    NotFound(PathBuf),

    #[error("permission denied reading '{}'", .0.display())]
    PermissionDenied(PathBuf),

    #[error("'{}' contains invalid UTF-8 data", .0.display())]
    InvalidUtf8(PathBuf),

    #[error("error reading '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SourceError {
    /// Classify an I/O error raised while reading `path`.
    pub fn from_io(path: &Path, error: io::Error) -> Self {
        let path = path.to_path_buf();
        match error.kind() {
            io::ErrorKind::NotFound => SourceError::NotFound(path),
            io::ErrorKind::PermissionDenied => SourceError::PermissionDenied(path),
            io::ErrorKind::InvalidData => SourceError::InvalidUtf8(path),
            _ => SourceError::Io {
                path,
                source: error,
            },
        }
    }

    /// The file that could not be read.
    pub fn path(&self) -> &Path {
        match self {
            SourceError::NotFound(path)
            | SourceError::PermissionDenied(path)
            | SourceError::InvalidUtf8(path)
            | SourceError::Io { path, .. } => path,
        }
    }
}

/// Read a whole rule file as UTF-8 text.
#[tracing::instrument(level = "debug", skip_all, fields(path = %path.as_ref().display()))]
pub fn load_source(path: impl AsRef<Path>) -> Result<String, SourceError> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|error| SourceError::from_io(path, error))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests;
