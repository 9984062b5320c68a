//! File and directory helpers
//!
//! Thin wrappers over `std::fs` that keep "file is missing" distinct from
//! other I/O failures, so callers can tell an absent document from an
//! unreadable one.

use miette::Diagnostic;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File access errors
#[derive(Debug, Error, Diagnostic)]
pub enum FileError {
    #[error("File not found: {}", path.display())]
    #[diagnostic(code(curriculum::file::not_found))]
    NotFound { path: PathBuf },

    #[error("I/O error on {}: {source}", path.display())]
    #[diagnostic(code(curriculum::file::io))]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FileError {
    fn from_io(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            FileError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            FileError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}

/// Create a directory and any missing parents
pub fn ensure_directory(dir: impl AsRef<Path>) -> Result<PathBuf, FileError> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir).map_err(|e| FileError::Io {
        path: dir.to_path_buf(),
        source: e,
    })?;
    Ok(dir.to_path_buf())
}

/// Write text to a file, creating parent directories as needed
pub fn write_file(path: impl AsRef<Path>, content: &str) -> Result<(), FileError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_directory(parent)?;
    }

    std::fs::write(path, content).map_err(|e| FileError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote file");
    Ok(())
}

/// Read an entire file as UTF-8 text
pub fn read_file(path: impl AsRef<Path>) -> Result<String, FileError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| FileError::from_io(path, e))?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "read file");
    Ok(content)
}
