//! Error types for Fingerfist tooling

use std::path::{Path, PathBuf};
use thiserror::Error;

/// The main error type for asset generation
#[derive(Debug, Error)]
pub enum FingerfistError {
    /// Malformed catalog data: bad color, zero dimension, duplicate path, count mismatch
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// A directory could not be created or a file could not be written
    #[error("Filesystem error at {}: {}", .path.display(), .source)]
    FilesystemError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FingerfistError {
    /// Wrap an I/O error together with the path it occurred on
    pub fn filesystem(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        FingerfistError::FilesystemError {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Shorthand for a `ValidationError` built from anything displayable
    pub fn validation(message: impl Into<String>) -> Self {
        FingerfistError::ValidationError(message.into())
    }
}

/// Result type alias for Fingerfist operations
pub type Result<T> = std::result::Result<T, FingerfistError>;
