//! Packaging error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while staging files or writing the archive.
#[derive(Error, Debug)]
pub enum PackError {
    /// Two generated files claimed the same path in one package
    #[error("Duplicate path in package: {path}")]
    DuplicatePath {
        /// The conflicting path
        path: String,
    },

    /// Filesystem operation failed (disk full, permission denied, ...)
    #[error("I/O failure at {path}: {source}")]
    Io {
        /// The path the operation was touching
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The archive writer rejected the operation
    #[error("Archive failure: {source}")]
    Zip {
        /// The underlying zip error
        #[from]
        source: zip::result::ZipError,
    },
}

impl PackError {
    /// Returns true if this is a duplicate-path conflict.
    #[must_use]
    pub const fn is_duplicate_path(&self) -> bool {
        matches!(self, Self::DuplicatePath { .. })
    }

    /// Returns true if this is a filesystem I/O failure.
    #[must_use]
    pub const fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// Returns true if this is an archive-level failure.
    #[must_use]
    pub const fn is_zip(&self) -> bool {
        matches!(self, Self::Zip { .. })
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias for packaging operations.
pub type Result<T> = std::result::Result<T, PackError>;
