//! In-memory staging set for package members.

use crate::error::{PackError, Result};
use std::collections::BTreeMap;

/// One staged file awaiting assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Complete file content
    pub content: String,
    /// Whether the file gets the executable bit on Unix
    pub executable: bool,
}

/// Ordered set of files destined for one package.
///
/// Paths are relative to the package root. Insertion of a path that is
/// already present is a [`PackError::DuplicatePath`]; the set never
/// silently overwrites. Iteration order is lexicographic by path, which is
/// what makes the resulting archive deterministic.
#[derive(Debug, Default, Clone)]
pub struct FileSet {
    entries: BTreeMap<String, FileEntry>,
}

impl FileSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a regular file.
    ///
    /// # Errors
    ///
    /// Returns [`PackError::DuplicatePath`] if the path is already staged.
    pub fn add(&mut self, path: impl Into<String>, content: impl Into<String>) -> Result<()> {
        self.insert(path.into(), content.into(), false)
    }

    /// Adds a file that should be marked executable.
    ///
    /// # Errors
    ///
    /// Returns [`PackError::DuplicatePath`] if the path is already staged.
    pub fn add_executable(
        &mut self,
        path: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<()> {
        self.insert(path.into(), content.into(), true)
    }

    fn insert(&mut self, path: String, content: String, executable: bool) -> Result<()> {
        if self.entries.contains_key(&path) {
            return Err(PackError::DuplicatePath { path });
        }
        self.entries.insert(
            path,
            FileEntry {
                content,
                executable,
            },
        );
        Ok(())
    }

    /// Iterates entries in lexicographic path order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FileEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of staged files.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is staged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
