//! Materializes a [`FileSet`] on disk and zips it.

use crate::error::{PackError, Result};
use crate::fileset::FileSet;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// A finished archive on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveHandle {
    /// Final archive location
    pub path: PathBuf,
    /// Archive size in bytes
    pub bytes: u64,
    /// Number of members written
    pub members: usize,
}

/// Writes staged files to a directory and produces a deterministic ZIP.
#[derive(Debug)]
pub struct Assembler;

impl Assembler {
    /// Stages `files` under `staging_dir`, then writes the archive.
    ///
    /// The archive is built at a temporary name next to `archive_path` and
    /// only renamed into place after every member is written, so a partial
    /// archive is never visible at the final path. Member order follows
    /// the set's lexicographic ordering and every member carries the same
    /// fixed modification timestamp; identical input yields a byte-identical
    /// archive.
    ///
    /// # Errors
    ///
    /// Returns [`PackError::Io`] naming the offending path on filesystem
    /// failures, or [`PackError::Zip`] if the archive writer fails.
    pub fn assemble(
        files: &FileSet,
        staging_dir: &Path,
        archive_path: &Path,
    ) -> Result<ArchiveHandle> {
        Self::stage(files, staging_dir)?;
        Self::write_archive(files, archive_path)
    }

    /// Writes every staged file under `staging_dir`, creating parents.
    pub fn stage(files: &FileSet, staging_dir: &Path) -> Result<()> {
        for (path, entry) in files.iter() {
            let target = staging_dir.join(path);
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).map_err(|e| PackError::io(parent, e))?;
            }
            fs::write(&target, &entry.content).map_err(|e| PackError::io(&target, e))?;
            if entry.executable {
                set_executable(&target)?;
            }
        }
        tracing::debug!(count = files.len(), dir = %staging_dir.display(), "staged files");
        Ok(())
    }

    fn write_archive(files: &FileSet, archive_path: &Path) -> Result<ArchiveHandle> {
        let parent = archive_path.parent().unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(parent).map_err(|e| PackError::io(parent, e))?;

        let temp = NamedTempFile::new_in(parent).map_err(|e| PackError::io(parent, e))?;
        let mut zip = ZipWriter::new(temp);

        // Fixed timestamp (zip epoch) keeps archives byte-identical across runs
        let base_options = SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Deflated)
            .last_modified_time(zip::DateTime::default());

        for (path, entry) in files.iter() {
            let mode = if entry.executable { 0o755 } else { 0o644 };
            zip.start_file(path, base_options.unix_permissions(mode))?;
            zip.write_all(entry.content.as_bytes())
                .map_err(|e| PackError::io(archive_path, e))?;
        }

        let temp = zip.finish()?;
        temp.persist(archive_path)
            .map_err(|e| PackError::io(archive_path, e.error))?;

        let bytes = fs::metadata(archive_path)
            .map_err(|e| PackError::io(archive_path, e))?
            .len();
        tracing::info!(
            archive = %archive_path.display(),
            members = files.len(),
            bytes,
            "archive written"
        );
        Ok(ArchiveHandle {
            path: archive_path.to_path_buf(),
            bytes,
            members: files.len(),
        })
    }
}

#[cfg(unix)]
fn set_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
        .map_err(|e| PackError::io(path, e))
}

#[cfg(not(unix))]
fn set_executable(_path: &Path) -> Result<()> {
    Ok(())
}
