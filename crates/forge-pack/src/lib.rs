//! Packaging assembler for MCP Forge.
//!
//! Collects generated files into an ordered [`FileSet`], materializes them
//! on disk, and writes a deterministic ZIP archive. Duplicate paths and
//! filesystem failures are reported with the offending path; a partially
//! written archive is never left at the final location.

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod assemble;
mod error;
mod fileset;

pub use assemble::{ArchiveHandle, Assembler};
pub use error::{PackError, Result};
pub use fileset::{FileEntry, FileSet};
