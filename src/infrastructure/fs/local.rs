//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::debug;

use crate::domain::ports::{FileAction, FileError, FileSystem, FsResult};

/// Local file system implementation
///
/// Writes go through a temporary file in the destination directory and are
/// renamed into place, so a failed save never leaves a half-written file.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn check_access(&self, path: &Path) -> FsResult<()> {
        // Opening with write(true) and no truncate/create leaves the file as is.
        OpenOptions::new()
            .read(true)
            .write(true)
            .open(path)
            .map(drop)
            .map_err(|e| FileError::from_io(path, FileAction::Loading, e))
    }

    fn read(&self, path: &Path) -> FsResult<String> {
        std::fs::read_to_string(path).map_err(|e| FileError::from_io(path, FileAction::Loading, e))
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        atomic_write(path, content.as_bytes())
            .map_err(|e| FileError::unexpected(path, FileAction::Saving, e))
    }
}

/// Write `content` to `path` via tempfile + rename.
///
/// Symlinks are followed so the link itself survives, and the existing
/// file's permission bits are carried over to the replacement. When the
/// directory refuses new entries the file is rewritten in place instead.
fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let destination = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());

    match replace_via_tempfile(&destination, content) {
        Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
            debug!(
                "cannot create a temporary file next to {}, writing in place",
                destination.display()
            );
            write_in_place(&destination, content)
        }
        other => other,
    }
}

fn replace_via_tempfile(destination: &Path, content: &[u8]) -> io::Result<()> {
    let dir = parent_dir(destination);

    let mut tmp = tempfile::NamedTempFile::new_in(&dir)?;
    tmp.write_all(content)?;
    tmp.as_file().sync_all()?;

    if let Ok(meta) = std::fs::metadata(destination) {
        tmp.as_file().set_permissions(meta.permissions())?;
    }

    tmp.persist(destination).map_err(|e| e.error)?;
    Ok(())
}

/// Truncate and rewrite the existing file; keeps inode, owner and hard links
fn write_in_place(destination: &Path, content: &[u8]) -> io::Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .truncate(true)
        .open(destination)?;
    file.write_all(content)?;
    file.sync_all()
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
