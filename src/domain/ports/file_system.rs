//! FileSystem port - abstraction over file I/O operations
//!
//! This trait allows the updater to load and save values files
//! without depending on concrete implementations (local disk, mock).

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type for file system operations
pub type FsResult<T> = Result<T, FileError>;

/// Which half of the read-modify-write cycle failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAction {
    Loading,
    Saving,
}

impl std::fmt::Display for FileAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileAction::Loading => write!(f, "loading"),
            FileAction::Saving => write!(f, "saving"),
        }
    }
}

/// File access errors
#[derive(Error, Debug)]
pub enum FileError {
    /// File not found
    #[error("the file \"{}\" does not exist", path.display())]
    NotFound { path: PathBuf },

    /// The file cannot be opened for both reading and writing
    #[error("permission denied to read/write the file \"{}\"", path.display())]
    PermissionDenied { path: PathBuf },

    /// Malformed YAML or any other I/O fault
    #[error("an unexpected error occurred while {action} the file \"{}\": {message}", path.display())]
    Unexpected {
        path: PathBuf,
        action: FileAction,
        message: String,
    },
}

impl FileError {
    /// Classify an I/O error raised while working on `path`
    pub fn from_io(path: &Path, action: FileAction, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FileError::NotFound {
                path: path.to_path_buf(),
            },
            std::io::ErrorKind::PermissionDenied => FileError::PermissionDenied {
                path: path.to_path_buf(),
            },
            _ => FileError::unexpected(path, action, err),
        }
    }

    /// Build an `Unexpected` error from anything displayable
    pub fn unexpected(path: &Path, action: FileAction, cause: impl std::fmt::Display) -> Self {
        FileError::Unexpected {
            path: path.to_path_buf(),
            action,
            message: cause.to_string(),
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            FileError::NotFound { path }
            | FileError::PermissionDenied { path }
            | FileError::Unexpected { path, .. } => path,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            FileError::NotFound { .. } => "not_found",
            FileError::PermissionDenied { .. } => "permission_denied",
            FileError::Unexpected { .. } => "unexpected",
        }
    }
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O with atomic writes
/// - `MockFileSystem` - in-memory for testing
pub trait FileSystem {
    /// Fail unless `path` can be opened for both reading and writing
    fn check_access(&self, path: &Path) -> FsResult<()>;

    /// Read file content as string
    fn read(&self, path: &Path) -> FsResult<String>;

    /// Replace file content
    fn write(&self, path: &Path, content: &str) -> FsResult<()>;
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn check_access(&self, path: &Path) -> FsResult<()> {
        (**self).check_access(path)
    }

    fn read(&self, path: &Path) -> FsResult<String> {
        (**self).read(path)
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        (**self).write(path, content)
    }
}
