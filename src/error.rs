//! Error types for helm-image-updater
//!
//! Uses `thiserror` for library errors. The binary wraps these in
//! `anyhow::Error` at the command boundary.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::document::Target;
use crate::domain::ports::FileError;

/// Result type alias for updater operations
pub type UpdaterResult<T> = Result<T, UpdaterError>;

/// Main error type for updater operations
#[derive(Error, Debug)]
pub enum UpdaterError {
    /// Loading or saving the YAML file failed
    #[error(transparent)]
    File(#[from] FileError),

    /// `image` was invoked without a version or a repository
    #[error("should set a value for version and/or repository")]
    NoFieldsRequested,

    /// The chart key is absent from the values file or is not a mapping
    #[error("cannot find section for chart \"{chart}\" ({reason})")]
    SectionNotFound { chart: String, reason: String },

    /// The resolved section has no `image` mapping
    #[error("cannot find 'image' section for chart \"{target}\"")]
    ImageSectionMissing { target: Target },

    /// The chart file has no `appVersion`
    #[error("the file {} does not seem to be a valid Chart.yaml (missing 'appVersion')", file.display())]
    MissingAppVersion { file: PathBuf },
}

impl UpdaterError {
    /// Stable machine-readable name, used by JSON output
    pub fn kind(&self) -> &'static str {
        match self {
            UpdaterError::File(err) => err.kind(),
            UpdaterError::NoFieldsRequested => "no_fields_requested",
            UpdaterError::SectionNotFound { .. } => "section_not_found",
            UpdaterError::ImageSectionMissing { .. } => "image_section_missing",
            UpdaterError::MissingAppVersion { .. } => "missing_app_version",
        }
    }
}
