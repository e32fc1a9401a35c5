//! Update requests, one variant per command

use crate::domain::{ImageUpdate, Target};

/// What to change, independent of how it was asked for (flags, env vars)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateRequest {
    /// Version and/or repository of an image section
    Image(ImageUpdate),
    /// `image.tag` only
    Tag { target: Target, version: String },
    /// `image.repository` only
    Repository { target: Target, repository: String },
    /// `appVersion` of a Chart.yaml
    AppVersion { version: String },
}
