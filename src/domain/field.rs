//! Updatable fields

use serde::Serialize;

/// A scalar field the updater knows how to set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    /// `image.tag` in a values file
    Tag,
    /// `image.repository` in a values file
    Repository,
    /// Top-level `appVersion` in a Chart.yaml
    AppVersion,
}

impl Field {
    /// YAML key holding this field
    pub fn key(self) -> &'static str {
        match self {
            Field::Tag => "tag",
            Field::Repository => "repository",
            Field::AppVersion => "appVersion",
        }
    }

    /// Name used in operator messages ("Version 1.2.3 has been set ...")
    pub fn label(self) -> &'static str {
        match self {
            Field::Tag => "version",
            Field::Repository => "repository",
            Field::AppVersion => "appVersion",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
