//! Field comparison and mutation
//!
//! Pure functions over a [`Document`]: they decide which fields change
//! and apply the change in memory. Persisting is the caller's job.

use std::path::Path;

use serde::Serialize;

use crate::domain::document::{Document, Target};
use crate::domain::field::Field;
use crate::error::{UpdaterError, UpdaterResult};

/// Requested changes to an image section
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImageUpdate {
    pub target: Target,
    pub version: Option<String>,
    pub repository: Option<String>,
}

impl ImageUpdate {
    pub fn new(target: Target) -> Self {
        Self {
            target,
            ..Self::default()
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn with_repository(mut self, repository: impl Into<String>) -> Self {
        self.repository = Some(repository.into());
        self
    }

    /// True when neither version nor repository was supplied
    pub fn is_empty(&self) -> bool {
        self.version.is_none() && self.repository.is_none()
    }

    /// Requested fields in reporting order (tag first)
    pub fn fields(&self) -> impl Iterator<Item = (Field, &str)> {
        [
            (Field::Tag, self.version.as_deref()),
            (Field::Repository, self.repository.as_deref()),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|v| (field, v)))
    }
}

/// Comparison result for one requested field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldChange {
    pub field: Field,
    #[serde(rename = "chart")]
    pub target: Target,
    pub previous: Option<String>,
    pub requested: String,
}

impl FieldChange {
    /// Whether the requested value differs from the current one
    pub fn changed(&self) -> bool {
        self.previous.as_deref() != Some(self.requested.as_str())
    }

    /// Operator-facing message for this field
    pub fn message(&self, file: &Path) -> String {
        let value = &self.requested;
        match (self.field, self.changed()) {
            (Field::AppVersion, true) => format!(
                "appVersion {} has been set successfully in {}.",
                value,
                file.display()
            ),
            (Field::AppVersion, false) => format!(
                "New appVersion {} is the same as the one in {}.",
                value,
                file.display()
            ),
            (field, true) => {
                let chart = match self.target.chart() {
                    Some(name) => format!(" in the chart {}", name),
                    None => String::new(),
                };
                format!(
                    "{} {} has been set successfully{}.",
                    capitalize(field.label()),
                    value,
                    chart
                )
            }
            (field, false) => format!(
                "New {} {} is the same as the one in {}.",
                field.label(),
                value,
                file.display()
            ),
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Compare and apply an image update in memory.
///
/// Every requested field gets a [`FieldChange`], changed or not.
pub fn apply_image_update(
    document: &mut Document,
    update: &ImageUpdate,
) -> UpdaterResult<Vec<FieldChange>> {
    if update.is_empty() {
        return Err(UpdaterError::NoFieldsRequested);
    }

    let mut section = document.image_section_mut(&update.target)?;
    let mut changes = Vec::new();

    for (field, requested) in update.fields() {
        let change = FieldChange {
            field,
            target: update.target.clone(),
            previous: section.get(field),
            requested: requested.to_string(),
        };
        if change.changed() {
            section.set(field, requested);
        }
        changes.push(change);
    }

    Ok(changes)
}

/// Compare and apply an `appVersion` update in memory.
///
/// Returns `None` when the document has no `appVersion` to replace.
pub fn apply_app_version(document: &mut Document, version: &str) -> Option<FieldChange> {
    let previous = document.app_version()?;
    let change = FieldChange {
        field: Field::AppVersion,
        target: Target::Root,
        previous: Some(previous),
        requested: version.to_string(),
    };
    if change.changed() {
        document.set_app_version(version);
    }
    Some(change)
}
