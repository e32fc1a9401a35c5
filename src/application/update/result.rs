//! Update result types

use std::path::PathBuf;

use crate::domain::FieldChange;

/// Before/after text of a rewrite that was not written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub before: String,
    pub after: String,
}

/// Result of an update operation
#[derive(Debug, Clone)]
pub struct UpdateOutcome {
    /// File that was updated (or would have been)
    pub file: PathBuf,
    /// One entry per requested field, changed or not
    pub changes: Vec<FieldChange>,
    /// Whether any field's value differs from the requested one
    pub updated: bool,
    /// Whether the file was rewritten on disk
    pub written: bool,
    /// Whether this was a dry run
    pub dry_run: bool,
    /// Rendered rewrite, only for dry runs with changes
    pub preview: Option<Preview>,
}

impl UpdateOutcome {
    /// Operator-facing message per requested field
    pub fn messages(&self) -> Vec<String> {
        self.changes
            .iter()
            .map(|change| change.message(&self.file))
            .collect()
    }

    /// Number of fields whose value changed
    pub fn changed_count(&self) -> usize {
        self.changes.iter().filter(|c| c.changed()).count()
    }
}
