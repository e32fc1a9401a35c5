//! helm-image-updater - bump image references in Helm YAML files
//!
//! Updates `image.repository`, `image.tag` (optionally under a subchart
//! key) in values files and `appVersion` in Chart.yaml files, rewriting
//! the file only when a value actually changes.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{Preview, UpdateOptions, UpdateOutcome, UpdateRequest, UpdateUseCase};
pub use domain::{Document, Field, FieldChange, ImageUpdate, Target};
pub use error::{UpdaterError, UpdaterResult};
pub use infrastructure::{parse_document, LocalFs, YamlDocumentStore};
