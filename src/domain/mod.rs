//! Domain Layer
//!
//! Pure document model and update rules. Nothing here touches the disk;
//! file access goes through the [`ports::FileSystem`] port.
//!
//! ## Structure
//!
//! - `document` - parsed YAML document and image section resolution
//! - `field` - the fields an update can target
//! - `update` - compare-and-apply rules for image and chart updates
//! - `ports` - interfaces implemented by the infrastructure layer

pub mod document;
pub mod field;
pub mod ports;
pub mod update;

pub use document::{Document, ImageSection, LookupMiss, Target};
pub use field::Field;
pub use update::{apply_app_version, apply_image_update, FieldChange, ImageUpdate};
