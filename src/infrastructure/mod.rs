//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementations (Local, plus an in-memory mock for tests)
//! - `repositories/` - YAML document store

pub mod fs;
pub mod repositories;

// Re-export for convenience
pub use fs::LocalFs;
pub use repositories::{parse_document, LoadedDocument, YamlDocumentStore};
