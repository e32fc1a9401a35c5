//! Repository Implementations
//!
//! Persistence of YAML documents through the FileSystem port.

mod yaml;

pub use yaml::{parse_document, LoadedDocument, YamlDocumentStore};
