//! YAML Document Store
//!
//! Loads and saves whole YAML documents through the FileSystem port.

use std::path::Path;

use log::debug;
use serde_yaml_ng::Value;

use crate::domain::document::{value_kind, Document};
use crate::domain::ports::{FileAction, FileError, FileSystem, FsResult};

/// A document together with the exact text it was parsed from
#[derive(Debug, Clone)]
pub struct LoadedDocument {
    pub document: Document,
    pub source: String,
}

/// YAML-backed document store
pub struct YamlDocumentStore<FS: FileSystem> {
    fs: FS,
}

impl<FS: FileSystem> YamlDocumentStore<FS> {
    pub fn new(fs: FS) -> Self {
        Self { fs }
    }

    pub fn fs(&self) -> &FS {
        &self.fs
    }

    /// Load `path` after checking it can be both read and written back.
    ///
    /// Fails as a whole: no partially parsed document is ever returned.
    pub fn load(&self, path: &Path) -> FsResult<LoadedDocument> {
        debug!("checking access to {}", path.display());
        self.fs.check_access(path)?;

        let source = self.fs.read(path)?;
        let document = parse_document(&source)
            .map_err(|cause| FileError::unexpected(path, FileAction::Loading, cause))?;
        debug!(
            "loaded {} ({} top-level keys)",
            path.display(),
            document.root().len()
        );

        Ok(LoadedDocument { document, source })
    }

    /// Serialize the full document the way `save` would write it
    pub fn render(&self, path: &Path, document: &Document) -> FsResult<String> {
        serde_yaml_ng::to_string(document.root())
            .map_err(|e| FileError::unexpected(path, FileAction::Saving, e))
    }

    /// Overwrite `path` with the full serialized document
    pub fn save(&self, path: &Path, document: &Document) -> FsResult<()> {
        let content = self.render(path, document)?;
        debug!("writing {} bytes to {}", content.len(), path.display());
        self.fs.write(path, &content)
    }
}

/// Parse YAML text into a document whose root must be a mapping
pub fn parse_document(source: &str) -> Result<Document, String> {
    let value: Value = serde_yaml_ng::from_str(source).map_err(|e| e.to_string())?;
    match value {
        Value::Mapping(root) => Ok(Document::new(root)),
        other => Err(format!(
            "expected a mapping at the document root, found {}",
            value_kind(&other)
        )),
    }
}
