//! Update Use Case
//!
//! Loads one YAML file, applies the requested change and saves it back
//! only when a value actually differs.

use std::path::Path;

use log::{debug, info};

use crate::domain::ports::FileSystem;
use crate::domain::{apply_app_version, apply_image_update, FieldChange, ImageUpdate, Target};
use crate::error::{UpdaterError, UpdaterResult};
use crate::infrastructure::{LoadedDocument, YamlDocumentStore};

use super::options::UpdateOptions;
use super::request::UpdateRequest;
use super::result::{Preview, UpdateOutcome};

/// Update use case - one load, at most one save
pub struct UpdateUseCase<FS>
where
    FS: FileSystem,
{
    store: YamlDocumentStore<FS>,
}

impl<FS> UpdateUseCase<FS>
where
    FS: FileSystem,
{
    /// Create a new update use case
    pub fn new(fs: FS) -> Self {
        Self {
            store: YamlDocumentStore::new(fs),
        }
    }

    /// Dispatch any request to the matching updater
    pub fn execute(
        &self,
        path: &Path,
        request: &UpdateRequest,
        options: &UpdateOptions,
    ) -> UpdaterResult<UpdateOutcome> {
        match request {
            UpdateRequest::Image(update) => self.update_image(path, update, options),
            UpdateRequest::Tag { target, version } => {
                self.update_tag(path, target, version, options)
            }
            UpdateRequest::Repository { target, repository } => {
                self.update_repository(path, target, repository, options)
            }
            UpdateRequest::AppVersion { version } => {
                self.update_app_version(path, version, options)
            }
        }
    }

    /// Update version and/or repository of an image section.
    ///
    /// An empty request fails before the file is touched.
    pub fn update_image(
        &self,
        path: &Path,
        update: &ImageUpdate,
        options: &UpdateOptions,
    ) -> UpdaterResult<UpdateOutcome> {
        if update.is_empty() {
            return Err(UpdaterError::NoFieldsRequested);
        }

        let mut loaded = self.store.load(path)?;
        debug!("resolving image section for chart \"{}\"", update.target);
        let changes = apply_image_update(&mut loaded.document, update)?;

        self.finish(path, loaded, changes, options)
    }

    pub fn update_tag(
        &self,
        path: &Path,
        target: &Target,
        version: &str,
        options: &UpdateOptions,
    ) -> UpdaterResult<UpdateOutcome> {
        let update = ImageUpdate::new(target.clone()).with_version(version);
        self.update_image(path, &update, options)
    }

    pub fn update_repository(
        &self,
        path: &Path,
        target: &Target,
        repository: &str,
        options: &UpdateOptions,
    ) -> UpdaterResult<UpdateOutcome> {
        let update = ImageUpdate::new(target.clone()).with_repository(repository);
        self.update_image(path, &update, options)
    }

    /// Update `appVersion` in a Chart.yaml, which must already have one
    pub fn update_app_version(
        &self,
        path: &Path,
        version: &str,
        options: &UpdateOptions,
    ) -> UpdaterResult<UpdateOutcome> {
        let mut loaded = self.store.load(path)?;
        let change = apply_app_version(&mut loaded.document, version).ok_or_else(|| {
            UpdaterError::MissingAppVersion {
                file: path.to_path_buf(),
            }
        })?;

        self.finish(path, loaded, vec![change], options)
    }

    /// Persist (or preview) the document if any field changed
    fn finish(
        &self,
        path: &Path,
        loaded: LoadedDocument,
        changes: Vec<FieldChange>,
        options: &UpdateOptions,
    ) -> UpdaterResult<UpdateOutcome> {
        let updated = changes.iter().any(FieldChange::changed);
        let mut outcome = UpdateOutcome {
            file: path.to_path_buf(),
            changes,
            updated,
            written: false,
            dry_run: options.dry_run,
            preview: None,
        };

        if !updated {
            info!("{} already up to date, not rewriting", path.display());
            return Ok(outcome);
        }

        if options.dry_run {
            let after = self.store.render(path, &loaded.document)?;
            info!("dry run: {} left untouched", path.display());
            outcome.preview = Some(Preview {
                before: loaded.source,
                after,
            });
            return Ok(outcome);
        }

        self.store.save(path, &loaded.document)?;
        info!(
            "saved {} ({} field(s) changed)",
            path.display(),
            outcome.changed_count()
        );
        outcome.written = true;

        Ok(outcome)
    }
}
