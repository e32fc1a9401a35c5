//! In-memory YAML document and image section resolution
//!
//! A [`Document`] is a parsed values file or Chart.yaml whose root is a
//! mapping. Lookups into it are typed: a key is either found with the
//! expected shape, absent, or present with the wrong shape.

use serde::{Serialize, Serializer};
use serde_yaml_ng::{Mapping, Value};

use crate::domain::field::Field;
use crate::error::{UpdaterError, UpdaterResult};

const IMAGE_KEY: &str = "image";

/// Where the `image` mapping is expected to live
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Target {
    /// The document root
    #[default]
    Root,
    /// A top-level key naming a subchart
    Chart(String),
}

impl Target {
    pub fn from_chart(chart: Option<String>) -> Self {
        match chart {
            Some(name) => Target::Chart(name),
            None => Target::Root,
        }
    }

    pub fn chart(&self) -> Option<&str> {
        match self {
            Target::Root => None,
            Target::Chart(name) => Some(name),
        }
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Target::Root => f.write_str("root"),
            Target::Chart(name) => f.write_str(name),
        }
    }
}

impl Serialize for Target {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Target::Root => serializer.serialize_none(),
            Target::Chart(name) => serializer.serialize_some(name),
        }
    }
}

/// Why a key lookup did not yield a mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupMiss {
    Absent,
    WrongShape(&'static str),
}

impl std::fmt::Display for LookupMiss {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LookupMiss::Absent => f.write_str("key is absent"),
            LookupMiss::WrongShape(kind) => write!(f, "expected a mapping, found {}", kind),
        }
    }
}

/// Short name of a value's YAML kind, for diagnostics
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

pub fn lookup_mapping<'a>(mapping: &'a Mapping, key: &str) -> Result<&'a Mapping, LookupMiss> {
    match mapping.get(key) {
        None => Err(LookupMiss::Absent),
        Some(Value::Mapping(found)) => Ok(found),
        Some(other) => Err(LookupMiss::WrongShape(value_kind(other))),
    }
}

pub fn lookup_mapping_mut<'a>(
    mapping: &'a mut Mapping,
    key: &str,
) -> Result<&'a mut Mapping, LookupMiss> {
    match mapping.get_mut(key) {
        None => Err(LookupMiss::Absent),
        Some(Value::Mapping(found)) => Ok(found),
        Some(other) => Err(LookupMiss::WrongShape(value_kind(other))),
    }
}

/// Render a scalar the way it compares against a requested value.
///
/// Unquoted tags such as `tag: 2` parse as numbers; they still compare
/// against the string the operator typed.
pub fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// A parsed YAML document with a mapping at its root
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    root: Mapping,
}

impl Document {
    pub fn new(root: Mapping) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Mapping {
        &self.root
    }

    pub fn into_root(self) -> Mapping {
        self.root
    }

    /// Resolve the mapping that `target` points at, before descending into `image`
    fn section(&self, target: &Target) -> UpdaterResult<&Mapping> {
        match target {
            Target::Root => Ok(&self.root),
            Target::Chart(name) => {
                lookup_mapping(&self.root, name).map_err(|miss| UpdaterError::SectionNotFound {
                    chart: name.clone(),
                    reason: miss.to_string(),
                })
            }
        }
    }

    fn section_mut(&mut self, target: &Target) -> UpdaterResult<&mut Mapping> {
        match target {
            Target::Root => Ok(&mut self.root),
            Target::Chart(name) => lookup_mapping_mut(&mut self.root, name).map_err(|miss| {
                UpdaterError::SectionNotFound {
                    chart: name.clone(),
                    reason: miss.to_string(),
                }
            }),
        }
    }

    /// Locate the `image` mapping for `target` (read-only)
    pub fn image(&self, target: &Target) -> UpdaterResult<&Mapping> {
        let section = self.section(target)?;
        lookup_mapping(section, IMAGE_KEY).map_err(|_| UpdaterError::ImageSectionMissing {
            target: target.clone(),
        })
    }

    /// Locate the `image` mapping for `target` for mutation
    pub fn image_section_mut(&mut self, target: &Target) -> UpdaterResult<ImageSection<'_>> {
        let section = self.section_mut(target)?;
        let image = lookup_mapping_mut(section, IMAGE_KEY).map_err(|_| {
            UpdaterError::ImageSectionMissing {
                target: target.clone(),
            }
        })?;
        Ok(ImageSection { image })
    }

    /// Current value of an image field, if set to a scalar
    pub fn image_field(&self, target: &Target, field: Field) -> UpdaterResult<Option<String>> {
        Ok(self.image(target)?.get(field.key()).and_then(scalar_string))
    }

    pub fn app_version(&self) -> Option<String> {
        self.root
            .get(Field::AppVersion.key())
            .and_then(scalar_string)
    }

    pub fn set_app_version(&mut self, version: &str) {
        self.root.insert(
            Value::String(Field::AppVersion.key().to_string()),
            Value::String(version.to_string()),
        );
    }
}

/// Mutable view of a resolved `image` mapping
#[derive(Debug)]
pub struct ImageSection<'a> {
    image: &'a mut Mapping,
}

impl ImageSection<'_> {
    pub fn get(&self, field: Field) -> Option<String> {
        self.image.get(field.key()).and_then(scalar_string)
    }

    /// Set `field`, keeping its position when the key already exists
    pub fn set(&mut self, field: Field, value: &str) {
        self.image.insert(
            Value::String(field.key().to_string()),
            Value::String(value.to_string()),
        );
    }
}
