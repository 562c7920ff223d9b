//! Localizable `.resx` sources, compiled to `.resources`.

use std::path::Path;
use std::sync::Arc;

use keel_config::KeelConfig;

use crate::project::Project;
use crate::resources::engine::{collect, ResourceKind};
use crate::resources::errors::ResourceError;
use crate::resources::walk::Discovered;
use crate::resources::{ResourceEntry, ResourceProvider};

/// Extension of resource sources, compared case-insensitively.
pub const RESX_EXTENSION: &str = "resx";

/// Suffix of every compiled resx name.
pub const COMPILED_RESX_SUFFIX: &str = ".resources";

pub(crate) fn is_resx(path: &Path) -> bool {
  path
    .extension()
    .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case(RESX_EXTENSION))
    .unwrap_or(false)
}

struct Resx;

impl ResourceKind for Resx {
  fn accepts(
    &self,
    _project: &Project,
    file: &Discovered,
  ) -> bool {
    is_resx(&file.path)
  }

  fn claims(
    &self,
    source: &Path,
  ) -> bool {
    is_resx(source)
  }

  fn file_segment(
    &self,
    file_name: &str,
  ) -> String {
    let stem = Path::new(file_name)
      .file_stem()
      .map(|s| s.to_string_lossy().into_owned())
      .unwrap_or_else(|| file_name.to_string());

    format!("{}{}", stem, COMPILED_RESX_SUFFIX)
  }

  fn named(
    &self,
    logical_name: &str,
  ) -> String {
    format!("{}{}", logical_name, COMPILED_RESX_SUFFIX)
  }
}

/// Lists `.resx` files: `<project>.<relative path without extension>.resources`.
///
/// `namedResource` entries whose source is a `.resx` file are applied here.
#[derive(Debug, Clone)]
pub struct ResxResourceProvider {
  config: Arc<KeelConfig>,
}

impl ResxResourceProvider {
  pub fn new() -> Self {
    Self::with_config(Arc::new(KeelConfig::default()))
  }

  pub fn with_config(config: Arc<KeelConfig>) -> Self {
    Self { config }
  }
}

impl Default for ResxResourceProvider {
  fn default() -> Self {
    Self::new()
  }
}

impl ResourceProvider for ResxResourceProvider {
  fn get_resources(
    &self,
    project: &Project,
  ) -> Result<Vec<ResourceEntry>, ResourceError> {
    collect(&Resx, project, &self.config)
  }
}
