//! Files embedded verbatim.

use std::path::Path;
use std::sync::Arc;

use keel_config::KeelConfig;

use crate::project::Project;
use crate::resources::engine::{collect, ResourceKind};
use crate::resources::errors::ResourceError;
use crate::resources::resx::is_resx;
use crate::resources::walk::Discovered;
use crate::resources::{ResourceEntry, ResourceProvider};

struct Embedded;

impl ResourceKind for Embedded {
  fn accepts(
    &self,
    project: &Project,
    file: &Discovered,
  ) -> bool {
    if is_resx(&file.path) {
      return false;
    }

    !(file.is_root_level(project) && Some(file.file_name()) == project.manifest_file_name())
  }

  fn claims(
    &self,
    source: &Path,
  ) -> bool {
    !is_resx(source)
  }

  fn file_segment(
    &self,
    file_name: &str,
  ) -> String {
    file_name.to_string()
  }

  fn named(
    &self,
    logical_name: &str,
  ) -> String {
    logical_name.to_string()
  }
}

/// Lists every project file except the manifest and `.resx` sources, named
/// `<project>.<relative path with '.' separators>`.
#[derive(Debug, Clone)]
pub struct EmbeddedResourceProvider {
  config: Arc<KeelConfig>,
}

impl EmbeddedResourceProvider {
  pub fn new() -> Self {
    Self::with_config(Arc::new(KeelConfig::default()))
  }

  pub fn with_config(config: Arc<KeelConfig>) -> Self {
    Self { config }
  }
}

impl Default for EmbeddedResourceProvider {
  fn default() -> Self {
    Self::new()
  }
}

impl ResourceProvider for EmbeddedResourceProvider {
  fn get_resources(
    &self,
    project: &Project,
  ) -> Result<Vec<ResourceEntry>, ResourceError> {
    collect(&Embedded, project, &self.config)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::fs;
  use tempfile::TempDir;

  fn load(root: &Path) -> Project {
    Project::load(root, &KeelConfig::silent()).unwrap()
  }

  fn names(entries: &[ResourceEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.name.as_str()).collect()
  }

  #[test]
  fn test_manifest_and_resx_are_not_embedded() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().canonicalize().unwrap().join("P");
    fs::create_dir_all(root.join("sub")).unwrap();
    fs::write(root.join("project.json"), "{}").unwrap();
    fs::write(root.join("Strings.resx"), "<root/>").unwrap();
    fs::write(root.join("f.txt"), "f").unwrap();
    fs::write(root.join("sub").join("g.txt"), "g").unwrap();

    let entries = EmbeddedResourceProvider::new().get_resources(&load(&root)).unwrap();

    assert_eq!(names(&entries), vec!["P.f.txt", "P.sub.g.txt"]);
    assert_eq!(entries[1].path, root.join("sub").join("g.txt"));
  }

  #[test]
  fn test_resx_override_is_left_to_resx_provider() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().canonicalize().unwrap().join("P");
    fs::create_dir_all(&root).unwrap();
    fs::write(
      root.join("project.json"),
      r#"{ "namedResource": { "Renamed": "Strings.resx", "data.bin": "raw.dat" } }"#,
    )
    .unwrap();
    fs::write(root.join("Strings.resx"), "<root/>").unwrap();
    fs::write(root.join("raw.dat"), "0").unwrap();

    let entries = EmbeddedResourceProvider::new().get_resources(&load(&root)).unwrap();

    assert_eq!(names(&entries), vec!["data.bin"]);
  }

  #[test]
  fn test_manifest_can_be_embedded_by_name() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().canonicalize().unwrap().join("P");
    fs::create_dir_all(&root).unwrap();
    fs::write(root.join("project.json"), r#"{ "namedResource": { "manifest": "project.json" } }"#).unwrap();

    let entries = EmbeddedResourceProvider::new().get_resources(&load(&root)).unwrap();

    assert_eq!(names(&entries), vec!["manifest"]);
    assert_eq!(entries[0].path, root.join("project.json"));
  }
}
