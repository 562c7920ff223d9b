//! Resolution of a raw project manifest into a `Project`.
//!
//! The project root is canonicalized so resource paths derived from it can be
//! compared directly against override paths.

use std::path::{Path, PathBuf};

use keel_config::{KeelConfig, LayoutConfig};

use crate::project::errors::ProjectError;
use crate::project::find::load_project_manifest;
use crate::project::manifest::{parse_manifest, OverrideRequest, ProjectManifest};

/// A loaded project. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
  /// Path to the project manifest.
  pub manifest_path: PathBuf,

  /// Project root directory (parent of the manifest), canonicalized.
  pub root: PathBuf,

  /// Manifest `name`, or the root directory's name.
  pub name: String,

  /// Named-resource overrides in declaration order.
  pub named_resources: Vec<OverrideRequest>,

  /// Extra resource include globs, relative to `root`.
  pub resource_includes: Vec<String>,

  /// Resource exclude globs, relative to `root`.
  pub resource_excludes: Vec<String>,
}

impl Project {
  /// Load the project whose manifest lives directly in `dir`.
  ///
  /// # Errors
  /// - `ProjectManifestNotFound` if `dir` has no project manifest.
  /// - `Io` / `ManifestParse` if the manifest cannot be read.
  pub fn load(
    dir: &Path,
    config: &KeelConfig,
  ) -> Result<Project, ProjectError> {
    match Self::try_load(dir, config)? {
      Some(project) => Ok(project),
      None => Err(ProjectError::ProjectManifestNotFound {
        path: dir.join(&config.layout.project_file),
      }),
    }
  }

  /// Like [`Project::load`], but a directory without a manifest yields `Ok(None)`.
  pub fn try_load(
    dir: &Path,
    config: &KeelConfig,
  ) -> Result<Option<Project>, ProjectError> {
    let manifest_path = dir.join(&config.layout.project_file);
    if !manifest_path.is_file() {
      return Ok(None);
    }

    let manifest = load_project_manifest(&manifest_path)?;
    resolve_project(dir, manifest, None, &config.layout).map(Some)
  }

  /// Build a project from manifest text instead of reading it from disk.
  ///
  /// `name` is used unless the manifest declares its own. The directory of
  /// `manifest_path` must exist; the manifest file itself need not.
  pub fn from_manifest_str(
    content: &str,
    name: &str,
    manifest_path: &Path,
    layout: &LayoutConfig,
  ) -> Result<Project, ProjectError> {
    let manifest: ProjectManifest = parse_manifest(content).map_err(|e| ProjectError::ManifestParse {
      path: manifest_path.to_path_buf(),
      message: e.to_string(),
    })?;

    let dir = manifest_path
      .parent()
      .filter(|p| !p.as_os_str().is_empty())
      .unwrap_or_else(|| Path::new("."));
    let file_name = manifest_path
      .file_name()
      .map(|f| f.to_string_lossy().into_owned())
      .unwrap_or_else(|| layout.project_file.clone());

    let mut project = resolve_project(dir, manifest, Some(name), layout)?;
    project.manifest_path = project.root.join(file_name);
    Ok(project)
  }

  /// File name of the manifest, e.g. `project.json`.
  pub fn manifest_file_name(&self) -> Option<&str> {
    self.manifest_path.file_name().and_then(|f| f.to_str())
  }
}

/// Turn a parsed manifest into a `Project` rooted at `dir`.
fn resolve_project(
  dir: &Path,
  manifest: ProjectManifest,
  fallback_name: Option<&str>,
  layout: &LayoutConfig,
) -> Result<Project, ProjectError> {
  let root = dir.canonicalize().map_err(|e| ProjectError::io(dir, e))?;
  let manifest_path = root.join(&layout.project_file);

  let name = match (manifest.name, fallback_name) {
    (Some(name), _) => name,
    (None, Some(name)) => name.to_string(),
    (None, None) => root
      .file_name()
      .map(|n| n.to_string_lossy().into_owned())
      .unwrap_or_default(),
  };

  let resource_excludes = manifest.exclude.unwrap_or_else(|| layout.default_excludes.clone());

  Ok(Project {
    manifest_path,
    root,
    name,
    named_resources: manifest.named_resource,
    resource_includes: manifest.resources,
    resource_excludes,
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::fs;
  use tempfile::TempDir;

  fn project_dir(
    name: &str,
    manifest: &str,
  ) -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().canonicalize().unwrap().join(name);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("project.json"), manifest).unwrap();
    (temp, dir)
  }

  #[test]
  fn test_name_from_directory() {
    let (_temp, dir) = project_dir("testproject", "{}");

    let project = Project::load(&dir, &KeelConfig::silent()).unwrap();

    assert_eq!(project.name, "testproject");
    assert_eq!(project.root, dir);
    assert_eq!(project.manifest_path, dir.join("project.json"));
    assert_eq!(project.manifest_file_name(), Some("project.json"));
  }

  #[test]
  fn test_name_from_manifest() {
    let (_temp, dir) = project_dir("folder", r#"{ "name": "Declared" }"#);

    let project = Project::load(&dir, &KeelConfig::silent()).unwrap();

    assert_eq!(project.name, "Declared");
  }

  #[test]
  fn test_empty_manifest_file() {
    let (_temp, dir) = project_dir("blank", "");

    let project = Project::load(&dir, &KeelConfig::silent()).unwrap();

    assert_eq!(project.name, "blank");
    assert_eq!(project.resource_excludes, vec!["bin/**", "obj/**"]);
  }

  #[test]
  fn test_explicit_excludes_replace_defaults() {
    let (_temp, dir) = project_dir("p", r#"{ "exclude": [] }"#);

    let project = Project::load(&dir, &KeelConfig::silent()).unwrap();

    assert!(project.resource_excludes.is_empty());
  }

  #[test]
  fn test_try_load_without_manifest() {
    let temp = TempDir::new().unwrap();

    let project = Project::try_load(temp.path(), &KeelConfig::silent()).unwrap();

    assert!(project.is_none());
  }

  #[test]
  fn test_load_without_manifest_is_error() {
    let temp = TempDir::new().unwrap();

    let result = Project::load(temp.path(), &KeelConfig::silent());

    assert!(matches!(result, Err(ProjectError::ProjectManifestNotFound { .. })));
  }

  #[test]
  fn test_from_manifest_str() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().canonicalize().unwrap().join("testproject");
    fs::create_dir_all(&dir).unwrap();

    let project = Project::from_manifest_str(
      r#"{ "namedResource": { "renamedResource": "subfolder/nestedresource.resx" } }"#,
      "testproject",
      &dir.join("project.json"),
      &LayoutConfig::default(),
    )
    .unwrap();

    assert_eq!(project.name, "testproject");
    assert_eq!(project.root, dir);
    assert_eq!(
      project.named_resources,
      vec![OverrideRequest::new("renamedResource", "subfolder/nestedresource.resx")]
    );
  }

  #[test]
  fn test_from_manifest_str_parse_error() {
    let temp = TempDir::new().unwrap();

    let result = Project::from_manifest_str("[", "p", &temp.path().join("project.json"), &LayoutConfig::default());

    assert!(matches!(result, Err(ProjectError::ManifestParse { .. })));
  }

  #[test]
  fn test_custom_project_file() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().canonicalize().unwrap().join("mod");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("module.json"), "{}").unwrap();

    let mut config = KeelConfig::silent();
    config.layout = LayoutConfig::default().with_project_file("module.json");

    let project = Project::load(&dir, &config).unwrap();

    assert_eq!(project.manifest_file_name(), Some("module.json"));
  }
}
