//! Project index and name resolution for one solution.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use keel_config::{DebugTrace, KeelConfig};
use keel_log::{log_dbg, phase_warn, trace_dbg};

use crate::project::errors::ProjectError;
use crate::project::find::{find_solution_root, load_solution_manifest};
use crate::project::resolve::Project;

/// Project name -> every directory declaring that name.
///
/// Paths keep discovery order: search-root declaration order, then directory
/// name order within each root. More than one path per name means the name is
/// ambiguous.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectIndex {
  entries: HashMap<String, Vec<PathBuf>>,
}

impl ProjectIndex {
  pub fn new() -> Self {
    Self::default()
  }

  /// Register `path` under `name`. Returns false if it was already registered.
  pub fn insert(
    &mut self,
    name: impl Into<String>,
    path: PathBuf,
  ) -> bool {
    let paths = self.entries.entry(name.into()).or_default();
    if paths.contains(&path) {
      return false;
    }

    paths.push(path);
    true
  }

  pub fn get(
    &self,
    name: &str,
  ) -> &[PathBuf] {
    self.entries.get(name).map(|p| p.as_slice()).unwrap_or(&[])
  }

  /// All indexed names, sorted.
  pub fn names(&self) -> Vec<&str> {
    let mut names: Vec<&str> = self.entries.keys().map(|k| k.as_str()).collect();
    names.sort_unstable();
    names
  }

  /// Names declared by more than one directory, sorted.
  pub fn ambiguous_names(&self) -> Vec<&str> {
    let mut names: Vec<&str> = self
      .entries
      .iter()
      .filter(|(_, paths)| paths.len() > 1)
      .map(|(name, _)| name.as_str())
      .collect();
    names.sort_unstable();
    names
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

/// Resolves project names within the solution enclosing a start path.
///
/// Each resolver owns the index it built at construction; nothing is cached
/// across instances.
#[derive(Debug, Clone)]
pub struct ProjectResolver {
  config: Arc<KeelConfig>,
  solution_root: PathBuf,
  search_roots: Vec<PathBuf>,
  index: ProjectIndex,
}

impl ProjectResolver {
  /// Build a resolver for the solution enclosing `start`, with the default layout.
  pub fn new(start: impl AsRef<Path>) -> Result<Self, ProjectError> {
    Self::with_config(start, Arc::new(KeelConfig::default()))
  }

  /// Locate the solution root above `start`, read its search roots, and index
  /// every project directly below them.
  ///
  /// # Errors
  /// - `SolutionNotFound` if no solution manifest encloses `start`.
  /// - `Io` / `ManifestParse` if the solution manifest or a search root cannot be read.
  pub fn with_config(
    start: impl AsRef<Path>,
    config: Arc<KeelConfig>,
  ) -> Result<Self, ProjectError> {
    let layout = &config.layout;
    let solution_root = find_solution_root(start.as_ref(), &layout.solution_file)?;
    trace_dbg!(&config, DebugTrace::Root, "solution root {}", solution_root.display());

    let manifest = load_solution_manifest(&solution_root.join(&layout.solution_file))?;
    let declared = manifest.projects.unwrap_or_else(|| layout.default_search_roots.clone());

    let search_roots = collect_search_roots(&config, &solution_root, &declared)?;
    let index = build_index(&config, &search_roots)?;

    log_dbg!(
      &config,
      "indexed {} project name(s) under {} search root(s)",
      index.len(),
      search_roots.len()
    );

    Ok(Self {
      config,
      solution_root,
      search_roots,
      index,
    })
  }

  /// Resolve `name` to a single project.
  ///
  /// Returns `Ok(None)` when no project has that name, so callers can probe
  /// freely.
  ///
  /// # Errors
  /// - `AmbiguousProject` if several directories declare `name`; the error
  ///   carries all of them in discovery order.
  /// - `Io` / `ManifestParse` if the matching manifest cannot be loaded.
  pub fn resolve_project(
    &self,
    name: &str,
  ) -> Result<Option<Project>, ProjectError> {
    match self.index.get(name) {
      [] => {
        trace_dbg!(&self.config, DebugTrace::Resolve, "'{}' not found", name);
        Ok(None)
      },
      [path] => {
        trace_dbg!(&self.config, DebugTrace::Resolve, "'{}' -> {}", name, path.display());
        Project::load(path, &self.config).map(Some)
      },
      paths => Err(ProjectError::AmbiguousProject {
        name: name.to_string(),
        paths: paths.to_vec(),
      }),
    }
  }

  pub fn solution_root(&self) -> &Path {
    &self.solution_root
  }

  /// Existing search roots, absolute, in declaration order.
  pub fn search_roots(&self) -> &[PathBuf] {
    &self.search_roots
  }

  /// Every directory declaring `name`, in discovery order.
  pub fn project_paths(
    &self,
    name: &str,
  ) -> &[PathBuf] {
    self.index.get(name)
  }

  pub fn project_names(&self) -> Vec<&str> {
    self.index.names()
  }

  pub fn index(&self) -> &ProjectIndex {
    &self.index
  }

  pub fn config(&self) -> &Arc<KeelConfig> {
    &self.config
  }
}

/// Resolve declared search-root names against the solution root.
///
/// Missing roots are skipped; a root listed twice is kept once.
fn collect_search_roots(
  config: &KeelConfig,
  solution_root: &Path,
  declared: &[String],
) -> Result<Vec<PathBuf>, ProjectError> {
  let mut roots: Vec<PathBuf> = Vec::with_capacity(declared.len());

  for name in declared {
    let candidate = solution_root.join(name);
    if !candidate.is_dir() {
      phase_warn!(config, "search root '{}' does not exist, skipping", candidate.display());
      continue;
    }

    let root = candidate.canonicalize().map_err(|e| ProjectError::io(&candidate, e))?;
    if !roots.contains(&root) {
      roots.push(root);
    }
  }

  Ok(roots)
}

fn build_index(
  config: &KeelConfig,
  search_roots: &[PathBuf],
) -> Result<ProjectIndex, ProjectError> {
  let mut index = ProjectIndex::new();

  for search_root in search_roots {
    trace_dbg!(config, DebugTrace::Index, "scanning {}", search_root.display());

    for (name, path) in project_dirs(search_root, &config.layout.project_file)? {
      trace_dbg!(config, DebugTrace::Index, "found '{}' at {}", name, path.display());
      index.insert(name, path);
    }
  }

  Ok(index)
}

/// Immediate subdirectories of `search_root` holding a project manifest,
/// sorted by directory name.
fn project_dirs(
  search_root: &Path,
  project_file: &str,
) -> Result<Vec<(String, PathBuf)>, ProjectError> {
  let entries = std::fs::read_dir(search_root).map_err(|e| ProjectError::io(search_root, e))?;
  let mut found = Vec::new();

  for entry in entries {
    let entry = entry.map_err(|e| ProjectError::io(search_root, e))?;
    let path = entry.path();

    if !path.is_dir() || !path.join(project_file).is_file() {
      continue;
    }

    found.push((entry.file_name(), path));
  }

  found.sort_by(|a, b| a.0.cmp(&b.0));

  Ok(
    found
      .into_iter()
      .map(|(name, path)| (name.to_string_lossy().into_owned(), path))
      .collect(),
  )
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::fs;
  use tempfile::TempDir;

  fn write_project(
    root: &Path,
    search_root: &str,
    name: &str,
  ) -> PathBuf {
    let dir = root.join(search_root).join(name);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("project.json"), "{}").unwrap();
    dir
  }

  fn solution(global: &str) -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    let root = temp.path().canonicalize().unwrap();
    fs::write(root.join("global.json"), global).unwrap();
    (temp, root)
  }

  fn resolver(start: &Path) -> ProjectResolver {
    ProjectResolver::with_config(start, Arc::new(KeelConfig::silent())).unwrap()
  }

  #[test]
  fn test_index_insert_dedupes() {
    let mut index = ProjectIndex::new();

    assert!(index.insert("a", PathBuf::from("/x/a")));
    assert!(!index.insert("a", PathBuf::from("/x/a")));
    assert!(index.insert("a", PathBuf::from("/y/a")));

    assert_eq!(index.get("a").len(), 2);
    assert_eq!(index.ambiguous_names(), vec!["a"]);
    assert!(index.get("missing").is_empty());
  }

  #[test]
  fn test_directories_without_manifest_are_ignored() {
    let (_temp, root) = solution(r#"{ "projects": ["src"] }"#);
    write_project(&root, "src", "App");
    fs::create_dir_all(root.join("src").join("docs")).unwrap();
    fs::write(root.join("src").join("README.md"), "readme").unwrap();

    let resolver = resolver(&root);

    assert_eq!(resolver.project_names(), vec!["App"]);
  }

  #[test]
  fn test_projects_are_not_searched_recursively() {
    let (_temp, root) = solution(r#"{ "projects": ["src"] }"#);
    let deep = root.join("src").join("group").join("Deep");
    fs::create_dir_all(&deep).unwrap();
    fs::write(deep.join("project.json"), "{}").unwrap();

    let resolver = resolver(&root);

    assert!(resolver.index().is_empty());
    assert!(resolver.resolve_project("Deep").unwrap().is_none());
  }

  #[test]
  fn test_default_search_roots_when_projects_absent() {
    let (_temp, root) = solution("");
    write_project(&root, "src", "Lib");
    write_project(&root, "test", "Lib.Tests");
    write_project(&root, "samples", "Sample");

    let resolver = resolver(&root);

    assert_eq!(resolver.project_names(), vec!["Lib", "Lib.Tests"]);
  }

  #[test]
  fn test_missing_search_root_is_skipped() {
    let (_temp, root) = solution(r#"{ "projects": ["gone", "src"] }"#);
    write_project(&root, "src", "App");

    let resolver = resolver(&root);

    assert_eq!(resolver.search_roots(), &[root.join("src")]);
    assert!(resolver.resolve_project("App").unwrap().is_some());
  }

  #[test]
  fn test_repeated_search_root_is_not_ambiguous() {
    let (_temp, root) = solution(r#"{ "projects": ["src", "./src", "src"] }"#);
    let app = write_project(&root, "src", "App");

    let resolver = resolver(&root);

    assert_eq!(resolver.project_paths("App"), &[app]);
    assert!(resolver.resolve_project("App").unwrap().is_some());
  }

  #[test]
  fn test_ambiguous_paths_follow_declaration_order() {
    let (_temp, root) = solution(r#"{ "projects": ["zeta", "alpha"] }"#);
    let in_zeta = write_project(&root, "zeta", "Shared");
    let in_alpha = write_project(&root, "alpha", "Shared");

    let err = resolver(&root).resolve_project("Shared").unwrap_err();

    match err {
      ProjectError::AmbiguousProject { name, paths } => {
        assert_eq!(name, "Shared");
        assert_eq!(paths, vec![in_zeta, in_alpha]);
      },
      other => panic!("unexpected error: {other}"),
    }
  }

  #[test]
  fn test_names_are_case_sensitive() {
    let (_temp, root) = solution(r#"{ "projects": ["src"] }"#);
    write_project(&root, "src", "App");

    assert!(resolver(&root).resolve_project("app").unwrap().is_none());
  }

  #[test]
  fn test_resolved_project_is_loaded() {
    let (_temp, root) = solution(r#"{ "projects": ["src"] }"#);
    let dir = write_project(&root, "src", "App");
    fs::write(dir.join("project.json"), r#"{ "namedResource": { "x": "x.txt" } }"#).unwrap();

    let project = resolver(&root).resolve_project("App").unwrap().unwrap();

    assert_eq!(project.name, "App");
    assert_eq!(project.root, dir);
    assert_eq!(project.named_resources.len(), 1);
  }

  #[test]
  fn test_broken_manifest_surfaces_on_resolve() {
    let (_temp, root) = solution(r#"{ "projects": ["src"] }"#);
    let dir = write_project(&root, "src", "Broken");
    fs::write(dir.join("project.json"), "{ nope").unwrap();

    let result = resolver(&root).resolve_project("Broken");

    assert!(matches!(result, Err(ProjectError::ManifestParse { .. })));
  }

  #[test]
  fn test_no_solution() {
    let temp = TempDir::new().unwrap();
    let mut config = KeelConfig::silent();
    config.layout = config.layout.with_solution_file("keel-test-absent-solution.json");

    let result = ProjectResolver::with_config(temp.path(), Arc::new(config));

    assert!(matches!(result, Err(ProjectError::SolutionNotFound { .. })));
  }
}
