//! Deterministic traversal of a project tree.
//!
//! Visiting order inside a directory: files sorted by name, then
//! subdirectories sorted by name, each subdirectory fully walked before the
//! next. Names compare as raw OS strings, so the order does not depend on the
//! platform's `read_dir` order or on locale.

use std::collections::HashSet;
use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};

use glob::{MatchOptions, Pattern};
use keel_config::{DebugTrace, KeelConfig};
use keel_log::trace_dbg;

use crate::project::Project;
use crate::resources::errors::ResourceError;

const MATCH_OPTIONS: MatchOptions = MatchOptions {
  case_sensitive: true,
  require_literal_separator: true,
  require_literal_leading_dot: false,
};

/// A file found under (or included into) a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Discovered {
  /// Absolute, lexically normalized.
  pub path: PathBuf,
  /// Name segments: the path relative to the project root, or just the file
  /// name for files outside it.
  pub segments: Vec<String>,
}

impl Discovered {
  pub fn file_name(&self) -> &str {
    self.segments.last().map(|s| s.as_str()).unwrap_or("")
  }

  /// True for a file sitting directly in the project root.
  pub fn is_root_level(
    &self,
    project: &Project,
  ) -> bool {
    self.path.parent() == Some(project.root.as_path())
  }
}

/// Every candidate resource file of `project`, in visiting order, followed by
/// include-pattern matches the walk did not already produce.
pub(crate) fn discover(
  project: &Project,
  config: &KeelConfig,
) -> Result<Vec<Discovered>, ResourceError> {
  let excludes = compile_patterns(&project.resource_excludes)?;
  let project_file = project.manifest_file_name().unwrap_or(config.layout.project_file.as_str());

  let mut walker = Walker {
    config,
    project_file,
    excludes: &excludes,
    found: Vec::new(),
  };
  walker.walk(&project.root, &mut Vec::new())?;

  let mut found = walker.found;
  let mut seen: HashSet<PathBuf> = found.iter().map(|d| d.path.clone()).collect();

  for pattern in &project.resource_includes {
    for path in expand_include(&project.root, pattern)? {
      if !seen.insert(path.clone()) {
        continue;
      }

      trace_dbg!(config, DebugTrace::Walk, "include '{}' -> {}", pattern, path.display());
      let segments = name_segments(&project.root, &path);
      found.push(Discovered { path, segments });
    }
  }

  Ok(found)
}

struct Walker<'a> {
  config: &'a KeelConfig,
  project_file: &'a str,
  excludes: &'a [Pattern],
  found: Vec<Discovered>,
}

impl Walker<'_> {
  fn walk(
    &mut self,
    dir: &Path,
    relative: &mut Vec<String>,
  ) -> Result<(), ResourceError> {
    let entries = std::fs::read_dir(dir).map_err(|e| ResourceError::io(dir, e))?;

    let mut files: Vec<(OsString, PathBuf)> = Vec::new();
    let mut dirs: Vec<(OsString, PathBuf)> = Vec::new();

    for entry in entries {
      let entry = entry.map_err(|e| ResourceError::io(dir, e))?;
      let name = entry.file_name();

      if name.to_string_lossy().starts_with('.') {
        continue;
      }

      let path = entry.path();
      let file_type = entry.file_type().map_err(|e| ResourceError::io(&path, e))?;

      // Linked directories are not followed; a link back to an ancestor would never end.
      if file_type.is_dir() {
        dirs.push((name, path));
      } else if file_type.is_file() || (file_type.is_symlink() && path.is_file()) {
        files.push((name, path));
      } else if file_type.is_symlink() {
        trace_dbg!(self.config, DebugTrace::Walk, "not following link {}", path.display());
      }
    }

    files.sort_by(|a, b| a.0.cmp(&b.0));
    dirs.sort_by(|a, b| a.0.cmp(&b.0));

    for (name, path) in files {
      relative.push(name.to_string_lossy().into_owned());

      if self.is_excluded(relative) {
        trace_dbg!(self.config, DebugTrace::Walk, "excluded {}", path.display());
      } else {
        self.found.push(Discovered {
          path,
          segments: relative.clone(),
        });
      }

      relative.pop();
    }

    for (name, path) in dirs {
      // Another project's tree is that project's business.
      if path.join(self.project_file).is_file() {
        trace_dbg!(self.config, DebugTrace::Walk, "skipping nested project {}", path.display());
        continue;
      }

      relative.push(name.to_string_lossy().into_owned());
      self.walk(&path, relative)?;
      relative.pop();
    }

    Ok(())
  }

  fn is_excluded(
    &self,
    relative: &[String],
  ) -> bool {
    if self.excludes.is_empty() {
      return false;
    }

    let joined = relative.join("/");
    self.excludes.iter().any(|p| p.matches_with(&joined, MATCH_OPTIONS))
  }
}

fn compile_patterns(patterns: &[String]) -> Result<Vec<Pattern>, ResourceError> {
  patterns
    .iter()
    .map(|p| {
      Pattern::new(p).map_err(|e| ResourceError::InvalidPattern {
        pattern: p.clone(),
        message: e.to_string(),
      })
    })
    .collect()
}

/// Files matching `pattern` relative to `root`, normalized and sorted.
fn expand_include(
  root: &Path,
  pattern: &str,
) -> Result<Vec<PathBuf>, ResourceError> {
  let full = format!("{}/{}", Pattern::escape(&root.to_string_lossy()), pattern);

  let paths = glob::glob(&full).map_err(|e| ResourceError::InvalidPattern {
    pattern: pattern.to_string(),
    message: e.to_string(),
  })?;

  let mut matched = Vec::new();
  for path in paths {
    let path = path.map_err(|e| {
      let path = e.path().to_path_buf();
      ResourceError::io(&path, e.into())
    })?;

    if path.is_file() {
      matched.push(normalize_path(&path));
    }
  }

  matched.sort();
  matched.dedup();
  Ok(matched)
}

fn name_segments(
  root: &Path,
  path: &Path,
) -> Vec<String> {
  match path.strip_prefix(root) {
    Ok(relative) => relative
      .components()
      .map(|c| c.as_os_str().to_string_lossy().into_owned())
      .collect(),
    Err(_) => path
      .file_name()
      .map(|f| vec![f.to_string_lossy().into_owned()])
      .unwrap_or_default(),
  }
}

/// Resolve `.` and `..` components without touching the filesystem.
///
/// `..` at the root stays at the root, as the OS would treat it.
pub fn normalize_path(path: &Path) -> PathBuf {
  let mut normalized = PathBuf::new();

  for component in path.components() {
    match component {
      Component::CurDir => {},
      Component::ParentDir => {
        if !normalized.pop() {
          normalized.push(component);
        }
      },
      Component::RootDir | Component::Prefix(_) | Component::Normal(_) => normalized.push(component),
    }
  }

  normalized
}
