//! Functions for locating the solution root and loading manifests.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::project::errors::ProjectError;
use crate::project::manifest::{parse_manifest, ProjectManifest, SolutionManifest};

/// Search upward from `start` for a directory containing `solution_file`.
///
/// Returns the directory (the solution root), not the file itself. `start`
/// itself is checked first; when it names a file, its parent is used.
///
/// # Errors
/// - `Io` if `start` cannot be canonicalized.
/// - `SolutionNotFound` if the filesystem root is reached without a match.
pub fn find_solution_root(
  start: &Path,
  solution_file: &str,
) -> Result<PathBuf, ProjectError> {
  let start = start.canonicalize().map_err(|e| ProjectError::io(start, e))?;

  let mut current = if start.is_file() {
    match start.parent() {
      Some(parent) => parent.to_path_buf(),
      None => start.clone(),
    }
  } else {
    start.clone()
  };

  loop {
    if current.join(solution_file).is_file() {
      return Ok(current);
    }

    if !current.pop() {
      return Err(ProjectError::SolutionNotFound {
        manifest: solution_file.to_string(),
        searched_from: start,
      });
    }
  }
}

/// Load and parse a solution manifest file.
///
/// # Errors
/// - `Io` if the file cannot be read.
/// - `ManifestParse` if the file is not valid JSON or doesn't match the schema.
pub fn load_solution_manifest(path: &Path) -> Result<SolutionManifest, ProjectError> {
  load_manifest(path)
}

/// Load and parse a project manifest file.
pub fn load_project_manifest(path: &Path) -> Result<ProjectManifest, ProjectError> {
  load_manifest(path)
}

fn load_manifest<T>(path: &Path) -> Result<T, ProjectError>
where
  T: for<'de> Deserialize<'de> + Default,
{
  let content = std::fs::read_to_string(path).map_err(|e| ProjectError::io(path, e))?;

  parse_manifest(&content).map_err(|e| ProjectError::ManifestParse {
    path: path.to_path_buf(),
    message: e.to_string(),
  })
}
