//! Error types for solution discovery and project resolution.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur when locating, loading, or resolving projects.
///
/// A name that matches no project is not an error; see
/// [`ProjectResolver::resolve_project`](crate::project::ProjectResolver::resolve_project).
#[derive(Debug, Error)]
pub enum ProjectError {
  /// No solution manifest found when searching upward from the given path.
  #[error("no {manifest} found (searched upward from '{}')", .searched_from.display())]
  SolutionNotFound { manifest: String, searched_from: PathBuf },

  /// I/O error while reading a file or directory.
  #[error("failed to read '{}': {source}", .path.display())]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  /// A manifest is not valid JSON or doesn't match the schema.
  #[error("failed to parse '{}': {message}", .path.display())]
  ManifestParse { path: PathBuf, message: String },

  /// A directory was expected to hold a project manifest but does not.
  #[error("project manifest not found: '{}'", .path.display())]
  ProjectManifestNotFound { path: PathBuf },

  /// A name is declared by more than one project directory.
  #[error("'{name}' is an ambiguous name resolved to following projects:\n{}", join_paths(.paths))]
  AmbiguousProject { name: String, paths: Vec<PathBuf> },
}

impl ProjectError {
  pub(crate) fn io(
    path: &Path,
    source: std::io::Error,
  ) -> Self {
    ProjectError::Io {
      path: path.to_path_buf(),
      source,
    }
  }
}

fn join_paths(paths: &[PathBuf]) -> String {
  paths.iter().map(|p| p.display().to_string()).collect::<Vec<_>>().join("\n")
}
