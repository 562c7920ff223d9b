//! Error types for resource discovery.

use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResourceError {
  /// A named resource points at a file that does not exist.
  #[error("named resource '{name}' source not found: '{}'", .path.display())]
  SourceMissing { name: String, path: PathBuf },

  /// Two resources compile to the same name.
  #[error(
    "duplicate resource name '{name}': '{}' and '{}'",
    .first.display(),
    .second.display()
  )]
  DuplicateName { name: String, first: PathBuf, second: PathBuf },

  /// Two named resources point at the same file.
  #[error("'{}' is named both '{first}' and '{second}'", .path.display())]
  SourceClaimedTwice { path: PathBuf, first: String, second: String },

  /// An include or exclude glob is malformed.
  #[error("invalid resource pattern '{pattern}': {message}")]
  InvalidPattern { pattern: String, message: String },

  /// I/O error while walking the project tree.
  #[error("failed to read '{}': {source}", .path.display())]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
}

impl ResourceError {
  pub(crate) fn io(
    path: &Path,
    source: std::io::Error,
  ) -> Self {
    ResourceError::Io {
      path: path.to_path_buf(),
      source,
    }
  }
}
