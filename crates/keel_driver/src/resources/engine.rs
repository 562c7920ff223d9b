//! Naming and override merging shared by every resource provider.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use keel_config::{DebugTrace, KeelConfig};
use keel_log::trace_dbg;

use crate::project::Project;
use crate::resources::errors::ResourceError;
use crate::resources::walk::{discover, normalize_path, Discovered};
use crate::resources::ResourceEntry;

/// What distinguishes one provider from another.
pub(crate) trait ResourceKind {
  /// Whether a walked or included file belongs to this provider.
  fn accepts(
    &self,
    project: &Project,
    file: &Discovered,
  ) -> bool;

  /// Whether a `namedResource` source belongs to this provider.
  fn claims(
    &self,
    source: &Path,
  ) -> bool;

  /// Final name segment for a discovered file.
  fn file_segment(
    &self,
    file_name: &str,
  ) -> String;

  /// Compiled name for an explicitly named resource.
  fn named(
    &self,
    logical_name: &str,
  ) -> String;
}

pub(crate) fn collect<K: ResourceKind>(
  kind: &K,
  project: &Project,
  config: &KeelConfig,
) -> Result<Vec<ResourceEntry>, ResourceError> {
  let mut entries: Vec<ResourceEntry> = discover(project, config)?
    .into_iter()
    .filter(|file| kind.accepts(project, file))
    .map(|file| ResourceEntry {
      name: default_name(kind, project, &file.segments),
      path: file.path,
    })
    .collect();

  ensure_unique_requests(project)?;
  merge_overrides(kind, project, config, &mut entries)?;
  ensure_unique(&entries)?;

  Ok(entries)
}

/// `<project>.<dir>.<dir>.<file segment>`
fn default_name<K: ResourceKind>(
  kind: &K,
  project: &Project,
  segments: &[String],
) -> String {
  let mut name = project.name.clone();

  if let Some((file_name, dirs)) = segments.split_last() {
    for dir in dirs {
      name.push('.');
      name.push_str(dir);
    }
    name.push('.');
    name.push_str(&kind.file_segment(file_name));
  }

  name
}

/// Logical names must be unique across all `namedResource` entries, whichever
/// provider ends up applying them.
fn ensure_unique_requests(project: &Project) -> Result<(), ResourceError> {
  let mut seen: HashMap<&str, PathBuf> = HashMap::with_capacity(project.named_resources.len());

  for request in &project.named_resources {
    let source = normalize_path(&project.root.join(&request.source));

    if let Some(first) = seen.insert(&request.logical_name, source.clone()) {
      return Err(ResourceError::DuplicateName {
        name: request.logical_name.clone(),
        first,
        second: source,
      });
    }
  }

  Ok(())
}

/// Apply `namedResource` overrides: rename a discovered entry in place, or
/// append the source as a new entry.
fn merge_overrides<K: ResourceKind>(
  kind: &K,
  project: &Project,
  config: &KeelConfig,
  entries: &mut Vec<ResourceEntry>,
) -> Result<(), ResourceError> {
  let mut by_path: HashMap<PathBuf, usize> = entries.iter().enumerate().map(|(i, e)| (e.path.clone(), i)).collect();
  let mut claimed: HashMap<PathBuf, &str> = HashMap::new();

  for request in &project.named_resources {
    let source = normalize_path(&project.root.join(&request.source));
    if !kind.claims(&source) {
      continue;
    }

    if !source.is_file() {
      return Err(ResourceError::SourceMissing {
        name: request.logical_name.clone(),
        path: source,
      });
    }

    if let Some(first) = claimed.insert(source.clone(), &request.logical_name) {
      return Err(ResourceError::SourceClaimedTwice {
        path: source,
        first: first.to_string(),
        second: request.logical_name.clone(),
      });
    }

    let name = kind.named(&request.logical_name);

    match by_path.get(&source) {
      Some(&position) => {
        trace_dbg!(config, DebugTrace::Merge, "rename '{}' -> '{}'", entries[position].name, name);
        entries[position].name = name;
      },
      None => {
        trace_dbg!(config, DebugTrace::Merge, "append '{}' from {}", name, source.display());
        by_path.insert(source.clone(), entries.len());
        entries.push(ResourceEntry { name, path: source });
      },
    }
  }

  Ok(())
}

fn ensure_unique(entries: &[ResourceEntry]) -> Result<(), ResourceError> {
  let mut seen: HashMap<&str, &Path> = HashMap::with_capacity(entries.len());

  for entry in entries {
    if let Some(first) = seen.insert(&entry.name, &entry.path) {
      return Err(ResourceError::DuplicateName {
        name: entry.name.clone(),
        first: first.to_path_buf(),
        second: entry.path.clone(),
      });
    }
  }

  Ok(())
}
