//! Resource discovery for a loaded project.
//!
//! Both providers share one engine:
//! 1. walk the project root in a fixed order (files by name, then
//!    subdirectories by name, depth first), then expand include globs;
//! 2. give every accepted file a default name derived from the project name
//!    and its relative path;
//! 3. apply `namedResource` overrides, renaming matches in place and
//!    appending sources the walk did not produce;
//! 4. reject duplicate compiled names.

mod embedded;
mod engine;
pub mod errors;
mod resx;
mod walk;

use std::path::PathBuf;

pub use embedded::EmbeddedResourceProvider;
pub use errors::ResourceError;
pub use resx::{ResxResourceProvider, COMPILED_RESX_SUFFIX, RESX_EXTENSION};
pub use walk::normalize_path;

use crate::project::Project;

/// A file to compile into the assembly, with the name it is compiled under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceEntry {
  pub name: String,
  pub path: PathBuf,
}

impl ResourceEntry {
  pub fn new(
    name: impl Into<String>,
    path: impl Into<PathBuf>,
  ) -> Self {
    Self {
      name: name.into(),
      path: path.into(),
    }
  }
}

/// Produces the ordered resource list of a project.
///
/// Implementations never touch the filesystem beyond reading it, and return
/// the same sequence for an unchanged tree.
pub trait ResourceProvider {
  fn get_resources(
    &self,
    project: &Project,
  ) -> Result<Vec<ResourceEntry>, ResourceError>;
}
