//! Solution discovery, project loading, and name resolution.
//!
//! This module provides functionality to:
//! - Find `global.json` by searching upward from a directory
//! - Parse solution and project manifests
//! - Index every project below the solution's search roots
//! - Resolve a short project name to exactly one project directory
//!
//! # Example
//!
//! ```ignore
//! use keel_driver::project::ProjectResolver;
//!
//! let resolver = ProjectResolver::new(std::env::current_dir()?)?;
//! match resolver.resolve_project("ProjectA")? {
//!     Some(project) => println!("{} -> {}", project.name, project.root.display()),
//!     None => println!("no such project"),
//! }
//! ```

pub mod errors;
pub mod find;
pub mod manifest;
pub mod resolve;
pub mod resolver;

// Re-export commonly used types
pub use errors::ProjectError;
pub use find::{find_solution_root, load_project_manifest, load_solution_manifest};
pub use manifest::{OverrideRequest, ProjectManifest, SolutionManifest};
pub use resolve::Project;
pub use resolver::{ProjectIndex, ProjectResolver};
