pub mod project;
pub mod resources;

pub use project::{find_solution_root, Project, ProjectError, ProjectIndex, ProjectResolver};
pub use resources::{EmbeddedResourceProvider, ResourceEntry, ResourceError, ResourceProvider, ResxResourceProvider};
