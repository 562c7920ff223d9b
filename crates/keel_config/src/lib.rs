use serde::{Deserialize, Serialize};

/// Default name of the solution manifest.
pub const DEFAULT_SOLUTION_FILE: &str = "global.json";

/// Default name of the project manifest.
pub const DEFAULT_PROJECT_FILE: &str = "project.json";

/// Components that can emit `debug[...]` traces.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DebugTrace {
  /// Upward search for the solution manifest.
  Root,
  /// Scanning search roots into the project index.
  Index,
  /// Name lookups against the index.
  Resolve,
  /// Resource directory walks.
  Walk,
  /// Named-resource override merging.
  Merge,
}

/// Controls the verbosity level of CLI output.
///
/// - `Quiet`: No output except errors
/// - `Detailed`: Structured progress output (default)
/// - `Verbose`: Detailed output with internal phases
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum OutputLevel {
  Quiet,
  #[default]
  Detailed,
  Verbose,
}

/// File naming and discovery conventions of a source tree.
///
/// Defaults:
/// ```text
/// solution_file        = "global.json"
/// project_file         = "project.json"
/// default_search_roots = ["src", "test"]
/// default_excludes     = ["bin/**", "obj/**"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
  /// Marker file identifying the solution root.
  pub solution_file: String,
  /// Marker file identifying a project directory.
  pub project_file: String,
  /// Search roots used when the solution manifest does not list any.
  pub default_search_roots: Vec<String>,
  /// Resource exclude globs used when a project manifest has no `exclude`.
  pub default_excludes: Vec<String>,
}

impl Default for LayoutConfig {
  fn default() -> Self {
    Self {
      solution_file: DEFAULT_SOLUTION_FILE.to_string(),
      project_file: DEFAULT_PROJECT_FILE.to_string(),
      default_search_roots: vec!["src".to_string(), "test".to_string()],
      default_excludes: vec!["bin/**".to_string(), "obj/**".to_string()],
    }
  }
}

impl LayoutConfig {
  pub fn with_solution_file(
    mut self,
    name: impl Into<String>,
  ) -> Self {
    self.solution_file = name.into();
    self
  }

  pub fn with_project_file(
    mut self,
    name: impl Into<String>,
  ) -> Self {
    self.project_file = name.into();
    self
  }
}

#[derive(Debug, Clone, Default)]
pub struct KeelConfig {
  pub debug: bool,
  pub debug_trace: Vec<DebugTrace>,
  pub quiet: bool,
  pub verbose: u8,
  pub output_level: OutputLevel,
  pub layout: LayoutConfig,
}

impl KeelConfig {
  pub fn new(
    debug: bool,
    debug_trace: Vec<DebugTrace>,
    quiet: bool,
    verbose: u8,
    output_level: OutputLevel,
    layout: LayoutConfig,
  ) -> Self {
    Self {
      debug,
      debug_trace,
      quiet,
      verbose,
      output_level,
      layout,
    }
  }

  pub fn new_basic(
    debug: bool,
    debug_trace: Vec<DebugTrace>,
    quiet: bool,
    verbose: u8,
  ) -> Self {
    let output_level = if quiet {
      OutputLevel::Quiet
    } else if verbose > 0 {
      OutputLevel::Verbose
    } else {
      OutputLevel::Detailed
    };

    Self {
      debug,
      debug_trace,
      quiet,
      verbose,
      output_level,
      ..Self::default()
    }
  }

  /// A configuration that never logs, for library callers and tests.
  pub fn silent() -> Self {
    Self::new_basic(false, Vec::new(), true, 0)
  }
}
