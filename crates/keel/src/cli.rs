use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use keel_config::DebugTrace;

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum DebugTraceCli {
  /// Upward search for the solution manifest
  Root,
  /// Search-root scanning
  Index,
  /// Project name lookups
  Resolve,
  /// Resource directory walks
  Walk,
  /// Named-resource merging
  Merge,
}

impl From<DebugTraceCli> for DebugTrace {
  fn from(value: DebugTraceCli) -> DebugTrace {
    match value {
      DebugTraceCli::Root => DebugTrace::Root,
      DebugTraceCli::Index => DebugTrace::Index,
      DebugTraceCli::Resolve => DebugTrace::Resolve,
      DebugTraceCli::Walk => DebugTrace::Walk,
      DebugTraceCli::Merge => DebugTrace::Merge,
    }
  }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum ResourceKindCli {
  /// Files embedded verbatim
  Embedded,
  /// Localizable .resx sources
  Resx,
  /// Both, embedded first
  All,
}

#[derive(Parser, Debug, Clone, PartialEq)]
pub struct RootCommand {
  /// Directory (or file) to search upward from; defaults to the current directory
  pub path: Option<String>,
}

#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ProjectsCommand {
  /// Directory inside the solution; defaults to the current directory
  pub path: Option<String>,
}

#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ResolveCommand {
  /// Project name to resolve
  pub name: String,

  /// Directory inside the solution; defaults to the current directory
  #[arg(long)]
  pub from: Option<String>,
}

#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ResourcesCommand {
  /// Project name whose resources to list
  pub name: String,

  /// Directory inside the solution; defaults to the current directory
  #[arg(long)]
  pub from: Option<String>,

  /// Which resources to list
  #[arg(short, long, value_enum, default_value = "all")]
  pub kind: ResourceKindCli,
}

#[derive(Subcommand, Clone, PartialEq)]
pub enum SubCommand {
  /// Print the solution root
  Root(RootCommand),
  /// List every project reachable from the solution's search roots
  Projects(ProjectsCommand),
  /// Print the directory of a project
  Resolve(ResolveCommand),
  /// List a project's compiled resource names
  Resources(ResourcesCommand),
}

#[derive(Parser)]
#[command(author, version, about = "Solution-aware project and resource resolution", long_about = None)]
#[command(propagate_version = true)]
#[command(color = ColorChoice::Auto)]
pub struct Cli {
  #[command(subcommand)]
  pub subcommand: SubCommand,

  /// Enable internal debug mode
  #[arg(long, default_value = "false", global = true)]
  pub debug: bool,

  /// Enable debug tracing for subsystems
  #[arg(long, value_enum, action = clap::ArgAction::Append, global = true)]
  pub debug_trace: Vec<DebugTraceCli>,

  /// Don't print anything but results and errors
  #[arg(long, short = 'q', default_value = "false", global = true)]
  pub quiet: bool,

  /// Use verbose output
  #[arg(long, short, action = clap::ArgAction::Count, global = true)]
  pub verbose: u8,

  /// Solution manifest file name
  #[arg(long, global = true)]
  pub solution_file: Option<String>,

  /// Project manifest file name
  #[arg(long, global = true)]
  pub project_file: Option<String>,
}
