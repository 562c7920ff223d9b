mod cli;
mod report;

use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser as ClapParser;
use colored::Colorize;
use keel_config::{KeelConfig, LayoutConfig};
use keel_driver::{
  find_solution_root, EmbeddedResourceProvider, ProjectResolver, ResourceEntry, ResourceProvider, ResxResourceProvider,
};
use keel_log::{log_dbg, phase_ok, phase_warn};

use cli::{Cli, ResourceKindCli, SubCommand};

fn parse_cli_to_config(cli: &Cli) -> Arc<KeelConfig> {
  let mut config = KeelConfig::new_basic(
    cli.debug,
    cli.debug_trace.iter().copied().map(Into::into).collect(),
    cli.quiet,
    cli.verbose,
  );

  let mut layout = LayoutConfig::default();
  if let Some(solution_file) = &cli.solution_file {
    layout = layout.with_solution_file(solution_file);
  }
  if let Some(project_file) = &cli.project_file {
    layout = layout.with_project_file(project_file);
  }
  config.layout = layout;

  Arc::new(config)
}

fn start_dir(path: Option<&str>) -> Result<PathBuf, Box<dyn Error>> {
  match path {
    Some(path) => Ok(PathBuf::from(path)),
    None => Ok(std::env::current_dir()?),
  }
}

/// Runs one subcommand. `Ok(false)` means "nothing found", which exits 1
/// without an error message.
fn run(
  cli: &Cli,
  config: Arc<KeelConfig>,
) -> Result<bool, Box<dyn Error>> {
  match &cli.subcommand {
    SubCommand::Root(cmd) => {
      let start = start_dir(cmd.path.as_deref())?;
      let root = find_solution_root(&start, &config.layout.solution_file)?;
      println!("{}", root.display());
    },
    SubCommand::Projects(cmd) => {
      let resolver = ProjectResolver::with_config(start_dir(cmd.path.as_deref())?, config.clone())?;
      log_dbg!(&config, "solution root {}", resolver.solution_root().display());

      if resolver.index().is_empty() {
        phase_warn!(&config, "no projects found under {}", resolver.solution_root().display());
        return Ok(false);
      }

      report::print_projects(&resolver);
    },
    SubCommand::Resolve(cmd) => {
      let resolver = ProjectResolver::with_config(start_dir(cmd.from.as_deref())?, config.clone())?;

      match resolver.resolve_project(&cmd.name)? {
        Some(project) => println!("{}", project.root.display()),
        None => {
          phase_warn!(&config, "project '{}' not found", cmd.name);
          return Ok(false);
        },
      }
    },
    SubCommand::Resources(cmd) => {
      let resolver = ProjectResolver::with_config(start_dir(cmd.from.as_deref())?, config.clone())?;

      let Some(project) = resolver.resolve_project(&cmd.name)? else {
        phase_warn!(&config, "project '{}' not found", cmd.name);
        return Ok(false);
      };

      let mut entries: Vec<(&'static str, ResourceEntry)> = Vec::new();

      if matches!(cmd.kind, ResourceKindCli::Embedded | ResourceKindCli::All) {
        let provider = EmbeddedResourceProvider::with_config(config.clone());
        entries.extend(provider.get_resources(&project)?.into_iter().map(|e| ("embedded", e)));
      }

      if matches!(cmd.kind, ResourceKindCli::Resx | ResourceKindCli::All) {
        let provider = ResxResourceProvider::with_config(config.clone());
        entries.extend(provider.get_resources(&project)?.into_iter().map(|e| ("resx", e)));
      }

      report::print_resources(&entries);
      phase_ok!(&config, "{} resource(s) in '{}'", entries.len(), project.name);
    },
  }

  Ok(true)
}

fn main() {
  let cli = Cli::parse();

  let config = parse_cli_to_config(&cli);

  match run(&cli, config) {
    Ok(true) => {},
    Ok(false) => std::process::exit(1),
    Err(err) => {
      eprintln!("{} {}", "error:".bright_red().bold(), err);
      std::process::exit(1);
    },
  }
}
