//! Stderr logging for Keel, so listings printed on stdout stay clean.
//!
//! - `phase_ok!` / `phase_warn!`: outcome lines, silenced by `--quiet`.
//! - `log_dbg!`: extra detail with `-v` or `--debug`.
//! - `trace_dbg!`: per-category traces selected with `--debug-trace`.

use keel_config::{DebugTrace, KeelConfig};

#[doc(hidden)]
pub use colored;

pub fn log_phase(config: &KeelConfig) -> bool {
  !config.quiet
}

pub fn log_debug(config: &KeelConfig) -> bool {
  !config.quiet && (config.debug || config.verbose > 0)
}

pub fn debug_trace_enabled(
  config: &KeelConfig,
  trace: DebugTrace,
) -> bool {
  !config.quiet && (config.debug || config.debug_trace.contains(&trace))
}

pub fn trace_name(trace: DebugTrace) -> &'static str {
  match trace {
    DebugTrace::Root => "root",
    DebugTrace::Index => "index",
    DebugTrace::Resolve => "resolve",
    DebugTrace::Walk => "walk",
    DebugTrace::Merge => "merge",
  }
}

/// Green arrow line.
#[macro_export]
macro_rules! phase_ok {
  ($config:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {{
    if $crate::log_phase($config) {
      use $crate::colored::Colorize;
      eprintln!("{} {}", "-->".bright_green().bold(), format!($fmt $(, $arg)*));
    }
  }};
}

/// Yellow arrow line.
///
/// ```ignore
/// phase_warn!(&config, "search root '{}' does not exist, skipping", path.display());
/// ```
#[macro_export]
macro_rules! phase_warn {
  ($config:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {{
    if $crate::log_phase($config) {
      use $crate::colored::Colorize;
      eprintln!("{} {}", "-->".bright_yellow().bold(), format!($fmt $(, $arg)*));
    }
  }};
}

/// `debug[walk]: visiting /repo/src/app`
#[macro_export]
macro_rules! trace_dbg {
  ($config:expr, $trace:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {{
    if $crate::debug_trace_enabled($config, $trace) {
      eprintln!("debug[{}]: {}", $crate::trace_name($trace), format!($fmt $(, $arg)*));
    }
  }};
}

#[macro_export]
macro_rules! log_dbg {
  ($config:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {{
    if $crate::log_debug($config) {
      eprintln!("debug: {}", format!($fmt $(, $arg)*));
    }
  }};
}
