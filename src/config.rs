use std::path::PathBuf;

use crate::cli::Cli;

/// Runtime configuration resolved from command-line flags and environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub recipes_path: PathBuf,
    pub ingredients_path: PathBuf,
    pub event_path: PathBuf,

    /// Log filter forced by -v/-q. `None` defers to RUST_LOG.
    pub log_override: Option<String>,
}

/// Filter used when neither flags nor RUST_LOG say anything.
pub const DEFAULT_LOG_FILTER: &str = "warn";

impl Config {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            recipes_path: cli.recipes.clone(),
            ingredients_path: cli.ingredients.clone(),
            event_path: cli.event.clone(),
            log_override: log_override(cli.verbose, cli.quiet),
        }
    }
}

fn log_override(verbose: u8, quiet: bool) -> Option<String> {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => return None,
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    };
    Some(level.to_string())
}
