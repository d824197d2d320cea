//! Command line interface for pkg_packager.
//!
//! Loads preferences, dispatches the subcommand and maps the outcome to a
//! process exit code.

mod args;
pub mod commands;
mod output;

pub use args::{Args, BuildArgs, Command, LogsArgs};
pub use output::OutputManager;

use crate::error::Result;
use crate::preferences::PreferenceStore;

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    let output = OutputManager::new(args.quiet);

    let store = match &args.preferences {
        Some(path) => PreferenceStore::new(path),
        None => PreferenceStore::at_default_location()?,
    };
    log::debug!("Using preferences at {}", store.path().display());

    match args.command {
        Command::Build(build) => commands::build::execute(&build, &store, &output).await,
        Command::Logs(logs) => commands::logs::execute(&logs, &store, &output),
        Command::Prefs => commands::prefs::execute(&store, &output),
    }
}
