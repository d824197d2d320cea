//! Subcommand implementations.
//!
//! Each command returns the process exit code.

pub mod build;
pub mod logs;
pub mod prefs;
