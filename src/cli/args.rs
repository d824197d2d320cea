//! Command line argument parsing.
//!
//! This module provides CLI argument parsing using clap. Build overrides are
//! applied to the stored preferences so the next run starts from them.

use crate::packager::DEFAULT_PKGBUILD_PATH;
use crate::preferences::Preferences;
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Builds macOS installer packages with pkgbuild
#[derive(Parser, Debug)]
#[command(
    name = "pkg_packager",
    version,
    about = "Builds macOS installer packages with pkgbuild",
    long_about = "Builds a .pkg installer from a folder by running /usr/bin/pkgbuild.

Settings given on the command line are remembered for the next run.

Usage:
  pkg_packager build --source ./payload --output ~/Desktop --name MyTool
  pkg_packager build --postinstall ./postinstall.sh --identifier com.example.tool
  pkg_packager logs
  pkg_packager logs --clear

Exit code 0 = package written to <output>/<name>.pkg."
)]
pub struct Args {
    /// Preferences file (defaults to the platform config directory)
    #[arg(long, global = true, env = "PKG_PACKAGER_PREFERENCES", value_name = "PATH")]
    pub preferences: Option<PathBuf>,

    /// Only print errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a package from the source folder
    Build(BuildArgs),

    /// Show or clear the build log
    Logs(LogsArgs),

    /// Show stored preferences
    Prefs,
}

/// Arguments for `build`
#[derive(clap::Args, Debug, Default)]
pub struct BuildArgs {
    /// Folder to package
    #[arg(short = 's', long, value_name = "DIR")]
    pub source: Option<PathBuf>,

    /// Folder the .pkg is written to
    #[arg(short = 'o', long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Package identifier, e.g. com.example.tool
    #[arg(long, value_name = "ID")]
    pub identifier: Option<String>,

    /// Package version
    #[arg(long = "package-version", value_name = "VERSION")]
    pub package_version: Option<String>,

    /// Where the payload is installed
    #[arg(long, value_name = "PATH")]
    pub install_location: Option<String>,

    /// Package file name without the .pkg extension
    #[arg(short = 'n', long, value_name = "NAME")]
    pub name: Option<String>,

    /// Postinstall script to include (enables the script)
    #[arg(long, value_name = "FILE", conflicts_with = "no_postinstall")]
    pub postinstall: Option<PathBuf>,

    /// Build without a postinstall script
    #[arg(long)]
    pub no_postinstall: bool,

    /// Packaging executable
    #[arg(long, env = "PKG_PACKAGER_PKGBUILD", value_name = "PATH", default_value = DEFAULT_PKGBUILD_PATH)]
    pub pkgbuild: PathBuf,

    /// Skip the confirmation for source folders over 1 GB
    #[arg(short = 'y', long)]
    pub yes: bool,
}

/// Arguments for `logs`
#[derive(clap::Args, Debug, Default)]
pub struct LogsArgs {
    /// Remove all log entries
    #[arg(long)]
    pub clear: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl BuildArgs {
    /// Writes overrides into `preferences`.
    ///
    /// Returns the postinstall script text when `--postinstall` was given.
    pub fn apply_to(&self, preferences: &mut Preferences) -> anyhow::Result<Option<String>> {
        if let Some(source) = &self.source {
            preferences.source_folder_path = source.to_string_lossy().into_owned();
        }
        if let Some(output) = &self.output {
            preferences.output_folder_path = output.to_string_lossy().into_owned();
        }
        if let Some(identifier) = &self.identifier {
            preferences.package_identifier = identifier.clone();
        }
        if let Some(version) = &self.package_version {
            preferences.package_version = version.clone();
        }
        if let Some(location) = &self.install_location {
            preferences.install_location = location.clone();
        }
        if let Some(name) = &self.name {
            preferences.output_package_name = name.clone();
        }
        if self.no_postinstall {
            preferences.use_postinstall_script = false;
        }

        let Some(script_path) = &self.postinstall else {
            return Ok(None);
        };
        let contents = std::fs::read_to_string(script_path)
            .with_context(|| format!("reading postinstall script {}", script_path.display()))?;
        preferences.use_postinstall_script = true;
        Ok(Some(contents))
    }
}
