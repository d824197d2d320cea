//! macOS installer packaging via pkgbuild.
//!
//! The [`Packager`] takes a [`PackageConfig`], optionally stages a
//! postinstall script, runs `/usr/bin/pkgbuild` and reports an
//! [`InvocationResult`]. Tool output and errors are written to a
//! caller-owned [`LogAccumulator`].
//!
//! [`folder_size`] lets callers ask for confirmation before packaging very
//! large source folders.

pub mod build_log;
pub mod builder;
pub mod error;
mod outcome;
pub mod settings;
pub mod utils;

pub use build_log::LogAccumulator;
pub use builder::Packager;
pub use builder::runner::{SystemRunner, ToolOutput, ToolRunner};
pub use builder::tool_detection::{DEFAULT_PKGBUILD_PATH, HAS_PKGBUILD, tool_available};
pub use error::{Error, Result};
pub use outcome::{
    BUILD_FAILURE_MESSAGE, InvocationResult, LAUNCH_FAILURE_MESSAGE, MISSING_INPUT_MESSAGE,
};
pub use settings::{DEFAULT_POSTINSTALL_SCRIPT, PackageConfig, PackageConfigBuilder};
pub use utils::fs::{
    LARGE_FOLDER_THRESHOLD, exceeds_large_folder_threshold, folder_size, format_gigabytes,
};
