//! macOS installer package builder
//!
//! This library drives `pkgbuild` to turn a folder into a `.pkg`:
//! - assembles the pkgbuild argument vector
//! - stages an optional postinstall script in a temporary directory
//! - captures tool output into a caller-owned log
//! - estimates folder size to gate very large builds
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod cli;
pub mod error;
pub mod packager;
pub mod preferences;

// Re-export commonly used types
pub use error::{AppError, CliError, Result};
pub use packager::{InvocationResult, LogAccumulator, PackageConfig, Packager};
