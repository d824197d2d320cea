//! Build orchestration.
//!
//! This module provides the [`Packager`] that turns a
//! [`PackageConfig`](crate::packager::PackageConfig) into a pkgbuild run.
//!
//! # Overview
//!
//! A build:
//! 1. Rejects empty source or output folders
//! 2. Stages `scripts/postinstall` in a unique temp dir when enabled
//! 3. Assembles the argument vector in a fixed order
//! 4. Runs pkgbuild, capturing stdout and stderr as one stream
//! 5. Logs the output and returns an
//!    [`InvocationResult`](crate::packager::InvocationResult)
//! 6. Removes the staging directory (best-effort)
//!
//! # Module Organization
//!
//! - [`arguments`] - pkgbuild argument vector
//! - [`orchestrator`] - [`Packager`] and the build workflow
//! - [`runner`] - process execution seam
//! - [`staging`] - temporary scripts directory
//! - [`tool_detection`] - pkgbuild availability checking

pub mod arguments;
mod orchestrator;
pub mod runner;
pub mod staging;
pub mod tool_detection;

pub use orchestrator::Packager;
