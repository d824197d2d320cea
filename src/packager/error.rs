//! Error types for packaging operations.
//!
//! These errors never reach callers of [`Packager::build`](super::Packager::build)
//! directly: the packager flattens them into an
//! [`InvocationResult`](super::InvocationResult) and records the detail in the
//! log sink.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for packaging operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while preparing or running a package build.
#[derive(Error, Debug)]
pub enum Error {
    /// Source or output folder was left empty.
    #[error("Please select both source and output folders.")]
    MissingInput,

    /// Filesystem operation failed while staging build inputs.
    #[error("{context} {}: {error}", .path.display())]
    Fs {
        /// What was being done when the error occurred
        context: &'static str,
        /// Path the operation was applied to
        path: PathBuf,
        /// Underlying error
        #[source]
        error: std::io::Error,
    },

    /// The packaging tool could not be started.
    #[error("failed to run {command}: {error}")]
    ProcessLaunch {
        /// Tool that failed to start
        command: String,
        /// Underlying OS error
        #[source]
        error: std::io::Error,
    },

    /// The packaging tool ran but reported failure.
    #[error("{command} exited with {}", describe_exit(.code))]
    ProcessExecution {
        /// Tool that failed
        command: String,
        /// Exit code, `None` when terminated by a signal
        code: Option<i32>,
    },
}

fn describe_exit(code: &Option<i32>) -> String {
    match *code {
        Some(code) => format!("exit code {code}"),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

/// Extension for attaching filesystem context to I/O results.
pub trait ErrorExt<T> {
    /// Wraps the error with the operation being performed and the path involved.
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::io::Result<T> {
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T> {
        self.map_err(|error| Error::Fs {
            context,
            path: path.as_ref().to_path_buf(),
            error,
        })
    }
}
