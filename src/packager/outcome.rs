//! Terminal outcome of a package build.

use std::fmt;
use std::path::{Path, PathBuf};

/// Returned when either required folder is empty.
pub const MISSING_INPUT_MESSAGE: &str = "✗ Please select both source and output folders.";

/// Returned when the packaging tool exits non-zero or staging fails.
pub const BUILD_FAILURE_MESSAGE: &str =
    "✗ Package build failed. Check the logs for more information.";

/// Returned when the packaging tool cannot be started.
pub const LAUNCH_FAILURE_MESSAGE: &str =
    "✗ Failed to run pkgbuild. Check the logs for more information.";

/// Human-readable result of [`Packager::build`](super::Packager::build).
///
/// Failure messages are deliberately generic; exit codes and tool output
/// only appear in the [`LogAccumulator`](super::LogAccumulator).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvocationResult {
    /// The package was written.
    Success {
        /// Message naming the produced file
        message: String,
        /// `{output_path}/{output_package_name}.pkg`
        output_path: PathBuf,
    },

    /// The build did not produce a package.
    Failure {
        /// Generic message pointing at the logs
        message: String,
    },
}

impl InvocationResult {
    pub(crate) fn success(output_path: PathBuf) -> Self {
        let message = format!("✓ Package built successfully at {}", output_path.display());
        Self::Success {
            message,
            output_path,
        }
    }

    pub(crate) fn failure(message: &str) -> Self {
        Self::Failure {
            message: message.to_string(),
        }
    }

    /// The message to show the user.
    pub fn message(&self) -> &str {
        match self {
            Self::Success { message, .. } | Self::Failure { message } => message,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Path of the produced package, if any.
    pub fn output_path(&self) -> Option<&Path> {
        match self {
            Self::Success { output_path, .. } => Some(output_path),
            Self::Failure { .. } => None,
        }
    }
}

impl fmt::Display for InvocationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
