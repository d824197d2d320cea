//! Package build orchestration.
//!
//! This module provides the [`Packager`] that validates a [`PackageConfig`],
//! stages scripts, runs pkgbuild and reports the outcome.

use super::{
    arguments::pkgbuild_arguments,
    runner::{SystemRunner, ToolRunner},
    staging::StagedScripts,
    tool_detection::DEFAULT_PKGBUILD_PATH,
};
use crate::packager::{
    build_log::LogAccumulator,
    error::{Error, Result},
    outcome::{
        BUILD_FAILURE_MESSAGE, InvocationResult, LAUNCH_FAILURE_MESSAGE, MISSING_INPUT_MESSAGE,
    },
    settings::PackageConfig,
};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Builds `.pkg` installers by driving pkgbuild.
///
/// Cheap to clone; clones share the runner and the log.
///
/// # Examples
///
/// ```no_run
/// use pkg_packager::packager::{LogAccumulator, PackageConfigBuilder, Packager};
///
/// let log = LogAccumulator::new();
/// let packager = Packager::new(log.clone());
///
/// let config = PackageConfigBuilder::new()
///     .source_path("/Users/me/build/payload")
///     .output_path("/Users/me/Desktop")
///     .build();
///
/// let result = packager.build(&config);
/// println!("{}", result);
/// if !result.is_success() {
///     print!("{}", log.contents());
/// }
/// ```
#[derive(Clone)]
pub struct Packager {
    tool: PathBuf,
    temp_root: PathBuf,
    runner: Arc<dyn ToolRunner>,
    log: LogAccumulator,
}

impl std::fmt::Debug for Packager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Packager")
            .field("tool", &self.tool)
            .field("temp_root", &self.temp_root)
            .field("runner", &"<dyn ToolRunner>")
            .finish_non_exhaustive()
    }
}

impl Packager {
    /// Creates a packager that runs `/usr/bin/pkgbuild` and appends to `log`.
    pub fn new(log: LogAccumulator) -> Self {
        Self {
            tool: PathBuf::from(DEFAULT_PKGBUILD_PATH),
            temp_root: std::env::temp_dir(),
            runner: Arc::new(SystemRunner),
            log,
        }
    }

    /// Uses a different packaging executable.
    pub fn with_tool(mut self, tool: impl Into<PathBuf>) -> Self {
        self.tool = tool.into();
        self
    }

    /// Stages scripts under `temp_root` instead of the process temp dir.
    pub fn with_temp_root(mut self, temp_root: impl Into<PathBuf>) -> Self {
        self.temp_root = temp_root.into();
        self
    }

    /// Replaces the process runner.
    pub fn with_runner(mut self, runner: Arc<dyn ToolRunner>) -> Self {
        self.runner = runner;
        self
    }

    /// The packaging executable this packager runs.
    pub fn tool(&self) -> &Path {
        &self.tool
    }

    /// The log this packager appends to.
    pub fn log(&self) -> &LogAccumulator {
        &self.log
    }

    /// Builds the package described by `config`.
    ///
    /// Blocks until pkgbuild exits; there is no timeout and no cancellation.
    /// Interactive callers should use [`Packager::spawn_build`] or their own
    /// worker thread.
    ///
    /// Returns one of two coarse outcomes. Detail (tool output, exit status,
    /// OS errors) goes to the log only.
    pub fn build(&self, config: &PackageConfig) -> InvocationResult {
        match self.try_build(config) {
            Ok(output_path) => {
                let result = InvocationResult::success(output_path);
                self.log.append(result.message());
                result
            }
            Err(error) => self.report_failure(&error),
        }
    }

    /// Runs [`Packager::build`] on tokio's blocking pool.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn_build(&self, config: PackageConfig) -> tokio::task::JoinHandle<InvocationResult> {
        let packager = self.clone();
        tokio::task::spawn_blocking(move || packager.build(&config))
    }

    fn try_build(&self, config: &PackageConfig) -> Result<PathBuf> {
        if config.is_missing_input() {
            return Err(Error::MissingInput);
        }

        let output_path = config.output_file_path();

        let staged = if config.use_postinstall_script {
            Some(StagedScripts::stage_postinstall(
                &self.temp_root,
                &config.postinstall_script_contents,
            )?)
        } else {
            None
        };

        let arguments = pkgbuild_arguments(config, staged.as_ref().map(StagedScripts::scripts_dir));
        let outcome = self.run_tool(&arguments);

        if let Some(staged) = staged {
            // Best-effort: a leftover staging dir never changes the outcome.
            let _removed = staged.cleanup();
        }

        outcome.map(|()| output_path)
    }

    fn run_tool(&self, arguments: &[OsString]) -> Result<()> {
        let command = self.tool.display().to_string();
        log::info!("Running {} {:?}", command, arguments);

        let output = self
            .runner
            .run(&self.tool, arguments)
            .map_err(|error| Error::ProcessLaunch {
                command: command.clone(),
                error,
            })?;

        // One entry per run, even when the tool printed nothing.
        self.log.append(output.output.trim_end());

        if output.success() {
            Ok(())
        } else {
            Err(Error::ProcessExecution {
                command,
                code: output.code,
            })
        }
    }

    fn report_failure(&self, error: &Error) -> InvocationResult {
        match error {
            Error::MissingInput => {
                self.log
                    .append_error(&format!("Error: {}", MISSING_INPUT_MESSAGE));
                InvocationResult::failure(MISSING_INPUT_MESSAGE)
            }
            Error::Fs { .. } => {
                self.log
                    .append_error(&format!("Error staging postinstall script: {}", error));
                InvocationResult::failure(BUILD_FAILURE_MESSAGE)
            }
            Error::ProcessLaunch { error: source, .. } => {
                self.log
                    .append_error(&format!("Error running pkgbuild: {}", source));
                InvocationResult::failure(LAUNCH_FAILURE_MESSAGE)
            }
            Error::ProcessExecution { .. } => {
                log::warn!("{}", error);
                self.log.append_error(BUILD_FAILURE_MESSAGE);
                InvocationResult::failure(BUILD_FAILURE_MESSAGE)
            }
        }
    }
}
