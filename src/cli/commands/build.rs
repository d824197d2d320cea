//! `build`: package the source folder.

use crate::cli::{BuildArgs, OutputManager};
use crate::error::Result;
use crate::packager::{
    DEFAULT_PKGBUILD_PATH, DEFAULT_POSTINSTALL_SCRIPT, HAS_PKGBUILD, LogAccumulator, Packager,
    exceeds_large_folder_threshold, folder_size, format_gigabytes, tool_available,
};
use crate::preferences::PreferenceStore;
use anyhow::{Context, anyhow};
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Runs a build with the stored preferences plus command line overrides.
///
/// The preferences file is locked only while it is read and written, never
/// across the pkgbuild run. This run's log entries are appended to whatever
/// the file holds by then, so overlapping builds keep each other's entries.
///
/// Exit code 0 means the package was written.
pub async fn execute(args: &BuildArgs, store: &PreferenceStore, output: &OutputManager) -> Result<i32> {
    let (preferences, script) = store.update(|preferences| Ok(args.apply_to(preferences)?))?;

    let config = preferences.to_package_config(
        script.unwrap_or_else(|| DEFAULT_POSTINSTALL_SCRIPT.to_string()),
    );

    let packager = Packager::new(LogAccumulator::new()).with_tool(&args.pkgbuild);

    if !pkgbuild_available(packager.tool()) {
        output.warn(&format!(
            "{} was not found; the build will most likely fail.",
            packager.tool().display()
        ))?;
    }

    let size = folder_size(&config.source_path);
    if exceeds_large_folder_threshold(size) && !args.yes && !confirm_large_folder(size)? {
        output.warn("Build cancelled.")?;
        return Ok(1);
    }

    let result = packager
        .spawn_build(config)
        .await
        .map_err(|e| anyhow!("build task failed: {e}"))?;

    store.append_logs(&packager.log().contents())?;

    if result.is_success() {
        output.success(result.message())?;
        Ok(0)
    } else {
        output.error(result.message())?;
        Ok(1)
    }
}

fn pkgbuild_available(tool: &Path) -> bool {
    if tool == Path::new(DEFAULT_PKGBUILD_PATH) {
        *HAS_PKGBUILD
    } else {
        tool_available(tool)
    }
}

/// Asks whether to continue with a source folder over 1 GB.
///
/// Anything but an explicit yes (including EOF) declines.
fn confirm_large_folder(size: u64) -> anyhow::Result<bool> {
    let stdin = io::stdin();
    let mut stderr = io::stderr();
    write!(
        stderr,
        "The source folder is larger than 1 GB ({}). Continue? [y/N] ",
        format_gigabytes(size)
    )?;
    stderr.flush()?;

    let mut answer = String::new();
    stdin
        .lock()
        .read_line(&mut answer)
        .context("reading confirmation")?;
    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
