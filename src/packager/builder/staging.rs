//! Temporary staging of installer scripts.
//!
//! `pkgbuild --scripts` expects a directory of executable scripts. A
//! postinstall script is written to a fresh directory per build:
//!
//! ```text
//! <temp root>/pkg-packager-XXXXXX/scripts/postinstall   (mode 0755)
//! ```
//!
//! The directory is removed by [`StagedScripts::cleanup`], or on drop if the
//! build unwinds before cleanup runs.

use crate::packager::error::{ErrorExt, Result};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Directory name passed to `--scripts`.
pub const SCRIPTS_DIR_NAME: &str = "scripts";

/// File name pkgbuild runs after installing the payload.
pub const POSTINSTALL_FILE_NAME: &str = "postinstall";

const STAGING_PREFIX: &str = "pkg-packager-";

/// A staged scripts directory that lives for one build.
#[derive(Debug)]
pub struct StagedScripts {
    root: TempDir,
    scripts_dir: PathBuf,
}

impl StagedScripts {
    /// Creates a unique staging directory under `temp_root` holding an
    /// executable `scripts/postinstall` with `contents`.
    pub fn stage_postinstall(temp_root: &Path, contents: &str) -> Result<Self> {
        let root = tempfile::Builder::new()
            .prefix(STAGING_PREFIX)
            .tempdir_in(temp_root)
            .fs_context("creating staging directory in", temp_root)?;

        let scripts_dir = root.path().join(SCRIPTS_DIR_NAME);
        std::fs::create_dir_all(&scripts_dir)
            .fs_context("creating scripts directory", &scripts_dir)?;

        let script_path = scripts_dir.join(POSTINSTALL_FILE_NAME);
        std::fs::write(&script_path, contents)
            .fs_context("writing postinstall script", &script_path)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&script_path, std::fs::Permissions::from_mode(0o755))
                .fs_context("marking postinstall script executable", &script_path)?;
        }

        log::debug!("Staged postinstall script at {}", script_path.display());

        Ok(Self { root, scripts_dir })
    }

    /// The unique per-build directory.
    pub fn root(&self) -> &Path {
        self.root.path()
    }

    /// The directory passed to `pkgbuild --scripts`.
    pub fn scripts_dir(&self) -> &Path {
        &self.scripts_dir
    }

    /// Removes the staging directory.
    ///
    /// Best-effort: returns whether removal succeeded and never fails the
    /// build. A failure is only reported at debug level.
    pub fn cleanup(self) -> bool {
        let root = self.root.path().to_path_buf();
        match self.root.close() {
            Ok(()) => true,
            Err(e) => {
                log::debug!("Could not remove staging directory {}: {}", root.display(), e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_executable_postinstall() {
        let temp_root = tempfile::tempdir().unwrap();
        let staged =
            StagedScripts::stage_postinstall(temp_root.path(), "#!/bin/sh\necho hi\n").unwrap();

        assert!(staged.root().starts_with(temp_root.path()));
        assert_eq!(staged.scripts_dir(), staged.root().join("scripts"));

        let script = staged.scripts_dir().join("postinstall");
        assert_eq!(
            std::fs::read_to_string(&script).unwrap(),
            "#!/bin/sh\necho hi\n"
        );

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = std::fs::metadata(&script).unwrap().permissions().mode();
            assert_eq!(mode & 0o777, 0o755);
        }

        // Exactly one file is staged.
        let entries: Vec<_> = std::fs::read_dir(staged.scripts_dir())
            .unwrap()
            .collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn cleanup_removes_everything() {
        let temp_root = tempfile::tempdir().unwrap();
        let staged = StagedScripts::stage_postinstall(temp_root.path(), "#!/bin/bash\n\n").unwrap();
        let root = staged.root().to_path_buf();

        assert!(staged.cleanup());
        assert!(!root.exists());
    }

    #[test]
    fn each_stage_is_unique() {
        let temp_root = tempfile::tempdir().unwrap();
        let first = StagedScripts::stage_postinstall(temp_root.path(), "a").unwrap();
        let second = StagedScripts::stage_postinstall(temp_root.path(), "b").unwrap();

        assert_ne!(first.root(), second.root());
    }

    #[test]
    fn missing_temp_root_is_an_error() {
        let temp_root = tempfile::tempdir().unwrap();
        let missing = temp_root.path().join("gone");

        let error = StagedScripts::stage_postinstall(&missing, "x").unwrap_err();
        assert!(error.to_string().contains("creating staging directory in"));
    }
}
