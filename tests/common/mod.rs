//! Shared utilities for integration tests
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use tempfile::TempDir;

const FAKE_PKGBUILD: &str = include_str!("../fixtures/fake_pkgbuild.sh");

/// A throwaway pkgbuild replacement that records how it was called.
pub struct FakePkgbuild {
    dir: TempDir,
    path: PathBuf,
}

impl FakePkgbuild {
    /// Writes the fixture script into a fresh directory and marks it executable.
    pub fn install() -> Self {
        let dir = tempfile::tempdir().expect("create fake pkgbuild dir");
        let path = dir.path().join("pkgbuild");
        std::fs::write(&path, FAKE_PKGBUILD).expect("write fake pkgbuild");

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
                .expect("mark fake pkgbuild executable");
        }

        Self { dir, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Makes every following run exit 1.
    pub fn fail_runs(&self) {
        std::fs::write(self.dir.path().join("fail"), b"").expect("write fail marker");
    }

    /// Makes every following run pause for a second before finishing.
    pub fn slow_runs(&self) {
        std::fs::write(self.dir.path().join("slow"), b"").expect("write slow marker");
    }

    /// Arguments of the most recent run, one per element.
    pub fn recorded_args(&self) -> Vec<String> {
        std::fs::read_to_string(self.dir.path().join("args.txt"))
            .map(|text| text.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Contents of the postinstall script staged for the most recent run.
    pub fn staged_postinstall(&self) -> Option<String> {
        std::fs::read_to_string(self.dir.path().join("staged_postinstall")).ok()
    }

    /// Whether the staged postinstall script was executable.
    pub fn staged_executable(&self) -> bool {
        self.dir.path().join("staged_executable").exists()
    }
}

/// Creates a source folder with a couple of files and an empty output folder.
pub fn payload_and_output(root: &Path) -> (PathBuf, PathBuf) {
    let source = root.join("payload");
    let output = root.join("out");
    std::fs::create_dir_all(source.join("Tool.app/Contents")).expect("create payload");
    std::fs::write(source.join("Tool.app/Contents/Info.plist"), b"<plist/>")
        .expect("write payload file");
    std::fs::create_dir_all(&output).expect("create output");
    (source, output)
}
