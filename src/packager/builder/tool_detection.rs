//! pkgbuild availability checking.
//!
//! Detection is advisory: a missing tool is still invoked and reported
//! through the normal launch-failure path.

use std::path::Path;
use std::sync::LazyLock;

/// Location of the platform packaging tool.
pub const DEFAULT_PKGBUILD_PATH: &str = "/usr/bin/pkgbuild";

/// Whether pkgbuild exists at [`DEFAULT_PKGBUILD_PATH`].
///
/// Cached so repeated builds don't hit the filesystem.
pub static HAS_PKGBUILD: LazyLock<bool> =
    LazyLock::new(|| tool_available(Path::new(DEFAULT_PKGBUILD_PATH)));

/// Checks whether `tool` resolves to an executable.
///
/// Bare names are looked up on `PATH`; paths are checked directly.
pub fn tool_available(tool: &Path) -> bool {
    match which::which(tool) {
        Ok(path) => {
            log::debug!("Found packaging tool at: {}", path.display());
            true
        }
        Err(e) => {
            log::debug!("Packaging tool {} not found: {}", tool.display(), e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_path_is_unavailable() {
        assert!(!tool_available(Path::new("/definitely/not/here/pkgbuild")));
    }

    #[cfg(unix)]
    #[test]
    fn shell_is_available() {
        assert!(tool_available(Path::new("/bin/sh")));
    }
}
