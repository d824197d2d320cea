//! Package build parameters.

use std::ffi::OsString;
use std::path::PathBuf;

/// Package identifier used until the user picks one.
pub const DEFAULT_PACKAGE_IDENTIFIER: &str = "com.tvnz.app";

/// Package version used until the user picks one.
pub const DEFAULT_PACKAGE_VERSION: &str = "1.0.0";

/// Install location for the package payload.
pub const DEFAULT_INSTALL_LOCATION: &str = "/Applications";

/// Base file name of the produced artifact.
pub const DEFAULT_OUTPUT_PACKAGE_NAME: &str = "JPsOutput";

/// Template offered when a postinstall script is enabled without contents.
pub const DEFAULT_POSTINSTALL_SCRIPT: &str = "#!/bin/bash\n\n";

/// Extension appended to [`PackageConfig::output_package_name`].
pub const PACKAGE_EXTENSION: &str = "pkg";

/// Parameters for a single package build.
///
/// Only `source_path` and `output_path` are checked (for emptiness) when the
/// build runs. Identifier, version, install location and package name are
/// passed to `pkgbuild` exactly as given.
///
/// # Examples
///
/// ```
/// use pkg_packager::packager::PackageConfig;
///
/// let config = PackageConfig {
///     source_path: "/tmp/payload".into(),
///     output_path: "/tmp/out".into(),
///     output_package_name: "MyTool".into(),
///     ..Default::default()
/// };
/// assert_eq!(config.output_file_path().to_str(), Some("/tmp/out/MyTool.pkg"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageConfig {
    /// Directory tree to package (`--root`).
    pub source_path: PathBuf,

    /// Directory the `.pkg` is written to.
    pub output_path: PathBuf,

    /// Reverse-DNS package identifier (`--identifier`).
    pub package_identifier: String,

    /// Free-form version string (`--version`).
    pub package_version: String,

    /// Where the payload is installed (`--install-location`).
    pub install_location: String,

    /// Artifact file name without extension.
    pub output_package_name: String,

    /// Whether a postinstall script is staged and passed via `--scripts`.
    pub use_postinstall_script: bool,

    /// Shell script contents written to `scripts/postinstall`.
    pub postinstall_script_contents: String,
}

impl Default for PackageConfig {
    fn default() -> Self {
        Self {
            source_path: PathBuf::new(),
            output_path: PathBuf::new(),
            package_identifier: DEFAULT_PACKAGE_IDENTIFIER.to_string(),
            package_version: DEFAULT_PACKAGE_VERSION.to_string(),
            install_location: DEFAULT_INSTALL_LOCATION.to_string(),
            output_package_name: DEFAULT_OUTPUT_PACKAGE_NAME.to_string(),
            use_postinstall_script: false,
            postinstall_script_contents: DEFAULT_POSTINSTALL_SCRIPT.to_string(),
        }
    }
}

impl PackageConfig {
    /// Returns `{output_path}/{output_package_name}.pkg`.
    ///
    /// The name is joined textually. Separators or `..` inside
    /// `output_package_name` are not rejected and can place the artifact
    /// outside `output_path`.
    pub fn output_file_path(&self) -> PathBuf {
        let mut path = OsString::from(self.output_path.as_os_str());
        path.push("/");
        path.push(&self.output_package_name);
        path.push(".");
        path.push(PACKAGE_EXTENSION);
        PathBuf::from(path)
    }

    /// True when either required folder is empty.
    pub fn is_missing_input(&self) -> bool {
        self.source_path.as_os_str().is_empty() || self.output_path.as_os_str().is_empty()
    }
}
