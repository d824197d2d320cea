//! Builder for constructing [`PackageConfig`].

use super::PackageConfig;
use std::path::Path;

/// Fluent builder for [`PackageConfig`].
///
/// Unset fields keep the defaults from [`PackageConfig::default`]. Building
/// never fails; empty folders are reported when the build runs.
///
/// # Examples
///
/// ```
/// use pkg_packager::packager::PackageConfigBuilder;
///
/// let config = PackageConfigBuilder::new()
///     .source_path("/tmp/payload")
///     .output_path("/tmp/out")
///     .package_identifier("com.example.tool")
///     .postinstall_script("#!/bin/sh\necho done\n")
///     .build();
///
/// assert!(config.use_postinstall_script);
/// ```
#[derive(Debug, Default)]
pub struct PackageConfigBuilder {
    config: PackageConfig,
}

impl PackageConfigBuilder {
    /// Creates a builder seeded with default values.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the directory tree to package.
    pub fn source_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config.source_path = path.as_ref().to_path_buf();
        self
    }

    /// Sets the directory the artifact is written to.
    pub fn output_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config.output_path = path.as_ref().to_path_buf();
        self
    }

    /// Sets the package identifier.
    pub fn package_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.config.package_identifier = identifier.into();
        self
    }

    /// Sets the package version.
    pub fn package_version(mut self, version: impl Into<String>) -> Self {
        self.config.package_version = version.into();
        self
    }

    /// Sets the payload install location.
    pub fn install_location(mut self, location: impl Into<String>) -> Self {
        self.config.install_location = location.into();
        self
    }

    /// Sets the artifact base name (without `.pkg`).
    pub fn output_package_name(mut self, name: impl Into<String>) -> Self {
        self.config.output_package_name = name.into();
        self
    }

    /// Enables the postinstall script with the given contents.
    pub fn postinstall_script(mut self, contents: impl Into<String>) -> Self {
        self.config.use_postinstall_script = true;
        self.config.postinstall_script_contents = contents.into();
        self
    }

    /// Toggles the postinstall script without touching its contents.
    pub fn use_postinstall_script(mut self, enabled: bool) -> Self {
        self.config.use_postinstall_script = enabled;
        self
    }

    /// Returns the finished configuration.
    pub fn build(self) -> PackageConfig {
        self.config
    }
}
