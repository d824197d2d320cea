//! pkgbuild argument assembly.

use crate::packager::settings::PackageConfig;
use std::ffi::OsString;
use std::path::Path;

/// Builds the pkgbuild argument vector.
///
/// Order is fixed:
///
/// ```text
/// --root <source> --identifier <id> --version <version>
/// --install-location <location> [--scripts <dir>] <output>/<name>.pkg
/// ```
pub fn pkgbuild_arguments(config: &PackageConfig, scripts_dir: Option<&Path>) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec![
        "--root".into(),
        config.source_path.clone().into_os_string(),
        "--identifier".into(),
        config.package_identifier.as_str().into(),
        "--version".into(),
        config.package_version.as_str().into(),
        "--install-location".into(),
        config.install_location.as_str().into(),
    ];

    if let Some(dir) = scripts_dir {
        args.push("--scripts".into());
        args.push(dir.as_os_str().to_owned());
    }

    args.push(config.output_file_path().into_os_string());
    args
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packager::settings::PackageConfigBuilder;

    fn config() -> PackageConfig {
        PackageConfigBuilder::new()
            .source_path("/Users/me/payload")
            .output_path("/Users/me/out")
            .package_identifier("com.example.tool")
            .package_version("2.4")
            .install_location("/opt/tool")
            .output_package_name("Tool")
            .build()
    }

    #[test]
    fn without_scripts() {
        let args = pkgbuild_arguments(&config(), None);
        assert_eq!(
            args,
            [
                "--root",
                "/Users/me/payload",
                "--identifier",
                "com.example.tool",
                "--version",
                "2.4",
                "--install-location",
                "/opt/tool",
                "/Users/me/out/Tool.pkg",
            ]
            .map(OsString::from)
        );
    }

    #[test]
    fn scripts_come_before_output() {
        let args = pkgbuild_arguments(&config(), Some(Path::new("/tmp/stage/scripts")));
        assert_eq!(args.len(), 11);
        assert_eq!(args[8], "--scripts");
        assert_eq!(args[9], "/tmp/stage/scripts");
        assert_eq!(args[10], "/Users/me/out/Tool.pkg");
    }

    #[test]
    fn is_deterministic() {
        let config = config();
        assert_eq!(
            pkgbuild_arguments(&config, None),
            pkgbuild_arguments(&config, None)
        );
    }
}
