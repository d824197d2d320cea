//! Configuration structures for package builds.

mod builder;
mod package;

pub use builder::PackageConfigBuilder;
pub use package::{
    DEFAULT_INSTALL_LOCATION, DEFAULT_OUTPUT_PACKAGE_NAME, DEFAULT_PACKAGE_IDENTIFIER,
    DEFAULT_PACKAGE_VERSION, DEFAULT_POSTINSTALL_SCRIPT, PACKAGE_EXTENSION, PackageConfig,
};
