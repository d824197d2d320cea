//! Persisted user preferences.
//!
//! Preferences are a flat JSON object stored at
//! `<config dir>/pkg_packager/preferences.json`. They are read at startup
//! and written back whenever a value changes. Missing keys fall back to
//! their defaults, so older files keep loading.
//!
//! The postinstall script text is intentionally not stored; only the flag
//! enabling it is.
//!
//! Several processes may share one file. [`PreferenceStore::update`] holds an
//! advisory lock on a sibling `.lock` file for each load-modify-save cycle.

use crate::error::{AppError, CliError, Result};
use crate::packager::PackageConfig;
use crate::packager::settings::{
    DEFAULT_INSTALL_LOCATION, DEFAULT_OUTPUT_PACKAGE_NAME, DEFAULT_PACKAGE_IDENTIFIER,
    DEFAULT_PACKAGE_VERSION,
};
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

const APP_DIR_NAME: &str = "pkg_packager";
const PREFERENCES_FILE_NAME: &str = "preferences.json";

/// Values remembered between runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    /// Folder to package
    pub source_folder_path: String,
    /// Folder the `.pkg` is written to
    pub output_folder_path: String,
    pub package_identifier: String,
    pub package_version: String,
    pub install_location: String,
    pub output_package_name: String,
    pub use_postinstall_script: bool,
    /// Accumulated build log text
    pub logs: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            source_folder_path: String::new(),
            output_folder_path: String::new(),
            package_identifier: DEFAULT_PACKAGE_IDENTIFIER.to_string(),
            package_version: DEFAULT_PACKAGE_VERSION.to_string(),
            install_location: DEFAULT_INSTALL_LOCATION.to_string(),
            output_package_name: DEFAULT_OUTPUT_PACKAGE_NAME.to_string(),
            use_postinstall_script: false,
            logs: String::new(),
        }
    }
}

impl Preferences {
    /// Builds a package configuration from the stored values.
    ///
    /// The script text comes from the caller since it is never persisted.
    pub fn to_package_config(&self, postinstall_script_contents: String) -> PackageConfig {
        PackageConfig {
            source_path: PathBuf::from(&self.source_folder_path),
            output_path: PathBuf::from(&self.output_folder_path),
            package_identifier: self.package_identifier.clone(),
            package_version: self.package_version.clone(),
            install_location: self.install_location.clone(),
            output_package_name: self.output_package_name.clone(),
            use_postinstall_script: self.use_postinstall_script,
            postinstall_script_contents,
        }
    }

    /// Stored keys and their values, excluding the log.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("sourceFolderPath", self.source_folder_path.clone()),
            ("outputFolderPath", self.output_folder_path.clone()),
            ("packageIdentifier", self.package_identifier.clone()),
            ("packageVersion", self.package_version.clone()),
            ("installLocation", self.install_location.clone()),
            ("outputPackageName", self.output_package_name.clone()),
            (
                "usePostinstallScript",
                self.use_postinstall_script.to_string(),
            ),
        ]
    }
}

/// JSON-file backed preference store.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    /// Uses the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Uses the platform configuration directory.
    pub fn at_default_location() -> Result<Self> {
        Self::in_config_dir(dirs::config_dir())
    }

    fn in_config_dir(config_dir: Option<PathBuf>) -> Result<Self> {
        let config_dir = config_dir.ok_or_else(|| {
            AppError::Cli(CliError::ExecutionFailed {
                command: "locate_preferences".to_string(),
                reason: "No configuration directory on this platform; pass --preferences"
                    .to_string(),
            })
        })?;
        Ok(Self::new(
            config_dir.join(APP_DIR_NAME).join(PREFERENCES_FILE_NAME),
        ))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads preferences, returning defaults when the file does not exist.
    pub fn load(&self) -> Result<Preferences> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!(
                    "No preferences at {}, using defaults",
                    self.path.display()
                );
                return Ok(Preferences::default());
            }
            Err(e) => {
                return Err(AppError::Cli(CliError::ExecutionFailed {
                    command: "read_preferences".to_string(),
                    reason: format!("Failed to read {}: {}", self.path.display(), e),
                }));
            }
        };

        serde_json::from_str(&contents).map_err(|e| {
            AppError::Cli(CliError::ExecutionFailed {
                command: "parse_preferences".to_string(),
                reason: format!("Failed to parse {}: {}", self.path.display(), e),
            })
        })
    }

    /// Writes preferences, replacing the previous file atomically.
    pub fn save(&self, preferences: &Preferences) -> Result<()> {
        self.create_parent_dir()?;

        let json = serde_json::to_string_pretty(preferences)?;
        let staging = self.path.with_extension("json.tmp");
        std::fs::write(&staging, json)?;
        std::fs::rename(&staging, &self.path)?;

        log::debug!("Saved preferences to {}", self.path.display());
        Ok(())
    }

    /// Saves only if `updated` differs from `original`.
    ///
    /// Returns whether a write happened.
    pub fn save_if_changed(&self, original: &Preferences, updated: &Preferences) -> Result<bool> {
        if original == updated {
            return Ok(false);
        }
        self.save(updated)?;
        Ok(true)
    }

    /// Loads, modifies and saves preferences under an exclusive lock.
    ///
    /// Other processes calling `update` on the same file wait for the lock,
    /// so each one sees the changes the previous one saved. The file is
    /// written only if `modify` changed something. Returns the updated
    /// preferences and whatever `modify` returned.
    pub fn update<T>(
        &self,
        modify: impl FnOnce(&mut Preferences) -> Result<T>,
    ) -> Result<(Preferences, T)> {
        let _lock = self.lock()?;

        let original = self.load()?;
        let mut updated = original.clone();
        let value = modify(&mut updated)?;
        self.save_if_changed(&original, &updated)?;

        Ok((updated, value))
    }

    /// Appends `text` to the stored log.
    pub fn append_logs(&self, text: &str) -> Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        self.update(|preferences| {
            preferences.logs.push_str(text);
            Ok(())
        })?;
        Ok(())
    }

    /// Blocks until this process holds the lock; released when the file drops.
    fn lock(&self) -> Result<File> {
        self.create_parent_dir()?;

        let lock_path = self.path.with_extension("json.lock");
        let lock_failed = |e: io::Error| {
            AppError::Cli(CliError::ExecutionFailed {
                command: "lock_preferences".to_string(),
                reason: format!("Failed to lock {}: {}", lock_path.display(), e),
            })
        };

        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)
            .map_err(lock_failed)?;
        file.lock_exclusive().map_err(lock_failed)?;

        log::debug!("Locked {}", lock_path.display());
        Ok(file)
    }

    fn create_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }
}
