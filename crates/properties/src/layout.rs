//! Build directory layout carried by an unloaded controller.
//!
//! Responsibilities:
//! - Remember the build root and settings directory.
//! - Supply the settings directory for `load_from_settings_dir`.
//!
//! Does NOT handle:
//! - Rewriting directories passed to `load_from`; those reach the loader as given.
//! - Discovering the build root (callers construct the layout).
//! - Checking that any directory exists.

use std::path::{Path, PathBuf};

/// Root and settings directories of a build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildLayout {
    root_directory: PathBuf,
    settings_dir: PathBuf,
}

impl BuildLayout {
    /// Create a layout whose settings directory is the root directory.
    pub fn new(root_directory: impl Into<PathBuf>) -> Self {
        let root_directory = root_directory.into();
        Self {
            settings_dir: root_directory.clone(),
            root_directory,
        }
    }

    /// Set the settings directory. Relative paths are taken from the root directory.
    pub fn with_settings_dir(mut self, settings_dir: impl AsRef<Path>) -> Self {
        self.settings_dir = self.resolve(settings_dir.as_ref());
        self
    }

    pub fn root_directory(&self) -> &Path {
        &self.root_directory
    }

    pub fn settings_dir(&self) -> &Path {
        &self.settings_dir
    }

    /// Resolve `directory` against the root directory.
    ///
    /// Absolute paths are returned unchanged.
    fn resolve(&self, directory: &Path) -> PathBuf {
        if directory.is_absolute() {
            directory.to_path_buf()
        } else {
            self.root_directory.join(directory)
        }
    }
}
