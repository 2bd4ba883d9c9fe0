//! Pipeline configuration: explicit filesystem locations for one run.
//!
//! All directories are owned by the config and passed into each component,
//! so nothing in the crate depends on ambient process-wide paths.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Error;

/// Filesystem layout for one language pack run.
///
/// The conventional layout under a root directory is:
///
/// ```text
/// <root>/languages/          source translation files (operator-managed)
/// <root>/tmp/                scratch staging directory
/// <root>/packages/           one zip archive per locale
/// <root>/language-pack.json  the manifest document
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackConfig {
    /// Root directory of the languages repository.
    pub root: PathBuf,
    /// Directory the operator populates with translation files.
    pub languages_dir: PathBuf,
    /// Scratch directory; staged copies live here for the duration of a run.
    pub staging_dir: PathBuf,
    /// Output directory for the per-locale archives.
    pub packages_dir: PathBuf,
    /// Path of the manifest document.
    pub manifest_path: PathBuf,
}

impl PackConfig {
    /// Creates a config with the conventional layout under `root`.
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        let root = root.as_ref().to_path_buf();
        PackConfig {
            languages_dir: root.join("languages"),
            staging_dir: root.join("tmp"),
            packages_dir: root.join("packages"),
            manifest_path: root.join("language-pack.json"),
            root,
        }
    }

    /// Overrides the source directory.
    pub fn with_languages_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.languages_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Overrides the staging directory.
    pub fn with_staging_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.staging_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Overrides the archive output directory.
    pub fn with_packages_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.packages_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Overrides the manifest path.
    pub fn with_manifest_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.manifest_path = path.as_ref().to_path_buf();
        self
    }

    /// Creates the languages, staging, and packages directories if absent.
    ///
    /// Idempotent: existing directories are left untouched. I/O failure
    /// propagates and aborts the run.
    pub fn ensure_layout(&self) -> Result<(), Error> {
        fs::create_dir_all(&self.languages_dir)?;
        fs::create_dir_all(&self.staging_dir)?;
        fs::create_dir_all(&self.packages_dir)?;
        Ok(())
    }
}
