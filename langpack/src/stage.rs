//! Staging copier and best-effort workspace cleanup.
//!
//! Source files are copied into a scratch directory so the originals stay
//! untouched while the converters and the archiver work on the copies.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Error;

/// Copies each named file from `src_dir` into `staging_dir`, preserving
/// filenames.
///
/// The first failing copy propagates; there is no partial-copy recovery,
/// the caller decides whether to abort the whole run.
pub fn copy_to_staging<S: AsRef<str>>(
    files: &[S],
    src_dir: &Path,
    staging_dir: &Path,
) -> Result<(), Error> {
    for file in files {
        let file = file.as_ref();
        fs::copy(src_dir.join(file), staging_dir.join(file))?;
    }
    Ok(())
}

/// Outcome of a best-effort cleanup pass.
///
/// Failures are recorded rather than swallowed, but the staging directory
/// is scratch space, so callers are free to ignore the report.
#[derive(Debug, Default)]
pub struct CleanupReport {
    /// Paths that could not be removed.
    pub failed: Vec<PathBuf>,
}

impl CleanupReport {
    /// True when every removal succeeded.
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Deletes each staged file by name, then removes the staging directory.
///
/// Never fails: every removal error is captured in the returned
/// [`CleanupReport`].
pub fn clean_staging<S: AsRef<str>>(staging_dir: &Path, files: &[S]) -> CleanupReport {
    let mut report = CleanupReport::default();
    for file in files {
        let path = staging_dir.join(file.as_ref());
        if fs::remove_file(&path).is_err() {
            report.failed.push(path);
        }
    }
    if fs::remove_dir(staging_dir).is_err() {
        report.failed.push(staging_dir.to_path_buf());
    }
    report
}
