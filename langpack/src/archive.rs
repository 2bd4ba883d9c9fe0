//! Zip archive creation for assembled packages.
//!
//! Archive failures are deliberately soft: the pipeline reports them and
//! moves on to the next locale, so this module returns an outcome value
//! instead of a hard error.

use std::fs::File;
use std::io;
use std::path::Path;

use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::error::Error;

/// Result of one archive attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArchiveOutcome {
    /// The archive was written and verified to exist on disk.
    Created,
    /// The destination already existed and overwrite was disabled; the
    /// existing archive is untouched.
    SkippedExisting,
    /// The archive could not be produced. Carries a human-readable reason;
    /// the destination file may be absent or partially written.
    Failed(String),
}

impl ArchiveOutcome {
    /// True only for [`ArchiveOutcome::Created`].
    pub fn is_created(&self) -> bool {
        matches!(self, ArchiveOutcome::Created)
    }
}

/// Writes `files` into a fresh zip archive at `destination`.
///
/// Every file is stored by its base filename: directory structure is
/// flattened and all entries sit at the archive root. An existing
/// destination is truncated when `overwrite` is true and left untouched
/// (with [`ArchiveOutcome::SkippedExisting`]) when it is false. After the
/// writer is closed the destination is verified to exist on disk.
pub fn create_zip<P: AsRef<Path>>(
    files: &[P],
    destination: &Path,
    overwrite: bool,
) -> ArchiveOutcome {
    if destination.exists() && !overwrite {
        return ArchiveOutcome::SkippedExisting;
    }

    if let Err(e) = write_zip(files, destination) {
        return ArchiveOutcome::Failed(e.to_string());
    }

    // The writer reported success; make sure the file really landed.
    if destination.exists() {
        ArchiveOutcome::Created
    } else {
        ArchiveOutcome::Failed("archive missing after close".to_string())
    }
}

fn write_zip<P: AsRef<Path>>(files: &[P], destination: &Path) -> Result<(), Error> {
    let out = File::create(destination)?;
    let mut writer = ZipWriter::new(out);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for file in files {
        let file = file.as_ref();
        let name = file
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| Error::Io(io::Error::other(format!("bad file name: {:?}", file))))?;
        writer.start_file(name, options)?;
        let mut src = File::open(file)?;
        io::copy(&mut src, &mut writer)?;
    }

    writer.finish()?;
    Ok(())
}
