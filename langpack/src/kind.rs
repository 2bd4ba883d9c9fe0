//! Recognized translation file kinds.
//!
//! Provides the [`FileKind`] enum for generic handling of the four file
//! kinds the pipeline accepts from the source directory.

use std::{
    fmt::{Display, Formatter},
    path::Path,
    str::FromStr,
};

use crate::error::Error;

/// Represents the four recognized translation file kinds.
///
/// Kind is derived purely from the file extension, case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Compiled binary translation (`.mo`).
    Mo,
    /// Portable-object source translation (`.po`).
    Po,
    /// Pre-built language pack archive (`.zip`).
    Zip,
    /// JSON translation sidecar (`.json`).
    Json,
}

impl FileKind {
    /// Returns the kind for a path, or `None` when the extension is not in
    /// the recognized set.
    ///
    /// # Example
    /// ```rust
    /// use langpack::FileKind;
    /// assert_eq!(FileKind::from_path("my-plugin-de_DE.po"), Some(FileKind::Po));
    /// assert_eq!(FileKind::from_path("readme.txt"), None);
    /// ```
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<FileKind> {
        let ext = path.as_ref().extension()?.to_str()?;
        FileKind::from_str(ext).ok()
    }

    /// Returns the file extension for this kind.
    pub fn extension(&self) -> &'static str {
        match self {
            FileKind::Mo => "mo",
            FileKind::Po => "po",
            FileKind::Zip => "zip",
            FileKind::Json => "json",
        }
    }
}

impl Display for FileKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Accepts the four recognized extensions, case-insensitively.
///
/// Returns [`Error::UnknownKind`] for anything else.
impl FromStr for FileKind {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        match s.as_str() {
            "mo" => Ok(FileKind::Mo),
            "po" => Ok(FileKind::Po),
            "zip" => Ok(FileKind::Zip),
            "json" => Ok(FileKind::Json),
            other => Err(Error::UnknownKind(other.to_string())),
        }
    }
}
