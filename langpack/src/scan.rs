//! Directory scanning for recognized translation files.

use std::fs;
use std::path::Path;

use crate::error::Error;
use crate::kind::FileKind;

/// Lists the base filenames of every recognized translation file directly
/// inside `dir`.
///
/// Subdirectories and files with unrecognized extensions are ignored. A
/// missing directory yields an empty list rather than an error; creating
/// the directory is the caller's responsibility (see
/// [`PackConfig::ensure_layout`](crate::config::PackConfig::ensure_layout)).
///
/// The result is sorted by filename so downstream stages see a stable
/// ordering regardless of the platform's native enumeration order.
pub fn list_translation_files<P: AsRef<Path>>(dir: P) -> Result<Vec<String>, Error> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() || FileKind::from_path(&path).is_none() {
            continue;
        }
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            files.push(name.to_string());
        }
    }
    files.sort();

    Ok(files)
}
