//! Package assembly: grouping staged files by locale identifier.

use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::scan::list_translation_files;

/// One locale's worth of staged translation files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    /// The locale identifier, e.g. `"my-plugin-de_DE"`.
    pub locale: String,
    /// Full paths of the staged files belonging to this locale, in sorted
    /// staging-listing order.
    pub files: Vec<PathBuf>,
}

/// Returns whether `filename` belongs to `locale`.
///
/// A file belongs to a locale when its stem equals the identifier or
/// starts with `<identifier>-` (the JSON sidecar hash suffix), compared
/// case-insensitively. Plain substring matching would also claim files of
/// any longer identifier sharing the prefix (`plugin-en` vs
/// `plugin-en_US.po`), so the boundary after the identifier is checked.
pub fn file_matches_locale(filename: &str, locale: &str) -> bool {
    let stem = Path::new(filename)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(filename)
        .to_ascii_lowercase();
    let locale = locale.to_ascii_lowercase();

    stem == locale || stem.starts_with(&format!("{locale}-"))
}

/// Groups the staged directory's files into one [`Package`] per locale.
///
/// A file can land in several packages only when its stem matches several
/// identifiers, which the boundary check in [`file_matches_locale`]
/// prevents for prefix-overlapping locales.
pub fn assemble<S: AsRef<str>>(locales: &[S], staging_dir: &Path) -> Result<Vec<Package>, Error> {
    let staged = list_translation_files(staging_dir)?;

    let packages = locales
        .iter()
        .map(|locale| {
            let locale = locale.as_ref();
            let files = staged
                .iter()
                .filter(|file| file_matches_locale(file, locale))
                .map(|file| staging_dir.join(file))
                .collect();
            Package {
                locale: locale.to_string(),
                files,
            }
        })
        .collect();

    Ok(packages)
}
