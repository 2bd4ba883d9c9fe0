//! Locale name resolution from translation filenames.
//!
//! A locale identifier combines a project slug and a language tag, e.g.
//! `"my-plugin-de_DE"`. Resolution is pure string work on the filename and
//! never touches the filesystem.

use std::path::Path;

use crate::kind::FileKind;

/// Resolves the canonical locale identifier for a translation filename.
///
/// JSON sidecar filenames carry a trailing content hash segment
/// (`<slug>-<lang>-<hash>.json`), which is dropped; every other kind
/// resolves to the file stem verbatim.
///
/// Deterministic: the same filename always yields the same identifier.
///
/// # Example
/// ```rust
/// use langpack::locale_name;
/// assert_eq!(locale_name("my-plugin-de_DE.po"), "my-plugin-de_DE");
/// assert_eq!(locale_name("my-plugin-de_DE-abc123.json"), "my-plugin-de_DE");
/// ```
pub fn locale_name(filename: &str) -> String {
    let path = Path::new(filename);
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(filename);

    if FileKind::from_path(path) == Some(FileKind::Json) {
        // Drop the trailing hash segment.
        let mut parts: Vec<&str> = stem.split('-').collect();
        if parts.len() > 1 {
            parts.pop();
        }
        return parts.join("-");
    }

    stem.to_string()
}

/// Resolves every filename and deduplicates the identifiers, preserving
/// first-seen order.
pub fn distinct_locales<S: AsRef<str>>(filenames: &[S]) -> Vec<String> {
    let mut locales: Vec<String> = Vec::new();
    for filename in filenames {
        let locale = locale_name(filename.as_ref());
        if !locales.contains(&locale) {
            locales.push(locale);
        }
    }
    locales
}

/// Returns the language tag of a locale identifier: the substring after the
/// last `-`. An identifier without a `-` is its own tag.
pub fn language_tag(locale: &str) -> &str {
    match locale.rfind('-') {
        Some(idx) => &locale[idx + 1..],
        None => locale,
    }
}

/// Returns the project slug of a locale identifier: everything before the
/// trailing `-<tag>`. An identifier without a `-` is its own slug.
pub fn slug(locale: &str) -> &str {
    match locale.rfind('-') {
        Some(idx) => &locale[..idx],
        None => locale,
    }
}
