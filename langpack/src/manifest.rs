//! Manifest building and serialization.
//!
//! The manifest (`language-pack.json`) maps each bare language tag to the
//! archive an update-checking client should fetch for that language.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::locale::{language_tag, slug};
use crate::packages::file_matches_locale;
use crate::po::PoHeader;
use crate::scan::list_translation_files;

/// One manifest entry, keyed in the document by its `language` tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// Project slug, the locale identifier with the language tag removed.
    pub slug: String,
    /// Bare language tag, e.g. `"de_DE"`.
    pub language: String,
    /// `PO-Revision-Date` header of the staged portable-source file,
    /// verbatim; empty when the header is absent.
    pub updated: String,
    /// Client-facing archive path, `/packages/<archive filename>`.
    pub package: String,
    /// Always `"1"`; the client treats every pack as auto-updatable.
    pub autoupdate: String,
}

/// The manifest document: language tag → entry, serialized as one JSON
/// object.
pub type Manifest = BTreeMap<String, ManifestEntry>;

/// Builds the manifest from the produced archives in `packages_dir`.
///
/// For every archive whose stem matches a locale identifier, an entry is
/// recorded under that locale's language tag. The `updated` field is read
/// from `<staging_dir>/<locale>.po`; a missing file propagates as an I/O
/// error, a missing header becomes an empty string.
///
/// When two distinct identifiers share a trailing language tag, the entry
/// written last (archives are visited in sorted order) wins.
pub fn build_manifest<S: AsRef<str>>(
    packages_dir: &Path,
    locales: &[S],
    staging_dir: &Path,
) -> Result<Manifest, Error> {
    let archives = list_translation_files(packages_dir)?;
    let mut manifest = Manifest::new();

    for archive in &archives {
        for locale in locales {
            let locale = locale.as_ref();
            if !file_matches_locale(archive, locale) {
                continue;
            }
            let po_path = staging_dir.join(format!("{locale}.po"));
            let header = PoHeader::read_from(&po_path)?;
            let updated = header.revision_date().unwrap_or_default().to_string();

            manifest.insert(
                language_tag(locale).to_string(),
                ManifestEntry {
                    slug: slug(locale).to_string(),
                    language: language_tag(locale).to_string(),
                    updated,
                    package: format!("/packages/{archive}"),
                    autoupdate: "1".to_string(),
                },
            );
        }
    }

    Ok(manifest)
}

/// Serializes the manifest as a single UTF-8 JSON document at `path`.
pub fn write_manifest(manifest: &Manifest, path: &Path) -> Result<(), Error> {
    let file = File::create(path)?;
    serde_json::to_writer(BufWriter::new(file), manifest)?;
    Ok(())
}
