//! Minimal gettext portable-object header reading.
//!
//! The pipeline only needs the `PO-Revision-Date` header of each staged
//! `.po` file, so this parser reads the header entry (the leading
//! `msgid ""` / `msgstr ""` block) and nothing else. Message catalogs are
//! never parsed.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::Error;

lazy_static! {
    // `"Header-Name: value\n"` continuation line inside the header msgstr.
    static ref QUOTED_LINE: Regex = Regex::new(r#"^"(.*)"$"#).unwrap();
    static ref HEADER_PAIR: Regex = Regex::new(r"^([\w-]+):\s?(.*)$").unwrap();
}

/// Parsed header entry of a portable-object file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoHeader {
    headers: HashMap<String, String>,
}

impl PoHeader {
    /// Parses the header entry from any reader.
    ///
    /// Reads the quoted continuation lines of the first `msgstr ""` block,
    /// unescapes the embedded `\n` separators, and collects `Name: value`
    /// pairs. Parsing stops at the first non-header entry.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        let mut headers = HashMap::new();
        let mut in_header_msgstr = false;

        for line in reader.lines() {
            let line = line?;
            let trimmed = line.trim();

            if trimmed.starts_with('#') || trimmed.is_empty() {
                if in_header_msgstr && trimmed.is_empty() {
                    break;
                }
                continue;
            }

            if trimmed.starts_with("msgstr") {
                in_header_msgstr = true;
                continue;
            }
            if trimmed.starts_with("msgid") {
                if in_header_msgstr {
                    // Next entry begins; the header block is over.
                    break;
                }
                continue;
            }

            if !in_header_msgstr {
                continue;
            }

            let Some(captures) = QUOTED_LINE.captures(trimmed) else {
                break;
            };
            // One quoted line may carry several `\n`-separated headers.
            for chunk in captures[1].split("\\n") {
                if let Some(pair) = HEADER_PAIR.captures(chunk) {
                    headers.insert(pair[1].to_string(), pair[2].to_string());
                }
            }
        }

        Ok(PoHeader { headers })
    }

    /// Parses the header entry of a `.po` file on disk.
    pub fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let file = File::open(path).map_err(Error::Io)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Parses from a string.
    pub fn from_str(s: &str) -> Result<Self, Error> {
        Self::from_reader(Cursor::new(s))
    }

    /// Returns a header value by name, if present.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Returns the `PO-Revision-Date` header, if present.
    ///
    /// Absent or malformed headers yield `None`; the manifest builder
    /// writes an empty string verbatim in that case, no validation is
    /// applied to the date format.
    pub fn revision_date(&self) -> Option<&str> {
        self.header("PO-Revision-Date")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_PO: &str = r#"# Translation file for My Plugin.
msgid ""
msgstr ""
"Project-Id-Version: My Plugin 1.0\n"
"PO-Revision-Date: 2024-01-01 00:00+0000\n"
"Language: de_DE\n"
"MIME-Version: 1.0\n"

msgid "Hello"
msgstr "Hallo"
"#;

    #[test]
    fn test_reads_revision_date() {
        let header = PoHeader::from_str(SAMPLE_PO).unwrap();
        assert_eq!(header.revision_date(), Some("2024-01-01 00:00+0000"));
    }

    #[test]
    fn test_reads_other_headers() {
        let header = PoHeader::from_str(SAMPLE_PO).unwrap();
        assert_eq!(header.header("Language"), Some("de_DE"));
        assert_eq!(header.header("Project-Id-Version"), Some("My Plugin 1.0"));
    }

    #[test]
    fn test_stops_at_first_catalog_entry() {
        let header = PoHeader::from_str(SAMPLE_PO).unwrap();
        // The catalog entry after the header block must not leak in.
        assert_eq!(header.header("Hello"), None);
    }

    #[test]
    fn test_multiple_headers_in_one_quoted_line() {
        let po = "msgid \"\"\nmsgstr \"\"\n\"A: 1\\nPO-Revision-Date: 2023-05-05 10:00+0000\\nB: 2\"\n";
        let header = PoHeader::from_str(po).unwrap();
        assert_eq!(header.revision_date(), Some("2023-05-05 10:00+0000"));
        assert_eq!(header.header("A"), Some("1"));
        assert_eq!(header.header("B"), Some("2"));
    }

    #[test]
    fn test_missing_header_yields_none() {
        let po = "msgid \"\"\nmsgstr \"\"\n\"Language: fr_FR\\n\"\n";
        let header = PoHeader::from_str(po).unwrap();
        assert_eq!(header.revision_date(), None);
    }

    #[test]
    fn test_empty_file() {
        let header = PoHeader::from_str("").unwrap();
        assert_eq!(header.revision_date(), None);
    }
}
