#![forbid(unsafe_code)]
//! Language pack maker for gettext-style translation directories.
//!
//! Scans a `languages/` directory for `.mo`/`.po`/`.zip`/`.json` translation
//! files, stages them in a scratch directory, groups them by locale
//! identifier, writes one zip archive per locale into `packages/`, and emits
//! a `language-pack.json` manifest for consumption by an update-checking
//! client.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use langpack::{PackConfig, PackMaker, compile::NoopCompiler};
//!
//! let config = PackConfig::new("/path/to/repo");
//! let summary = PackMaker::new(config, NoopCompiler).run()?;
//! println!("{} archives created", summary.archives_created);
//! # Ok::<(), langpack::Error>(())
//! ```
//!
//! # Pipeline
//!
//! Each stage runs once, to completion, before the next begins:
//!
//! 1. Scan `languages/` for recognized translation files
//! 2. Copy them into the staging directory
//! 3. Resolve the distinct locale identifiers
//! 4. Generate JSON sidecars and compiled `.mo` files (external [`compile::Compiler`])
//! 5. Assemble per-locale packages and archive each one
//! 6. Build and write the manifest
//! 7. Best-effort staging cleanup

pub mod archive;
pub mod compile;
pub mod config;
pub mod error;
pub mod kind;
pub mod locale;
pub mod manifest;
pub mod packages;
pub mod pipeline;
pub mod po;
pub mod scan;
pub mod stage;

// Re-export most used types for easy consumption
pub use crate::{
    archive::{ArchiveOutcome, create_zip},
    config::PackConfig,
    error::Error,
    kind::FileKind,
    locale::{distinct_locales, language_tag, locale_name, slug},
    manifest::ManifestEntry,
    pipeline::{PackMaker, RunSummary},
};
