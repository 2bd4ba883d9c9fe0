//! The language pack pipeline, run once from scan to cleanup.

use crate::archive::{ArchiveOutcome, create_zip};
use crate::compile::Compiler;
use crate::config::PackConfig;
use crate::error::Error;
use crate::kind::FileKind;
use crate::locale::distinct_locales;
use crate::manifest::{build_manifest, write_manifest};
use crate::packages::assemble;
use crate::scan::list_translation_files;
use crate::stage::{clean_staging, copy_to_staging};

/// Counts and locations reported after a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Distinct locale identifiers discovered in the source directory.
    pub locales: Vec<String>,
    /// Archives written and verified on disk.
    pub archives_created: usize,
    /// Archives that failed softly (reported, not fatal).
    pub archives_failed: usize,
    /// Where the manifest was written.
    pub manifest_path: std::path::PathBuf,
}

/// Drives the whole pipeline over one [`PackConfig`].
///
/// Strictly sequential: each stage runs to completion before the next
/// begins. There is no retry and no rollback; a fatal error partway
/// through may leave staged copies and partial outputs behind.
pub struct PackMaker<C: Compiler> {
    config: PackConfig,
    compiler: C,
    overwrite: bool,
}

impl<C: Compiler> PackMaker<C> {
    /// Creates a pack maker that overwrites existing archives.
    pub fn new(config: PackConfig, compiler: C) -> Self {
        PackMaker {
            config,
            compiler,
            overwrite: true,
        }
    }

    /// Controls whether existing archives in the packages directory are
    /// overwritten (default) or skipped.
    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Runs the pipeline: scan, stage, convert, package, archive, write
    /// the manifest, clean up.
    ///
    /// Archive failures are soft; they are printed and counted in the
    /// summary while the run continues with the next locale. Everything
    /// else propagates.
    pub fn run(&self) -> Result<RunSummary, Error> {
        self.config.ensure_layout()?;

        let source_files = list_translation_files(&self.config.languages_dir)?;
        copy_to_staging(
            &source_files,
            &self.config.languages_dir,
            &self.config.staging_dir,
        )?;
        let staged_files = list_translation_files(&self.config.staging_dir)?;
        let locales = distinct_locales(&staged_files);

        self.convert(&locales)?;

        let packages = assemble(&locales, &self.config.staging_dir)?;
        let mut archives_created = 0;
        let mut archives_failed = 0;
        for package in &packages {
            let destination = self
                .config
                .packages_dir
                .join(format!("{}.zip", package.locale));
            let name = format!("{}.zip", package.locale);
            match create_zip(&package.files, &destination, self.overwrite) {
                ArchiveOutcome::Created => {
                    println!("{name} created.");
                    archives_created += 1;
                }
                ArchiveOutcome::SkippedExisting => {
                    println!(">> {name} failed. <<");
                    archives_failed += 1;
                }
                ArchiveOutcome::Failed(reason) => {
                    println!(">> {name} failed: {reason} <<");
                    archives_failed += 1;
                }
            }
        }

        let manifest = build_manifest(
            &self.config.packages_dir,
            &locales,
            &self.config.staging_dir,
        )?;
        write_manifest(&manifest, &self.config.manifest_path)?;
        println!("language-pack.json created.");

        // Clean what was staged plus whatever the converters generated.
        let generated = list_translation_files(&self.config.staging_dir)?;
        let report = clean_staging(&self.config.staging_dir, &generated);
        if !report.is_clean() {
            println!("staging cleanup left {} file(s) behind.", report.failed.len());
        }

        Ok(RunSummary {
            locales,
            archives_created,
            archives_failed,
            manifest_path: self.config.manifest_path.clone(),
        })
    }

    /// Runs the external converters over the staging directory: JSON
    /// sidecars per locale, a purge sweep, then compiled binaries.
    fn convert<S: AsRef<str>>(&self, locales: &[S]) -> Result<(), Error> {
        for locale in locales {
            let po_file = self
                .config
                .staging_dir
                .join(format!("{}.{}", locale.as_ref(), FileKind::Po.extension()));
            if po_file.is_file() {
                self.compiler
                    .generate_json(&po_file, &self.config.staging_dir)?;
            }
        }
        self.compiler.purge_json(&self.config.staging_dir)?;
        self.compiler.compile_binaries(&self.config.staging_dir)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compile::NoopCompiler;
    use std::fs;
    use tempfile::TempDir;

    const PO: &str = "msgid \"\"\nmsgstr \"\"\n\"PO-Revision-Date: 2024-01-01 00:00+0000\\n\"\n";

    #[test]
    fn test_run_on_empty_languages_dir() {
        let temp_dir = TempDir::new().unwrap();
        let config = PackConfig::new(temp_dir.path());
        let summary = PackMaker::new(config, NoopCompiler).run().unwrap();

        assert!(summary.locales.is_empty());
        assert_eq!(summary.archives_created, 0);
        // The manifest is still written, as an empty object.
        let manifest = fs::read_to_string(&summary.manifest_path).unwrap();
        assert_eq!(manifest, "{}");
    }

    #[test]
    fn test_run_counts_archives() {
        let temp_dir = TempDir::new().unwrap();
        let config = PackConfig::new(temp_dir.path());
        fs::create_dir_all(&config.languages_dir).unwrap();
        fs::write(config.languages_dir.join("my-plugin-de_DE.po"), PO).unwrap();
        fs::write(config.languages_dir.join("my-plugin-fr_FR.po"), PO).unwrap();

        let summary = PackMaker::new(config.clone(), NoopCompiler).run().unwrap();
        assert_eq!(
            summary.locales,
            vec!["my-plugin-de_DE", "my-plugin-fr_FR"]
        );
        assert_eq!(summary.archives_created, 2);
        assert_eq!(summary.archives_failed, 0);
        assert!(config.packages_dir.join("my-plugin-de_DE.zip").exists());
        assert!(config.packages_dir.join("my-plugin-fr_FR.zip").exists());
    }

    #[test]
    fn test_run_without_overwrite_reports_soft_failure() {
        let temp_dir = TempDir::new().unwrap();
        let config = PackConfig::new(temp_dir.path());
        fs::create_dir_all(&config.languages_dir).unwrap();
        fs::write(config.languages_dir.join("my-plugin-de_DE.po"), PO).unwrap();

        let first = PackMaker::new(config.clone(), NoopCompiler)
            .overwrite(false)
            .run()
            .unwrap();
        assert_eq!(first.archives_created, 1);

        let archive = config.packages_dir.join("my-plugin-de_DE.zip");
        let bytes = fs::read(&archive).unwrap();

        let second = PackMaker::new(config, NoopCompiler)
            .overwrite(false)
            .run()
            .unwrap();
        assert_eq!(second.archives_created, 0);
        assert_eq!(second.archives_failed, 1);
        // First archive untouched.
        assert_eq!(fs::read(&archive).unwrap(), bytes);
    }

    #[test]
    fn test_staging_is_removed_after_run() {
        let temp_dir = TempDir::new().unwrap();
        let config = PackConfig::new(temp_dir.path());
        fs::create_dir_all(&config.languages_dir).unwrap();
        fs::write(config.languages_dir.join("my-plugin-de_DE.po"), PO).unwrap();

        PackMaker::new(config.clone(), NoopCompiler).run().unwrap();
        assert!(!config.staging_dir.exists());
        // Source files stay where the operator put them.
        assert!(config.languages_dir.join("my-plugin-de_DE.po").exists());
    }
}
