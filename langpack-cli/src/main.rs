use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use langpack::compile::{CommandCompiler, Compiler, NoopCompiler};
use langpack::{PackConfig, PackMaker, distinct_locales, scan::list_translation_files};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    commands: Commands,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Build per-locale language pack archives and the update manifest.
    Build {
        /// Root of the languages repository (holds `languages/`)
        #[arg(default_value = ".")]
        root: PathBuf,

        /// Skip the external po -> mo/json conversion step; inputs must
        /// already contain any compiled files the packs should carry
        #[arg(long)]
        skip_convert: bool,

        /// Executable used for conversion (expects `i18n make-mo` /
        /// `i18n make-json` subcommands)
        #[arg(long, default_value = "wp")]
        wp_bin: String,

        /// Leave existing archives in `packages/` untouched instead of
        /// overwriting them
        #[arg(long)]
        no_overwrite: bool,
    },

    /// List the distinct locale identifiers resolved from a directory.
    Locales {
        /// Directory holding translation files
        #[arg(default_value = "languages")]
        dir: PathBuf,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let result = match args.commands {
        Commands::Build {
            root,
            skip_convert,
            wp_bin,
            no_overwrite,
        } => {
            let config = PackConfig::new(&root);
            if skip_convert {
                build(config, NoopCompiler, !no_overwrite)
            } else {
                build(config, CommandCompiler::with_program(wp_bin), !no_overwrite)
            }
        }
        Commands::Locales { dir } => locales(&dir),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn build<C: Compiler>(
    config: PackConfig,
    compiler: C,
    overwrite: bool,
) -> Result<(), langpack::Error> {
    let summary = PackMaker::new(config, compiler)
        .overwrite(overwrite)
        .run()?;
    println!(
        "{} locale(s), {} archive(s) created, {} failed.",
        summary.locales.len(),
        summary.archives_created,
        summary.archives_failed
    );
    Ok(())
}

fn locales(dir: &Path) -> Result<(), langpack::Error> {
    let files = list_translation_files(dir)?;
    for locale in distinct_locales(&files) {
        println!("{locale}");
    }
    Ok(())
}
