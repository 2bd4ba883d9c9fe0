//! External format-conversion collaborators.
//!
//! Turning portable-object sources into compiled `.mo` files and JSON
//! sidecar fragments is delegated to an external tool. The [`Compiler`]
//! trait is the explicit seam for that collaboration; the pipeline never
//! reaches into a tool's internals.

use std::path::Path;
use std::process::Command;

use crate::error::Error;

/// Contract for the external format converters.
pub trait Compiler {
    /// Converts every portable-object file in `dir` into its compiled
    /// binary equivalent, in place.
    fn compile_binaries(&self, dir: &Path) -> Result<(), Error>;

    /// Produces the JSON sidecar fragment files for one portable-object
    /// file into `out_dir`.
    fn generate_json(&self, po_file: &Path, out_dir: &Path) -> Result<(), Error>;

    /// Removes unused strings from the JSON fragments across `dir`
    /// (the converter's "purge" mode).
    fn purge_json(&self, dir: &Path) -> Result<(), Error>;
}

/// Runs an external i18n command-line tool (by default `wp i18n ...`).
#[derive(Debug, Clone)]
pub struct CommandCompiler {
    /// Executable to invoke.
    pub program: String,
    /// Arguments placed before the subcommand, e.g. `["i18n"]`.
    pub base_args: Vec<String>,
}

impl CommandCompiler {
    /// A compiler backed by the WP-CLI i18n commands.
    pub fn wp_cli() -> Self {
        CommandCompiler {
            program: "wp".to_string(),
            base_args: vec!["i18n".to_string()],
        }
    }

    /// A compiler backed by an arbitrary executable exposing the same
    /// `make-mo` / `make-json` subcommands.
    pub fn with_program(program: impl Into<String>) -> Self {
        CommandCompiler {
            program: program.into(),
            base_args: vec!["i18n".to_string()],
        }
    }

    fn run(&self, args: &[&str]) -> Result<(), Error> {
        let output = Command::new(&self.program)
            .args(&self.base_args)
            .args(args)
            .output()
            .map_err(|e| {
                Error::compile_error(
                    format!("failed to launch `{}`", self.program),
                    Some(Box::new(e)),
                )
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::compile_error(
                format!(
                    "`{} {}` exited with {}: {}",
                    self.program,
                    args.join(" "),
                    output.status,
                    stderr.trim()
                ),
                None,
            ));
        }
        Ok(())
    }
}

impl Compiler for CommandCompiler {
    fn compile_binaries(&self, dir: &Path) -> Result<(), Error> {
        self.run(&["make-mo", &dir.display().to_string()])
    }

    fn generate_json(&self, po_file: &Path, out_dir: &Path) -> Result<(), Error> {
        self.run(&[
            "make-json",
            &po_file.display().to_string(),
            &out_dir.display().to_string(),
            "--no-purge",
        ])
    }

    fn purge_json(&self, dir: &Path) -> Result<(), Error> {
        self.run(&["make-json", &dir.display().to_string(), "--purge"])
    }
}

/// A compiler that does nothing.
///
/// For directories whose `.mo` and `.json` files are already built, and
/// for tests that exercise the pipeline without an external tool.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopCompiler;

impl Compiler for NoopCompiler {
    fn compile_binaries(&self, _dir: &Path) -> Result<(), Error> {
        Ok(())
    }

    fn generate_json(&self, _po_file: &Path, _out_dir: &Path) -> Result<(), Error> {
        Ok(())
    }

    fn purge_json(&self, _dir: &Path) -> Result<(), Error> {
        Ok(())
    }
}
