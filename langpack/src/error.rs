//! All error types for the langpack crate.
//!
//! These are returned from all fallible operations (scanning, staging,
//! conversion, archiving, manifest serialization).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("manifest error: {0}")]
    Manifest(#[from] serde_json::Error),

    #[error("archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("unknown file kind `{0}`")]
    UnknownKind(String),

    #[error("compile error: {message}")]
    Compile {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl Error {
    /// Creates a new compile error with optional source error
    pub fn compile_error(
        message: impl Into<String>,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Error::Compile {
            message: message.into(),
            source,
        }
    }
}
