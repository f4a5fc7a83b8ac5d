//! Error types for `observable-gen`.

use camino::Utf8PathBuf;
use observable_gen::GeneratorError;
use thiserror::Error;

/// Errors surfaced by the `observable-gen` host.
#[derive(Debug, Error)]
pub enum CliError {
    /// A file could not be read or written.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path being accessed.
        path: Utf8PathBuf,
        /// Underlying failure.
        #[source]
        source: std::io::Error,
    },

    /// Writing to standard output or standard error failed.
    #[error("failed to write to {stream}: {source}")]
    Stream {
        /// Name of the stream.
        stream: &'static str,
        /// Underlying failure.
        #[source]
        source: std::io::Error,
    },

    /// The snapshot file is not valid snapshot JSON.
    #[error("failed to parse snapshot {path}: {source}")]
    Snapshot {
        /// Snapshot path.
        path: Utf8PathBuf,
        /// Parser failure.
        #[source]
        source: serde_json::Error,
    },

    /// Generated units could not be serialised.
    #[error("failed to serialise generated units: {0}")]
    Json(#[from] serde_json::Error),

    /// The pipeline or its configuration failed.
    #[error(transparent)]
    Generator(#[from] GeneratorError),
}

impl CliError {
    pub(crate) fn io(path: impl Into<Utf8PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
