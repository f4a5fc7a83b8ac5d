//! Primary error enum for generator sessions.

use std::path::PathBuf;

use thiserror::Error;

use super::aggregate::AggregatedErrors;

/// Errors that abort a generator run or prevent a session from starting.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GeneratorError {
    /// A field names a container type that the snapshot does not declare.
    #[error("field '{field}' belongs to container '{container}', which is not part of the snapshot")]
    MissingContainer {
        /// Id of the missing container type.
        container: String,
        /// Name of the field that referenced it.
        field: String,
    },

    /// An explicitly requested configuration file does not exist.
    #[error("configuration file '{}' does not exist", path.display())]
    MissingConfigFile {
        /// Path that was requested.
        path: PathBuf,
    },

    /// Generator options could not be extracted from the configured layers.
    #[error("failed to load generator options: {0}")]
    Config(#[from] Box<figment::Error>),

    /// The code emitter rejected a generated unit.
    #[error("failed to emit generated unit '{unit}': {source}")]
    Emit {
        /// Name of the unit being emitted or retired.
        unit: String,
        /// Error reported by the emitter.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Several contract violations were found in one run.
    #[error("multiple generator errors:\n{0}")]
    Aggregate(Box<AggregatedErrors>),
}
