//! Crate error type. All fallible library operations return [`Error`].

use std::path::PathBuf;

/// Errors produced by configuration validation, walk generation, and CSV I/O.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A configuration field failed validation before any generation ran.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The rejection-sampling loop hit its attempt cap without producing a
    /// walk whose minimum clears the floor.
    #[error("walk generation exhausted after {attempts} attempts (floor unreachable?)")]
    GenerationExhausted { attempts: u32 },

    /// Writing a dataset file failed (permissions, disk space, ...).
    #[error("failed to write {}: {source}", path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Reading a dataset file back failed (missing file, malformed row, ...).
    #[error("failed to read {}: {source}", path.display())]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}
