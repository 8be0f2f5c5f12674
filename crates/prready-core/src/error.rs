// Rust guideline compliant 2026-02-06

//! Error types for the prready core library.

use crate::gate::{GateFailure, GateKind};
use thiserror::Error;

/// Result type alias for prready operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for prready operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A gate rejected the push.
    #[error(transparent)]
    Gate(#[from] GateFailure),

    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Git operation error.
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    /// An external command could not be started.
    #[error("Failed to run `{command}`: {source}")]
    CommandSpawn {
        /// The rendered command line.
        command: String,
        /// The underlying spawn error.
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration.
    #[error("Invalid config: {0}")]
    Config(String),

    /// Malformed pre-push hook input.
    #[error("Invalid hook input: {0}")]
    Protocol(String),
}

impl Error {
    /// Returns the gate that rejected the push, if this error is a gate failure.
    pub fn gate(&self) -> Option<GateKind> {
        match self {
            Error::Gate(failure) => Some(failure.gate()),
            _ => None,
        }
    }
}
