//! Structured error types for the Scissile crates.

use thiserror::Error;

/// Unified error type for all Scissile operations.
#[derive(Debug, Error)]
pub enum ScissileError {
    /// I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error (malformed input data)
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid input (bad arguments, out-of-range values)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The substrate corpus has no records for the requested protease.
    #[error("protease '{0}' not found in substrate corpus")]
    ProteaseNotFound(String),

    /// The corpus yielded a zero-size window set.
    #[error("empty substrate corpus: {0}")]
    EmptyCorpus(String),

    /// A profile is missing the row for a residue symbol. Profiles built by
    /// this crate always carry every alphabet row, so this indicates a
    /// corrupted or hand-edited cache entry.
    #[error("profile has no row for residue '{0}'")]
    UnknownResidue(char),

    /// Malformed or unreadable sequence file.
    #[error("sequence source error: {0}")]
    SequenceSource(String),
}

/// Convenience alias used throughout the Scissile crates.
pub type Result<T> = std::result::Result<T, ScissileError>;
