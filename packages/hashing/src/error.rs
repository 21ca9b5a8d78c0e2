//! Error handling for accumulators and the engine factory

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Accumulator errors
#[derive(Debug, Error)]
pub enum HashError {
    /// The engine factory cannot supply the named algorithm
    #[error("Algorithm unavailable: {algorithm}")]
    AlgorithmUnavailable {
        /// Logical algorithm name that failed to resolve
        algorithm: String,
    },

    /// The keyed engine rejected the supplied key
    #[error("Invalid key for {algorithm}: {reason}")]
    InvalidKey {
        /// Logical algorithm name
        algorithm: String,
        /// Reason reported by the engine
        reason: String,
    },

    /// Absent source or out-of-range slice arguments
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Consuming a file or stream source failed
    #[error("Failed to read source {source_name}: {source}")]
    SourceRead {
        /// Human-readable name of the source (path or stream label)
        source_name: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A configured override replaced the resolution failure
    #[error("Algorithm {algorithm} rejected by configuration ({kind})")]
    Overridden {
        /// Logical algorithm name
        algorithm: String,
        /// Kind configured as the substitute error
        kind: HashErrorKind,
    },

    /// Malformed configuration document
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Field-less mirror of [`HashError`] variants.
///
/// Used as the substitute error kind in the override table, and returned by
/// [`HashError::kind`] so callers can match without destructuring payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HashErrorKind {
    /// See [`HashError::AlgorithmUnavailable`]
    AlgorithmUnavailable,
    /// See [`HashError::InvalidKey`]
    InvalidKey,
    /// See [`HashError::InvalidInput`]
    InvalidInput,
    /// See [`HashError::SourceRead`]
    SourceRead,
    /// See [`HashError::Configuration`]
    Configuration,
}

impl std::fmt::Display for HashErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::AlgorithmUnavailable => "algorithm unavailable",
            Self::InvalidKey => "invalid key",
            Self::InvalidInput => "invalid input",
            Self::SourceRead => "source read failure",
            Self::Configuration => "configuration",
        };
        f.write_str(label)
    }
}

impl HashError {
    /// Create an `AlgorithmUnavailable` error
    #[must_use]
    pub fn unavailable(algorithm: impl Into<String>) -> Self {
        Self::AlgorithmUnavailable {
            algorithm: algorithm.into(),
        }
    }

    /// Create an `InvalidInput` error
    #[must_use]
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a `SourceRead` error for the named source
    #[must_use]
    pub fn source_read(source_name: impl Into<String>, source: std::io::Error) -> Self {
        Self::SourceRead {
            source_name: source_name.into(),
            source,
        }
    }

    /// Kind of this error. An overridden error reports the configured kind.
    #[must_use]
    pub fn kind(&self) -> HashErrorKind {
        match self {
            Self::AlgorithmUnavailable { .. } => HashErrorKind::AlgorithmUnavailable,
            Self::InvalidKey { .. } => HashErrorKind::InvalidKey,
            Self::InvalidInput(_) => HashErrorKind::InvalidInput,
            Self::SourceRead { .. } => HashErrorKind::SourceRead,
            Self::Overridden { kind, .. } => *kind,
            Self::Configuration(_) => HashErrorKind::Configuration,
        }
    }

    /// Whether the error was substituted by a configured override
    #[must_use]
    pub fn is_overridden(&self) -> bool {
        matches!(self, Self::Overridden { .. })
    }
}

/// Result type for accumulator operations
pub type Result<T> = std::result::Result<T, HashError>;
