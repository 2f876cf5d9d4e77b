//! Error types for textgauge-core.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,

    /// A classification table override failed validation.
    #[error("invalid classification table: {0}")]
    InvalidTable(String),

    /// A reference corpus file could not be read.
    #[error("failed to read reference corpus {path}: {source}")]
    CorpusFile {
        /// Resolved path of the corpus file.
        path: camino::Utf8PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The configured reference corpus has no usable entries.
    #[error("reference corpus must contain at least one non-empty entry")]
    EmptyCorpus,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur during text analysis.
///
/// Numeric edge cases (no words, no sentences) never surface here; the
/// formulas absorb them and score `0.0`.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AnalysisError {
    /// The input text is empty or whitespace-only.
    #[error("text must not be empty")]
    EmptyInput,

    /// An unknown check name was provided.
    #[error("unknown check: {name}. Use: {available}")]
    UnknownCheck {
        /// The check name that was requested.
        name: String,
        /// Comma-separated list of available check names.
        available: String,
    },
}

/// Result type alias using [`AnalysisError`].
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Why an optional grammar service could not produce a result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GrammarError {
    /// The service did not answer within the allotted time.
    #[error("grammar service `{service}` timed out after {timeout_ms} ms")]
    Timeout {
        /// Name of the service.
        service: String,
        /// The timeout that elapsed.
        timeout_ms: u64,
    },

    /// The service reported a failure.
    #[error("grammar service `{service}` failed: {reason}")]
    Failed {
        /// Name of the service.
        service: String,
        /// Failure description from the service.
        reason: String,
    },
}
