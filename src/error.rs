//! Error types.

use thiserror::Error;

/// Errors produced while recognizing dictated digit groups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecognizeError {
    /// The input, or a group built directly, is not a run of digit groups
    /// separated by single ASCII whitespace.
    #[error("invalid input [{input}]: expected digit groups separated by single whitespace")]
    InputFormat { input: String },

    /// An internal call was made with arguments the pipeline never produces.
    #[error("invariant violated: {0}")]
    Invariant(String),

    /// Unrecognized language name.
    #[error("unknown language '{0}' (expected english, greek or russian)")]
    UnknownLanguage(String),

    /// Unrecognized country name.
    #[error("unknown country '{0}' (expected usa, greece or russia)")]
    UnknownCountry(String),
}

/// Result type for recognition operations.
pub type Result<T> = std::result::Result<T, RecognizeError>;
