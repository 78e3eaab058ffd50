//! Core error types

use thiserror::Error;

/// Errors raised while constructing pipeline components
///
/// Per-sentence processing never errors: malformed spans degrade to their
/// original text and unacceptable sentences become rejection verdicts.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Normalization rule failed to compile
    #[error("invalid normalization pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The pattern text that failed to compile
        pattern: String,
        /// The underlying regex error
        source: regex::Error,
    },

    /// Alphabet definition with no characters
    #[error("alphabet definition is empty")]
    EmptyAlphabet,

    /// Word-count bounds that accept no sentence length
    #[error("word-count bounds ({min}, {max}) are exclusive and admit nothing")]
    InvalidBounds {
        /// The configured lower bound
        min: usize,
        /// The configured upper bound
        max: usize,
    },
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
