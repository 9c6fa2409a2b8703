//! Error types for wordladder
//!
//! All validation failures are detected eagerly, before any graph is
//! built. An unreachable destination is not an error: it is reported
//! through `LadderResult::found`.

use thiserror::Error;

/// Errors that can occur during wordladder operations
#[derive(Error, Debug)]
pub enum LadderError {
    #[error("words must be of equal length: {first:?} vs {second:?}")]
    TargetLengthMismatch { first: String, second: String },

    #[error("word list entry {word:?} has length {actual}, expected {expected}")]
    WordLengthMismatch {
        word: String,
        expected: usize,
        actual: usize,
    },

    #[error("word not found in word list: {word:?}")]
    WordNotFound { word: String },

    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LadderError>;
