//! Error types for the anagram core

use std::path::PathBuf;
use thiserror::Error;

/// Core error type.
///
/// Store and query operations never fail; absence is reported through
/// `Option` and `bool`. Only loading a word list from disk can error.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Word list could not be read
    #[error("Failed to read word list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Word list was readable but not usable
    #[error("Invalid word list {path}: {reason}")]
    InvalidWordList { path: PathBuf, reason: String },
}

/// Result type for core operations
pub type CoreResult<T> = Result<T, CoreError>;
