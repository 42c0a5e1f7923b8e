use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or selecting facts
#[derive(Error, Debug)]
pub enum FactsError {
    /// Failed to read the fact-set file
    #[error("IO error reading {0}: {1}")]
    Io(PathBuf, #[source] std::io::Error),

    /// The fact-set file is not a valid fact-set document
    #[error("Malformed fact set in {0}: {1}")]
    Parse(PathBuf, #[source] serde_json::Error),

    /// A display-mode token names no reference kind
    #[error("Unknown reference kind '{0}' (expected all, references or inheritance)")]
    UnknownReferenceKind(String),
}

/// Result type for fact operations
pub type FactsResult<T> = Result<T, FactsError>;
