//! Error types for typegraph operations.
//!
//! All fallible operations return [`Result<T>`] with context-rich error messages.
//! Dangling type references are not errors; they are dropped during export.

use std::time::Duration;
use thiserror::Error;

/// Result type alias for typegraph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Error type for filtering and export.
///
/// Every variant is fatal for a run: configuration errors abort before any
/// output is produced, and invariant violations indicate a bug upstream.
#[derive(Error, Debug)]
pub enum GraphError {
    /// An exclude pattern could not be compiled
    #[error("Invalid exclude pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The combined pattern that failed to compile
        pattern: String,
        /// Underlying regex error
        #[source]
        source: regex::Error,
    },

    /// Compiling the exclude patterns exceeded the time budget
    #[error("Compiling exclude pattern '{pattern}' exceeded its {budget_ms}ms budget")]
    PatternCompileTimeout {
        /// Budget in milliseconds
        budget_ms: u128,
        /// The combined pattern being compiled
        pattern: String,
    },

    /// Matching a type name against the exclude patterns exceeded the time budget
    #[error("Exclude pattern exceeded its {budget_ms}ms budget while matching '{input}'")]
    PatternTimeout {
        /// Budget in milliseconds
        budget_ms: u128,
        /// Type name being matched when the budget ran out
        input: String,
    },

    /// An output format name was not recognized
    #[error("Unknown output format: {name}")]
    UnknownFormat {
        /// The rejected format name
        name: String,
    },

    /// A project reference points at a project that was never registered
    #[error("Project not registered: {name}")]
    UnknownProject {
        /// Name of the missing project
        name: String,
    },

    /// The rendered document could not be written
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error details
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl GraphError {
    /// Create a serialization error from a message and optional source.
    pub fn serialization<E>(message: impl Into<String>, source: Option<E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Serialization {
            message: message.into(),
            source: source.map(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>),
        }
    }

    /// Create a compilation timeout error for the given budget.
    pub fn pattern_compile_timeout(budget: Duration, pattern: impl Into<String>) -> Self {
        Self::PatternCompileTimeout {
            budget_ms: budget.as_millis(),
            pattern: pattern.into(),
        }
    }

    /// Create a matching timeout error for the given budget.
    pub fn pattern_timeout(budget: Duration, input: impl Into<String>) -> Self {
        Self::PatternTimeout {
            budget_ms: budget.as_millis(),
            input: input.into(),
        }
    }

    /// Whether this error stems from user-supplied configuration.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            GraphError::InvalidPattern { .. }
                | GraphError::PatternCompileTimeout { .. }
                | GraphError::PatternTimeout { .. }
                | GraphError::UnknownFormat { .. }
        )
    }
}
