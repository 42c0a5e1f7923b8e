//! Edge type shared by project and type references.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A directed edge between two named entities.
///
/// For project references the names are project names ("source depends on
/// target"); for type references they are fully-qualified type names
/// ("source references target"). Endpoints are not validated and may dangle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Reference {
    /// Name of the referencing entity
    pub source: String,
    /// Name of the referenced entity
    pub target: String,
}

impl Reference {
    /// Create a new reference.
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    /// Whether `name` is either endpoint of this reference.
    pub fn touches(&self, name: &str) -> bool {
        self.source == name || self.target == name
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.target)
    }
}
