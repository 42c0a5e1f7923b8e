use crate::kinds::ReferenceKinds;
use serde::{Deserialize, Serialize};

/// Configuration for ingesting a fact set into a graph
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestOptions {
    /// Ingest projects flagged as test projects
    #[serde(default)]
    pub include_tests: bool,

    /// Type reference kinds to keep
    #[serde(default)]
    pub kinds: ReferenceKinds,
}

impl IngestOptions {
    /// Include test projects
    pub fn with_tests(mut self, include_tests: bool) -> Self {
        self.include_tests = include_tests;
        self
    }

    /// Set the reference kinds to keep
    pub fn with_kinds(mut self, kinds: ReferenceKinds) -> Self {
        self.kinds = kinds;
        self
    }
}
