//! Reference kinds and the selection of kinds to ingest.

use crate::errors::{FactsError, FactsResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How one type refers to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceKind {
    /// Base types, and generic arguments of base types
    Inheritance,
    /// Parameter types
    Usage,
}

/// A set of [`ReferenceKind`]s selected for ingestion.
///
/// Parsed from display-mode tokens: `all`, `references` (usage) and
/// `inheritance`. Several tokens are OR-ed together. Tokens are
/// case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceKinds {
    /// Keep inheritance references
    pub inheritance: bool,
    /// Keep usage references
    pub usage: bool,
}

impl Default for ReferenceKinds {
    fn default() -> Self {
        Self::all()
    }
}

impl ReferenceKinds {
    /// Every kind.
    pub fn all() -> Self {
        Self {
            inheritance: true,
            usage: true,
        }
    }

    /// No kind.
    pub fn none() -> Self {
        Self {
            inheritance: false,
            usage: false,
        }
    }

    /// Union of the kinds named by `tokens`; all kinds if there are none.
    ///
    /// # Errors
    ///
    /// Returns [`FactsError::UnknownReferenceKind`] for the first token that
    /// names no kind.
    pub fn from_tokens<I, S>(tokens: I) -> FactsResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut selected: Option<Self> = None;
        for token in tokens {
            let kinds: Self = token.as_ref().parse()?;
            selected = Some(selected.map_or(kinds, |s| s.union(kinds)));
        }
        Ok(selected.unwrap_or_default())
    }

    /// Kinds in either set.
    pub fn union(self, other: Self) -> Self {
        Self {
            inheritance: self.inheritance || other.inheritance,
            usage: self.usage || other.usage,
        }
    }

    /// Whether `kind` is selected.
    pub fn contains(&self, kind: ReferenceKind) -> bool {
        match kind {
            ReferenceKind::Inheritance => self.inheritance,
            ReferenceKind::Usage => self.usage,
        }
    }
}

impl FromStr for ReferenceKinds {
    type Err = FactsError;

    fn from_str(s: &str) -> FactsResult<Self> {
        match s {
            "all" => Ok(Self::all()),
            "references" => Ok(Self {
                usage: true,
                ..Self::none()
            }),
            "inheritance" => Ok(Self {
                inheritance: true,
                ..Self::none()
            }),
            other => Err(FactsError::UnknownReferenceKind(other.to_string())),
        }
    }
}

impl fmt::Display for ReferenceKinds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.inheritance, self.usage) {
            (true, true) => f.write_str("all"),
            (true, false) => f.write_str("inheritance"),
            (false, true) => f.write_str("references"),
            (false, false) => f.write_str("none"),
        }
    }
}
