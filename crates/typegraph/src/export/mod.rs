//! Export module for visualizing graphs in external tools.
//!
//! Supported formats:
//! - **GraphML**: yEd, with types nested inside their projects
//! - **DOT**: Graphviz, with one cluster per project
//!
//! All writers share the same ID assignment and display names, computed by
//! [`Hierarchy::build`].

pub mod document;
pub mod dot;
pub mod graphml;
pub mod hierarchy;
pub mod ids;
pub mod naming;

pub use document::{XmlDocument, XmlElement, XmlNode};
pub use dot::{DotOptions, DotWriter};
pub use graphml::{GraphMlWriter, DESCRIPTION_KEY, GRAPHICS_KEY};
pub use hierarchy::{EdgeKind, Hierarchy, ProjectNode, RenderEdge, TypeNode};
pub use ids::{IdAllocator, NodeId};
pub use naming::DisplayNamer;

use crate::error::{GraphError, Result};
use crate::graph::TypeGraph;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Options applied to one rendering call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Prefix stripped from every display name, typically `"<Solution>."`
    #[serde(default)]
    pub common_prefix: String,
}

impl RenderOptions {
    /// Set the common name prefix
    pub fn with_common_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.common_prefix = prefix.into();
        self
    }
}

/// Output formats a [`GraphWriter`] can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphFormat {
    /// yEd GraphML
    #[default]
    GraphMl,
    /// Graphviz DOT
    Dot,
}

impl GraphFormat {
    /// Conventional file extension.
    pub fn extension(&self) -> &'static str {
        match self {
            GraphFormat::GraphMl => "graphml",
            GraphFormat::Dot => "dot",
        }
    }
}

impl fmt::Display for GraphFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for GraphFormat {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "graphml" => Ok(GraphFormat::GraphMl),
            "dot" | "graphviz" => Ok(GraphFormat::Dot),
            _ => Err(GraphError::UnknownFormat {
                name: s.to_string(),
            }),
        }
    }
}

/// Renders a [`TypeGraph`] into a complete document.
///
/// Implementations assemble the whole document in memory; nothing is
/// written until rendering has succeeded.
pub trait GraphWriter {
    /// Format produced by this writer.
    fn format(&self) -> GraphFormat;

    /// Render `graph` with `options`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownProject`] if a project reference names a
    /// project that is not registered in `graph`.
    fn render(&self, graph: &TypeGraph, options: &RenderOptions) -> Result<String>;
}

/// Writer for `format` with default styling.
pub fn writer_for(format: GraphFormat) -> Box<dyn GraphWriter> {
    match format {
        GraphFormat::GraphMl => Box::new(GraphMlWriter::new()),
        GraphFormat::Dot => Box::new(DotWriter::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parsing() {
        assert_eq!("graphml".parse::<GraphFormat>().unwrap(), GraphFormat::GraphMl);
        assert_eq!("DOT".parse::<GraphFormat>().unwrap(), GraphFormat::Dot);
        let err = "svg".parse::<GraphFormat>().unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_writer_for_format() {
        assert_eq!(writer_for(GraphFormat::GraphMl).format(), GraphFormat::GraphMl);
        assert_eq!(writer_for(GraphFormat::Dot).format(), GraphFormat::Dot);
        assert_eq!(GraphFormat::default().to_string(), "graphml");
    }
}
