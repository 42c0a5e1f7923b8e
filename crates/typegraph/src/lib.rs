//! # typegraph
//!
//! Turns extracted facts about a codebase (projects, the types they declare,
//! and references between both) into a filtered, hierarchical graph document.
//!
//! ## Architecture
//!
//! ```text
//! Extraction (facts)
//!     ↓
//! TypeGraph (append-only projects, types, references)
//!     ↓
//! GraphFilter (allow-list, exclude patterns, orphan pruning)
//!     ↓
//! GraphWriter (GraphML / DOT)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use typegraph::{FilterConfig, GraphFilter, GraphMlWriter, GraphWriter, RenderOptions, TypeGraph};
//!
//! # fn example() -> typegraph::Result<()> {
//! let mut graph = TypeGraph::new();
//! graph.add_projects(["App", "Lib"]);
//! graph.add_project_reference("App", "Lib");
//! graph.add_types("App", ["App.Foo"]);
//! graph.add_types("Lib", ["Lib.Bar", "Lib.Baz"]);
//! graph.add_type_reference("App.Foo", "Lib.Bar");
//!
//! let filter = GraphFilter::new(&FilterConfig::default().with_projects(["App"]))?;
//! let filtered = filter.apply(&graph)?;
//! assert_eq!(filtered.types_of("Lib"), ["Lib.Bar"]);
//!
//! let xml = GraphMlWriter::new().render(&filtered, &RenderOptions::default())?;
//! assert!(xml.contains("<graphml"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod error;
pub mod export;
pub mod filter;
pub mod graph;

// Re-export main types
pub use error::{GraphError, Result};
pub use export::{
    writer_for, DotWriter, GraphFormat, GraphMlWriter, GraphWriter, Hierarchy, RenderOptions,
    XmlDocument,
};
pub use filter::{FilterConfig, GraphFilter};
pub use graph::{Reference, TypeGraph};
