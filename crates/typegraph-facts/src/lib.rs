//! typegraph facts
//!
//! Loads the facts an extraction pass wrote for a solution and ingests them
//! into a [`typegraph::TypeGraph`].
//!
//! This crate provides:
//!
//! - **Fact-set model**: projects, their types and references, as JSON
//! - **Reference kinds**: inheritance and usage, selectable by display mode
//! - **Ingestion**: test-project exclusion and kind selection
//! - **Error handling**: one error type for loading and selection
//!
//! # Example
//!
//! ```rust
//! use std::path::Path;
//! use typegraph_facts::{FactSet, IngestOptions, ReferenceKinds};
//!
//! let facts = FactSet::from_json(
//!     r#"{"solution": "Shop", "projects": [{"name": "Shop.App", "types": ["Shop.App.Program"]}]}"#,
//!     Path::new("shop.json"),
//! )
//! .unwrap();
//!
//! let options = IngestOptions::default().with_kinds(ReferenceKinds::from_tokens(["all"]).unwrap());
//! let graph = facts.ingest(&options);
//! assert_eq!(graph.projects(), ["Shop.App"]);
//! assert_eq!(facts.common_prefix(Path::new("shop.json")), "Shop.");
//! ```

pub mod config;
pub mod errors;
pub mod facts;
pub mod kinds;

// Re-export commonly used types
pub use config::IngestOptions;
pub use errors::{FactsError, FactsResult};
pub use facts::{load_facts, FactSet, ProjectFacts, TypeReferenceFact};
pub use kinds::{ReferenceKind, ReferenceKinds};
