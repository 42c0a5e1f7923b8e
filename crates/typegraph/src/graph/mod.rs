//! Core graph types.
//!
//! This module defines the fundamental building blocks:
//! - [`Reference`]: A directed edge between two names
//! - [`TypeGraph`]: Projects, their declared types, and references between both

mod model;
mod types;

pub use model::TypeGraph;
pub use types::Reference;
