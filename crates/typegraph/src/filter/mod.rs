//! Filtering: project a [`TypeGraph`](crate::TypeGraph) onto a subset of
//! projects and types.
//!
//! - [`FilterConfig`]: Allow-list, exclude patterns, orphan handling
//! - [`ExcludeMatcher`]: Compiled exclude globs with a time budget
//! - [`GraphFilter`]: Produces the filtered graph

mod config;
mod engine;
mod pattern;

pub use config::{FilterConfig, DEFAULT_PATTERN_BUDGET};
pub use engine::GraphFilter;
pub use pattern::ExcludeMatcher;
