//! Projection of a [`TypeGraph`] onto an allow-list of projects.

use super::config::FilterConfig;
use super::pattern::ExcludeMatcher;
use crate::error::Result;
use crate::graph::{Reference, TypeGraph};
use log::{debug, info, trace};
use std::collections::HashSet;

/// Produces filtered copies of a [`TypeGraph`].
///
/// Filtering never mutates its input. The output contains:
///
/// 1. every project matching the allow-list, plus both endpoints of every
///    project reference whose source matches it (one-hop pull-in), and those
///    project references;
/// 2. the types of each included project that no exclude pattern matches, and
///    every type reference whose source survived;
/// 3. when orphans are not kept, only the types touched by a surviving type
///    reference.
///
/// Type names are compared exactly. The allow-list is case-insensitive.
#[derive(Debug, Clone)]
pub struct GraphFilter {
    // Lowercased allow-list; empty allows everything
    allowed: HashSet<String>,
    exclude: ExcludeMatcher,
    include_orphans: bool,
}

impl GraphFilter {
    /// Build a filter from its configuration.
    ///
    /// # Errors
    ///
    /// Fails if the exclude patterns are malformed or exceed their budget.
    pub fn new(config: &FilterConfig) -> Result<Self> {
        let exclude = ExcludeMatcher::compile(&config.exclude, config.pattern_budget)?;
        Ok(Self {
            allowed: config.projects.iter().map(|p| p.to_lowercase()).collect(),
            exclude,
            include_orphans: config.include_orphans,
        })
    }

    /// Project `source` into a new graph.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::PatternTimeout`](crate::GraphError::PatternTimeout)
    /// if matching a type name exceeds the pattern budget.
    pub fn apply(&self, source: &TypeGraph) -> Result<TypeGraph> {
        let mut filtered = TypeGraph::new();

        self.add_projects(source, &mut filtered);
        self.add_types(source, &mut filtered)?;

        info!(
            "Filtered graph: {} of {} projects, {} of {} types, {} of {} type references",
            filtered.project_count(),
            source.project_count(),
            filtered.type_count(),
            source.type_count(),
            filtered.type_references().len(),
            source.type_references().len()
        );
        Ok(filtered)
    }

    /// Whether `project` matches the allow-list.
    pub fn is_allowed(&self, project: &str) -> bool {
        self.allowed.is_empty() || self.allowed.contains(&project.to_lowercase())
    }

    fn add_projects(&self, from: &TypeGraph, to: &mut TypeGraph) {
        for project in from.projects().iter().filter(|p| self.is_allowed(p)) {
            to.add_project(project.as_str());
        }

        for reference in from.project_references() {
            if !self.is_allowed(&reference.source) {
                continue;
            }
            to.add_project(reference.source.as_str());
            if to.add_project(reference.target.as_str()) && !self.is_allowed(&reference.target) {
                debug!("Pulled in project {} via {reference}", reference.target);
            }
            to.add_project_reference(reference.source.as_str(), reference.target.as_str());
        }
    }

    fn add_types(&self, from: &TypeGraph, to: &mut TypeGraph) -> Result<()> {
        let mut kept = Vec::with_capacity(to.project_count());
        for project in to.projects() {
            let mut types = Vec::new();
            for name in from.types_of(project) {
                if self.exclude.is_excluded(name)? {
                    trace!("Excluded type {name}");
                    continue;
                }
                types.push(name.clone());
            }
            kept.push((project.clone(), types));
        }

        let declared: HashSet<&str> = kept
            .iter()
            .flat_map(|(_, types)| types.iter().map(String::as_str))
            .collect();
        let references: Vec<&Reference> = from
            .type_references()
            .iter()
            .filter(|r| declared.contains(r.source.as_str()))
            .collect();

        if !self.include_orphans {
            let referenced: HashSet<&str> = references
                .iter()
                .flat_map(|r| [r.source.as_str(), r.target.as_str()])
                .collect();
            for (project, types) in &mut kept {
                let before = types.len();
                types.retain(|t| referenced.contains(t.as_str()));
                if types.len() < before {
                    debug!("Pruned {} orphaned types from {project}", before - types.len());
                }
            }
        }

        for reference in references {
            to.add_type_reference(reference.source.as_str(), reference.target.as_str());
        }
        for (project, types) in kept {
            to.add_types(&project, types);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(config: FilterConfig) -> GraphFilter {
        GraphFilter::new(&config).unwrap()
    }

    #[test]
    fn test_allow_list_is_case_insensitive() {
        let f = filter(FilterConfig::default().with_projects(["App"]));
        assert!(f.is_allowed("app"));
        assert!(f.is_allowed("APP"));
        assert!(!f.is_allowed("Application"));
    }

    #[test]
    fn test_empty_allow_list_allows_everything() {
        let f = filter(FilterConfig::default());
        assert!(f.is_allowed("Anything"));
    }

    #[test]
    fn test_source_is_not_mutated() {
        let mut source = TypeGraph::new();
        source.add_projects(["App", "Lib"]);
        source.add_types("App", ["App.Foo"]);
        let snapshot = source.clone();

        let f = filter(FilterConfig::default().with_projects(["Lib"]).with_exclude(["*"]));
        let filtered = f.apply(&source).unwrap();

        assert_eq!(source, snapshot);
        assert_eq!(filtered.projects(), ["Lib"]);
    }

    #[test]
    fn test_unmatched_allow_list_yields_empty_graph() {
        let mut source = TypeGraph::new();
        source.add_projects(["App", "Lib"]);
        source.add_project_reference("App", "Lib");
        source.add_types("App", ["App.Foo"]);
        source.add_type_reference("App.Foo", "Lib.Bar");

        let f = filter(FilterConfig::unrestricted().with_projects(["Nope"]));
        let filtered = f.apply(&source).unwrap();

        assert!(filtered.is_empty());
        assert!(filtered.types().is_empty());
    }

    #[test]
    fn test_pulled_in_target_keeps_own_references_out() {
        let mut source = TypeGraph::new();
        source.add_projects(["App", "Lib", "Core"]);
        source.add_project_reference("App", "Lib");
        source.add_project_reference("Lib", "Core");

        let f = filter(FilterConfig::unrestricted().with_projects(["App"]));
        let filtered = f.apply(&source).unwrap();

        assert_eq!(filtered.projects(), ["App", "Lib"]);
        assert_eq!(filtered.project_references(), [Reference::new("App", "Lib")]);
    }

    #[test]
    fn test_reference_source_outside_project_list_is_included() {
        let mut source = TypeGraph::new();
        source.add_project("Lib");
        source.add_project_reference("Tool", "Lib");

        let f = filter(FilterConfig::unrestricted());
        let filtered = f.apply(&source).unwrap();

        assert_eq!(filtered.projects(), ["Lib", "Tool"]);
        assert!(filtered.types_of("Tool").is_empty());
    }

    #[test]
    fn test_dangling_type_reference_targets_are_kept() {
        let mut source = TypeGraph::new();
        source.add_project("App");
        source.add_types("App", ["App.Foo"]);
        source.add_type_reference("App.Foo", "System.String");
        source.add_type_reference("Other.Type", "App.Foo");

        let f = filter(FilterConfig::default());
        let filtered = f.apply(&source).unwrap();

        assert_eq!(
            filtered.type_references(),
            [Reference::new("App.Foo", "System.String")]
        );
        assert_eq!(filtered.types_of("App"), ["App.Foo"]);
    }

    #[test]
    fn test_type_reference_source_match_is_exact() {
        let mut source = TypeGraph::new();
        source.add_project("App");
        source.add_types("App", ["App.Foo"]);
        source.add_type_reference("app.foo", "App.Foo");

        let f = filter(FilterConfig::unrestricted());
        let filtered = f.apply(&source).unwrap();

        assert!(filtered.type_references().is_empty());
    }

    #[test]
    fn test_orphan_after_exclusion_is_pruned() {
        let mut source = TypeGraph::new();
        source.add_project("App");
        source.add_types("App", ["App.Foo", "App.FooTest", "App.Bar", "App.Baz"]);
        source.add_type_reference("App.FooTest", "App.Foo");
        source.add_type_reference("App.Bar", "App.Baz");

        let f = filter(FilterConfig::default().with_exclude(["*Test*"]));
        let filtered = f.apply(&source).unwrap();

        assert_eq!(filtered.types_of("App"), ["App.Bar", "App.Baz"]);
        assert_eq!(filtered.type_references(), [Reference::new("App.Bar", "App.Baz")]);
    }

    #[test]
    fn test_orphan_pruning_is_global_across_projects() {
        let mut source = TypeGraph::new();
        source.add_projects(["App", "Lib"]);
        source.add_types("App", ["App.Foo"]);
        source.add_types("Lib", ["Lib.Bar"]);
        source.add_type_reference("App.Foo", "Lib.Bar");

        let f = filter(FilterConfig::default());
        let filtered = f.apply(&source).unwrap();

        assert_eq!(filtered.types_of("Lib"), ["Lib.Bar"]);
    }

    #[test]
    fn test_star_exclude_clears_types_and_references() {
        let mut source = TypeGraph::new();
        source.add_projects(["App", "Lib"]);
        source.add_types("App", ["App.Foo"]);
        source.add_types("Lib", ["Lib.Bar"]);
        source.add_type_reference("App.Foo", "Lib.Bar");

        let f = filter(FilterConfig::unrestricted().with_exclude(["*"]));
        let filtered = f.apply(&source).unwrap();

        assert_eq!(filtered.projects(), ["App", "Lib"]);
        assert!(filtered.types_of("App").is_empty());
        assert!(filtered.types_of("Lib").is_empty());
        assert!(filtered.type_references().is_empty());
    }

    #[test]
    fn test_malformed_exclude_is_rejected_at_construction() {
        let config = FilterConfig::default().with_exclude(["App[Foo"]);
        assert!(GraphFilter::new(&config).is_err());
    }
}
