//! The append-only project/type graph.

use super::types::Reference;
use log::{debug, trace};
use std::collections::{HashMap, HashSet};

/// Projects, the types they declare, and the references between them.
///
/// `TypeGraph` is populated through additive operations only and is read-only
/// afterwards. None of the operations fail: unknown names are accepted and
/// edges may point at names that are never declared.
///
/// Project registration is deduplicated by exact name; the project list keeps
/// first-seen order. Edges and type lists keep duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeGraph {
    projects: Vec<String>,
    // Membership index over `projects`
    project_names: HashSet<String>,
    project_references: Vec<Reference>,
    types: HashMap<String, Vec<String>>,
    type_references: Vec<Reference>,
}

impl TypeGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a project, ensuring it has a (possibly empty) type list.
    ///
    /// Returns `false` if the name was already registered.
    pub fn add_project(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        self.types.entry(name.clone()).or_default();

        if !self.project_names.insert(name.clone()) {
            trace!("Project {name} already registered");
            return false;
        }

        debug!("Registering project: {name}");
        self.projects.push(name);
        true
    }

    /// Register several projects in order.
    pub fn add_projects<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            self.add_project(name);
        }
    }

    /// Append a project reference ("source depends on target").
    pub fn add_project_reference(&mut self, source: impl Into<String>, target: impl Into<String>) {
        self.project_references.push(Reference::new(source, target));
    }

    /// Append types to a project's type list, creating the list if absent.
    ///
    /// This does not register the project itself.
    pub fn add_types<I, S>(&mut self, project: &str, types: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let list = self.types.entry(project.to_string()).or_default();
        let before = list.len();
        list.extend(types.into_iter().map(Into::into));
        trace!("Added {} types to {project}", list.len() - before);
    }

    /// Append a type reference ("source references target").
    pub fn add_type_reference(&mut self, source: impl Into<String>, target: impl Into<String>) {
        self.type_references.push(Reference::new(source, target));
    }

    /// Registered project names in insertion order.
    pub fn projects(&self) -> &[String] {
        &self.projects
    }

    /// Project references in insertion order.
    pub fn project_references(&self) -> &[Reference] {
        &self.project_references
    }

    /// Mapping from project name to its ordered type names.
    pub fn types(&self) -> &HashMap<String, Vec<String>> {
        &self.types
    }

    /// Types declared by `project`, or an empty slice if it has no list.
    pub fn types_of(&self, project: &str) -> &[String] {
        self.types.get(project).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Type references in insertion order.
    pub fn type_references(&self) -> &[Reference] {
        &self.type_references
    }

    /// Whether `name` was registered as a project (exact match).
    pub fn contains_project(&self, name: &str) -> bool {
        self.project_names.contains(name)
    }

    /// Number of registered projects.
    pub fn project_count(&self) -> usize {
        self.projects.len()
    }

    /// Number of type entries across all registered projects.
    pub fn type_count(&self) -> usize {
        self.projects.iter().map(|p| self.types_of(p).len()).sum()
    }

    /// Whether the graph has no projects and no edges.
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
            && self.project_references.is_empty()
            && self.type_references.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_creates_type_list() {
        let mut graph = TypeGraph::new();
        graph.add_projects(["App", "Lib"]);

        assert_eq!(graph.projects(), ["App", "Lib"]);
        assert!(graph.types().get("App").is_some_and(Vec::is_empty));
        assert!(graph.types().get("Lib").is_some_and(Vec::is_empty));
    }

    #[test]
    fn test_register_deduplicates_preserving_order() {
        let mut graph = TypeGraph::new();
        assert!(graph.add_project("App"));
        assert!(graph.add_project("Lib"));
        assert!(!graph.add_project("App"));

        assert_eq!(graph.projects(), ["App", "Lib"]);
        assert_eq!(graph.project_count(), 2);
    }

    #[test]
    fn test_reregistering_keeps_existing_types() {
        let mut graph = TypeGraph::new();
        graph.add_project("App");
        graph.add_types("App", ["App.Foo"]);
        graph.add_project("App");

        assert_eq!(graph.types_of("App"), ["App.Foo"]);
    }

    #[test]
    fn test_add_types_appends() {
        let mut graph = TypeGraph::new();
        graph.add_project("App");
        graph.add_types("App", ["App.Foo"]);
        graph.add_types("App", vec!["App.Bar".to_string(), "App.Foo".to_string()]);

        assert_eq!(graph.types_of("App"), ["App.Foo", "App.Bar", "App.Foo"]);
    }

    #[test]
    fn test_add_types_to_unregistered_project() {
        let mut graph = TypeGraph::new();
        graph.add_types("Ghost", ["Ghost.Type"]);

        assert!(!graph.contains_project("Ghost"));
        assert_eq!(graph.types_of("Ghost"), ["Ghost.Type"]);
        assert_eq!(graph.type_count(), 0);
    }

    #[test]
    fn test_edges_are_unconditional() {
        let mut graph = TypeGraph::new();
        graph.add_project_reference("App", "Lib");
        graph.add_project_reference("App", "Lib");
        graph.add_project_reference("App", "App");
        graph.add_type_reference("App.Foo", "Nowhere.Type");

        assert_eq!(graph.project_references().len(), 3);
        assert_eq!(graph.project_references()[2], Reference::new("App", "App"));
        assert_eq!(graph.type_references(), [Reference::new("App.Foo", "Nowhere.Type")]);
        assert!(graph.projects().is_empty());
    }

    #[test]
    fn test_types_of_unknown_project_is_empty() {
        let graph = TypeGraph::new();
        assert!(graph.types_of("Missing").is_empty());
        assert!(graph.is_empty());
    }
}
