//! Format-neutral node/edge layout shared by the writers.

use super::ids::{IdAllocator, NodeId};
use super::naming::DisplayNamer;
use crate::error::{GraphError, Result};
use crate::graph::TypeGraph;
use log::{debug, trace, warn};

/// Which kind of reference an edge was rendered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    /// Project depends on project
    Project,
    /// Type references type
    Type,
}

/// A rendered type node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeNode {
    /// Assigned ID
    pub id: NodeId,
    /// Raw fully-qualified name
    pub name: String,
    /// Shortened label
    pub label: String,
}

/// A rendered project node with its nested type nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectNode {
    /// Assigned ID
    pub id: NodeId,
    /// Raw project name
    pub name: String,
    /// Shortened label
    pub label: String,
    /// Types first declared by this project, in stored order
    pub types: Vec<TypeNode>,
}

/// A resolved edge between two rendered nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenderEdge {
    /// Source node ID
    pub source: NodeId,
    /// Target node ID
    pub target: NodeId,
    /// Origin of the edge
    pub kind: EdgeKind,
}

/// Nodes and edges of one export, with IDs and labels resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hierarchy {
    /// Project nodes in stored order
    pub projects: Vec<ProjectNode>,
    /// Project edges followed by type edges
    pub edges: Vec<RenderEdge>,
}

impl Hierarchy {
    /// Assign IDs and labels for `graph` and resolve its edges.
    ///
    /// Projects are visited in stored order, each followed by its types. A
    /// name already seen keeps its first ID and produces no second node.
    /// Type references with an endpoint that received no ID are omitted.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownProject`] if a project reference names a
    /// project that is not registered in `graph`.
    pub fn build(graph: &TypeGraph, common_prefix: &str) -> Result<Self> {
        let namer = DisplayNamer::new(common_prefix);
        let mut ids = IdAllocator::new();
        let mut hierarchy = Hierarchy::default();

        for project in graph.projects() {
            let Some(id) = ids.assign(project) else {
                warn!("Project {project} shares its name with an earlier node; skipping it");
                continue;
            };

            let mut types = Vec::new();
            for name in graph.types_of(project) {
                match ids.assign(name) {
                    Some(type_id) => types.push(TypeNode {
                        id: type_id,
                        name: name.clone(),
                        label: namer.display_name(name, Some(project)),
                    }),
                    None => trace!("Type {name} already rendered"),
                }
            }

            hierarchy.projects.push(ProjectNode {
                id,
                name: project.clone(),
                label: namer.display_name(project, None),
                types,
            });
        }

        for reference in graph.project_references() {
            let source = resolve_project(graph, &ids, &reference.source)?;
            let target = resolve_project(graph, &ids, &reference.target)?;
            hierarchy.edges.push(RenderEdge {
                source,
                target,
                kind: EdgeKind::Project,
            });
        }

        let mut omitted = 0usize;
        for reference in graph.type_references() {
            match (ids.get(&reference.source), ids.get(&reference.target)) {
                (Some(source), Some(target)) => hierarchy.edges.push(RenderEdge {
                    source,
                    target,
                    kind: EdgeKind::Type,
                }),
                _ => {
                    trace!("Omitting unresolved type reference {reference}");
                    omitted += 1;
                }
            }
        }

        debug!(
            "Resolved {} nodes and {} edges ({omitted} type references omitted)",
            ids.len(),
            hierarchy.edges.len()
        );
        Ok(hierarchy)
    }

    /// Total number of project and type nodes.
    pub fn node_count(&self) -> usize {
        self.projects.iter().map(|p| 1 + p.types.len()).sum()
    }
}

fn resolve_project(graph: &TypeGraph, ids: &IdAllocator, name: &str) -> Result<NodeId> {
    if !graph.contains_project(name) {
        return Err(GraphError::UnknownProject {
            name: name.to_string(),
        });
    }
    ids.get(name).ok_or_else(|| GraphError::UnknownProject {
        name: name.to_string(),
    })
}
