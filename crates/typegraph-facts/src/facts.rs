//! Fact-set document model and ingestion into a [`TypeGraph`].
//!
//! A fact set is what an extraction pass produces for one solution: the
//! projects, whether each is a test project, the projects it references, the
//! types it declares and the type references found in it.

use crate::config::IngestOptions;
use crate::errors::{FactsError, FactsResult};
use crate::kinds::ReferenceKind;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use typegraph::TypeGraph;

/// A type reference found while extracting a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeReferenceFact {
    /// Referencing type
    pub source: String,
    /// Referenced type
    pub target: String,
    /// How `source` refers to `target`
    pub kind: ReferenceKind,
}

impl TypeReferenceFact {
    /// Create a new type reference fact
    pub fn new(source: impl Into<String>, target: impl Into<String>, kind: ReferenceKind) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            kind,
        }
    }
}

/// Everything extracted from one project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectFacts {
    /// Project name
    pub name: String,

    /// Whether the project is a test project
    #[serde(default)]
    pub is_test: bool,

    /// Names of referenced projects
    #[serde(default)]
    pub references: Vec<String>,

    /// Fully-qualified names of declared types, in declaration order
    #[serde(default)]
    pub types: Vec<String>,

    /// Type references found in the project
    #[serde(default)]
    pub type_references: Vec<TypeReferenceFact>,
}

impl ProjectFacts {
    /// Create facts for a project with no content
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Facts for a whole solution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactSet {
    /// Solution name, used to derive the common display prefix
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solution: Option<String>,

    /// Projects in extraction order
    #[serde(default)]
    pub projects: Vec<ProjectFacts>,
}

impl FactSet {
    /// Parse a fact set from JSON text; `origin` names the source in errors.
    pub fn from_json(text: &str, origin: &Path) -> FactsResult<Self> {
        serde_json::from_str(text).map_err(|e| FactsError::Parse(origin.to_path_buf(), e))
    }

    /// Build a graph from these facts.
    ///
    /// All ingested project names are registered first. Each project then
    /// contributes its project references, its types and its type references
    /// of the selected kinds, in that order. Test projects are skipped unless
    /// `options.include_tests` is set; references from a skipped project are
    /// never added, references to it are.
    pub fn ingest(&self, options: &IngestOptions) -> TypeGraph {
        let mut graph = TypeGraph::new();

        let ingested: Vec<&ProjectFacts> = self
            .projects
            .iter()
            .filter(|project| {
                let keep = options.include_tests || !project.is_test;
                if !keep {
                    debug!("Skipping test project {}", project.name);
                }
                keep
            })
            .collect();

        for project in &ingested {
            graph.add_project(project.name.as_str());
        }

        let mut dropped = 0usize;
        for project in &ingested {
            info!("Project: {}", project.name);

            for target in &project.references {
                graph.add_project_reference(project.name.as_str(), target.as_str());
            }
            graph.add_types(&project.name, project.types.iter().map(String::as_str));
            for reference in &project.type_references {
                if options.kinds.contains(reference.kind) {
                    graph.add_type_reference(reference.source.as_str(), reference.target.as_str());
                } else {
                    dropped += 1;
                }
            }
        }

        debug!(
            "Ingested {} of {} projects ({dropped} type references of unselected kinds)",
            ingested.len(),
            self.projects.len()
        );
        graph
    }

    /// Solution name: the `solution` field, else the stem of `path`.
    pub fn solution_name(&self, path: &Path) -> String {
        match &self.solution {
            Some(name) => name.clone(),
            None => path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default(),
        }
    }

    /// Prefix shared by project and type names: `"<solution>."`.
    ///
    /// Empty when the solution name is empty.
    pub fn common_prefix(&self, path: &Path) -> String {
        let name = self.solution_name(path);
        if name.is_empty() {
            name
        } else {
            format!("{name}.")
        }
    }
}

/// Read and parse the fact set at `path`.
///
/// # Errors
///
/// Returns [`FactsError::Io`] if the file cannot be read and
/// [`FactsError::Parse`] if it is not a valid fact set.
pub fn load_facts(path: impl AsRef<Path>) -> FactsResult<FactSet> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| FactsError::Io(path.to_path_buf(), e))?;
    let facts = FactSet::from_json(&text, path)?;
    debug!("Loaded {} projects from {}", facts.projects.len(), path.display());
    Ok(facts)
}
