//! DOT format export for Graphviz visualization.
//!
//! Each project becomes a `subgraph cluster_*` holding a folder-shaped project
//! node and its type nodes. Project references connect the project nodes.

use super::hierarchy::{EdgeKind, Hierarchy};
use super::{GraphFormat, GraphWriter, RenderOptions};
use crate::error::Result;
use crate::graph::TypeGraph;
use std::fmt::Write;

/// Options for styling DOT export
#[derive(Debug, Clone)]
pub struct DotOptions {
    /// Graph layout direction: LR, TB, RL, BT
    pub rankdir: String,
    /// Fill color of project nodes (hex color code)
    pub project_color: String,
    /// Fill color of type nodes (hex color code)
    pub type_color: String,
    /// Edge color for project references
    pub project_edge_color: String,
}

impl Default for DotOptions {
    fn default() -> Self {
        DotOptions {
            rankdir: "LR".to_string(),
            project_color: "#BCAAA4".to_string(),
            type_color: "#FFE082".to_string(),
            project_edge_color: "#5D4037".to_string(),
        }
    }
}

/// Renders a [`TypeGraph`] as Graphviz DOT.
#[derive(Debug, Clone, Default)]
pub struct DotWriter {
    options: DotOptions,
}

impl DotWriter {
    /// Create a writer with default styling.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer with custom styling.
    pub fn styled(options: DotOptions) -> Self {
        Self { options }
    }
}

impl GraphWriter for DotWriter {
    fn format(&self) -> GraphFormat {
        GraphFormat::Dot
    }

    fn render(&self, graph: &TypeGraph, options: &RenderOptions) -> Result<String> {
        let hierarchy = Hierarchy::build(graph, &options.common_prefix)?;
        let style = &self.options;
        let mut output = String::with_capacity(4096);

        // Writing to a String cannot fail
        let _ = writeln!(output, "digraph types {{");
        let _ = writeln!(output, "    rankdir={};", style.rankdir);
        let _ = writeln!(output, "    node [style=filled];\n");

        for project in &hierarchy.projects {
            let _ = writeln!(output, "    subgraph cluster_n{} {{", project.id);
            let _ = writeln!(output, "        label=\"{}\";", escape_dot_label(&project.label));
            let _ = writeln!(
                output,
                "        n{} [label=\"{}\", shape=folder, fillcolor=\"{}\"];",
                project.id,
                escape_dot_label(&project.label),
                style.project_color
            );
            for node in &project.types {
                let _ = writeln!(
                    output,
                    "        n{} [label=\"{}\", shape=box, fillcolor=\"{}\"];",
                    node.id,
                    escape_dot_label(&node.label),
                    style.type_color
                );
            }
            let _ = writeln!(output, "    }}\n");
        }

        for edge in &hierarchy.edges {
            match edge.kind {
                EdgeKind::Project => {
                    let _ = writeln!(
                        output,
                        "    n{} -> n{} [style=bold, color=\"{}\"];",
                        edge.source, edge.target, style.project_edge_color
                    );
                }
                EdgeKind::Type => {
                    let _ = writeln!(output, "    n{} -> n{};", edge.source, edge.target);
                }
            }
        }

        output.push_str("}\n");
        Ok(output)
    }
}

/// Escape special characters for DOT labels
fn escape_dot_label(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
