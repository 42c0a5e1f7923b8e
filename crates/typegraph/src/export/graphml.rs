//! GraphML export in the yEd dialect.
//!
//! Each project becomes a group node embedding a directed sub-graph of its
//! types, so yEd shows types nested inside their project. Both kinds of
//! reference become top-level edges.
//!
//! See <http://graphml.graphdrawing.org/primer/graphml-primer.html>.

use super::document::{XmlDocument, XmlElement};
use super::hierarchy::{Hierarchy, ProjectNode, TypeNode};
use super::ids::NodeId;
use super::{GraphFormat, GraphWriter, RenderOptions};
use crate::error::Result;
use crate::graph::TypeGraph;
use log::info;

/// GraphML namespace
pub const GRAPHML_NS: &str = "http://graphml.graphdrawing.org/xmlns";
/// yWorks extension namespace
pub const YWORKS_NS: &str = "http://www.yworks.com/xml/graphml";
/// XML Schema instance namespace
pub const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";
/// Schema location pairing the GraphML namespace with the yWorks schema
pub const SCHEMA_LOCATION: &str =
    "http://graphml.graphdrawing.org/xmlns http://www.yworks.com/xml/schema/graphml/1.0/ygraphml.xsd";

/// Key holding the plain-text node description
pub const DESCRIPTION_KEY: &str = "d0";
/// Key holding yFiles node graphics (the visible label)
pub const GRAPHICS_KEY: &str = "d1";

/// Renders a [`TypeGraph`] as yEd-flavoured GraphML.
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphMlWriter;

impl GraphMlWriter {
    /// Create a new writer.
    pub fn new() -> Self {
        Self
    }

    /// Assemble the complete document in memory.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownProject`](crate::GraphError::UnknownProject)
    /// if a project reference names an unregistered project.
    pub fn build(&self, graph: &TypeGraph, options: &RenderOptions) -> Result<XmlDocument> {
        let hierarchy = Hierarchy::build(graph, &options.common_prefix)?;

        let mut root = XmlElement::new("graphml")
            .with_attr("xmlns", GRAPHML_NS)
            .with_attr("xmlns:y", YWORKS_NS)
            .with_attr("xmlns:xsi", XSI_NS)
            .with_attr("xsi:schemaLocation", SCHEMA_LOCATION)
            .with_child(
                XmlElement::new("key")
                    .with_attr("attr.name", "description")
                    .with_attr("attr.type", "string")
                    .with_attr("for", "node")
                    .with_attr("id", DESCRIPTION_KEY),
            )
            .with_child(
                XmlElement::new("key")
                    .with_attr("yfiles.type", "nodegraphics")
                    .with_attr("for", "node")
                    .with_attr("id", GRAPHICS_KEY),
            );

        let mut top = XmlElement::new("graph")
            .with_attr("edgedefault", "directed")
            .with_attr("id", "G");
        for project in &hierarchy.projects {
            top.push(project_node(project));
        }
        for edge in &hierarchy.edges {
            top.push(edge_element(edge.source, edge.target));
        }
        root.push(top);

        info!(
            "Built GraphML document with {} nodes and {} edges",
            hierarchy.node_count(),
            hierarchy.edges.len()
        );
        Ok(XmlDocument::new(root))
    }
}

impl GraphWriter for GraphMlWriter {
    fn format(&self) -> GraphFormat {
        GraphFormat::GraphMl
    }

    fn render(&self, graph: &TypeGraph, options: &RenderOptions) -> Result<String> {
        self.build(graph, options)?.to_xml_string()
    }
}

fn node_ref(id: NodeId) -> String {
    format!("n{id}")
}

fn project_node(project: &ProjectNode) -> XmlElement {
    let mut sub_graph = XmlElement::new("graph")
        .with_attr("id", format!("g{}", project.id))
        .with_attr("edgedefault", "directed");
    for node in &project.types {
        sub_graph.push(type_node(node));
    }

    XmlElement::new("node")
        .with_attr("id", node_ref(project.id))
        .with_child(description(&project.label))
        .with_child(sub_graph)
}

fn type_node(node: &TypeNode) -> XmlElement {
    XmlElement::new("node")
        .with_attr("id", node_ref(node.id))
        .with_child(description(&node.label))
        .with_child(
            XmlElement::new("data").with_attr("key", GRAPHICS_KEY).with_child(
                XmlElement::new("y:ShapeNode")
                    .with_child(XmlElement::new("y:NodeLabel").with_text(node.label.as_str())),
            ),
        )
}

fn description(label: &str) -> XmlElement {
    XmlElement::new("data")
        .with_attr("key", DESCRIPTION_KEY)
        .with_text(label)
}

fn edge_element(source: NodeId, target: NodeId) -> XmlElement {
    XmlElement::new("edge")
        .with_attr("source", node_ref(source))
        .with_attr("target", node_ref(target))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(graph: &TypeGraph, prefix: &str) -> XmlDocument {
        GraphMlWriter::new()
            .build(graph, &RenderOptions::default().with_common_prefix(prefix))
            .unwrap()
    }

    #[test]
    fn test_root_declares_namespaces_and_keys() {
        let doc = render(&TypeGraph::new(), "");
        let root = &doc.root;

        assert_eq!(root.name(), "graphml");
        assert_eq!(root.attr("xmlns:y"), Some(YWORKS_NS));
        assert_eq!(root.attr("xsi:schemaLocation"), Some(SCHEMA_LOCATION));

        let keys: Vec<_> = root.elements_named("key").collect();
        assert_eq!(keys.len(), 2);
        assert_eq!(keys[0].attr("attr.name"), Some("description"));
        assert_eq!(keys[0].attr("for"), Some("node"));
        assert_eq!(keys[1].attr("yfiles.type"), Some("nodegraphics"));
        assert_eq!(keys[1].attr("for"), Some("node"));

        let graphs: Vec<_> = root.elements_named("graph").collect();
        assert_eq!(graphs.len(), 1);
        assert_eq!(graphs[0].attr("id"), Some("G"));
        assert_eq!(graphs[0].attr("edgedefault"), Some("directed"));
    }

    #[test]
    fn test_project_embeds_type_subgraph() {
        let mut graph = TypeGraph::new();
        graph.add_project("Shop.Core");
        graph.add_types("Shop.Core", ["global::Shop.Core.Order"]);

        let doc = render(&graph, "Shop.");
        let top = doc.root.elements_named("graph").next().unwrap();
        let project = top.elements_named("node").next().unwrap();

        assert_eq!(project.attr("id"), Some("n1"));
        assert_eq!(project.elements_named("data").next().unwrap().text(), "Core");

        let sub_graph = project.elements_named("graph").next().unwrap();
        assert_eq!(sub_graph.attr("id"), Some("g1"));
        let type_node = sub_graph.elements_named("node").next().unwrap();
        assert_eq!(type_node.attr("id"), Some("n2"));
        assert_eq!(type_node.descendants_named("y:NodeLabel")[0].text(), "Order");
    }

    #[test]
    fn test_render_produces_xml_text() {
        let mut graph = TypeGraph::new();
        graph.add_projects(["App", "Lib"]);
        graph.add_project_reference("App", "Lib");

        let xml = GraphMlWriter::new()
            .render(&graph, &RenderOptions::default())
            .unwrap();
        assert!(xml.contains("<edge source=\"n1\" target=\"n2\"/>"));
        assert!(xml.contains("<data key=\"d0\">App</data>"));
    }
}
