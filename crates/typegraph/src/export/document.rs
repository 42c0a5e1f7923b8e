//! In-memory XML document, assembled fully before anything is written.

use crate::error::{GraphError, Result};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Write;

/// Child of an [`XmlElement`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlNode {
    /// Nested element
    Element(XmlElement),
    /// Character data (escaped on write)
    Text(String),
}

/// An XML element with ordered attributes and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlElement {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<XmlNode>,
}

impl XmlElement {
    /// Create an empty element.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Add an attribute (builder style).
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    /// Add a child element (builder style).
    pub fn with_child(mut self, child: XmlElement) -> Self {
        self.children.push(XmlNode::Element(child));
        self
    }

    /// Add text content (builder style).
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(XmlNode::Text(text.into()));
        self
    }

    /// Append a child element.
    pub fn push(&mut self, child: XmlElement) {
        self.children.push(XmlNode::Element(child));
    }

    /// Element name, including any namespace prefix.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value of attribute `key`.
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Attributes in insertion order.
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// All children in order.
    pub fn children(&self) -> &[XmlNode] {
        &self.children
    }

    /// Direct child elements.
    pub fn elements(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter().filter_map(|child| match child {
            XmlNode::Element(element) => Some(element),
            XmlNode::Text(_) => None,
        })
    }

    /// Direct child elements named `name`.
    pub fn elements_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlElement> {
        self.elements().filter(move |e| e.name == name)
    }

    /// Concatenated direct text content.
    pub fn text(&self) -> String {
        self.children
            .iter()
            .filter_map(|child| match child {
                XmlNode::Text(text) => Some(text.as_str()),
                XmlNode::Element(_) => None,
            })
            .collect()
    }

    /// All descendant elements named `name`, depth-first.
    pub fn descendants_named(&self, name: &str) -> Vec<&XmlElement> {
        let mut found = Vec::new();
        let mut stack: Vec<&XmlElement> = self.elements().collect();
        stack.reverse();
        while let Some(element) = stack.pop() {
            if element.name == name {
                found.push(element);
            }
            let mut children: Vec<&XmlElement> = element.elements().collect();
            children.reverse();
            stack.extend(children);
        }
        found
    }
}

/// A complete XML document: declaration plus one root element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlDocument {
    /// Root element
    pub root: XmlElement,
}

impl XmlDocument {
    /// Wrap a root element.
    pub fn new(root: XmlElement) -> Self {
        Self { root }
    }

    /// Write the document, indented by two spaces.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Serialization`] if the sink fails.
    pub fn write_to<W: Write>(&self, sink: W) -> Result<()> {
        let mut writer = Writer::new_with_indent(sink, b' ', 2);
        emit(
            &mut writer,
            Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)),
        )?;
        write_element(&mut writer, &self.root)?;
        writer
            .into_inner()
            .write_all(b"\n")
            .map_err(|e| GraphError::serialization("Failed to write document", Some(e)))
    }

    /// Render the document to a string.
    pub fn to_xml_string(&self) -> Result<String> {
        let mut buffer = Vec::new();
        self.write_to(&mut buffer)?;
        String::from_utf8(buffer)
            .map_err(|e| GraphError::serialization("Document is not valid UTF-8", Some(e)))
    }
}

fn write_element<W: Write>(writer: &mut Writer<W>, element: &XmlElement) -> Result<()> {
    let mut start = BytesStart::new(element.name.as_str());
    for (key, value) in &element.attributes {
        start.push_attribute((key.as_str(), value.as_str()));
    }

    if element.children.is_empty() {
        return emit(writer, Event::Empty(start));
    }

    emit(writer, Event::Start(start))?;
    for child in &element.children {
        match child {
            XmlNode::Element(nested) => write_element(writer, nested)?,
            XmlNode::Text(text) => emit(writer, Event::Text(BytesText::new(text)))?,
        }
    }
    emit(writer, Event::End(BytesEnd::new(element.name.as_str())))
}

fn emit<W: Write>(writer: &mut Writer<W>, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|e| GraphError::serialization("Failed to write XML event", Some(e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_and_accessors() {
        let element = XmlElement::new("node")
            .with_attr("id", "n1")
            .with_child(XmlElement::new("data").with_attr("key", "d0").with_text("App"));

        assert_eq!(element.name(), "node");
        assert_eq!(element.attr("id"), Some("n1"));
        assert_eq!(element.attr("missing"), None);
        let data: Vec<_> = element.elements_named("data").collect();
        assert_eq!(data.len(), 1);
        assert_eq!(data[0].text(), "App");
    }

    #[test]
    fn test_attributes_and_children_keep_insertion_order() {
        let mut element = XmlElement::new("y:ShapeNode")
            .with_attr("b", "2")
            .with_attr("a", "1")
            .with_text("lead");
        element.push(XmlElement::new("y:NodeLabel"));

        assert_eq!(
            element.attributes(),
            [("b".to_string(), "2".to_string()), ("a".to_string(), "1".to_string())]
        );
        assert_eq!(element.children().len(), 2);
        assert_eq!(element.children()[0], XmlNode::Text("lead".to_string()));
        assert!(matches!(&element.children()[1], XmlNode::Element(e) if e.name() == "y:NodeLabel"));
        assert_eq!(element.elements().count(), 1);
    }

    #[test]
    fn test_descendants_in_document_order() {
        let root = XmlElement::new("graph")
            .with_child(
                XmlElement::new("node")
                    .with_attr("id", "n1")
                    .with_child(XmlElement::new("node").with_attr("id", "n2")),
            )
            .with_child(XmlElement::new("node").with_attr("id", "n3"));

        let ids: Vec<_> = root
            .descendants_named("node")
            .iter()
            .filter_map(|n| n.attr("id"))
            .collect();
        assert_eq!(ids, vec!["n1", "n2", "n3"]);
    }

    #[test]
    fn test_write_escapes_text_and_attributes() {
        let doc = XmlDocument::new(
            XmlElement::new("root")
                .with_attr("label", "a\"b")
                .with_child(XmlElement::new("data").with_text("List<T> & more")),
        );
        let xml = doc.to_xml_string().unwrap();

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("label=\"a&quot;b\""));
        assert!(xml.contains("<data>List&lt;T&gt; &amp; more</data>"));
        assert!(xml.ends_with("</root>\n"));
    }

    #[test]
    fn test_empty_element_is_self_closing() {
        let doc = XmlDocument::new(XmlElement::new("root").with_child(XmlElement::new("edge")));
        let xml = doc.to_xml_string().unwrap();
        assert!(xml.contains("<edge/>"));
    }
}
