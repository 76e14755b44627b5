//! Typed document tree built from GML XML.
//!
//! Each element becomes a [`GmlNode`] carrying the discriminant of the type
//! its name is bound to in the catalog. Elements are matched by local name,
//! so application-schema elements in other namespaces resolve through the
//! same bindings.

use roxmltree::{Document, Node};

use super::utils::{element_children, get_tag_name, get_text, gml_id, parent_context};
use crate::catalog::Catalog;
use crate::dispatch::TypedNode;
use crate::error::{Result, SchemaError};
use crate::registry::Discriminant;

/// One element of a typed GML document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GmlNode {
    /// Type of the element, as bound in the catalog.
    pub discriminant: Discriminant,

    /// Local element name.
    pub tag: String,

    /// Value of `gml:id`, if present.
    pub gml_id: Option<String>,

    /// Value of `srsName`, if present.
    pub srs_name: Option<String>,

    /// Trimmed direct text content.
    pub text: Option<String>,

    /// Child elements that are not skipped.
    pub children: Vec<GmlNode>,
}

impl GmlNode {
    /// Create a leaf node without attributes or text.
    #[must_use]
    pub fn new(discriminant: Discriminant, tag: impl Into<String>) -> Self {
        Self {
            discriminant,
            tag: tag.into(),
            gml_id: None,
            srs_name: None,
            text: None,
            children: Vec::new(),
        }
    }

    /// Add a child node.
    #[must_use]
    pub fn with_child(mut self, child: GmlNode) -> Self {
        self.children.push(child);
        self
    }

    /// Iterate over this node and all its descendants in document order.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }
}

impl TypedNode for GmlNode {
    fn discriminant(&self) -> Discriminant {
        self.discriminant
    }
}

/// Pre-order iterator over a node tree.
///
/// Created by [`GmlNode::descendants`].
#[derive(Debug)]
pub struct Descendants<'a> {
    stack: Vec<&'a GmlNode>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a GmlNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// Parse a GML document into a typed node tree.
///
/// # Arguments
/// * `xml` - The GML document text
/// * `catalog` - Catalog that binds element names to types
///
/// # Errors
/// - `XmlParse` if the input is not well-formed XML
/// - `UnknownElement` if an element is neither bound nor skipped
/// - `EmptyDocument` if the root element itself is skipped
pub fn parse_document(xml: &str, catalog: &Catalog) -> Result<GmlNode> {
    let doc = Document::parse(xml)?;
    let root = doc.root_element();

    build_node(root, catalog)?.ok_or_else(|| SchemaError::EmptyDocument {
        root: get_tag_name(root).to_string(),
    })
}

/// Build a node and its subtree, or `None` for a skipped element.
fn build_node(node: Node<'_, '_>, catalog: &Catalog) -> Result<Option<GmlNode>> {
    let tag_name = get_tag_name(node);

    if catalog.should_skip(tag_name) {
        tracing::trace!(tag = %tag_name, "Skipping element");
        return Ok(None);
    }

    let discriminant =
        catalog
            .element_type(tag_name)
            .ok_or_else(|| SchemaError::UnknownElement {
                tag_name: tag_name.to_string(),
                context: parent_context(node),
            })?;

    let mut children = Vec::new();
    for child in element_children(node) {
        if let Some(built) = build_node(child, catalog)? {
            children.push(built);
        }
    }

    Ok(Some(GmlNode {
        discriminant,
        tag: tag_name.to_string(),
        gml_id: gml_id(node).map(str::to_string),
        srs_name: node.attribute("srsName").map(str::to_string),
        text: get_text(node),
        children,
    }))
}
