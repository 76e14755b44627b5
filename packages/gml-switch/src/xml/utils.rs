//! XML utility functions for reading GML elements from DOM trees.

use roxmltree::Node;

use crate::config::GML_NAMESPACE;

/// Get the tag name without namespace prefix.
///
/// # Arguments
/// * `node` - The XML element
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use gml_switch::xml::get_tag_name;
///
/// let xml = r#"<gml:Point xmlns:gml="http://www.opengis.net/gml"/>"#;
/// let doc = Document::parse(xml).unwrap();
/// assert_eq!(get_tag_name(doc.root_element()), "Point");
/// ```
pub fn get_tag_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Get the direct text content of a node, trimmed.
///
/// # Arguments
/// * `node` - The XML element
///
/// # Returns
/// Trimmed text, or `None` if the node has no non-whitespace direct text
pub fn get_text(node: Node<'_, '_>) -> Option<String> {
    node.text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Get the `gml:id` attribute of a node.
///
/// Only the attribute in the GML namespace counts; a bare `id` is ignored.
///
/// # Arguments
/// * `node` - The XML element
///
/// # Returns
/// The attribute value, or `None` if the element has no `gml:id`
pub fn gml_id<'a>(node: Node<'a, '_>) -> Option<&'a str> {
    node.attribute((GML_NAMESPACE, "id"))
}

/// Get all element children of a node.
///
/// Excludes text nodes, comments and processing instructions.
///
/// # Arguments
/// * `node` - The parent XML element
pub fn element_children<'a, 'input>(
    node: Node<'a, 'input>,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(|child| child.is_element())
}

/// Describe the parent element of a node for error messages (e.g., `<featureMember>`).
///
/// # Arguments
/// * `node` - The XML element whose parent is described
///
/// # Returns
/// The parent tag in angle brackets, or `None` for the root element
pub fn parent_context(node: Node<'_, '_>) -> Option<String> {
    node.parent_element()
        .map(|p| format!("<{}>", get_tag_name(p)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use roxmltree::Document;

    #[test]
    fn test_get_tag_name_with_namespace() {
        let xml = r#"<ns:root xmlns:ns="http://example.com"><ns:child/></ns:root>"#;
        let doc = Document::parse(xml).unwrap();
        assert_eq!(get_tag_name(doc.root_element()), "root");
    }

    #[test]
    fn test_get_text() {
        let xml = r#"<pos>  1.0 2.0  </pos>"#;
        let doc = Document::parse(xml).unwrap();
        assert_eq!(get_text(doc.root_element()), Some("1.0 2.0".to_string()));
    }

    #[test]
    fn test_get_text_whitespace_only() {
        let xml = "<Point>\n   <pos/>\n</Point>";
        let doc = Document::parse(xml).unwrap();
        assert_eq!(get_text(doc.root_element()), None);
    }

    #[test]
    fn test_gml_id() {
        let xml = r#"<gml:Point xmlns:gml="http://www.opengis.net/gml" gml:id="p1"/>"#;
        let doc = Document::parse(xml).unwrap();
        assert_eq!(gml_id(doc.root_element()), Some("p1"));
    }

    #[test]
    fn test_gml_id_requires_namespace() {
        let xml = r#"<Point id="p1"/>"#;
        let doc = Document::parse(xml).unwrap();
        assert_eq!(gml_id(doc.root_element()), None);
    }

    #[test]
    fn test_element_children() {
        let xml = r#"<root>text<child1/><!-- note --><child2/></root>"#;
        let doc = Document::parse(xml).unwrap();

        let children: Vec<_> = element_children(doc.root_element()).collect();
        assert_eq!(children.len(), 2);
    }

    #[test]
    fn test_parent_context() {
        let xml = r#"<featureMember><Road/></featureMember>"#;
        let doc = Document::parse(xml).unwrap();
        let road = doc.root_element().first_element_child().unwrap();

        assert_eq!(parent_context(road), Some("<featureMember>".to_string()));
        assert_eq!(parent_context(doc.root_element()), None);
    }
}
