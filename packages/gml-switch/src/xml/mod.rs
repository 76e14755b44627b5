//! XML input: DOM helpers and the typed document tree.

mod document;
mod utils;

pub use document::{parse_document, Descendants, GmlNode};
pub use utils::{element_children, get_tag_name, get_text, gml_id, parent_context};
