//! Error types for the schema registry and dispatcher.
//!
//! Registration errors (`DuplicateType`, `UnknownParent`, ...) surface while
//! a catalog is being built and should abort initialization. `UnknownType`
//! surfaces during dispatch and means a node reports a discriminant the
//! registry never learned about.

use thiserror::Error;

use crate::registry::Discriminant;

/// Main error type for the library.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// A type with this discriminant is already registered.
    #[error("Type {discriminant} is already registered (as '{name}')")]
    DuplicateType {
        discriminant: Discriminant,
        name: String,
    },

    /// A type with this name is already registered under another discriminant.
    #[error("Type name '{name}' is already registered as {existing}")]
    DuplicateName {
        name: String,
        existing: Discriminant,
    },

    /// The declared parent discriminant has not been registered yet.
    #[error("Cannot register type {discriminant}: parent {parent} is not registered")]
    UnknownParent {
        discriminant: Discriminant,
        parent: Discriminant,
    },

    /// The declared parent name has not been registered yet.
    #[error("Cannot register type '{type_name}': parent '{parent}' is not registered")]
    UnknownParentName { type_name: String, parent: String },

    /// A discriminant that was never registered.
    #[error("Unknown type {0}: not present in the type registry")]
    UnknownType(Discriminant),

    /// A type name that was never registered.
    #[error("Unknown type name '{0}'")]
    UnknownTypeName(String),

    /// Type or element name is not a valid XML name.
    #[error("Invalid name: '{0}'. Expected an XML name (e.g., PointType)")]
    InvalidName(String),

    /// Element name is already bound to a type.
    #[error("Element <{element}> is already bound to type {existing}")]
    DuplicateElement {
        element: String,
        existing: Discriminant,
    },

    /// Element bound to a type that cannot be instantiated.
    #[error("Element <{element}> cannot be bound to abstract type '{name}'")]
    AbstractType { element: String, name: String },

    /// Element name is both bound to a type and marked as skipped.
    #[error("Element <{element}> cannot be both bound and skipped")]
    ElementConflict { element: String },

    /// Unknown XML element encountered.
    #[error("No type bound to element <{tag_name}>{}", .context.as_ref().map(|c| format!(" in {c}")).unwrap_or_default())]
    UnknownElement {
        tag_name: String,
        context: Option<String>,
    },

    /// The document root is skipped by the catalog, leaving nothing to model.
    #[error("Document root <{root}> is skipped by the catalog")]
    EmptyDocument { root: String },

    /// XML parsing failed.
    #[error("XML parsing failed: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog YAML could not be deserialized.
    #[error("Catalog YAML is invalid: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

/// Result type alias for registry and dispatch operations.
pub type Result<T> = std::result::Result<T, SchemaError>;
