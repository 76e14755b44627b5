//! GML switch - schema-typed document model with polymorphic dispatch.
//!
//! A schema is described by a [`registry::TypeRegistry`]: every concrete type
//! has a discriminant and at most one parent. A [`dispatch::Dispatcher`]
//! takes a node and a [`dispatch::HandlerTable`] and calls the handler of
//! the most specific type that claims the node, walking up the ancestor
//! chain and finally falling back to the table's default handler.
//!
//! # Example
//!
//! ```
//! use gml_switch::catalog::{create_gml_catalog, gml};
//! use gml_switch::dispatch::{Dispatcher, HandlerTable};
//! use gml_switch::registry::Discriminant;
//!
//! let catalog = create_gml_catalog().unwrap();
//! let table = HandlerTable::new()
//!     .on(gml::ABSTRACT_CURVE_TYPE, |_: &Discriminant| Some("curve"))
//!     .on(gml::ABSTRACT_GEOMETRY_TYPE, |_: &Discriminant| Some("geometry"))
//!     .with_default(|_: &Discriminant| Some("something else"));
//!
//! let dispatcher = Dispatcher::new(catalog.registry());
//! assert_eq!(dispatcher.dispatch(&gml::LINE_STRING_TYPE, &table).unwrap(), Some("curve"));
//! assert_eq!(dispatcher.dispatch(&gml::POINT_TYPE, &table).unwrap(), Some("geometry"));
//! assert_eq!(dispatcher.dispatch(&gml::CODE_TYPE, &table).unwrap(), Some("something else"));
//! ```
//!
//! # Architecture
//!
//! - [`registry`]: Type registry (discriminants, parents, ancestor chains)
//! - [`dispatch`]: Handler tables and the dispatcher
//! - [`catalog`]: Element catalogs, the built-in GML 3.1.1 catalog, YAML extensions
//! - [`xml`]: Typed document tree built from GML XML
//! - [`walk`]: Document traversal with dispatch per node
//! - [`census`]: Category census built on a handler table
//! - [`config`]: Constants and name validation
//! - [`error`]: Error types and Result alias
//! - [`cli`]: Command-line interface

pub mod catalog;
pub mod census;
pub mod cli;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod registry;
pub mod walk;
pub mod xml;

// Re-export commonly used items
pub use catalog::{create_gml_catalog, Catalog};
pub use dispatch::{dispatch, Dispatcher, HandlerTable, TypedNode};
pub use error::{Result, SchemaError};
pub use registry::{Discriminant, TypeDescriptor, TypeRegistry};
pub use xml::{parse_document, GmlNode};
