//! Schema catalogs: type registry plus element bindings.
//!
//! The catalog is the metadata a document model plugs into the core. A
//! built-in GML 3.1.1 catalog is provided by [`create_gml_catalog`];
//! application schemas extend it from YAML with [`extend_from_yaml`] or
//! [`load_catalog_file`].

mod core;
pub mod gml;
mod loader;

pub use core::Catalog;
pub use gml::create_gml_catalog;
pub use loader::{extend_from_yaml, load_catalog_file};
