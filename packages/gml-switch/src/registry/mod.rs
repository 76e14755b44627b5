//! Type registry for schema types.
//!
//! This module holds the inheritance graph of a schema: every concrete type
//! has a discriminant, a name, and at most one direct parent. The registry
//! answers ancestor-chain queries used by the dispatcher.

mod core;
mod types;

pub use core::{Ancestors, TypeRegistry};
pub use types::{Discriminant, TypeDescriptor};
