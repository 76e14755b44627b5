//! Inheritance-aware handler dispatch.
//!
//! Consumers build a [`HandlerTable`] with handlers for the types they care
//! about and let the [`Dispatcher`] pick the most specific one for each node.
//! A handler returning `None` opts out and lets the parent type's handler try.

mod engine;
mod handler;

pub use engine::{dispatch, Dispatcher};
pub use handler::{HandlerFn, HandlerTable, TypedNode};
