//! Traversal of typed document trees.

use crate::dispatch::{Dispatcher, HandlerTable};
use crate::error::Result;
use crate::registry::TypeRegistry;
use crate::xml::GmlNode;

/// Walks a document tree in document order and dispatches every node.
///
/// A node whose discriminant is missing from the registry aborts the whole
/// walk with `UnknownType`; it is never silently routed to the default
/// handler.
#[derive(Debug, Clone, Copy)]
pub struct Walker<'r> {
    dispatcher: Dispatcher<'r>,
}

impl<'r> Walker<'r> {
    /// Create a walker over the given registry.
    #[must_use]
    pub fn new(registry: &'r TypeRegistry) -> Self {
        Self {
            dispatcher: Dispatcher::new(registry),
        }
    }

    /// Get the dispatcher used for each node.
    #[must_use]
    pub fn dispatcher(&self) -> Dispatcher<'r> {
        self.dispatcher
    }

    /// Dispatch every node and hand each result to `visit`.
    ///
    /// # Returns
    /// Number of nodes visited.
    ///
    /// # Errors
    /// Returns the first dispatch error, or the first error returned by `visit`.
    pub fn visit<T>(
        &self,
        root: &GmlNode,
        table: &HandlerTable<'_, GmlNode, T>,
        mut visit: impl FnMut(&GmlNode, Option<T>) -> Result<()>,
    ) -> Result<usize> {
        let mut visited = 0;
        for node in root.descendants() {
            let result = self.dispatcher.dispatch(node, table)?;
            visit(node, result)?;
            visited += 1;
        }
        Ok(visited)
    }

    /// Dispatch every node and keep the claimed results in document order.
    ///
    /// # Errors
    /// Returns the first dispatch error.
    pub fn collect<T>(
        &self,
        root: &GmlNode,
        table: &HandlerTable<'_, GmlNode, T>,
    ) -> Result<Vec<T>> {
        let mut results = Vec::new();
        self.visit(root, table, |_, result| {
            results.extend(result);
            Ok(())
        })?;
        Ok(results)
    }
}
