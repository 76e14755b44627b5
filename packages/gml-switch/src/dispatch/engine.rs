//! Dispatcher that resolves handlers along the ancestor chain.

use super::handler::{HandlerTable, TypedNode};
use crate::error::Result;
use crate::registry::{Discriminant, TypeDescriptor, TypeRegistry};

/// Single-dispatch visitor over a static inheritance graph.
///
/// For a node of type `C` with ancestors `B` and `A`, the dispatcher tries
/// the handlers for `C`, `B`, `A` in that order and returns the first `Some`.
/// When every level is absent or returns `None`, the table's default handler
/// decides.
///
/// Dispatch is stateless and does not mutate anything, so one dispatcher can
/// serve any number of threads sharing the same registry.
#[derive(Debug, Clone, Copy)]
pub struct Dispatcher<'r> {
    registry: &'r TypeRegistry,
}

impl<'r> Dispatcher<'r> {
    /// Create a dispatcher over the given registry.
    ///
    /// # Arguments
    /// * `registry` - Type registry that supplies ancestor chains
    #[must_use]
    pub fn new(registry: &'r TypeRegistry) -> Self {
        Self { registry }
    }

    /// Get a reference to the underlying registry.
    #[must_use]
    pub fn registry(&self) -> &'r TypeRegistry {
        self.registry
    }

    /// Dispatch a node to the nearest handler that claims it.
    ///
    /// # Arguments
    /// * `node` - Node to dispatch; its discriminant selects the ancestor chain
    /// * `table` - Handlers to try, nearest type first
    ///
    /// # Returns
    /// The first `Some` produced along the ancestor chain, otherwise the
    /// result of the default handler (which may be `None`).
    ///
    /// # Errors
    /// Returns `UnknownType` if the node reports a discriminant absent from
    /// the registry. No handler is invoked in that case.
    pub fn dispatch<N, T>(&self, node: &N, table: &HandlerTable<'_, N, T>) -> Result<Option<T>>
    where
        N: TypedNode + ?Sized,
    {
        let discriminant = node.discriminant();

        for level in self.registry.ancestors(discriminant)? {
            let Some(handler) = table.handler(level.discriminant) else {
                continue;
            };

            if let Some(result) = handler(node) {
                tracing::trace!(node = %discriminant, level = %level.name, "Handler claimed node");
                return Ok(Some(result));
            }

            tracing::trace!(
                node = %discriminant,
                level = %level.name,
                "Handler deferred to parent"
            );
        }

        tracing::trace!(node = %discriminant, "No handler claimed node, using default");
        Ok(table.call_default(node))
    }

    /// Find the nearest level in the ancestor chain that has a handler
    /// registered, without invoking any handler.
    ///
    /// A handler found here may still defer at dispatch time.
    ///
    /// # Arguments
    /// * `discriminant` - Type whose ancestor chain is searched
    /// * `table` - Handlers to look for
    ///
    /// # Returns
    /// Descriptor of the nearest level with a handler, or `None` if only the
    /// default handler applies
    ///
    /// # Errors
    /// Returns `UnknownType` if `discriminant` is not registered.
    pub fn claimant<N: ?Sized, T>(
        &self,
        discriminant: Discriminant,
        table: &HandlerTable<'_, N, T>,
    ) -> Result<Option<&'r TypeDescriptor>> {
        Ok(self
            .registry
            .ancestors(discriminant)?
            .find(|level| table.has_handler(level.discriminant)))
    }
}

/// Dispatch a node against a registry without keeping a [`Dispatcher`].
///
/// # Arguments
/// * `registry` - Type registry that supplies ancestor chains
/// * `node` - Node to dispatch
/// * `table` - Handlers to try, nearest type first
///
/// # Errors
/// Returns `UnknownType` if the node reports an unregistered discriminant.
pub fn dispatch<N, T>(
    registry: &TypeRegistry,
    node: &N,
    table: &HandlerTable<'_, N, T>,
) -> Result<Option<T>>
where
    N: TypedNode + ?Sized,
{
    Dispatcher::new(registry).dispatch(node, table)
}
