//! Handler table definition.

use std::collections::HashMap;
use std::fmt;

use crate::registry::Discriminant;

/// A value that can report the discriminant of its runtime type.
pub trait TypedNode {
    /// Return the discriminant of the most specific type of this node.
    fn discriminant(&self) -> Discriminant;
}

impl TypedNode for Discriminant {
    fn discriminant(&self) -> Discriminant {
        *self
    }
}

/// Handler function type.
///
/// A handler claims a node by returning `Some`, or defers to the handler of
/// the parent type by returning `None`.
pub type HandlerFn<'h, N, T> = dyn Fn(&N) -> Option<T> + Send + Sync + 'h;

/// Partial mapping from discriminant to handler, plus a default handler.
///
/// Tables are built per traversal use case and may borrow from their
/// surroundings for `'h`. Without an explicit default the fallback yields
/// `None`.
pub struct HandlerTable<'h, N: ?Sized, T> {
    handlers: HashMap<Discriminant, Box<HandlerFn<'h, N, T>>>,
    default: Option<Box<HandlerFn<'h, N, T>>>,
}

impl<'h, N: ?Sized, T> HandlerTable<'h, N, T> {
    /// Create an empty table whose default handler yields `None`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
            default: None,
        }
    }

    /// Set the default handler.
    #[must_use]
    pub fn with_default(mut self, handler: impl Fn(&N) -> Option<T> + Send + Sync + 'h) -> Self {
        self.default = Some(Box::new(handler));
        self
    }

    /// Add a handler for a discriminant.
    #[must_use]
    pub fn on(
        mut self,
        discriminant: Discriminant,
        handler: impl Fn(&N) -> Option<T> + Send + Sync + 'h,
    ) -> Self {
        self.register(discriminant, handler);
        self
    }

    /// Register a handler for a discriminant, replacing any previous one.
    pub fn register(
        &mut self,
        discriminant: Discriminant,
        handler: impl Fn(&N) -> Option<T> + Send + Sync + 'h,
    ) {
        self.handlers.insert(discriminant, Box::new(handler));
    }

    /// Get the handler registered for a discriminant.
    #[must_use]
    pub fn handler(&self, discriminant: Discriminant) -> Option<&HandlerFn<'h, N, T>> {
        self.handlers.get(&discriminant).map(|h| h.as_ref())
    }

    /// Check if a handler is registered for a discriminant.
    #[must_use]
    pub fn has_handler(&self, discriminant: Discriminant) -> bool {
        self.handlers.contains_key(&discriminant)
    }

    /// Check if an explicit default handler was set.
    #[must_use]
    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }

    /// Invoke the default handler.
    pub fn call_default(&self, node: &N) -> Option<T> {
        self.default.as_ref().and_then(|handler| handler(node))
    }

    /// Number of registered handlers, not counting the default.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Check if no handlers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl<N: ?Sized, T> Default for HandlerTable<'_, N, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: ?Sized, T> fmt::Debug for HandlerTable<'_, N, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut discriminants: Vec<_> = self.handlers.keys().copied().collect();
        discriminants.sort();
        f.debug_struct("HandlerTable")
            .field("handlers", &discriminants)
            .field("has_default", &self.default.is_some())
            .finish()
    }
}
