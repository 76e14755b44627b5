//! Type registry holding the single-inheritance graph of schema types.

use std::collections::HashMap;

use super::types::{Discriminant, TypeDescriptor};
use crate::config::validate_name;
use crate::error::{Result, SchemaError};

/// Arena slot for one registered type.
#[derive(Debug, Clone)]
struct Entry {
    descriptor: TypeDescriptor,
    parent_slot: Option<usize>,
}

/// Registry of schema types and their direct parents.
///
/// Types live in an arena in registration order; parents are stored as arena
/// slots so ancestor walks never hash. A parent must be registered before
/// its children, which keeps the graph acyclic by construction.
///
/// The registry is meant to be built once during initialization and then
/// shared by reference. It is `Send + Sync` and never mutates an existing
/// entry.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    types: Vec<Entry>,
    index: HashMap<Discriminant, usize>,
    names: HashMap<String, usize>,
}

impl TypeRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a concrete type with an optional direct parent.
    ///
    /// Registration is atomic: when an error is returned the registry is
    /// unchanged.
    ///
    /// # Errors
    /// - `DuplicateType` if `discriminant` is already registered
    /// - `InvalidName` if `name` is not an XML name
    /// - `DuplicateName` if `name` is already registered
    /// - `UnknownParent` if `parent` is given but not registered
    pub fn register(
        &mut self,
        discriminant: Discriminant,
        name: impl Into<String>,
        parent: Option<Discriminant>,
    ) -> Result<()> {
        self.insert(discriminant, name.into(), parent, false)
    }

    /// Register an abstract type with an optional direct parent.
    ///
    /// Abstract types take part in ancestor chains and dispatch like any
    /// other type, but no element can be bound to them.
    ///
    /// # Errors
    /// Same as [`TypeRegistry::register`].
    pub fn register_abstract(
        &mut self,
        discriminant: Discriminant,
        name: impl Into<String>,
        parent: Option<Discriminant>,
    ) -> Result<()> {
        self.insert(discriminant, name.into(), parent, true)
    }

    fn insert(
        &mut self,
        discriminant: Discriminant,
        name: String,
        parent: Option<Discriminant>,
        is_abstract: bool,
    ) -> Result<()> {
        if let Some(existing) = self.get(discriminant) {
            return Err(SchemaError::DuplicateType {
                discriminant,
                name: existing.name.clone(),
            });
        }

        validate_name(&name)?;

        if let Some(existing) = self.lookup(&name) {
            return Err(SchemaError::DuplicateName {
                name,
                existing: existing.discriminant,
            });
        }

        let parent_slot = parent
            .map(|parent| self.parent_slot(discriminant, parent))
            .transpose()?;
        let depth = parent_slot.map_or(0, |slot| self.types[slot].descriptor.depth + 1);

        tracing::debug!(
            %discriminant,
            name = %name,
            parent = ?parent,
            depth,
            is_abstract,
            "Registered type"
        );

        let slot = self.types.len();
        self.types.push(Entry {
            descriptor: TypeDescriptor {
                discriminant,
                name: name.clone(),
                parent,
                depth,
                is_abstract,
            },
            parent_slot,
        });
        self.index.insert(discriminant, slot);
        self.names.insert(name, slot);

        Ok(())
    }

    /// Iterate over a type and its ancestors, nearest first.
    ///
    /// The walk is lazy and allocation-free; the last item is a root.
    ///
    /// # Errors
    /// Returns `UnknownType` if `discriminant` is not registered.
    pub fn ancestors(&self, discriminant: Discriminant) -> Result<Ancestors<'_>> {
        let slot = self.slot(discriminant)?;
        Ok(Ancestors {
            types: &self.types,
            next: Some(slot),
        })
    }

    /// Get the ancestor chain of a type: the type itself followed by each
    /// ancestor up to its root.
    ///
    /// # Errors
    /// Returns `UnknownType` if `discriminant` is not registered.
    pub fn ancestor_chain(&self, discriminant: Discriminant) -> Result<Vec<Discriminant>> {
        Ok(self
            .ancestors(discriminant)?
            .map(|t| t.discriminant)
            .collect())
    }

    /// Get the descriptor of a registered type.
    ///
    /// # Errors
    /// Returns `UnknownType` if `discriminant` is not registered.
    pub fn descriptor(&self, discriminant: Discriminant) -> Result<&TypeDescriptor> {
        self.get(discriminant)
            .ok_or(SchemaError::UnknownType(discriminant))
    }

    /// Get the direct parent of a registered type.
    ///
    /// # Errors
    /// Returns `UnknownType` if `discriminant` is not registered.
    pub fn parent_of(&self, discriminant: Discriminant) -> Result<Option<Discriminant>> {
        Ok(self.descriptor(discriminant)?.parent)
    }

    /// Find a type by name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&TypeDescriptor> {
        self.names
            .get(name)
            .map(|&slot| &self.types[slot].descriptor)
    }

    /// Check if a discriminant is registered.
    #[must_use]
    pub fn contains(&self, discriminant: Discriminant) -> bool {
        self.index.contains_key(&discriminant)
    }

    /// Check whether `ancestor` appears in the ancestor chain of `discriminant`.
    ///
    /// Every type is a subtype of itself.
    ///
    /// # Errors
    /// Returns `UnknownType` if either discriminant is not registered.
    pub fn is_subtype_of(
        &self,
        discriminant: Discriminant,
        ancestor: Discriminant,
    ) -> Result<bool> {
        self.slot(ancestor)?;
        Ok(self
            .ancestors(discriminant)?
            .any(|t| t.discriminant == ancestor))
    }

    /// Iterate over root types in registration order.
    pub fn roots(&self) -> impl Iterator<Item = &TypeDescriptor> {
        self.iter().filter(|t| t.is_root())
    }

    /// Iterate over the direct children of a type in registration order.
    ///
    /// # Errors
    /// Returns `UnknownType` if `discriminant` is not registered.
    pub fn children(
        &self,
        discriminant: Discriminant,
    ) -> Result<impl Iterator<Item = &TypeDescriptor>> {
        let slot = self.slot(discriminant)?;
        Ok(self
            .types
            .iter()
            .filter(move |e| e.parent_slot == Some(slot))
            .map(|e| &e.descriptor))
    }

    /// Iterate over all types in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &TypeDescriptor> {
        self.types.iter().map(|e| &e.descriptor)
    }

    /// Number of registered types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Check if no types are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    fn get(&self, discriminant: Discriminant) -> Option<&TypeDescriptor> {
        self.index
            .get(&discriminant)
            .map(|&slot| &self.types[slot].descriptor)
    }

    fn parent_slot(&self, discriminant: Discriminant, parent: Discriminant) -> Result<usize> {
        self.index
            .get(&parent)
            .copied()
            .ok_or(SchemaError::UnknownParent {
                discriminant,
                parent,
            })
    }

    fn slot(&self, discriminant: Discriminant) -> Result<usize> {
        self.index
            .get(&discriminant)
            .copied()
            .ok_or(SchemaError::UnknownType(discriminant))
    }
}

/// Iterator over a type and its ancestors, nearest first.
///
/// Created by [`TypeRegistry::ancestors`].
#[derive(Debug, Clone)]
pub struct Ancestors<'r> {
    types: &'r [Entry],
    next: Option<usize>,
}

impl<'r> Iterator for Ancestors<'r> {
    type Item = &'r TypeDescriptor;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.types.get(self.next?)?;
        self.next = entry.parent_slot;
        Some(&entry.descriptor)
    }
}

impl std::iter::FusedIterator for Ancestors<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const A: Discriminant = Discriminant::new(1);
    const B: Discriminant = Discriminant::new(2);
    const C: Discriminant = Discriminant::new(3);
    const D: Discriminant = Discriminant::new(4);

    fn abc_registry() -> TypeRegistry {
        let mut registry = TypeRegistry::new();
        registry.register(A, "A", None).unwrap();
        registry.register(B, "B", Some(A)).unwrap();
        registry.register(C, "C", Some(B)).unwrap();
        registry
    }

    #[test]
    fn test_registry_register_and_chain() {
        let registry = abc_registry();

        assert_eq!(registry.ancestor_chain(C).unwrap(), vec![C, B, A]);
        assert_eq!(registry.ancestor_chain(B).unwrap(), vec![B, A]);
        assert_eq!(registry.ancestor_chain(A).unwrap(), vec![A]);
    }

    #[test]
    fn test_registry_chain_is_deterministic() {
        let registry = abc_registry();

        let first = registry.ancestor_chain(C).unwrap();
        let second = registry.ancestor_chain(C).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_registry_depth() {
        let registry = abc_registry();

        assert_eq!(registry.descriptor(A).unwrap().depth, 0);
        assert_eq!(registry.descriptor(C).unwrap().depth, 2);
    }

    #[test]
    fn test_registry_duplicate_type_is_atomic() {
        let mut registry = abc_registry();
        let before: Vec<TypeDescriptor> = registry.iter().cloned().collect();

        let err = registry.register(B, "Other", None).unwrap_err();
        assert!(matches!(
            err,
            SchemaError::DuplicateType { discriminant, ref name } if discriminant == B && name == "B"
        ));

        let after: Vec<TypeDescriptor> = registry.iter().cloned().collect();
        assert_eq!(before, after);
        assert!(registry.lookup("Other").is_none());
    }

    #[test]
    fn test_registry_duplicate_name() {
        let mut registry = abc_registry();

        let err = registry.register(D, "B", Some(A)).unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateName { existing, .. } if existing == B));
        assert!(!registry.contains(D));
    }

    #[test]
    fn test_registry_unknown_parent() {
        let mut registry = TypeRegistry::new();

        let err = registry.register(B, "B", Some(A)).unwrap_err();
        assert!(matches!(
            err,
            SchemaError::UnknownParent { discriminant, parent } if discriminant == B && parent == A
        ));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_registry_self_parent_rejected() {
        let mut registry = TypeRegistry::new();

        let err = registry.register(A, "A", Some(A)).unwrap_err();
        assert!(matches!(err, SchemaError::UnknownParent { .. }));
    }

    #[test]
    fn test_registry_invalid_name() {
        let mut registry = TypeRegistry::new();

        let err = registry.register(A, "gml:A", None).unwrap_err();
        assert!(matches!(err, SchemaError::InvalidName(_)));
    }

    #[test]
    fn test_registry_duplicate_type_reported_before_name() {
        let mut registry = abc_registry();

        let err = registry.register(B, "not a name", None).unwrap_err();
        assert!(matches!(
            err,
            SchemaError::DuplicateType { discriminant, .. } if discriminant == B
        ));
    }

    #[test]
    fn test_registry_abstract_flag() {
        let mut registry = TypeRegistry::new();
        registry.register_abstract(A, "A", None).unwrap();
        registry.register(B, "B", Some(A)).unwrap();

        assert!(registry.descriptor(A).unwrap().is_abstract);
        assert!(!registry.descriptor(B).unwrap().is_abstract);
        assert_eq!(registry.ancestor_chain(B).unwrap(), vec![B, A]);

        let err = registry.register_abstract(A, "Other", None).unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateType { .. }));
    }

    #[test]
    fn test_registry_unknown_type() {
        let registry = abc_registry();

        assert!(matches!(
            registry.ancestor_chain(D),
            Err(SchemaError::UnknownType(d)) if d == D
        ));
        assert!(registry.descriptor(D).is_err());
        assert!(registry.parent_of(D).is_err());
    }

    #[test]
    fn test_registry_parent_of() {
        let registry = abc_registry();

        assert_eq!(registry.parent_of(C).unwrap(), Some(B));
        assert_eq!(registry.parent_of(A).unwrap(), None);
    }

    #[test]
    fn test_registry_is_subtype_of() {
        let registry = abc_registry();

        assert!(registry.is_subtype_of(C, A).unwrap());
        assert!(registry.is_subtype_of(C, C).unwrap());
        assert!(!registry.is_subtype_of(A, C).unwrap());
        assert!(registry.is_subtype_of(C, D).is_err());
    }

    #[test]
    fn test_registry_roots_and_children() {
        let mut registry = abc_registry();
        registry.register(D, "D", Some(A)).unwrap();

        let roots: Vec<&str> = registry.roots().map(|t| t.name.as_str()).collect();
        assert_eq!(roots, vec!["A"]);

        let children: Vec<&str> = registry
            .children(A)
            .unwrap()
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(children, vec!["B", "D"]);
        assert_eq!(registry.children(C).unwrap().count(), 0);
    }

    #[test]
    fn test_registry_lookup() {
        let registry = abc_registry();

        assert_eq!(registry.lookup("B").map(|t| t.discriminant), Some(B));
        assert!(registry.lookup("Z").is_none());
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_registry_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TypeRegistry>();
    }
}
