//! Element catalog mapping XML element names to schema types.

use std::collections::{HashMap, HashSet};

use crate::config::validate_name;
use crate::error::{Result, SchemaError};
use crate::registry::{Discriminant, TypeRegistry};

/// Type registry plus the element bindings of one schema.
///
/// Several elements may share a type (`pos`, `lowerCorner` and
/// `upperCorner` are all direct positions), but each element is bound to
/// exactly one type. Tags marked as skipped are ignored when building a
/// document tree, including their subtrees.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    types: TypeRegistry,
    elements: HashMap<String, Discriminant>,
    skip_tags: HashSet<String>,
}

impl Catalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the underlying type registry.
    #[must_use]
    pub fn registry(&self) -> &TypeRegistry {
        &self.types
    }

    /// Take ownership of the type registry.
    #[must_use]
    pub fn into_registry(self) -> TypeRegistry {
        self.types
    }

    /// Register a concrete type. See [`TypeRegistry::register`].
    ///
    /// # Errors
    /// Propagates registration errors from the type registry.
    pub fn register_type(
        &mut self,
        discriminant: Discriminant,
        name: impl Into<String>,
        parent: Option<Discriminant>,
    ) -> Result<()> {
        self.types.register(discriminant, name, parent)
    }

    /// Register an abstract type. See [`TypeRegistry::register_abstract`].
    ///
    /// # Errors
    /// Propagates registration errors from the type registry.
    pub fn register_abstract_type(
        &mut self,
        discriminant: Discriminant,
        name: impl Into<String>,
        parent: Option<Discriminant>,
    ) -> Result<()> {
        self.types.register_abstract(discriminant, name, parent)
    }

    /// Bind an element name to a registered concrete type.
    ///
    /// # Errors
    /// - `InvalidName` if `element` is not an XML name
    /// - `UnknownType` if `discriminant` is not registered
    /// - `AbstractType` if the type is abstract
    /// - `DuplicateElement` if `element` is already bound
    /// - `ElementConflict` if `element` is marked as skipped
    pub fn bind(&mut self, element: impl Into<String>, discriminant: Discriminant) -> Result<()> {
        let element = element.into();
        validate_name(&element)?;

        let descriptor = self.types.descriptor(discriminant)?;
        if descriptor.is_abstract {
            return Err(SchemaError::AbstractType {
                element,
                name: descriptor.name.clone(),
            });
        }

        if let Some(&existing) = self.elements.get(&element) {
            return Err(SchemaError::DuplicateElement { element, existing });
        }

        if self.skip_tags.contains(&element) {
            return Err(SchemaError::ElementConflict { element });
        }

        self.elements.insert(element, discriminant);
        Ok(())
    }

    /// Mark tags as skipped (dropped from the document tree with their subtree).
    ///
    /// All names are checked before any is added.
    ///
    /// # Errors
    /// - `InvalidName` if a name is not an XML name
    /// - `ElementConflict` if a name is already bound to a type
    pub fn skip(&mut self, tag_names: impl IntoIterator<Item = impl Into<String>>) -> Result<()> {
        let tag_names: Vec<String> = tag_names.into_iter().map(Into::into).collect();

        for tag in &tag_names {
            validate_name(tag)?;
            if self.elements.contains_key(tag) {
                return Err(SchemaError::ElementConflict {
                    element: tag.clone(),
                });
            }
        }

        self.skip_tags.extend(tag_names);
        Ok(())
    }

    /// Get the type bound to an element name.
    #[must_use]
    pub fn element_type(&self, tag_name: &str) -> Option<Discriminant> {
        self.elements.get(tag_name).copied()
    }

    /// Check if a tag should be skipped.
    #[must_use]
    pub fn should_skip(&self, tag_name: &str) -> bool {
        self.skip_tags.contains(tag_name)
    }

    /// Check if an element name is bound.
    #[must_use]
    pub fn is_bound(&self, tag_name: &str) -> bool {
        self.elements.contains_key(tag_name)
    }

    /// Element names bound to a type, sorted.
    #[must_use]
    pub fn elements_of(&self, discriminant: Discriminant) -> Vec<&str> {
        let mut elements: Vec<&str> = self
            .elements
            .iter()
            .filter(|&(_, &d)| d == discriminant)
            .map(|(name, _)| name.as_str())
            .collect();
        elements.sort_unstable();
        elements
    }

    /// Return set of all skipped tag names.
    #[must_use]
    pub fn skipped_tags(&self) -> HashSet<&str> {
        self.skip_tags.iter().map(|s| s.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEATURE: Discriminant = Discriminant::new(1);
    const ROAD: Discriminant = Discriminant::new(2);
    const RIVER: Discriminant = Discriminant::new(3);

    fn road_catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog
            .register_abstract_type(FEATURE, "AbstractFeatureType", None)
            .unwrap();
        catalog
            .register_type(ROAD, "RoadType", Some(FEATURE))
            .unwrap();
        catalog
            .register_type(RIVER, "RiverType", Some(FEATURE))
            .unwrap();
        catalog
    }

    #[test]
    fn test_catalog_bind_and_lookup() {
        let mut catalog = road_catalog();
        catalog.bind("Road", ROAD).unwrap();
        catalog.bind("Street", ROAD).unwrap();

        assert_eq!(catalog.element_type("Road"), Some(ROAD));
        assert!(catalog.is_bound("Street"));
        assert!(!catalog.is_bound("River"));
        assert_eq!(catalog.elements_of(ROAD), vec!["Road", "Street"]);
    }

    #[test]
    fn test_catalog_bind_unknown_type() {
        let mut catalog = road_catalog();

        let err = catalog.bind("Canal", Discriminant::new(9)).unwrap_err();
        assert!(matches!(err, SchemaError::UnknownType(_)));
        assert!(!catalog.is_bound("Canal"));
    }

    #[test]
    fn test_catalog_bind_abstract_type() {
        let mut catalog = road_catalog();

        let err = catalog.bind("Feature", FEATURE).unwrap_err();
        assert!(matches!(
            err,
            SchemaError::AbstractType { ref element, ref name }
                if element == "Feature" && name == "AbstractFeatureType"
        ));
        assert!(!catalog.is_bound("Feature"));
    }

    #[test]
    fn test_catalog_bind_duplicate_element() {
        let mut catalog = road_catalog();
        catalog.bind("Road", ROAD).unwrap();

        let err = catalog.bind("Road", RIVER).unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateElement { existing, .. } if existing == ROAD));
        assert_eq!(catalog.element_type("Road"), Some(ROAD));
    }

    #[test]
    fn test_catalog_skip() {
        let mut catalog = road_catalog();
        catalog.skip(["metaDataProperty", "rangeSet"]).unwrap();

        assert!(catalog.should_skip("metaDataProperty"));
        assert!(!catalog.should_skip("Road"));
        assert_eq!(catalog.skipped_tags().len(), 2);
    }

    #[test]
    fn test_catalog_skip_rejects_invalid_name() {
        let mut catalog = road_catalog();

        let err = catalog.skip(["surface", "gml:bad name"]).unwrap_err();
        assert!(matches!(err, SchemaError::InvalidName(ref name) if name == "gml:bad name"));
        assert!(!catalog.should_skip("surface"));
    }

    #[test]
    fn test_catalog_skip_and_bind_conflict() {
        let mut catalog = road_catalog();
        catalog.bind("Road", ROAD).unwrap();
        catalog.skip(["surface"]).unwrap();

        let err = catalog.skip(["Road"]).unwrap_err();
        assert!(matches!(err, SchemaError::ElementConflict { ref element } if element == "Road"));
        assert!(!catalog.should_skip("Road"));

        let err = catalog.bind("surface", RIVER).unwrap_err();
        assert!(matches!(err, SchemaError::ElementConflict { .. }));
        assert!(!catalog.is_bound("surface"));
    }

    #[test]
    fn test_catalog_register_type_delegates() {
        let mut catalog = road_catalog();

        let err = catalog
            .register_type(ROAD, "OtherRoad", Some(FEATURE))
            .unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateType { .. }));
        assert_eq!(catalog.registry().len(), 3);
        let feature = catalog.registry().descriptor(FEATURE).unwrap();
        assert!(feature.is_abstract);
    }
}
