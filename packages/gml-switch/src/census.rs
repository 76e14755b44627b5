//! Census of a GML document by object category.
//!
//! The category table registers handlers only on abstract base types, so
//! every concrete type (including application-schema extensions) falls
//! through to the nearest category that claims it.

use std::collections::BTreeMap;
use std::fmt;

use crate::catalog::gml::{
    ABSTRACT_COVERAGE_TYPE, ABSTRACT_FEATURE_TYPE, ABSTRACT_GEOMETRY_TYPE,
    ABSTRACT_REFERENCE_SYSTEM_BASE_TYPE, ABSTRACT_RING_PROPERTY_TYPE, ABSTRACT_TIME_OBJECT_TYPE,
    BOUNDING_SHAPE_TYPE, CODE_TYPE, COORDINATES_TYPE, CURVE_PROPERTY_TYPE, DEFINITION_TYPE,
    DIRECT_POSITION_LIST_TYPE, DIRECT_POSITION_TYPE, ENVELOPE_TYPE, FEATURE_ARRAY_PROPERTY_TYPE,
    FEATURE_PROPERTY_TYPE, GEOMETRY_PROPERTY_TYPE, LOCATION_PROPERTY_TYPE, MEASURE_TYPE,
    POINT_PROPERTY_TYPE, STRING_OR_REF_TYPE, SURFACE_PROPERTY_TYPE, TIME_POSITION_TYPE,
};
use crate::dispatch::HandlerTable;
use crate::error::Result;
use crate::registry::Discriminant;
use crate::walk::Walker;
use crate::xml::GmlNode;

const PROPERTY_TYPES: &[Discriminant] = &[
    BOUNDING_SHAPE_TYPE,
    GEOMETRY_PROPERTY_TYPE,
    POINT_PROPERTY_TYPE,
    CURVE_PROPERTY_TYPE,
    SURFACE_PROPERTY_TYPE,
    ABSTRACT_RING_PROPERTY_TYPE,
    FEATURE_PROPERTY_TYPE,
    FEATURE_ARRAY_PROPERTY_TYPE,
    LOCATION_PROPERTY_TYPE,
];

const VALUE_TYPES: &[Discriminant] = &[
    DIRECT_POSITION_TYPE,
    DIRECT_POSITION_LIST_TYPE,
    COORDINATES_TYPE,
    ENVELOPE_TYPE,
    CODE_TYPE,
    STRING_OR_REF_TYPE,
    MEASURE_TYPE,
    TIME_POSITION_TYPE,
];

/// Broad classification of GML objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Geometry,
    Feature,
    Coverage,
    ReferenceSystem,
    Definition,
    Temporal,
    Property,
    Value,
    /// Anything no category handler claims.
    Other,
}

impl Category {
    /// Get the display label.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Geometry => "geometry",
            Category::Feature => "feature",
            Category::Coverage => "coverage",
            Category::ReferenceSystem => "reference system",
            Category::Definition => "definition",
            Category::Temporal => "temporal",
            Category::Property => "property",
            Category::Value => "value",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build the handler table that classifies nodes by category.
///
/// Coverages are features and reference systems are definitions; the more
/// specific handler wins because it sits nearer in the ancestor chain.
#[must_use]
pub fn category_table<'h>() -> HandlerTable<'h, GmlNode, Category> {
    let mut table = HandlerTable::new()
        .on(ABSTRACT_GEOMETRY_TYPE, |_| Some(Category::Geometry))
        .on(ABSTRACT_FEATURE_TYPE, |_| Some(Category::Feature))
        .on(ABSTRACT_COVERAGE_TYPE, |_| Some(Category::Coverage))
        .on(DEFINITION_TYPE, |_| Some(Category::Definition))
        .on(ABSTRACT_REFERENCE_SYSTEM_BASE_TYPE, |_| {
            Some(Category::ReferenceSystem)
        })
        .on(ABSTRACT_TIME_OBJECT_TYPE, |_| Some(Category::Temporal))
        .with_default(|_| Some(Category::Other));

    for &discriminant in PROPERTY_TYPES {
        table.register(discriminant, |_| Some(Category::Property));
    }
    for &discriminant in VALUE_TYPES {
        table.register(discriminant, |_| Some(Category::Value));
    }

    table
}

/// Node counts of one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Census {
    /// Total number of nodes.
    pub total: usize,

    /// Nodes per category.
    pub by_category: BTreeMap<Category, usize>,

    /// Nodes per type name.
    pub by_type: BTreeMap<String, usize>,
}

impl Census {
    /// Count the nodes of a document tree.
    ///
    /// # Errors
    /// Returns `UnknownType` if a node's discriminant is not registered.
    pub fn take(walker: &Walker<'_>, root: &GmlNode) -> Result<Self> {
        let table = category_table();
        let registry = walker.dispatcher().registry();
        let mut census = Census::default();

        let total = walker.visit(root, &table, |node, category| {
            let category = category.unwrap_or(Category::Other);
            *census.by_category.entry(category).or_default() += 1;

            let name = &registry.descriptor(node.discriminant)?.name;
            *census.by_type.entry(name.clone()).or_default() += 1;
            Ok(())
        })?;

        census.total = total;
        Ok(census)
    }

    /// Number of nodes in a category.
    #[must_use]
    pub fn count(&self, category: Category) -> usize {
        self.by_category.get(&category).copied().unwrap_or(0)
    }
}
