//! Built-in catalog for a representative subset of GML 3.1.1.
//!
//! Covers the object hierarchy rooted at `AbstractGMLType` (geometries,
//! features, coverages, definitions, reference systems and temporal
//! objects) plus the value and property types that hang off it. Property
//! and value types are separate roots, as in the schema. Abstract types
//! are registered as such and never bound to an element.

use super::core::Catalog;
use crate::error::Result;
use crate::registry::Discriminant;

pub const ABSTRACT_GML_TYPE: Discriminant = Discriminant::new(0);

// Geometry
pub const ABSTRACT_GEOMETRY_TYPE: Discriminant = Discriminant::new(1);
pub const ABSTRACT_GEOMETRIC_PRIMITIVE_TYPE: Discriminant = Discriminant::new(2);
pub const POINT_TYPE: Discriminant = Discriminant::new(3);
pub const ABSTRACT_CURVE_TYPE: Discriminant = Discriminant::new(4);
pub const LINE_STRING_TYPE: Discriminant = Discriminant::new(5);
pub const CURVE_TYPE: Discriminant = Discriminant::new(6);
pub const ORIENTABLE_CURVE_TYPE: Discriminant = Discriminant::new(7);
pub const ABSTRACT_SURFACE_TYPE: Discriminant = Discriminant::new(8);
pub const POLYGON_TYPE: Discriminant = Discriminant::new(9);
pub const SURFACE_TYPE: Discriminant = Discriminant::new(10);
pub const POLYHEDRAL_SURFACE_TYPE: Discriminant = Discriminant::new(11);
pub const TRIANGULATED_SURFACE_TYPE: Discriminant = Discriminant::new(12);
pub const ABSTRACT_SOLID_TYPE: Discriminant = Discriminant::new(13);
pub const SOLID_TYPE: Discriminant = Discriminant::new(14);
pub const ABSTRACT_RING_TYPE: Discriminant = Discriminant::new(15);
pub const LINEAR_RING_TYPE: Discriminant = Discriminant::new(16);
pub const RING_TYPE: Discriminant = Discriminant::new(17);
pub const ABSTRACT_GEOMETRIC_AGGREGATE_TYPE: Discriminant = Discriminant::new(18);
pub const MULTI_POINT_TYPE: Discriminant = Discriminant::new(19);
pub const MULTI_CURVE_TYPE: Discriminant = Discriminant::new(20);
pub const MULTI_SURFACE_TYPE: Discriminant = Discriminant::new(21);
pub const MULTI_GEOMETRY_TYPE: Discriminant = Discriminant::new(22);

// Features and coverages
pub const ABSTRACT_FEATURE_TYPE: Discriminant = Discriminant::new(23);
pub const ABSTRACT_FEATURE_COLLECTION_TYPE: Discriminant = Discriminant::new(24);
pub const FEATURE_COLLECTION_TYPE: Discriminant = Discriminant::new(25);
pub const ABSTRACT_COVERAGE_TYPE: Discriminant = Discriminant::new(26);
pub const ABSTRACT_DISCRETE_COVERAGE_TYPE: Discriminant = Discriminant::new(27);
pub const MULTI_POINT_COVERAGE_TYPE: Discriminant = Discriminant::new(28);
pub const GRID_COVERAGE_TYPE: Discriminant = Discriminant::new(29);
pub const RECTIFIED_GRID_COVERAGE_TYPE: Discriminant = Discriminant::new(30);
pub const ABSTRACT_CONTINUOUS_COVERAGE_TYPE: Discriminant = Discriminant::new(31);
pub const OBSERVATION_TYPE: Discriminant = Discriminant::new(32);

// Definitions and reference systems
pub const DEFINITION_TYPE: Discriminant = Discriminant::new(33);
pub const DICTIONARY_TYPE: Discriminant = Discriminant::new(34);
pub const UNIT_DEFINITION_TYPE: Discriminant = Discriminant::new(35);
pub const BASE_UNIT_TYPE: Discriminant = Discriminant::new(36);
pub const ABSTRACT_REFERENCE_SYSTEM_BASE_TYPE: Discriminant = Discriminant::new(37);
pub const ABSTRACT_REFERENCE_SYSTEM_TYPE: Discriminant = Discriminant::new(38);
pub const GEOGRAPHIC_CRS_TYPE: Discriminant = Discriminant::new(39);
pub const ABSTRACT_GENERAL_DERIVED_CRS_TYPE: Discriminant = Discriminant::new(40);
pub const PROJECTED_CRS_TYPE: Discriminant = Discriminant::new(41);

// Temporal
pub const ABSTRACT_TIME_OBJECT_TYPE: Discriminant = Discriminant::new(42);
pub const ABSTRACT_TIME_PRIMITIVE_TYPE: Discriminant = Discriminant::new(43);
pub const ABSTRACT_TIME_GEOMETRIC_PRIMITIVE_TYPE: Discriminant = Discriminant::new(44);
pub const TIME_INSTANT_TYPE: Discriminant = Discriminant::new(45);
pub const TIME_PERIOD_TYPE: Discriminant = Discriminant::new(46);

// Value types
pub const DIRECT_POSITION_TYPE: Discriminant = Discriminant::new(47);
pub const DIRECT_POSITION_LIST_TYPE: Discriminant = Discriminant::new(48);
pub const COORDINATES_TYPE: Discriminant = Discriminant::new(49);
pub const ENVELOPE_TYPE: Discriminant = Discriminant::new(50);
pub const ENVELOPE_WITH_TIME_PERIOD_TYPE: Discriminant = Discriminant::new(51);
pub const CODE_TYPE: Discriminant = Discriminant::new(61);
pub const STRING_OR_REF_TYPE: Discriminant = Discriminant::new(62);
pub const MEASURE_TYPE: Discriminant = Discriminant::new(63);
pub const LENGTH_TYPE: Discriminant = Discriminant::new(64);
pub const TIME_POSITION_TYPE: Discriminant = Discriminant::new(65);

// Property types
pub const BOUNDING_SHAPE_TYPE: Discriminant = Discriminant::new(52);
pub const GEOMETRY_PROPERTY_TYPE: Discriminant = Discriminant::new(53);
pub const POINT_PROPERTY_TYPE: Discriminant = Discriminant::new(54);
pub const CURVE_PROPERTY_TYPE: Discriminant = Discriminant::new(55);
pub const SURFACE_PROPERTY_TYPE: Discriminant = Discriminant::new(56);
pub const ABSTRACT_RING_PROPERTY_TYPE: Discriminant = Discriminant::new(57);
pub const FEATURE_PROPERTY_TYPE: Discriminant = Discriminant::new(58);
pub const FEATURE_ARRAY_PROPERTY_TYPE: Discriminant = Discriminant::new(59);
pub const LOCATION_PROPERTY_TYPE: Discriminant = Discriminant::new(60);

/// One row of the built-in type table.
struct GmlType {
    discriminant: Discriminant,
    name: &'static str,
    parent: Option<Discriminant>,
    is_abstract: bool,
}

/// Types in registration order (parents before children).
///
/// `is_abstract` follows the `abstract` attribute of the XSD complex type,
/// not the name: `AbstractRingPropertyType` is concrete.
const GML_TYPES: &[GmlType] = &[
    GmlType {
        discriminant: ABSTRACT_GML_TYPE,
        name: "AbstractGMLType",
        parent: None,
        is_abstract: true,
    },
    GmlType {
        discriminant: ABSTRACT_GEOMETRY_TYPE,
        name: "AbstractGeometryType",
        parent: Some(ABSTRACT_GML_TYPE),
        is_abstract: true,
    },
    GmlType {
        discriminant: ABSTRACT_GEOMETRIC_PRIMITIVE_TYPE,
        name: "AbstractGeometricPrimitiveType",
        parent: Some(ABSTRACT_GEOMETRY_TYPE),
        is_abstract: true,
    },
    GmlType {
        discriminant: POINT_TYPE,
        name: "PointType",
        parent: Some(ABSTRACT_GEOMETRIC_PRIMITIVE_TYPE),
        is_abstract: false,
    },
    GmlType {
        discriminant: ABSTRACT_CURVE_TYPE,
        name: "AbstractCurveType",
        parent: Some(ABSTRACT_GEOMETRIC_PRIMITIVE_TYPE),
        is_abstract: true,
    },
    GmlType {
        discriminant: LINE_STRING_TYPE,
        name: "LineStringType",
        parent: Some(ABSTRACT_CURVE_TYPE),
        is_abstract: false,
    },
    GmlType {
        discriminant: CURVE_TYPE,
        name: "CurveType",
        parent: Some(ABSTRACT_CURVE_TYPE),
        is_abstract: false,
    },
    GmlType {
        discriminant: ORIENTABLE_CURVE_TYPE,
        name: "OrientableCurveType",
        parent: Some(ABSTRACT_CURVE_TYPE),
        is_abstract: false,
    },
    GmlType {
        discriminant: ABSTRACT_SURFACE_TYPE,
        name: "AbstractSurfaceType",
        parent: Some(ABSTRACT_GEOMETRIC_PRIMITIVE_TYPE),
        is_abstract: true,
    },
    GmlType {
        discriminant: POLYGON_TYPE,
        name: "PolygonType",
        parent: Some(ABSTRACT_SURFACE_TYPE),
        is_abstract: false,
    },
    GmlType {
        discriminant: SURFACE_TYPE,
        name: "SurfaceType",
        parent: Some(ABSTRACT_SURFACE_TYPE),
        is_abstract: false,
    },
    GmlType {
        discriminant: POLYHEDRAL_SURFACE_TYPE,
        name: "PolyhedralSurfaceType",
        parent: Some(SURFACE_TYPE),
        is_abstract: false,
    },
    GmlType {
        discriminant: TRIANGULATED_SURFACE_TYPE,
        name: "TriangulatedSurfaceType",
        parent: Some(POLYHEDRAL_SURFACE_TYPE),
        is_abstract: false,
    },
    GmlType {
        discriminant: ABSTRACT_SOLID_TYPE,
        name: "AbstractSolidType",
        parent: Some(ABSTRACT_GEOMETRIC_PRIMITIVE_TYPE),
        is_abstract: true,
    },
    GmlType {
        discriminant: SOLID_TYPE,
        name: "SolidType",
        parent: Some(ABSTRACT_SOLID_TYPE),
        is_abstract: false,
    },
    GmlType {
        discriminant: ABSTRACT_RING_TYPE,
        name: "AbstractRingType",
        parent: Some(ABSTRACT_GEOMETRY_TYPE),
        is_abstract: true,
    },
    GmlType {
        discriminant: LINEAR_RING_TYPE,
        name: "LinearRingType",
        parent: Some(ABSTRACT_RING_TYPE),
        is_abstract: false,
    },
    GmlType {
        discriminant: RING_TYPE,
        name: "RingType",
        parent: Some(ABSTRACT_RING_TYPE),
        is_abstract: false,
    },
    GmlType {
        discriminant: ABSTRACT_GEOMETRIC_AGGREGATE_TYPE,
        name: "AbstractGeometricAggregateType",
        parent: Some(ABSTRACT_GEOMETRY_TYPE),
        is_abstract: true,
    },
    GmlType {
        discriminant: MULTI_POINT_TYPE,
        name: "MultiPointType",
        parent: Some(ABSTRACT_GEOMETRIC_AGGREGATE_TYPE),
        is_abstract: false,
    },
    GmlType {
        discriminant: MULTI_CURVE_TYPE,
        name: "MultiCurveType",
        parent: Some(ABSTRACT_GEOMETRIC_AGGREGATE_TYPE),
        is_abstract: false,
    },
    GmlType {
        discriminant: MULTI_SURFACE_TYPE,
        name: "MultiSurfaceType",
        parent: Some(ABSTRACT_GEOMETRIC_AGGREGATE_TYPE),
        is_abstract: false,
    },
    GmlType {
        discriminant: MULTI_GEOMETRY_TYPE,
        name: "MultiGeometryType",
        parent: Some(ABSTRACT_GEOMETRIC_AGGREGATE_TYPE),
        is_abstract: false,
    },
    GmlType {
        discriminant: ABSTRACT_FEATURE_TYPE,
        name: "AbstractFeatureType",
        parent: Some(ABSTRACT_GML_TYPE),
        is_abstract: true,
    },
    GmlType {
        discriminant: ABSTRACT_FEATURE_COLLECTION_TYPE,
        name: "AbstractFeatureCollectionType",
        parent: Some(ABSTRACT_FEATURE_TYPE),
        is_abstract: true,
    },
    GmlType {
        discriminant: FEATURE_COLLECTION_TYPE,
        name: "FeatureCollectionType",
        parent: Some(ABSTRACT_FEATURE_COLLECTION_TYPE),
        is_abstract: false,
    },
    GmlType {
        discriminant: ABSTRACT_COVERAGE_TYPE,
        name: "AbstractCoverageType",
        parent: Some(ABSTRACT_FEATURE_TYPE),
        is_abstract: true,
    },
    GmlType {
        discriminant: ABSTRACT_DISCRETE_COVERAGE_TYPE,
        name: "AbstractDiscreteCoverageType",
        parent: Some(ABSTRACT_COVERAGE_TYPE),
        is_abstract: true,
    },
    GmlType {
        discriminant: MULTI_POINT_COVERAGE_TYPE,
        name: "MultiPointCoverageType",
        parent: Some(ABSTRACT_DISCRETE_COVERAGE_TYPE),
        is_abstract: false,
    },
    GmlType {
        discriminant: GRID_COVERAGE_TYPE,
        name: "GridCoverageType",
        parent: Some(ABSTRACT_DISCRETE_COVERAGE_TYPE),
        is_abstract: false,
    },
    GmlType {
        discriminant: RECTIFIED_GRID_COVERAGE_TYPE,
        name: "RectifiedGridCoverageType",
        parent: Some(ABSTRACT_DISCRETE_COVERAGE_TYPE),
        is_abstract: false,
    },
    GmlType {
        discriminant: ABSTRACT_CONTINUOUS_COVERAGE_TYPE,
        name: "AbstractContinuousCoverageType",
        parent: Some(ABSTRACT_COVERAGE_TYPE),
        is_abstract: true,
    },
    GmlType {
        discriminant: OBSERVATION_TYPE,
        name: "ObservationType",
        parent: Some(ABSTRACT_FEATURE_TYPE),
        is_abstract: false,
    },
    GmlType {
        discriminant: DEFINITION_TYPE,
        name: "DefinitionType",
        parent: Some(ABSTRACT_GML_TYPE),
        is_abstract: false,
    },
    GmlType {
        discriminant: DICTIONARY_TYPE,
        name: "DictionaryType",
        parent: Some(DEFINITION_TYPE),
        is_abstract: false,
    },
    GmlType {
        discriminant: UNIT_DEFINITION_TYPE,
        name: "UnitDefinitionType",
        parent: Some(DEFINITION_TYPE),
        is_abstract: false,
    },
    GmlType {
        discriminant: BASE_UNIT_TYPE,
        name: "BaseUnitType",
        parent: Some(UNIT_DEFINITION_TYPE),
        is_abstract: false,
    },
    GmlType {
        discriminant: ABSTRACT_REFERENCE_SYSTEM_BASE_TYPE,
        name: "AbstractReferenceSystemBaseType",
        parent: Some(DEFINITION_TYPE),
        is_abstract: true,
    },
    GmlType {
        discriminant: ABSTRACT_REFERENCE_SYSTEM_TYPE,
        name: "AbstractReferenceSystemType",
        parent: Some(ABSTRACT_REFERENCE_SYSTEM_BASE_TYPE),
        is_abstract: true,
    },
    GmlType {
        discriminant: GEOGRAPHIC_CRS_TYPE,
        name: "GeographicCRSType",
        parent: Some(ABSTRACT_REFERENCE_SYSTEM_TYPE),
        is_abstract: false,
    },
    GmlType {
        discriminant: ABSTRACT_GENERAL_DERIVED_CRS_TYPE,
        name: "AbstractGeneralDerivedCRSType",
        parent: Some(ABSTRACT_REFERENCE_SYSTEM_TYPE),
        is_abstract: true,
    },
    GmlType {
        discriminant: PROJECTED_CRS_TYPE,
        name: "ProjectedCRSType",
        parent: Some(ABSTRACT_GENERAL_DERIVED_CRS_TYPE),
        is_abstract: false,
    },
    GmlType {
        discriminant: ABSTRACT_TIME_OBJECT_TYPE,
        name: "AbstractTimeObjectType",
        parent: Some(ABSTRACT_GML_TYPE),
        is_abstract: true,
    },
    GmlType {
        discriminant: ABSTRACT_TIME_PRIMITIVE_TYPE,
        name: "AbstractTimePrimitiveType",
        parent: Some(ABSTRACT_TIME_OBJECT_TYPE),
        is_abstract: true,
    },
    GmlType {
        discriminant: ABSTRACT_TIME_GEOMETRIC_PRIMITIVE_TYPE,
        name: "AbstractTimeGeometricPrimitiveType",
        parent: Some(ABSTRACT_TIME_PRIMITIVE_TYPE),
        is_abstract: true,
    },
    GmlType {
        discriminant: TIME_INSTANT_TYPE,
        name: "TimeInstantType",
        parent: Some(ABSTRACT_TIME_GEOMETRIC_PRIMITIVE_TYPE),
        is_abstract: false,
    },
    GmlType {
        discriminant: TIME_PERIOD_TYPE,
        name: "TimePeriodType",
        parent: Some(ABSTRACT_TIME_GEOMETRIC_PRIMITIVE_TYPE),
        is_abstract: false,
    },
    GmlType {
        discriminant: DIRECT_POSITION_TYPE,
        name: "DirectPositionType",
        parent: None,
        is_abstract: false,
    },
    GmlType {
        discriminant: DIRECT_POSITION_LIST_TYPE,
        name: "DirectPositionListType",
        parent: None,
        is_abstract: false,
    },
    GmlType {
        discriminant: COORDINATES_TYPE,
        name: "CoordinatesType",
        parent: None,
        is_abstract: false,
    },
    GmlType {
        discriminant: ENVELOPE_TYPE,
        name: "EnvelopeType",
        parent: None,
        is_abstract: false,
    },
    GmlType {
        discriminant: ENVELOPE_WITH_TIME_PERIOD_TYPE,
        name: "EnvelopeWithTimePeriodType",
        parent: Some(ENVELOPE_TYPE),
        is_abstract: false,
    },
    GmlType {
        discriminant: BOUNDING_SHAPE_TYPE,
        name: "BoundingShapeType",
        parent: None,
        is_abstract: false,
    },
    GmlType {
        discriminant: GEOMETRY_PROPERTY_TYPE,
        name: "GeometryPropertyType",
        parent: None,
        is_abstract: false,
    },
    GmlType {
        discriminant: POINT_PROPERTY_TYPE,
        name: "PointPropertyType",
        parent: None,
        is_abstract: false,
    },
    GmlType {
        discriminant: CURVE_PROPERTY_TYPE,
        name: "CurvePropertyType",
        parent: None,
        is_abstract: false,
    },
    GmlType {
        discriminant: SURFACE_PROPERTY_TYPE,
        name: "SurfacePropertyType",
        parent: None,
        is_abstract: false,
    },
    GmlType {
        discriminant: ABSTRACT_RING_PROPERTY_TYPE,
        name: "AbstractRingPropertyType",
        parent: None,
        is_abstract: false,
    },
    GmlType {
        discriminant: FEATURE_PROPERTY_TYPE,
        name: "FeaturePropertyType",
        parent: None,
        is_abstract: false,
    },
    GmlType {
        discriminant: FEATURE_ARRAY_PROPERTY_TYPE,
        name: "FeatureArrayPropertyType",
        parent: None,
        is_abstract: false,
    },
    GmlType {
        discriminant: LOCATION_PROPERTY_TYPE,
        name: "LocationPropertyType",
        parent: None,
        is_abstract: false,
    },
    GmlType {
        discriminant: CODE_TYPE,
        name: "CodeType",
        parent: None,
        is_abstract: false,
    },
    GmlType {
        discriminant: STRING_OR_REF_TYPE,
        name: "StringOrRefType",
        parent: None,
        is_abstract: false,
    },
    GmlType {
        discriminant: MEASURE_TYPE,
        name: "MeasureType",
        parent: None,
        is_abstract: false,
    },
    GmlType {
        discriminant: LENGTH_TYPE,
        name: "LengthType",
        parent: Some(MEASURE_TYPE),
        is_abstract: false,
    },
    GmlType {
        discriminant: TIME_POSITION_TYPE,
        name: "TimePositionType",
        parent: None,
        is_abstract: false,
    },
];

/// Element bindings (local names in the GML namespace).
const GML_ELEMENTS: &[(&str, Discriminant)] = &[
    ("Point", POINT_TYPE),
    ("LineString", LINE_STRING_TYPE),
    ("Curve", CURVE_TYPE),
    ("OrientableCurve", ORIENTABLE_CURVE_TYPE),
    ("Polygon", POLYGON_TYPE),
    ("Surface", SURFACE_TYPE),
    ("PolyhedralSurface", POLYHEDRAL_SURFACE_TYPE),
    ("TriangulatedSurface", TRIANGULATED_SURFACE_TYPE),
    ("Solid", SOLID_TYPE),
    ("LinearRing", LINEAR_RING_TYPE),
    ("Ring", RING_TYPE),
    ("MultiPoint", MULTI_POINT_TYPE),
    ("MultiCurve", MULTI_CURVE_TYPE),
    ("MultiSurface", MULTI_SURFACE_TYPE),
    ("MultiGeometry", MULTI_GEOMETRY_TYPE),
    ("FeatureCollection", FEATURE_COLLECTION_TYPE),
    ("MultiPointCoverage", MULTI_POINT_COVERAGE_TYPE),
    ("GridCoverage", GRID_COVERAGE_TYPE),
    ("RectifiedGridCoverage", RECTIFIED_GRID_COVERAGE_TYPE),
    ("Observation", OBSERVATION_TYPE),
    ("Definition", DEFINITION_TYPE),
    ("Dictionary", DICTIONARY_TYPE),
    ("UnitDefinition", UNIT_DEFINITION_TYPE),
    ("BaseUnit", BASE_UNIT_TYPE),
    ("GeographicCRS", GEOGRAPHIC_CRS_TYPE),
    ("ProjectedCRS", PROJECTED_CRS_TYPE),
    ("TimeInstant", TIME_INSTANT_TYPE),
    ("TimePeriod", TIME_PERIOD_TYPE),
    ("pos", DIRECT_POSITION_TYPE),
    ("lowerCorner", DIRECT_POSITION_TYPE),
    ("upperCorner", DIRECT_POSITION_TYPE),
    ("posList", DIRECT_POSITION_LIST_TYPE),
    ("coordinates", COORDINATES_TYPE),
    ("Envelope", ENVELOPE_TYPE),
    ("EnvelopeWithTimePeriod", ENVELOPE_WITH_TIME_PERIOD_TYPE),
    ("boundedBy", BOUNDING_SHAPE_TYPE),
    ("geometryMember", GEOMETRY_PROPERTY_TYPE),
    ("pointMember", POINT_PROPERTY_TYPE),
    ("curveMember", CURVE_PROPERTY_TYPE),
    ("surfaceMember", SURFACE_PROPERTY_TYPE),
    ("exterior", ABSTRACT_RING_PROPERTY_TYPE),
    ("interior", ABSTRACT_RING_PROPERTY_TYPE),
    ("featureMember", FEATURE_PROPERTY_TYPE),
    ("featureMembers", FEATURE_ARRAY_PROPERTY_TYPE),
    ("location", LOCATION_PROPERTY_TYPE),
    ("name", CODE_TYPE),
    ("description", STRING_OR_REF_TYPE),
    ("timePosition", TIME_POSITION_TYPE),
    ("beginPosition", TIME_POSITION_TYPE),
    ("endPosition", TIME_POSITION_TYPE),
];

/// Elements that carry no typed content for dispatch.
///
///   - metaDataProperty: free-form metadata container
///   - rangeSet/coverageFunction: coverage payloads (values, not objects)
const GML_SKIPPED: &[&str] = &["metaDataProperty", "rangeSet", "coverageFunction"];

/// Create a catalog configured for GML 3.1.1.
///
/// # Errors
/// Only fails if the built-in tables are inconsistent.
pub fn create_gml_catalog() -> Result<Catalog> {
    let mut catalog = Catalog::new();

    for entry in GML_TYPES {
        if entry.is_abstract {
            catalog.register_abstract_type(entry.discriminant, entry.name, entry.parent)?;
        } else {
            catalog.register_type(entry.discriminant, entry.name, entry.parent)?;
        }
    }

    for &(element, discriminant) in GML_ELEMENTS {
        catalog.bind(element, discriminant)?;
    }

    catalog.skip(GML_SKIPPED.iter().copied())?;

    tracing::debug!(
        types = catalog.registry().len(),
        elements = GML_ELEMENTS.len(),
        "Built GML 3.1.1 catalog"
    );

    Ok(catalog)
}
