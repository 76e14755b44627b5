//! Loading catalog extensions from YAML.
//!
//! Application schemas add their own feature and property types on top of
//! GML. An extension file lists them in registration order:
//!
//! ```yaml
//! types:
//!   - id: 1000
//!     name: RoadType
//!     parent: AbstractFeatureType
//!     elements: [Road]
//!   - id: 1001
//!     name: AbstractRoadPartType
//!     abstract: true
//!   - id: 1002
//!     name: RoadSegmentPropertyType
//!     elements: [segment]
//! skip: [surfaceMaterial]
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::core::Catalog;
use crate::error::{Result, SchemaError};
use crate::registry::Discriminant;

/// Top-level layout of a catalog extension file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    #[serde(default)]
    types: Vec<TypeEntry>,
    #[serde(default)]
    skip: Vec<String>,
}

/// One type declaration in a catalog extension file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TypeEntry {
    id: Discriminant,
    name: String,
    /// Parent type name; omitted for roots.
    #[serde(default)]
    parent: Option<String>,
    #[serde(default, rename = "abstract")]
    is_abstract: bool,
    #[serde(default)]
    elements: Vec<String>,
}

/// Resolve the parent name of an entry against the staged catalog.
fn resolve_parent(catalog: &Catalog, entry: &TypeEntry) -> Result<Option<Discriminant>> {
    let Some(parent) = entry.parent.as_deref() else {
        return Ok(None);
    };

    catalog
        .registry()
        .lookup(parent)
        .map(|t| Some(t.discriminant))
        .ok_or_else(|| SchemaError::UnknownParentName {
            type_name: entry.name.clone(),
            parent: parent.to_string(),
        })
}

/// Extend a catalog with the types, bindings and skip tags of a YAML document.
///
/// Parents are referenced by name and must already be known, either from the
/// catalog or from an earlier entry in the same document. The extension is
/// applied as a whole: on error the catalog is left unchanged.
///
/// # Arguments
/// * `catalog` - The catalog to extend
/// * `yaml` - The extension document
///
/// # Returns
/// Number of types added.
///
/// # Errors
/// - `Yaml` if the document does not match the expected layout
/// - `UnknownParentName` if a parent name is not registered yet
/// - `InvalidName` if a skip tag is not a valid XML name
/// - `ElementConflict` if a skip tag is also bound to a type
/// - any other registration or binding error from the catalog
pub fn extend_from_yaml(catalog: &mut Catalog, yaml: &str) -> Result<usize> {
    let file: CatalogFile = serde_yaml_ng::from_str(yaml)?;
    let mut staged = catalog.clone();

    for entry in &file.types {
        let parent = resolve_parent(&staged, entry)?;

        if entry.is_abstract {
            staged.register_abstract_type(entry.id, entry.name.as_str(), parent)?;
        } else {
            staged.register_type(entry.id, entry.name.as_str(), parent)?;
        }

        for element in &entry.elements {
            staged.bind(element.as_str(), entry.id)?;
        }
    }

    staged.skip(file.skip)?;
    *catalog = staged;

    tracing::debug!(added = file.types.len(), "Extended catalog from YAML");
    Ok(file.types.len())
}

/// Extend a catalog from a YAML file on disk.
///
/// # Arguments
/// * `catalog` - The catalog to extend
/// * `path` - Path to the extension file
///
/// # Errors
/// Returns `Io` if the file cannot be read, otherwise see [`extend_from_yaml`].
pub fn load_catalog_file(catalog: &mut Catalog, path: &Path) -> Result<usize> {
    let yaml = fs::read_to_string(path)?;
    let added = extend_from_yaml(catalog, &yaml)?;

    tracing::info!(path = %path.display(), added, "Loaded catalog extension");
    Ok(added)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::catalog::gml::{self, create_gml_catalog};
    use pretty_assertions::assert_eq;

    const ROADS: &str = r#"
types:
  - id: 1000
    name: RoadType
    parent: AbstractFeatureType
    elements: [Road]
  - id: 1001
    name: MotorwayType
    parent: RoadType
    elements: [Motorway]
  - id: 1002
    name: LanePropertyType
    elements: [lane]
skip: [surfaceMaterial]
"#;

    #[test]
    fn test_extend_adds_types_and_bindings() {
        let mut catalog = create_gml_catalog().unwrap();
        let before = catalog.registry().len();

        let added = extend_from_yaml(&mut catalog, ROADS).unwrap();
        assert_eq!(added, 3);
        assert_eq!(catalog.registry().len(), before + 3);

        let motorway = catalog.element_type("Motorway").unwrap();
        assert_eq!(
            catalog.registry().ancestor_chain(motorway).unwrap(),
            vec![
                Discriminant::new(1001),
                Discriminant::new(1000),
                gml::ABSTRACT_FEATURE_TYPE,
                gml::ABSTRACT_GML_TYPE,
            ]
        );
        let lane = catalog.registry().descriptor(Discriminant::new(1002));
        assert!(lane.unwrap().is_root());
        assert!(catalog.should_skip("surfaceMaterial"));
    }

    #[test]
    fn test_extend_parent_must_come_first() {
        let mut catalog = create_gml_catalog().unwrap();
        let yaml = r#"
types:
  - id: 1001
    name: MotorwayType
    parent: RoadType
  - id: 1000
    name: RoadType
    parent: AbstractFeatureType
"#;

        let err = extend_from_yaml(&mut catalog, yaml).unwrap_err();
        assert!(matches!(
            err,
            SchemaError::UnknownParentName { ref type_name, ref parent }
                if type_name == "MotorwayType" && parent == "RoadType"
        ));
    }

    #[test]
    fn test_extend_is_atomic() {
        let mut catalog = create_gml_catalog().unwrap();
        let before = catalog.registry().len();
        let yaml = r#"
types:
  - id: 1000
    name: RoadType
    parent: AbstractFeatureType
    elements: [Road]
  - id: 3
    name: ClashingType
"#;

        let err = extend_from_yaml(&mut catalog, yaml).unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateType { .. }));
        assert_eq!(catalog.registry().len(), before);
        assert!(!catalog.is_bound("Road"));
        assert!(catalog.registry().lookup("RoadType").is_none());
    }

    #[test]
    fn test_extend_rejects_rebinding_gml_element() {
        let mut catalog = create_gml_catalog().unwrap();
        let yaml = r#"
types:
  - id: 1000
    name: MyPointType
    parent: PointType
    elements: [Point]
"#;

        let err = extend_from_yaml(&mut catalog, yaml).unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateElement { .. }));
    }

    #[test]
    fn test_extend_abstract_type() {
        let mut catalog = create_gml_catalog().unwrap();
        let yaml = r#"
types:
  - id: 1000
    name: AbstractRoadType
    parent: AbstractFeatureType
    abstract: true
  - id: 1001
    name: RoadType
    parent: AbstractRoadType
    elements: [Road]
"#;

        extend_from_yaml(&mut catalog, yaml).unwrap();

        let road = catalog.registry().lookup("AbstractRoadType").unwrap();
        assert!(road.is_abstract);
        assert!(catalog.is_bound("Road"));

        let abstract_road = road.discriminant;
        let err = catalog.bind("AnyRoad", abstract_road).unwrap_err();
        assert!(matches!(err, SchemaError::AbstractType { .. }));
    }

    #[test]
    fn test_extend_rejects_binding_abstract_type() {
        let mut catalog = create_gml_catalog().unwrap();
        let yaml = r#"
types:
  - id: 1000
    name: AbstractRoadType
    parent: AbstractFeatureType
    abstract: true
    elements: [Road]
"#;

        let err = extend_from_yaml(&mut catalog, yaml).unwrap_err();
        assert!(matches!(
            err,
            SchemaError::AbstractType { ref element, ref name }
                if element == "Road" && name == "AbstractRoadType"
        ));
        assert!(catalog.registry().lookup("AbstractRoadType").is_none());
    }

    #[test]
    fn test_extend_rejects_skipping_bound_element() {
        let mut catalog = create_gml_catalog().unwrap();
        let before = catalog.registry().len();
        let yaml = r#"
types:
  - id: 1000
    name: RoadType
    parent: AbstractFeatureType
    elements: [Road]
skip: [Point]
"#;

        let err = extend_from_yaml(&mut catalog, yaml).unwrap_err();
        assert!(matches!(
            err,
            SchemaError::ElementConflict { ref element } if element == "Point"
        ));
        assert_eq!(catalog.registry().len(), before);
        assert!(!catalog.is_bound("Road"));
        assert!(!catalog.should_skip("Point"));
    }

    #[test]
    fn test_extend_rejects_invalid_skip_tag() {
        let mut catalog = create_gml_catalog().unwrap();
        let yaml = "skip: ['gml:bad name']\n";

        let err = extend_from_yaml(&mut catalog, yaml).unwrap_err();
        assert!(matches!(err, SchemaError::InvalidName(_)));
        assert!(!catalog.should_skip("gml:bad name"));
    }

    #[test]
    fn test_extend_rejects_unknown_fields() {
        let mut catalog = Catalog::new();
        let yaml = r#"
types:
  - id: 1
    name: RootType
    color: blue
"#;

        let err = extend_from_yaml(&mut catalog, yaml).unwrap_err();
        assert!(matches!(err, SchemaError::Yaml(_)));
        assert!(catalog.registry().is_empty());
    }

    #[test]
    fn test_load_catalog_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(ROADS.as_bytes()).unwrap();

        let mut catalog = create_gml_catalog().unwrap();
        let added = load_catalog_file(&mut catalog, file.path()).unwrap();

        assert_eq!(added, 3);
        assert!(catalog.is_bound("Road"));
    }

    #[test]
    fn test_load_catalog_file_missing() {
        let mut catalog = Catalog::new();
        let dir = tempfile::tempdir().unwrap();

        let path = dir.path().join("missing.yaml");

        let err = load_catalog_file(&mut catalog, &path).unwrap_err();
        assert!(matches!(err, SchemaError::Io(_)));
    }
}
