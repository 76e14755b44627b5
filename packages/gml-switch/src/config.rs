//! Configuration constants and validation functions.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{Result, SchemaError};

/// Namespace URI of GML 3.1.1.
pub const GML_NAMESPACE: &str = "http://www.opengis.net/gml";

/// Log filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// XML name pattern (NCName without the non-ASCII ranges).
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_.\-]*$").expect("valid regex"));

/// Validate a type or element name.
///
/// Names must be usable as XML local names: they start with a letter or
/// underscore and contain no colons or whitespace.
///
/// # Examples
/// ```
/// use gml_switch::config::validate_name;
///
/// assert!(validate_name("PointType").is_ok());
/// assert!(validate_name("app.RoadType").is_ok());
/// assert!(validate_name("gml:Point").is_err());
/// assert!(validate_name("").is_err());
/// ```
pub fn validate_name(name: &str) -> Result<()> {
    if NAME_PATTERN.is_match(name) {
        Ok(())
    } else {
        Err(SchemaError::InvalidName(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name_valid() {
        assert!(validate_name("AbstractGMLType").is_ok());
        assert!(validate_name("featureMember").is_ok());
        assert!(validate_name("_private").is_ok());
        assert!(validate_name("gml.id").is_ok());
        assert!(validate_name("road-segment").is_ok());
    }

    #[test]
    fn test_validate_name_invalid() {
        assert!(validate_name("").is_err());
        assert!(validate_name("1Point").is_err());
        assert!(validate_name("gml:Point").is_err());
        assert!(validate_name("Point Type").is_err());
        assert!(validate_name("-dash").is_err());
    }
}
