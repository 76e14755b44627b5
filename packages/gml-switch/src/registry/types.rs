//! Types for the type registry.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier of one concrete schema type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Discriminant(u32);

impl Discriminant {
    /// Create a discriminant from its numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the numeric value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Discriminant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u32> for Discriminant {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// Description of one registered schema type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
    /// Unique discriminant.
    pub discriminant: Discriminant,

    /// Human-readable type name (e.g., "PointType").
    pub name: String,

    /// Direct parent, or `None` for a root type.
    pub parent: Option<Discriminant>,

    /// Number of ancestors above this type (0 for roots).
    pub depth: usize,

    /// Whether the type is abstract (never bound to an element).
    pub is_abstract: bool,
}

impl TypeDescriptor {
    /// Check whether this type has no parent.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.discriminant)
    }
}
