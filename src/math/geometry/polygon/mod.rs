// src/math/geometry/polygon/mod.rs

pub mod core; // Enthält die Polygon-Struktur selbst
pub mod properties; // Enthält den PolygonProperties-Trait
pub mod validation;

pub use self::core::Polygon;
pub use self::properties::PolygonProperties;
pub use self::validation::{PolygonValidator, ValidationError};
