// src/math/geometry/mod.rs

// Deklaration der Haupt-Geometriemodule
pub mod frame;
pub mod kernel;
pub mod polygon;

pub use self::frame::Frame;
pub use self::kernel::{GeometryKernel, SpadeGeoKernel};
pub use self::polygon::{Polygon, PolygonProperties, PolygonValidator, ValidationError};
