// src/math/point_distribution/voronoi/mod.rs

pub mod builder;
pub mod voronoi_diagram; // Enthält RawCell und VoronoiExtractor

pub use self::builder::VoronoiBuilder;
pub use self::voronoi_diagram::{RawCell, VoronoiExtractor};
