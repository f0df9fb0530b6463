// src/math/point_distribution/mod.rs

// Deklaration der verschiedenen Punktverteilungs-Methoden/Module
pub mod seeds;
pub mod voronoi;

pub use self::seeds::{SeedGenerator, SeedSet};
pub use self::voronoi::{RawCell, VoronoiBuilder, VoronoiExtractor};
