// src/math/point_distribution/voronoi/builder.rs

use crate::math::{
    error::{MathError, MathResult},
    geometry::polygon::PolygonValidator,
    point_distribution::voronoi::voronoi_diagram::{RawCell, VoronoiExtractor, point_key},
    types::{Point, SpadePoint},
};
use spade::{DelaunayTriangulation, Triangulation};
use std::collections::HashMap;
use tracing::debug;

/// Berechnet die beschränkten Voronoi-Regionen einer Seed-Menge.
/// Kennt den Rahmen nicht; liefert nur Rohkandidaten.
#[derive(Debug, Clone, Default)]
pub struct VoronoiBuilder {
    validator: PolygonValidator,
}

impl VoronoiBuilder {
    pub fn new(validator: PolygonValidator) -> Self {
        Self { validator }
    }

    /// Triangulation + Extraktion. Weniger als 3 (verschiedene) Seeds oder eine
    /// kollineare Seed-Menge ergeben eine leere Liste, keinen Fehler.
    pub fn build_bounded_regions(&self, seeds: &[Point]) -> MathResult<Vec<RawCell>> {
        let step_description =
            |step_name: &str| format!("VoronoiBuilder::build_bounded_regions - Step: {}", step_name);

        if let Some(bad) = seeds.iter().find(|p| !p.is_finite()) {
            return Err(MathError::InvalidConfiguration {
                message: format!("Seed {:?} is not finite", bad),
            });
        }

        let mut seed_index_of: HashMap<(u64, u64), usize> = HashMap::with_capacity(seeds.len());
        for (index, seed) in seeds.iter().enumerate() {
            // Bei Duplikaten gewinnt der erste Seed
            seed_index_of.entry(point_key(*seed)).or_insert(index);
        }
        if seed_index_of.len() < 3 {
            debug!(
                "{}: only {} distinct seeds, no bounded region possible",
                step_description("Precondition"),
                seed_index_of.len()
            );
            return Ok(Vec::new());
        }

        let spade_points: Vec<SpadePoint> = seeds.iter().map(|&p| p.into()).collect();
        let delaunay_triangulation = DelaunayTriangulation::<SpadePoint>::bulk_load_stable(
            spade_points,
        )
        .map_err(|e| MathError::TriangulationFailed {
            reason: format!(
                "{}: Spade's bulk_load_stable failed: {:?}. Input point count: {}",
                step_description("Triangulation"),
                e,
                seeds.len()
            ),
        })?;

        debug!(
            "{}: Delaunay triangulation created with {} vertices and {} inner faces.",
            step_description("Triangulation"),
            delaunay_triangulation.num_vertices(),
            delaunay_triangulation.num_inner_faces()
        );

        let cells =
            VoronoiExtractor::extract_cells(&delaunay_triangulation, &seed_index_of, &self.validator);

        debug!(
            "{}: Extracted {} bounded Voronoi cells from {} seeds.",
            step_description("VoronoiCellExtraction"),
            cells.len(),
            seeds.len()
        );
        Ok(cells)
    }
}
