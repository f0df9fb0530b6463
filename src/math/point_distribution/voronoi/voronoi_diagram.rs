// src/math/point_distribution/voronoi/voronoi_diagram.rs

use crate::math::{
    geometry::polygon::{Polygon, PolygonValidator},
    types::{Point, SpadePoint},
};
use spade::{DelaunayTriangulation, Triangulation};
use std::collections::HashMap;
use tracing::trace;

/// Beschränkte Voronoi-Region eines Seeds, noch nicht gegen den Rahmen geclippt.
#[derive(Debug, Clone, PartialEq)]
pub struct RawCell {
    /// Index des Generatorpunktes in der ursprünglichen Eingabeliste
    pub seed_index: usize,
    /// Der Generatorpunkt (Site), der diese Zelle definiert.
    pub generator: Point,
    pub polygon: Polygon,
}

/// Extrahiert Voronoi-Zellen aus einer Delaunay-Triangulation.
pub struct VoronoiExtractor;

impl VoronoiExtractor {
    /// Extrahiert alle beschränkten Voronoi-Zellen.
    ///
    /// Zellen, deren Generator an einer äußeren (unendlichen) Fläche liegt, werden
    /// vollständig übersprungen. Ebenso Zellen, die nach dem Zusammenfassen fast
    /// identischer Umkreismittelpunkte weniger als 3 Vertices haben oder ungültig sind.
    /// `seed_index_of` ordnet eine Generatorposition ihrem Seed-Index zu.
    pub fn extract_cells(
        triangulation: &DelaunayTriangulation<SpadePoint>,
        seed_index_of: &HashMap<(u64, u64), usize>,
        validator: &PolygonValidator,
    ) -> Vec<RawCell> {
        let mut voronoi_cells = Vec::with_capacity(triangulation.num_vertices());

        for vertex_handle in triangulation.vertices() {
            let generator_spade = vertex_handle.position();
            let generator = Point::from(generator_spade);
            let mut cell_circumcenters_spade: Vec<SpadePoint> = Vec::new();
            let mut is_boundary_cell = false;

            for connected_edge in vertex_handle.out_edges() {
                let face_handle = connected_edge.face();
                match face_handle.as_inner() {
                    Some(inner_face) => cell_circumcenters_spade.push(inner_face.circumcenter()),
                    None => {
                        is_boundary_cell = true;
                        break;
                    }
                }
            }

            if is_boundary_cell {
                trace!(
                    "VoronoiExtractor: skipping unbounded cell for generator {:?}",
                    generator
                );
                continue;
            }

            cell_circumcenters_spade.sort_unstable_by(|a, b| {
                let angle_a = (a.y - generator_spade.y).atan2(a.x - generator_spade.x);
                let angle_b = (b.y - generator_spade.y).atan2(b.x - generator_spade.x);
                angle_a
                    .partial_cmp(&angle_b)
                    .unwrap_or(std::cmp::Ordering::Equal)
            });

            let cell_vertices: Vec<Point> = cell_circumcenters_spade
                .into_iter()
                .map(Point::from)
                .collect();

            let polygon = match validator.build(&cell_vertices) {
                Ok(polygon) => polygon,
                Err(reason) => {
                    trace!(
                        "VoronoiExtractor: dropping degenerate cell for generator {:?}: {:?}",
                        generator,
                        reason
                    );
                    continue;
                }
            };

            let Some(&seed_index) = seed_index_of.get(&point_key(generator)) else {
                // Kann nur passieren, wenn spade Koordinaten verändert hätte
                trace!(
                    "VoronoiExtractor: generator {:?} not found in seed list",
                    generator
                );
                continue;
            };

            voronoi_cells.push(RawCell {
                seed_index,
                generator,
                polygon,
            });
        }

        voronoi_cells.sort_by_key(|cell| cell.seed_index);
        voronoi_cells
    }
}

/// Bit-genauer Schlüssel einer Position (für die Zuordnung Vertex → Seed).
pub(crate) fn point_key(point: Point) -> (u64, u64) {
    // -0.0 und 0.0 sollen denselben Schlüssel haben
    ((point.x + 0.0).to_bits(), (point.y + 0.0).to_bits())
}
