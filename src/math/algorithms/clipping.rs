// src/math/algorithms/clipping.rs

//! # Frame Clipping
//!
//! Intersects raw Voronoi regions with the frame polygon. The frame has a
//! curved top, so a single raw region can be split into several disjoint parts;
//! each part above the area threshold becomes its own cell.

use crate::math::{
    geometry::{Frame, GeometryKernel, Polygon, PolygonValidator},
    point_distribution::voronoi::RawCell,
    types::Bounds2D,
};
use rayon::prelude::*;
use tracing::{debug, trace};

/// Default minimum area of a clipped cell, in square canvas units.
pub const DEFAULT_MIN_CELL_AREA: f64 = 0.1;

/// A tessellation cell clipped to the frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ClippedCell {
    /// Index of the seed whose region produced this cell.
    pub seed_index: usize,
    /// Position of this part when the clip result had several parts.
    pub sub_index: usize,
    pub polygon: Polygon,
    /// Bounding box, computed once and reused by the colour sampler.
    pub bounds: Bounds2D,
}

/// Clips raw cells against a [`Frame`].
#[derive(Debug, Clone, Copy)]
pub struct FrameClipper {
    min_area: f64,
}

impl Default for FrameClipper {
    /// Default values:
    /// - `min_area`: [`DEFAULT_MIN_CELL_AREA`]
    fn default() -> Self {
        Self {
            min_area: DEFAULT_MIN_CELL_AREA,
        }
    }
}

impl FrameClipper {
    pub fn new(min_area: f64) -> Self {
        Self {
            min_area: min_area.max(0.0),
        }
    }

    pub fn min_area(&self) -> f64 {
        self.min_area
    }

    /// Clips a single raw cell.
    ///
    /// # Returns
    /// Zero cells if the candidate misses the frame or only slivers remain,
    /// one cell for a connected intersection, several for a split one.
    pub fn clip_cell<K: GeometryKernel + ?Sized>(
        &self,
        kernel: &K,
        frame: &Frame,
        raw: &RawCell,
    ) -> Vec<ClippedCell> {
        if !raw.polygon.bounds().intersects(&frame.bounds()) {
            trace!(
                "FrameClipper: seed {} lies outside the frame box, dropped",
                raw.seed_index
            );
            return Vec::new();
        }

        // Boolean ops can leave duplicated vertices on the frame boundary
        let cleaner = PolygonValidator::new();
        let mut cells = Vec::new();
        for part in kernel.intersect(&raw.polygon, frame.polygon()) {
            let area = kernel.area(&part);
            if area <= self.min_area {
                trace!(
                    "FrameClipper: dropping sliver of seed {} with area {:.4}",
                    raw.seed_index,
                    area
                );
                continue;
            }
            let Ok(polygon) = Polygon::new(cleaner.dedup_vertices(part.vertices())) else {
                trace!(
                    "FrameClipper: {} of seed {} collapsed after vertex cleanup",
                    part,
                    raw.seed_index
                );
                continue;
            };
            cells.push(ClippedCell {
                seed_index: raw.seed_index,
                sub_index: cells.len(),
                bounds: polygon.bounds(),
                polygon,
            });
        }
        cells
    }

    /// Clips all raw cells in parallel. The result is ordered by
    /// `(seed_index, sub_index)` regardless of scheduling.
    pub fn clip_all<K: GeometryKernel + ?Sized>(
        &self,
        kernel: &K,
        frame: &Frame,
        raw_cells: &[RawCell],
    ) -> Vec<ClippedCell> {
        let mut cells: Vec<ClippedCell> = raw_cells
            .par_iter()
            .flat_map_iter(|raw| self.clip_cell(kernel, frame, raw))
            .collect();
        cells.sort_by_key(|cell| (cell.seed_index, cell.sub_index));

        debug!(
            "FrameClipper: {} raw cells -> {} clipped cells (min area {})",
            raw_cells.len(),
            cells.len(),
            self.min_area
        );
        cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{
        geometry::{PolygonProperties, SpadeGeoKernel},
        types::Point,
        utils::constants::BOOLEAN_OP_TOLERANCE,
    };
    use approx::assert_abs_diff_eq;

    fn frame() -> Frame {
        Frame::arched(0.0, 0.0, 100.0, 150.0).unwrap()
    }

    fn raw(seed_index: usize, points: &[(f64, f64)]) -> RawCell {
        let vertices: Vec<Point> = points.iter().map(|&p| p.into()).collect();
        RawCell {
            seed_index,
            generator: vertices[0],
            polygon: Polygon::new(vertices).unwrap(),
        }
    }

    #[test]
    fn test_cell_inside_frame_is_kept_unchanged() {
        let kernel = SpadeGeoKernel::new();
        let cell = raw(3, &[(40.0, 100.0), (60.0, 100.0), (60.0, 120.0), (40.0, 120.0)]);
        let clipped = FrameClipper::default().clip_cell(&kernel, &frame(), &cell);
        assert_eq!(clipped.len(), 1);
        assert_eq!(clipped[0].seed_index, 3);
        assert_abs_diff_eq!(clipped[0].polygon.area(), 400.0, epsilon = 1e-6);
    }

    #[test]
    fn test_cell_outside_frame_box_is_dropped() {
        let kernel = SpadeGeoKernel::new();
        let cell = raw(0, &[(200.0, 200.0), (220.0, 200.0), (210.0, 230.0)]);
        assert!(FrameClipper::default().clip_cell(&kernel, &frame(), &cell).is_empty());
    }

    #[test]
    fn test_cell_straddling_the_arc_is_clipped_inside() {
        let kernel = SpadeGeoKernel::new();
        let frame = frame();
        // Ecke oben links: der Bogen schneidet das Quadrat
        let cell = raw(1, &[(-10.0, -10.0), (30.0, -10.0), (30.0, 30.0), (-10.0, 30.0)]);
        let clipped = FrameClipper::default().clip_cell(&kernel, &frame, &cell);
        assert_eq!(clipped.len(), 1);
        let area = clipped[0].polygon.area();
        assert!(area > 0.0 && area < 1600.0);
        for vertex in clipped[0].polygon.vertices() {
            assert!(frame.polygon().contains_with_tolerance(*vertex, BOOLEAN_OP_TOLERANCE));
        }
    }

    #[test]
    fn test_slivers_are_dropped() {
        let kernel = SpadeGeoKernel::new();
        // Überlappt den rechten Rand nur um 0.001 Einheiten
        let cell = raw(0, &[(99.999, 100.0), (120.0, 100.0), (120.0, 110.0), (99.999, 110.0)]);
        assert!(FrameClipper::default().clip_cell(&kernel, &frame(), &cell).is_empty());
        assert_eq!(FrameClipper::new(-1.0).min_area(), 0.0);
    }

    #[test]
    fn test_clip_all_is_sorted_by_seed() {
        let kernel = SpadeGeoKernel::new();
        let cells = vec![
            raw(7, &[(10.0, 100.0), (20.0, 100.0), (20.0, 110.0)]),
            raw(2, &[(30.0, 100.0), (40.0, 100.0), (40.0, 110.0)]),
            raw(5, &[(500.0, 100.0), (510.0, 100.0), (510.0, 110.0)]),
        ];
        let clipped = FrameClipper::default().clip_all(&kernel, &frame(), &cells);
        let order: Vec<usize> = clipped.iter().map(|c| c.seed_index).collect();
        assert_eq!(order, vec![2, 7]);
    }
}
