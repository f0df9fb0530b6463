// src/math/geometry/kernel.rs

//! Schmale Schnittstelle zur Geometriebibliothek.
//!
//! Die Pipeline braucht genau vier Operationen: beschränkte Voronoi-Regionen,
//! Polygonschnitt, Fläche und Punkt-in-Polygon. Alles andere bleibt hinter
//! dieser Grenze.

use crate::math::{
    error::MathResult,
    geometry::polygon::{Polygon, PolygonProperties, PolygonValidator},
    point_distribution::voronoi::{RawCell, VoronoiBuilder},
    types::Point,
    utils::constants,
};
use geo::{Area, BooleanOps};

pub trait GeometryKernel: Send + Sync {
    /// Beschränkte Voronoi-Regionen, sortiert nach Seed-Index.
    fn bounded_regions(&self, seeds: &[Point]) -> MathResult<Vec<RawCell>>;

    /// Schnittmenge zweier Polygone; null, ein oder mehrere Teile.
    fn intersect(&self, a: &Polygon, b: &Polygon) -> Vec<Polygon>;

    fn area(&self, polygon: &Polygon) -> f64;

    /// Strikt innen: Punkte auf dem Rand zählen nicht.
    fn contains(&self, polygon: &Polygon, point: Point) -> bool;
}

/// Implementierung mit `spade` (Delaunay) und `geo` (Boolean-Operationen, Fläche).
#[derive(Debug, Clone, Default)]
pub struct SpadeGeoKernel {
    voronoi: VoronoiBuilder,
}

impl SpadeGeoKernel {
    pub fn new() -> Self {
        Self {
            voronoi: VoronoiBuilder::new(PolygonValidator::new()),
        }
    }
}

impl GeometryKernel for SpadeGeoKernel {
    fn bounded_regions(&self, seeds: &[Point]) -> MathResult<Vec<RawCell>> {
        self.voronoi.build_bounded_regions(seeds)
    }

    fn intersect(&self, a: &Polygon, b: &Polygon) -> Vec<Polygon> {
        let result = a.to_geo().intersection(&b.to_geo());
        result
            .0
            .iter()
            .filter_map(|part| Polygon::from_geo(part).ok())
            .collect()
    }

    fn area(&self, polygon: &Polygon) -> f64 {
        polygon.to_geo().unsigned_area()
    }

    fn contains(&self, polygon: &Polygon, point: Point) -> bool {
        // Ray-Casting ist auf dem Rand mehrdeutig, daher Randpunkte explizit ausschließen
        polygon.contains_point(point)
            && polygon.distance_to_boundary(point) > constants::CLIP_TOLERANCE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Polygon {
        Polygon::new(vec![
            Point::new(x0, y0),
            Point::new(x1, y0),
            Point::new(x1, y1),
            Point::new(x0, y1),
        ])
        .unwrap()
    }

    #[test]
    fn test_intersection_of_overlapping_squares() {
        let kernel = SpadeGeoKernel::new();
        let parts = kernel.intersect(&rect(0.0, 0.0, 2.0, 2.0), &rect(1.0, 1.0, 3.0, 3.0));
        assert_eq!(parts.len(), 1);
        assert_abs_diff_eq!(kernel.area(&parts[0]), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_disjoint_squares_have_empty_intersection() {
        let kernel = SpadeGeoKernel::new();
        assert!(
            kernel
                .intersect(&rect(0.0, 0.0, 1.0, 1.0), &rect(5.0, 5.0, 6.0, 6.0))
                .is_empty()
        );
    }

    #[test]
    fn test_intersection_can_split_into_parts() {
        // U-förmiges Polygon geschnitten mit einem Querbalken ergibt zwei Teile
        let u_shape = Polygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(3.0, 0.0),
            Point::new(3.0, 3.0),
            Point::new(2.0, 3.0),
            Point::new(2.0, 1.0),
            Point::new(1.0, 1.0),
            Point::new(1.0, 3.0),
            Point::new(0.0, 3.0),
        ])
        .unwrap();
        let bar = rect(-1.0, 2.0, 4.0, 2.5);
        let kernel = SpadeGeoKernel::new();
        let parts = kernel.intersect(&bar, &u_shape);
        assert_eq!(parts.len(), 2);
        for part in &parts {
            assert_abs_diff_eq!(kernel.area(part), 0.5, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_contains_excludes_boundary() {
        let kernel = SpadeGeoKernel::new();
        let square = rect(0.0, 0.0, 2.0, 2.0);
        assert!(kernel.contains(&square, Point::new(1.0, 1.0)));
        assert!(!kernel.contains(&square, Point::new(0.0, 1.0)));
        assert!(!kernel.contains(&square, Point::new(2.0, 2.0)));
        assert!(!kernel.contains(&square, Point::new(3.0, 1.0)));
    }
}
