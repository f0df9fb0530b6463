// src/math/geometry/polygon/properties.rs

use crate::math::geometry::polygon::Polygon;
use crate::math::types::*;

/// Trait für Polygon-Eigenschaften
pub trait PolygonProperties {
    /// Vorzeichenbehaftete Fläche (Shoelace-Formel)
    fn signed_area(&self) -> f64;

    /// Berechnet die Fläche des Polygons
    fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Prüft ob ein Punkt innerhalb des Polygons liegt (Ray-Casting)
    fn contains_point(&self, point: Point) -> bool;

    /// Kleinster Abstand eines Punktes zu einer Kante des Polygons
    fn distance_to_boundary(&self, point: Point) -> f64;

    /// Innen oder höchstens `tolerance` vom Rand entfernt
    fn contains_with_tolerance(&self, point: Point, tolerance: f64) -> bool {
        self.contains_point(point) || self.distance_to_boundary(point) <= tolerance
    }
}

impl PolygonProperties for Polygon {
    fn signed_area(&self) -> f64 {
        let area: f64 = self.edges().map(|(a, b)| a.x * b.y - b.x * a.y).sum();
        area * 0.5
    }

    fn contains_point(&self, point: Point) -> bool {
        let vertices = self.vertices();
        let n = vertices.len();

        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let vi = vertices[i];
            let vj = vertices[j];

            if ((vi.y > point.y) != (vj.y > point.y))
                && (point.x < (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y) + vi.x)
            {
                inside = !inside;
            }
            j = i;
        }

        inside
    }

    fn distance_to_boundary(&self, point: Point) -> f64 {
        self.edges()
            .map(|(a, b)| distance_to_segment(point, a, b))
            .fold(f64::INFINITY, f64::min)
    }
}

fn distance_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let ab = b - a;
    let len_sq = ab.x * ab.x + ab.y * ab.y;
    if len_sq == 0.0 {
        return p.distance_to(a);
    }
    let t = (((p.x - a.x) * ab.x + (p.y - a.y) * ab.y) / len_sq).clamp(0.0, 1.0);
    p.distance_to(a + ab * t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn square() -> Polygon {
        Polygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(2.0, 2.0),
            Point::new(0.0, 2.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_area_and_orientation() {
        let sq = square();
        assert_abs_diff_eq!(sq.area(), 4.0, epsilon = 1e-12);
        assert!(sq.signed_area() > 0.0);
    }

    #[test]
    fn test_contains_point() {
        let sq = square();
        assert!(sq.contains_point(Point::new(1.0, 1.0)));
        assert!(!sq.contains_point(Point::new(3.0, 1.0)));
        assert!(sq.contains_with_tolerance(Point::new(2.0 + 1e-9, 1.0), 1e-6));
        assert!(!sq.contains_with_tolerance(Point::new(2.1, 1.0), 1e-6));
    }

    #[test]
    fn test_distance_to_boundary() {
        let sq = square();
        assert_abs_diff_eq!(sq.distance_to_boundary(Point::new(1.0, 0.5)), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(sq.distance_to_boundary(Point::new(5.0, 2.0)), 3.0, epsilon = 1e-12);
    }
}
