// src/math/geometry/polygon/validation.rs

use super::{Polygon, PolygonProperties};
use crate::math::{error::*, types::*, utils::constants};

#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    InsufficientVertices { count: usize, minimum: usize },
    InvalidVertex { vertex_index: usize },
    SelfIntersection { edge_a: usize, edge_b: usize },
    DegenerateArea { area: f64 },
}

impl From<ValidationError> for MathError {
    fn from(error: ValidationError) -> Self {
        MathError::DegenerateGeometry {
            reason: format!("{:?}", error),
        }
    }
}

/// Prüft Rohpolygone auf die Eigenschaften gültiger Zellen:
/// mindestens 3 verschiedene, endliche Vertices, keine Selbstüberschneidung, Fläche > `min_area`.
#[derive(Debug, Clone, Copy)]
pub struct PolygonValidator {
    tolerance: f64,
    min_area: f64,
}

impl Default for PolygonValidator {
    fn default() -> Self {
        Self {
            tolerance: constants::EPSILON * 1000.0, // Etwas größere Toleranz für praktische Anwendung
            min_area: 0.0,
        }
    }
}

impl PolygonValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Setzt die Toleranz für das Zusammenfassen benachbarter Vertices
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance.max(0.0);
        self
    }

    pub fn with_min_area(mut self, min_area: f64) -> Self {
        self.min_area = min_area.max(0.0);
        self
    }

    /// Entfernt aufeinanderfolgende (fast) identische Vertices, inklusive
    /// eines Duplikats zwischen letztem und erstem Punkt.
    pub fn dedup_vertices(&self, points: &[Point]) -> Vec<Point> {
        let tol_sq = self.tolerance * self.tolerance;
        let mut cleaned: Vec<Point> = Vec::with_capacity(points.len());
        for &p in points {
            match cleaned.last() {
                Some(last) if last.distance_squared_to(p) <= tol_sq => {}
                _ => cleaned.push(p),
            }
        }
        while cleaned.len() > 1 {
            let first = cleaned[0];
            match cleaned.last() {
                Some(last) if last.distance_squared_to(first) <= tol_sq => {
                    cleaned.pop();
                }
                _ => break,
            }
        }
        cleaned
    }

    /// Bereinigt die Punkte und baut ein validiertes Polygon.
    pub fn build(&self, points: &[Point]) -> Result<Polygon, ValidationError> {
        let cleaned = self.dedup_vertices(points);
        if let Some(index) = cleaned.iter().position(|p| !p.is_finite()) {
            return Err(ValidationError::InvalidVertex {
                vertex_index: index,
            });
        }
        let count = cleaned.len();
        let polygon = Polygon::new(cleaned).map_err(|_| ValidationError::InsufficientVertices {
            count,
            minimum: 3,
        })?;
        self.validate(&polygon)?;
        Ok(polygon)
    }

    /// Validiert ein Polygon
    pub fn validate(&self, polygon: &Polygon) -> Result<(), ValidationError> {
        if polygon.len() < 3 {
            return Err(ValidationError::InsufficientVertices {
                count: polygon.len(),
                minimum: 3,
            });
        }

        self.validate_self_intersections(polygon)?;

        let area = polygon.area();
        if area <= self.min_area.max(constants::EPSILON) {
            return Err(ValidationError::DegenerateArea { area });
        }
        Ok(())
    }

    fn validate_self_intersections(&self, polygon: &Polygon) -> Result<(), ValidationError> {
        let vertices = polygon.vertices();
        let n = vertices.len();

        if n < 4 {
            return Ok(());
        }

        // Check all edge pairs for intersections
        for i in 0..n {
            let i_next = (i + 1) % n;

            for j in (i + 2)..n {
                let j_next = (j + 1) % n;

                // Don't check adjacent edges
                if j_next == i {
                    continue;
                }

                if segments_intersect(vertices[i], vertices[i_next], vertices[j], vertices[j_next])
                {
                    return Err(ValidationError::SelfIntersection {
                        edge_a: i,
                        edge_b: j,
                    });
                }
            }
        }
        Ok(())
    }
}

fn segments_intersect(p1: Point, p2: Point, p3: Point, p4: Point) -> bool {
    let d1 = p2 - p1;
    let d2 = p4 - p3;

    let denominator = d1.x * d2.y - d1.y * d2.x;

    if denominator.abs() < constants::EPSILON {
        return false; // Lines are parallel
    }

    let t = ((p3.x - p1.x) * d2.y - (p3.y - p1.y) * d2.x) / denominator;
    let u = ((p3.x - p1.x) * d1.y - (p3.y - p1.y) * d1.x) / denominator;

    (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bow_tie_is_rejected() {
        let bow_tie = [
            Point::new(0.0, 0.0),
            Point::new(2.0, 2.0),
            Point::new(2.0, 0.0),
            Point::new(0.0, 2.0),
        ];
        let result = PolygonValidator::new().build(&bow_tie);
        assert!(matches!(
            result,
            Err(ValidationError::SelfIntersection { .. })
        ));
    }

    #[test]
    fn test_duplicates_collapse_to_too_few_vertices() {
        let points = [
            Point::new(1.0, 1.0),
            Point::new(1.0, 1.0 + 1e-12),
            Point::new(4.0, 1.0),
            Point::new(1.0, 1.0),
        ];
        let result = PolygonValidator::new().build(&points);
        assert_eq!(
            result,
            Err(ValidationError::InsufficientVertices {
                count: 2,
                minimum: 3
            })
        );
    }

    #[test]
    fn test_collinear_points_have_no_area() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(2.0, 2.0),
        ];
        let result = PolygonValidator::new().build(&points);
        assert!(matches!(result, Err(ValidationError::DegenerateArea { .. })));
    }

    #[test]
    fn test_valid_square_passes() {
        let square = [
            Point::new(0.0, 0.0),
            Point::new(3.0, 0.0),
            Point::new(3.0, 3.0),
            Point::new(0.0, 3.0),
        ];
        let polygon = PolygonValidator::new().with_min_area(1.0).build(&square).unwrap();
        assert_eq!(polygon.len(), 4);
        let err: MathError = ValidationError::DegenerateArea { area: 0.0 }.into();
        assert!(matches!(err, MathError::DegenerateGeometry { .. }));
    }
}
