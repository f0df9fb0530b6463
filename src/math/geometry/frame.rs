// src/math/geometry/frame.rs

//! Rahmen ("Kirchenfenster"-Form): Halbkreisbogen oben, Rechteck unten.

use crate::math::{
    error::{MathError, MathResult},
    geometry::polygon::{Polygon, PolygonProperties},
    types::{Bounds2D, Point},
    utils::angles,
};

/// Winkelschritt, mit dem der obere Bogen abgetastet wird (Grad).
pub const FRAME_ARC_STEP_DEG: usize = 10;

/// Der geschlossene Rahmen, in den alle Zellen geclippt werden. Unveränderlich nach dem Bau.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    polygon: Polygon,
    bounds: Bounds2D,
}

impl Frame {
    /// Baut den Rahmen mit linker oberer Ecke `(x, y)`.
    ///
    /// Der Bogen hat den Radius `width / 2` und wird von 180° bis 360° in
    /// Schritten von [`FRAME_ARC_STEP_DEG`] abgetastet (y wächst nach unten,
    /// 270° ist also der höchste Punkt). Danach folgen die untere rechte und
    /// die untere linke Ecke.
    pub fn arched(x: f64, y: f64, width: f64, height: f64) -> MathResult<Self> {
        if !(width > 0.0 && height > 0.0) {
            return Err(MathError::InvalidConfiguration {
                message: format!(
                    "Frame dimensions must be positive, got {}x{}",
                    width, height
                ),
            });
        }
        let radius = width / 2.0;
        if height < radius {
            return Err(MathError::InvalidConfiguration {
                message: format!(
                    "Frame height {} is smaller than the arc radius {}; the outline would self-intersect",
                    height, radius
                ),
            });
        }
        if !(x.is_finite() && y.is_finite()) {
            return Err(MathError::InvalidConfiguration {
                message: format!("Frame position ({}, {}) is not finite", x, y),
            });
        }

        let center = Point::new(x + radius, y + radius);
        let mut path: Vec<Point> = (180..=360)
            .step_by(FRAME_ARC_STEP_DEG)
            .map(|deg| {
                let angle = angles::deg_to_rad(deg as f64);
                Point::new(
                    center.x + radius * angle.cos(),
                    center.y + radius * angle.sin(),
                )
            })
            .collect();
        path.push(Point::new(x + width, y + height));
        path.push(Point::new(x, y + height));

        // Bei height == radius fallen die unteren Ecken mit den Bogenenden zusammen.
        let polygon = crate::math::geometry::polygon::PolygonValidator::new()
            .build(&path)
            .map_err(|e| MathError::InvalidConfiguration {
                message: format!("Frame outline is not a valid polygon: {:?}", e),
            })?;

        // Exakte Box statt der trigonometrisch gerundeten Extremwerte
        let bounds = Bounds2D::new(Point::new(x, y), Point::new(x + width, y + height))?;

        Ok(Self { polygon, bounds })
    }

    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    pub fn bounds(&self) -> Bounds2D {
        self.bounds
    }

    pub fn area(&self) -> f64 {
        self.polygon.area()
    }

    /// Umriss inklusive schließendem Punkt, so wie er gezeichnet wird.
    pub fn outline(&self) -> Vec<Point> {
        let mut outline = self.polygon.vertices().to_vec();
        outline.push(self.polygon.vertices()[0]);
        outline
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    const FRAME_X: f64 = 950.0;
    const FRAME_Y: f64 = 100.0;

    #[test]
    fn test_frame_bounding_box_matches_position() {
        let frame = Frame::arched(FRAME_X, FRAME_Y, 900.0, 1300.0).unwrap();
        let measured =
            Bounds2D::from_points_iter(frame.polygon().vertices().iter().copied()).unwrap();
        assert_abs_diff_eq!(measured.min.x, FRAME_X, epsilon = 1e-9);
        assert_abs_diff_eq!(measured.min.y, FRAME_Y, epsilon = 1e-9);
        assert_abs_diff_eq!(measured.max.x, FRAME_X + 900.0, epsilon = 1e-9);
        assert_abs_diff_eq!(measured.max.y, FRAME_Y + 1300.0, epsilon = 1e-9);
        assert_eq!(frame.bounds().min, Point::new(FRAME_X, FRAME_Y));
        assert_eq!(frame.bounds().max, Point::new(FRAME_X + 900.0, FRAME_Y + 1300.0));
    }

    #[test]
    fn test_frame_vertex_layout() {
        let frame = Frame::arched(0.0, 0.0, 100.0, 200.0).unwrap();
        // 19 Bogenpunkte + 2 Ecken
        assert_eq!(frame.polygon().len(), 21);
        let outline = frame.outline();
        assert_eq!(outline.first(), outline.last());
        assert_eq!(outline[19], Point::new(100.0, 200.0));
        assert_eq!(outline[20], Point::new(0.0, 200.0));
    }

    #[test]
    fn test_frame_area_is_close_to_analytic_shape() {
        let (w, h) = (900.0, 1300.0);
        let frame = Frame::arched(0.0, 0.0, w, h).unwrap();
        let r = w / 2.0;
        let analytic = PI * r * r / 2.0 + w * (h - r);
        // Der abgetastete Bogen liegt innerhalb des echten Halbkreises
        assert!(frame.area() < analytic);
        assert!(frame.area() > analytic * 0.99);
    }

    #[test]
    fn test_non_positive_dimensions_are_rejected() {
        assert!(matches!(
            Frame::arched(0.0, 0.0, 0.0, 100.0),
            Err(MathError::InvalidConfiguration { .. })
        ));
        assert!(matches!(
            Frame::arched(0.0, 0.0, 100.0, -1.0),
            Err(MathError::InvalidConfiguration { .. })
        ));
        assert!(Frame::arched(0.0, 0.0, 100.0, 20.0).is_err());
    }
}
