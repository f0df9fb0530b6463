// src/math/point_distribution/seeds.rs

use crate::math::{
    error::{MathError, MathResult},
    probability::SeedResource,
    types::{Bounds2D, Point},
    utils::linspace,
};
use crate::next_random_range;
use tracing::debug;

/// Seed-Punkte für die Tessellierung.
///
/// `interior` steuert die sichtbare Zelldichte, `boundary` sind feste Anker knapp
/// innerhalb der Bounding-Box-Kanten. Die Anker liegen auf der konvexen Hülle und
/// absorbieren damit die unbeschränkten Regionen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeedSet {
    pub interior: Vec<Point>,
    pub boundary: Vec<Point>,
}

impl SeedSet {
    pub fn len(&self) -> usize {
        self.interior.len() + self.boundary.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Alle Punkte, erst die inneren, dann die Anker. Der Index in dieser Liste
    /// ist der Seed-Index der späteren Zellen.
    pub fn all_points(&self) -> Vec<Point> {
        let mut points = Vec::with_capacity(self.len());
        points.extend_from_slice(&self.interior);
        points.extend_from_slice(&self.boundary);
        points
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SeedGenerator {
    /// Anzahl der Anker pro Kante (inklusive der Eckpositionen)
    anchors_per_edge: usize,
    /// Abstand der Anker von der Kante nach innen
    anchor_inset: f64,
}

impl SeedGenerator {
    pub fn new(anchors_per_edge: usize, anchor_inset: f64) -> Self {
        Self {
            anchors_per_edge,
            anchor_inset,
        }
    }

    /// Prüft, dass keine zwei Anker zusammenfallen können.
    ///
    /// Ein oberer Anker `(min_x + k·dx, min_y + ε)` kann nur dann mit einem
    /// linken `(min_x + ε, min_y + j·dy)` zusammenfallen, wenn `k·dx = ε`.
    /// Deshalb muss ε kleiner als der Ankerabstand sein.
    pub fn validate_for(&self, bounds: &Bounds2D) -> MathResult<()> {
        if self.anchors_per_edge < 2 {
            return Err(MathError::InvalidConfiguration {
                message: format!(
                    "At least 2 anchors per edge are required, got {}",
                    self.anchors_per_edge
                ),
            });
        }
        if !bounds.is_valid() || bounds.width() <= 0.0 || bounds.height() <= 0.0 {
            return Err(MathError::InvalidConfiguration {
                message: format!("Seed bounds {} are degenerate", bounds),
            });
        }
        let gaps = (self.anchors_per_edge - 1) as f64;
        let min_spacing = (bounds.width() / gaps).min(bounds.height() / gaps);
        let max_inset = min_spacing.min(bounds.width() / 2.0).min(bounds.height() / 2.0);
        if !(self.anchor_inset > 0.0 && self.anchor_inset < max_inset) {
            return Err(MathError::InvalidConfiguration {
                message: format!(
                    "Anchor inset {} must be in (0, {}) for {} anchors per edge",
                    self.anchor_inset, max_inset, self.anchors_per_edge
                ),
            });
        }
        Ok(())
    }

    /// Erzeugt `interior_count` gleichverteilte Punkte in `bounds` plus
    /// `4 × anchors_per_edge` Anker.
    pub fn generate(
        &self,
        bounds: &Bounds2D,
        interior_count: usize,
        seed_resource: &mut SeedResource,
    ) -> MathResult<SeedSet> {
        self.validate_for(bounds)?;

        let mut interior = Vec::with_capacity(interior_count);
        for _ in 0..interior_count {
            interior.push(Point::new(
                next_random_range!(seed_resource, bounds.min.x, bounds.max.x),
                next_random_range!(seed_resource, bounds.min.y, bounds.max.y),
            ));
        }

        let eps = self.anchor_inset;
        let xs = linspace(bounds.min.x, bounds.max.x, self.anchors_per_edge);
        let ys = linspace(bounds.min.y, bounds.max.y, self.anchors_per_edge);

        let mut boundary = Vec::with_capacity(4 * self.anchors_per_edge);
        boundary.extend(xs.iter().map(|&x| Point::new(x, bounds.min.y + eps)));
        boundary.extend(xs.iter().map(|&x| Point::new(x, bounds.max.y - eps)));
        boundary.extend(ys.iter().map(|&y| Point::new(bounds.min.x + eps, y)));
        boundary.extend(ys.iter().map(|&y| Point::new(bounds.max.x - eps, y)));

        debug!(
            "SeedGenerator: {} interior seeds + {} anchors in {}",
            interior.len(),
            boundary.len(),
            bounds
        );

        Ok(SeedSet { interior, boundary })
    }
}
