// src/math/geometry/polygon/core.rs

use crate::math::{error::*, types::*};
use std::fmt;

/// Einfaches, implizit geschlossenes Polygon.
///
/// Der schließende Punkt (letzter == erster) wird nicht gespeichert;
/// die letzte Kante verbindet immer den letzten mit dem ersten Vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    /// Erstellt ein neues Polygon aus Vertices.
    /// Ein explizit duplizierter Schlusspunkt wird entfernt.
    pub fn new(mut vertices: Vec<Point>) -> MathResult<Self> {
        if vertices.len() > 1 && vertices.first() == vertices.last() {
            vertices.pop();
        }
        if vertices.len() < 3 {
            return Err(MathError::InsufficientPoints {
                expected: 3,
                actual: vertices.len(),
            });
        }
        Ok(Self { vertices })
    }

    /// Zugriff auf Vertices
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Anzahl der Vertices
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Ist das Polygon leer? (Kann nach `new` nicht auftreten.)
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iteriert über alle Kanten (a, b), inklusive der schließenden Kante.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Bounding Box berechnen
    pub fn bounds(&self) -> Bounds2D {
        // Mindestens 3 Vertices sind garantiert
        Bounds2D::from_points_iter(self.vertices.iter().copied()).unwrap_or(Bounds2D {
            min: Point::ZERO,
            max: Point::ZERO,
        })
    }

    /// Vertex mit minimaler y-Koordinate; bei Gleichstand gewinnt das erste Vorkommen.
    pub fn lowest_vertex(&self) -> Point {
        let mut lowest = self.vertices[0];
        for vertex in &self.vertices[1..] {
            if vertex.y < lowest.y {
                lowest = *vertex;
            }
        }
        lowest
    }

    /// Erstellt eine um `offset` verschobene Kopie.
    pub fn translated(&self, offset: Point) -> Self {
        Self {
            vertices: self.vertices.iter().map(|v| *v + offset).collect(),
        }
    }

    /// Konvertierung in ein `geo::Polygon` (Ring wird von geo geschlossen).
    pub fn to_geo(&self) -> geo::Polygon<f64> {
        let ring: Vec<geo::Coord<f64>> = self.vertices.iter().map(|&v| v.into()).collect();
        geo::Polygon::new(geo::LineString::from(ring), Vec::new())
    }

    /// Übernimmt den äußeren Ring eines `geo::Polygon`. Löcher werden ignoriert.
    pub fn from_geo(polygon: &geo::Polygon<f64>) -> MathResult<Self> {
        Self::new(polygon.exterior().coords().map(|&c| c.into()).collect())
    }
}

/// Display-Implementierung für Debugging
impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Polygon({} vertices)", self.vertices.len())
    }
}
