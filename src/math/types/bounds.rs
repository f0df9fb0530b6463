// src/math/types/bounds.rs

use crate::math::{error::*, types::*};
use std::fmt;

/// 2D Bounding Box (Axis-Aligned Bounding Box)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds2D {
    pub min: Point,
    pub max: Point,
}

impl Bounds2D {
    /// Erstellt eine neue Bounding Box
    pub fn new(min: Point, max: Point) -> MathResult<Self> {
        if min.x > max.x || min.y > max.y {
            return Err(MathError::InvalidConfiguration {
                message: format!("Invalid bounds: min {:?} > max {:?}", min, max),
            });
        }

        Ok(Self { min, max })
    }

    /// Erstellt eine Bounding Box die alle Punkte umschließt
    pub fn from_points_iter<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut points_iter = points.into_iter();
        let first_point = points_iter.next()?;

        let mut min = first_point;
        let mut max = first_point;

        for point in points_iter {
            min.x = min.x.min(point.x);
            min.y = min.y.min(point.y);
            max.x = max.x.max(point.x);
            max.y = max.y.max(point.y);
        }

        Some(Self { min, max })
    }

    /// Prüft ob die Bounding Box gültig ist
    pub fn is_valid(&self) -> bool {
        self.min.x <= self.max.x
            && self.min.y <= self.max.y
            && self.min.is_finite()
            && self.max.is_finite()
    }

    /// Breite der Bounding Box
    pub fn width(&self) -> f64 {
        (self.max.x - self.min.x).max(0.0)
    }

    /// Höhe der Bounding Box
    pub fn height(&self) -> f64 {
        (self.max.y - self.min.y).max(0.0)
    }

    /// Fläche der Bounding Box
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Prüft ob ein Punkt in der Bounding Box liegt (Rand inklusive)
    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Prüft ob sich zwei Bounding Boxes überschneiden
    pub fn intersects(&self, other: &Bounds2D) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }

    /// Ganzzahlige Pixelspalten/-zeilen, die die Box überdeckt, beschnitten auf `[0, width) × [0, height)`.
    /// `None`, wenn die Box vollständig außerhalb des Rasters liegt.
    pub fn pixel_span(&self, width: u32, height: u32) -> Option<PixelSpan> {
        if !self.is_valid() || width == 0 || height == 0 {
            return None;
        }
        let x0 = self.min.x.floor().max(0.0);
        let y0 = self.min.y.floor().max(0.0);
        let x1 = self.max.x.floor().min(width as f64 - 1.0);
        let y1 = self.max.y.floor().min(height as f64 - 1.0);
        if x0 > x1 || y0 > y1 {
            return None;
        }
        Some(PixelSpan {
            x: x0 as u32..=x1 as u32,
            y: y0 as u32..=y1 as u32,
        })
    }
}

/// Inklusiver Pixelbereich einer Bounding Box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelSpan {
    pub x: std::ops::RangeInclusive<u32>,
    pub y: std::ops::RangeInclusive<u32>,
}

impl fmt::Display for Bounds2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Bounds2D(({:.2}, {:.2}) to ({:.2}, {:.2}))",
            self.min.x, self.min.y, self.max.x, self.max.y
        )
    }
}
