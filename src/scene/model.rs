// src/scene/model.rs

//! Reine Daten: was gezeichnet und wie es animiert wird. Keine Serialisierung.

use crate::math::{geometry::Polygon, types::Point};
use crate::raster::Rgb;

/// Farbwechsel über den Farbkreis.
#[derive(Debug, Clone, PartialEq)]
pub struct HueCycle {
    pub period_secs: f64,
    /// Stützwerte in gleichen Zeitabständen, erster == letzter.
    pub values: Vec<Rgb>,
}

/// "Atmen": Skalierung 1 → `peak` → 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleOscillation {
    pub peak: f64,
    pub period_secs: f64,
    pub delay_secs: f64,
}

impl ScaleOscillation {
    pub fn keyframes(&self) -> [f64; 3] {
        [1.0, self.peak, 1.0]
    }
}

/// Kurzes Kippen um einen Eckpunkt, danach Ruhe bis zum Periodenende.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationOscillation {
    pub amplitude_deg: f64,
    pub period_secs: f64,
    pub delay_secs: f64,
    pub pivot: Point,
}

impl RotationOscillation {
    /// Relative Zeitpunkte der Keyframes innerhalb einer Periode.
    pub const KEY_TIMES: [f64; 5] = [0.0, 0.05, 0.15, 0.25, 1.0];

    /// Winkel (Grad) zu [`Self::KEY_TIMES`]: ausschlagen, kurz zurückfedern, ruhen.
    pub fn keyframes(&self) -> [f64; 5] {
        [
            0.0,
            self.amplitude_deg,
            -self.amplitude_deg / 4.0,
            0.0,
            0.0,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub delay_secs: f64,
    pub scale: ScaleOscillation,
    pub rotation: RotationOscillation,
}

impl Motion {
    pub fn pivot(&self) -> Point {
        self.rotation.pivot
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Role {
    Static,
    Animated(Motion),
}

impl Role {
    pub fn is_animated(&self) -> bool {
        matches!(self, Role::Animated(_))
    }
}

/// Eine eingefärbte Zelle.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneCell {
    pub seed_index: usize,
    pub sub_index: usize,
    pub polygon: Polygon,
    pub fill: Rgb,
    pub hue_cycle: HueCycle,
    pub role: Role,
}

/// Schlagschatten einer Zelle: dieselbe Form, versetzt und halbtransparent schwarz.
#[derive(Debug, Clone, PartialEq)]
pub struct Shadow {
    pub polygon: Polygon,
    pub offset: Point,
    pub color: Rgb,
    pub opacity: f64,
}

impl Shadow {
    pub const OPACITY: f64 = 0.5;

    pub fn new(polygon: Polygon, offset: f64) -> Self {
        Self {
            polygon,
            offset: Point::new(offset, offset),
            color: Rgb::BLACK,
            opacity: Self::OPACITY,
        }
    }

    pub fn translated_polygon(&self) -> Polygon {
        self.polygon.translated(self.offset)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GradientStop {
    pub offset: f64,
    pub color: String,
}

/// Rahmenlinie mit horizontalem Farbverlauf.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameOutline {
    /// Geschlossener Pfad (erster Punkt am Ende wiederholt).
    pub path: Vec<Point>,
    pub gradient: Vec<GradientStop>,
    pub stroke_width: f64,
}

impl FrameOutline {
    pub const STROKE_WIDTH: f64 = 8.0;

    pub fn golden(path: Vec<Point>) -> Self {
        Self {
            path,
            gradient: vec![
                GradientStop {
                    offset: 0.0,
                    color: "gold".to_string(),
                },
                GradientStop {
                    offset: 1.0,
                    color: "darkorange".to_string(),
                },
            ],
            stroke_width: Self::STROKE_WIDTH,
        }
    }
}

/// Komplette Szene in Zeichenreihenfolge:
/// Hintergrund, Schatten, statische Ebene, animierte Ebene, Rahmen.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    pub background: Rgb,
    pub shadows: Vec<Shadow>,
    pub static_cells: Vec<SceneCell>,
    pub animated_cells: Vec<SceneCell>,
    pub frame: FrameOutline,
}

impl Scene {
    pub fn cell_count(&self) -> usize {
        self.static_cells.len() + self.animated_cells.len()
    }

    pub fn cells(&self) -> impl Iterator<Item = &SceneCell> {
        self.static_cells.iter().chain(self.animated_cells.iter())
    }
}
