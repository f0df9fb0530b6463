// src/math/types/mod.rs
pub mod bounds;
pub mod point;

pub use bounds::*;
pub use point::*;

// Re-export häufig verwendete externe Typen
pub use spade::Point2;

// Einheitliche Typen für das gesamte Modul
pub type SpadePoint = Point2<f64>;
