// src/math/error.rs
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("Insufficient points for operation: expected at least {expected}, got {actual}")]
    InsufficientPoints { expected: usize, actual: usize },

    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("Triangulation failed: {reason}")]
    TriangulationFailed { reason: String },

    /// Lokale Degeneration (zu wenige Eckpunkte, Selbstschnitt, Fläche ~0).
    /// Wird vom Aufrufer abgefangen und führt nur zum Verwerfen der Zelle.
    #[error("Degenerate geometry: {reason}")]
    DegenerateGeometry { reason: String },
}

pub type MathResult<T> = Result<T, MathError>;
