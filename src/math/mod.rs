pub mod algorithms;
pub mod error;
pub mod geometry;
pub mod point_distribution;
pub mod probability;
pub mod types;
pub mod utils;

// Re-exports für einfache Verwendung
pub use error::{MathError, MathResult};
pub use types::*;
