// ./src/lib.rs

// Eigene Module deklarieren
pub mod config;
pub mod math;
pub mod pipeline;
pub mod raster;
pub mod render;
pub mod scene;

pub use config::VitrailConfig;
pub use pipeline::{CancellationToken, PipelineError, VitrailPipeline};
