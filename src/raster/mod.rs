// src/raster/mod.rs
pub mod color;
pub mod loader;
pub mod sampler;
pub mod source;

pub use color::{Hsl, Rgb, hsl_to_rgb, hue_cycle, rgb_to_hsl};
pub use loader::load_and_process_image;
pub use sampler::ColorSampler;
pub use source::RasterSource;
