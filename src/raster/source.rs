// src/raster/source.rs

use super::color::Rgb;

/// Lesender Zugriff auf ein Pixelraster.
pub trait RasterSource: Sync {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    /// `x < width()`, `y < height()`.
    fn pixel(&self, x: u32, y: u32) -> Rgb;
}

impl RasterSource for image::RgbImage {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn pixel(&self, x: u32, y: u32) -> Rgb {
        Rgb::from(*self.get_pixel(x, y))
    }
}
