// src/raster/loader.rs

use crate::config::VitrailConfig;
use crate::pipeline::error::{PipelineError, PipelineResult};
use image::{RgbImage, imageops, imageops::FilterType};
use std::path::Path;
use tracing::{debug, info};

/// Hintergrundfarbe der Leinwand (#1A1A1A).
pub const CANVAS_BACKGROUND: image::Rgb<u8> = image::Rgb([26, 26, 26]);

/// Breite des eingepassten Bildes relativ zur proportionalen Breite.
pub const WIDTH_SQUEEZE: f64 = 0.8;

/// Lädt ein Bild und legt es auf eine leinwandgroße Fläche.
///
/// Das Bild wird auf die Rahmenhöhe skaliert (Lanczos3), horizontal um den
/// Faktor [`WIDTH_SQUEEZE`] gestaucht, horizontal zentriert und oben bündig
/// mit dem Rahmen eingefügt. Der Rest der Leinwand ist [`CANVAS_BACKGROUND`].
pub fn load_and_process_image(path: &Path, config: &VitrailConfig) -> PipelineResult<RgbImage> {
    let original = image::open(path)
        .map_err(|source| PipelineError::Resource {
            path: path.to_path_buf(),
            source,
        })?
        .to_rgb8();
    info!(
        "Loaded raster '{}' ({}x{})",
        path.display(),
        original.width(),
        original.height()
    );
    Ok(fit_onto_canvas(&original, config))
}

/// Skaliert und platziert ein bereits geladenes Bild (siehe [`load_and_process_image`]).
pub fn fit_onto_canvas(original: &RgbImage, config: &VitrailConfig) -> RgbImage {
    let mut canvas =
        RgbImage::from_pixel(config.canvas_width, config.canvas_height, CANVAS_BACKGROUND);
    let (orig_w, orig_h) = original.dimensions();
    if orig_w == 0 || orig_h == 0 {
        return canvas;
    }

    let ratio = config.frame_height / orig_h as f64 * WIDTH_SQUEEZE;
    let new_w = ((orig_w as f64 * ratio) as u32).max(1);
    let new_h = (config.frame_height as u32).max(1);
    let resized = imageops::resize(original, new_w, new_h, FilterType::Lanczos3);

    let (_, frame_y) = config.frame_origin();
    let start_x = (config.canvas_width as i64 - new_w as i64).div_euclid(2);
    let start_y = frame_y as i64;
    debug!(
        "Raster resized to {}x{}, pasted at ({}, {})",
        new_w, new_h, start_x, start_y
    );
    imageops::overlay(&mut canvas, &resized, start_x, start_y);
    canvas
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> VitrailConfig {
        VitrailConfig::new()
            .with_canvas(200, 100)
            .with_frame(60.0, 80.0)
    }

    #[test]
    fn test_image_is_centered_and_squeezed() {
        let config = small_config();
        // 100x100 -> Höhe 80, Breite 100 * 0.8 * 0.8 = 64
        let original = RgbImage::from_pixel(100, 100, image::Rgb([250, 250, 250]));
        let canvas = fit_onto_canvas(&original, &config);

        assert_eq!(canvas.dimensions(), (200, 100));
        // Rahmen zentriert: y = (100 - 80) / 2 = 10; Bild x = (200 - 64) / 2 = 68
        assert_eq!(*canvas.get_pixel(0, 0), CANVAS_BACKGROUND);
        assert_eq!(*canvas.get_pixel(100, 5), CANVAS_BACKGROUND);
        assert_eq!(*canvas.get_pixel(67, 50), CANVAS_BACKGROUND);
        assert_eq!(*canvas.get_pixel(132, 50), CANVAS_BACKGROUND);
        assert_eq!(*canvas.get_pixel(100, 50), image::Rgb([250, 250, 250]));
    }

    #[test]
    fn test_missing_file_is_a_resource_error() {
        let err = load_and_process_image(Path::new("/definitely/not/here.png"), &small_config())
            .unwrap_err();
        assert!(matches!(err, PipelineError::Resource { .. }));
    }
}
