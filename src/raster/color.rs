// src/raster/color.rs

use crate::math::utils::angles::normalize_degrees;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 8-Bit-RGB-Farbe.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_hsl(self) -> Hsl {
        rgb_to_hsl(self)
    }
}

impl From<image::Rgb<u8>> for Rgb {
    fn from(pixel: image::Rgb<u8>) -> Self {
        let [r, g, b] = pixel.0;
        Self { r, g, b }
    }
}

/// CSS-Notation `rgb(r,g,b)`.
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

/// HSL mit Farbton in Grad `[0, 360)`, Sättigung und Helligkeit in Prozent `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Gleiche Sättigung/Helligkeit, Farbton um `degrees` verschoben.
    pub fn rotate_hue(self, degrees: f64) -> Self {
        Self {
            h: normalize_degrees(self.h + degrees),
            ..self
        }
    }

    pub fn to_rgb(self) -> Rgb {
        hsl_to_rgb(self)
    }
}

pub fn rgb_to_hsl(color: Rgb) -> Hsl {
    let r = color.r as f64 / 255.0;
    let g = color.g as f64 / 255.0;
    let b = color.b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl::new(0.0, 0.0, l * 100.0);
    }

    let delta = max - min;
    let s = if l <= 0.5 {
        delta / (max + min)
    } else {
        delta / (2.0 - max - min)
    };

    let rc = (max - r) / delta;
    let gc = (max - g) / delta;
    let bc = (max - b) / delta;
    let h = if r == max {
        bc - gc
    } else if g == max {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };

    Hsl::new(normalize_degrees(h * 60.0), s * 100.0, l * 100.0)
}

/// Rundet auf den nächsten Kanalwert, damit RGB→HSL→RGB verlustfrei bleibt.
pub fn hsl_to_rgb(color: Hsl) -> Rgb {
    let h = normalize_degrees(color.h) / 360.0;
    let s = (color.s / 100.0).clamp(0.0, 1.0);
    let l = (color.l / 100.0).clamp(0.0, 1.0);

    let (r, g, b) = if s == 0.0 {
        (l, l, l)
    } else {
        let m2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let m1 = 2.0 * l - m2;
        (
            hue_channel(m1, m2, h + 1.0 / 3.0),
            hue_channel(m1, m2, h),
            hue_channel(m1, m2, h - 1.0 / 3.0),
        )
    };

    Rgb::new(to_channel(r), to_channel(g), to_channel(b))
}

fn hue_channel(m1: f64, m2: f64, hue: f64) -> f64 {
    let hue = hue.rem_euclid(1.0);
    if hue < 1.0 / 6.0 {
        m1 + (m2 - m1) * hue * 6.0
    } else if hue < 0.5 {
        m2
    } else if hue < 2.0 / 3.0 {
        m1 + (m2 - m1) * (2.0 / 3.0 - hue) * 6.0
    } else {
        m1
    }
}

fn to_channel(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Farbverlauf über den gesamten Farbkreis: Offsets 0, 60, …, 360 Grad.
/// Erster und letzter Eintrag sind identisch, die Animation schließt nahtlos.
pub fn hue_cycle(base: Rgb, step_degrees: u32) -> Vec<Rgb> {
    let hsl = rgb_to_hsl(base);
    let step = step_degrees.max(1) as usize;
    (0..=360u32)
        .step_by(step)
        .map(|offset| hsl.rotate_hue(offset as f64).to_rgb())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn channel_diff(a: u8, b: u8) -> u8 {
        a.abs_diff(b)
    }

    #[test]
    fn test_primary_colors() {
        let red = rgb_to_hsl(Rgb::new(255, 0, 0));
        assert_abs_diff_eq!(red.h, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(red.s, 100.0, epsilon = 1e-9);
        assert_abs_diff_eq!(red.l, 50.0, epsilon = 1e-9);

        let green = rgb_to_hsl(Rgb::new(0, 255, 0));
        assert_abs_diff_eq!(green.h, 120.0, epsilon = 1e-9);

        let blue = rgb_to_hsl(Rgb::new(0, 0, 255));
        assert_abs_diff_eq!(blue.h, 240.0, epsilon = 1e-9);

        assert_eq!(hsl_to_rgb(Hsl::new(240.0, 100.0, 50.0)), Rgb::new(0, 0, 255));
    }

    #[test]
    fn test_gray_has_no_saturation() {
        let gray = rgb_to_hsl(Rgb::new(128, 128, 128));
        assert_eq!(gray.s, 0.0);
        assert_eq!(hsl_to_rgb(gray), Rgb::new(128, 128, 128));
    }

    #[test]
    fn test_round_trip_dense_sampling() {
        for r in (0..=255u16).step_by(5) {
            for g in (0..=255u16).step_by(7) {
                for b in (0..=255u16).step_by(3) {
                    let original = Rgb::new(r as u8, g as u8, b as u8);
                    let back = hsl_to_rgb(rgb_to_hsl(original));
                    assert!(
                        channel_diff(original.r, back.r) <= 1
                            && channel_diff(original.g, back.g) <= 1
                            && channel_diff(original.b, back.b) <= 1,
                        "{} -> {}",
                        original,
                        back
                    );
                }
            }
        }
    }

    #[test]
    fn test_hue_cycle_wraps_around() {
        let base = Rgb::new(200, 40, 90);
        let cycle = hue_cycle(base, 60);
        assert_eq!(cycle.len(), 7);
        assert_eq!(cycle[0], cycle[6]);
        assert!(channel_diff(cycle[0].r, base.r) <= 1);
        assert!(channel_diff(cycle[0].g, base.g) <= 1);
        assert!(channel_diff(cycle[0].b, base.b) <= 1);

        let hsl0 = rgb_to_hsl(cycle[0]);
        let hsl2 = rgb_to_hsl(cycle[2]);
        assert_abs_diff_eq!(hsl0.l, hsl2.l, epsilon = 0.5);
    }

    #[test]
    fn test_css_display() {
        assert_eq!(Rgb::new(1, 22, 255).to_string(), "rgb(1,22,255)");
    }
}
