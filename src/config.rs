// src/config.rs

use crate::math::{
    algorithms::clipping::DEFAULT_MIN_CELL_AREA,
    error::{MathError, MathResult},
};
use crate::pipeline::error::{PipelineError, PipelineResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Konfiguration eines kompletten Laufs (Leinwand, Rahmen, Zellen, Animation).
///
/// Alle Felder haben Standardwerte; eine JSON-Datei muss nur die Abweichungen enthalten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VitrailConfig {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub frame_width: f64,
    pub frame_height: f64,
    /// Linke obere Ecke des Rahmens. `None` zentriert den Rahmen auf der Leinwand.
    pub frame_origin: Option<[f64; 2]>,
    /// Anzahl der zufälligen inneren Seeds.
    pub target_cell_count: usize,
    /// Wahrscheinlichkeit, dass eine Zelle animiert wird.
    pub animation_probability: f64,
    /// Maximaler Skalierungsfaktor der "Atem"-Animation.
    pub breathing_scale: f64,
    /// Maximale Neigung der Rotationsanimation in Grad.
    pub tilt_angle_deg: f64,
    pub min_cell_area: f64,
    pub anchors_per_edge: usize,
    pub anchor_inset: f64,
    /// Obere Grenze der zufälligen Startverzögerung animierter Zellen (Sekunden).
    pub max_delay_secs: f64,
    pub shadow_offset: f64,
    pub hue_cycle_period_secs: f64,
    pub motion_period_secs: f64,
    /// Seed für den RNG, um reproduzierbare Ergebnisse zu ermöglichen (optional)
    pub seed: Option<u64>,
    /// Zeitlimit für das Farb-Sampling (optional)
    pub sampling_timeout_secs: Option<f64>,
}

impl Default for VitrailConfig {
    fn default() -> Self {
        Self {
            canvas_width: 2800,
            canvas_height: 1500,
            frame_width: 900.0,
            frame_height: 1300.0,
            frame_origin: None,
            target_cell_count: 2000,
            animation_probability: 0.08,
            breathing_scale: 1.004,
            tilt_angle_deg: 8.0,
            min_cell_area: DEFAULT_MIN_CELL_AREA,
            anchors_per_edge: 20,
            anchor_inset: 1.0,
            max_delay_secs: 4.0,
            shadow_offset: 2.0,
            hue_cycle_period_secs: 6.0,
            motion_period_secs: 4.0,
            seed: None,
            sampling_timeout_secs: None,
        }
    }
}

impl VitrailConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lädt eine JSON-Konfiguration; fehlende Felder behalten ihre Standardwerte.
    /// Die Werte werden hier nicht geprüft; das übernimmt `VitrailPipeline::new`.
    pub fn from_json_file(path: &Path) -> PipelineResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| PipelineError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| PipelineError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn with_cells(mut self, count: usize) -> Self {
        self.target_cell_count = count;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_animation_probability(mut self, probability: f64) -> Self {
        self.animation_probability = probability;
        self
    }

    pub fn with_canvas(mut self, width: u32, height: u32) -> Self {
        self.canvas_width = width;
        self.canvas_height = height;
        self
    }

    pub fn with_frame(mut self, width: f64, height: f64) -> Self {
        self.frame_width = width;
        self.frame_height = height;
        self
    }

    pub fn with_frame_origin(mut self, x: f64, y: f64) -> Self {
        self.frame_origin = Some([x, y]);
        self
    }

    pub fn with_sampling_timeout(mut self, secs: f64) -> Self {
        self.sampling_timeout_secs = Some(secs);
        self
    }

    /// Linke obere Ecke des Rahmens (zentriert, falls nicht gesetzt).
    pub fn frame_origin(&self) -> (f64, f64) {
        match self.frame_origin {
            Some([x, y]) => (x, y),
            None => (
                (self.canvas_width as f64 - self.frame_width) / 2.0,
                (self.canvas_height as f64 - self.frame_height) / 2.0,
            ),
        }
    }

    pub fn validate(&self) -> MathResult<()> {
        let invalid = |message: String| Err(MathError::InvalidConfiguration { message });

        if self.canvas_width == 0 || self.canvas_height == 0 {
            return invalid(format!(
                "Canvas must not be empty, got {}x{}",
                self.canvas_width, self.canvas_height
            ));
        }
        if !(self.frame_width > 0.0 && self.frame_height > 0.0) {
            return invalid(format!(
                "Frame dimensions must be positive, got {}x{}",
                self.frame_width, self.frame_height
            ));
        }
        if !(0.0..=1.0).contains(&self.animation_probability) {
            return invalid(format!(
                "Animation probability must be in [0, 1], got {}",
                self.animation_probability
            ));
        }
        if !(self.breathing_scale > 0.0) {
            return invalid(format!(
                "Breathing scale must be positive, got {}",
                self.breathing_scale
            ));
        }
        if !self.tilt_angle_deg.is_finite() {
            return invalid("Tilt angle must be finite".to_string());
        }
        if !(self.min_cell_area >= 0.0) {
            return invalid(format!(
                "Minimum cell area must be non-negative, got {}",
                self.min_cell_area
            ));
        }
        if !(self.max_delay_secs >= 0.0 && self.max_delay_secs.is_finite()) {
            return invalid(format!(
                "Maximum delay must be a non-negative number of seconds, got {}",
                self.max_delay_secs
            ));
        }
        if !self.shadow_offset.is_finite() {
            return invalid("Shadow offset must be finite".to_string());
        }
        if !(self.hue_cycle_period_secs > 0.0 && self.motion_period_secs > 0.0) {
            return invalid(format!(
                "Animation periods must be positive, got hue {} / motion {}",
                self.hue_cycle_period_secs, self.motion_period_secs
            ));
        }
        if let Some(timeout) = self.sampling_timeout_secs {
            if !(timeout > 0.0) {
                return invalid(format!("Sampling timeout must be positive, got {}", timeout));
            }
            if let Err(e) = Duration::try_from_secs_f64(timeout) {
                return invalid(format!("Sampling timeout {} s is out of range: {}", timeout, e));
            }
        }
        // Anker und Rahmenform werden von SeedGenerator bzw. Frame selbst geprüft
        Ok(())
    }
}
