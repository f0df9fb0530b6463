// src/math/utils.rs

/// Mathematische Konstanten
pub mod constants {
    pub const EPSILON: f64 = 1e-9;
    /// Mindestabstand zum Rand, ab dem ein Pixelzentrum als "strikt innen" gilt.
    pub const CLIP_TOLERANCE: f64 = 1e-6;
    /// Wie weit Eckpunkte eines Boolean-Ergebnisses (geo) außerhalb der
    /// Operanden liegen können. Gemessen: bis ~1e-4 bei 2000 Zellen.
    pub const BOOLEAN_OP_TOLERANCE: f64 = 1e-3;
}

/// Winkel-Hilfsfunktionen
pub mod angles {
    /// Konvertiert Grad zu Radiant
    pub fn deg_to_rad(degrees: f64) -> f64 {
        degrees.to_radians()
    }

    /// Normalisiert einen Winkel in Grad auf [0, 360)
    pub fn normalize_degrees(angle: f64) -> f64 {
        let result = angle.rem_euclid(360.0);
        // rem_euclid kann bei -0.0000001 genau 360.0 liefern
        if result >= 360.0 { 0.0 } else { result }
    }
}

/// Gleichmäßig verteilte Werte von `start` bis `end` (inklusive), analog zu `linspace`.
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            (0..count)
                .map(|i| {
                    if i == count - 1 {
                        end
                    } else {
                        start + step * i as f64
                    }
                })
                .collect()
        }
    }
}
