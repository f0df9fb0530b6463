// src/scene/assembler.rs

use super::model::{
    FrameOutline, HueCycle, Motion, Role, RotationOscillation, ScaleOscillation, Scene, SceneCell,
    Shadow,
};
use crate::config::VitrailConfig;
use crate::math::{algorithms::ClippedCell, geometry::Frame, probability::SeedResource};
use crate::raster::{Rgb, hue_cycle};
use crate::{next_random_range, next_random_ratio};
use tracing::{debug, warn};

/// Hintergrund der Leinwand (#1A1A1A).
pub const BACKGROUND: Rgb = Rgb {
    r: 26,
    g: 26,
    b: 26,
};

/// Farbtonschritt des Farbzyklus in Grad.
pub const HUE_STEP_DEG: u32 = 60;

/// Parameter der Rollenverteilung und Animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSettings {
    pub probability: f64,
    pub breathing_scale: f64,
    pub tilt_angle_deg: f64,
    pub max_delay_secs: f64,
    pub hue_cycle_period_secs: f64,
    pub motion_period_secs: f64,
    pub shadow_offset: f64,
}

impl From<&VitrailConfig> for AnimationSettings {
    fn from(config: &VitrailConfig) -> Self {
        Self {
            probability: config.animation_probability,
            breathing_scale: config.breathing_scale,
            tilt_angle_deg: config.tilt_angle_deg,
            max_delay_secs: config.max_delay_secs,
            hue_cycle_period_secs: config.hue_cycle_period_secs,
            motion_period_secs: config.motion_period_secs,
            shadow_offset: config.shadow_offset,
        }
    }
}

/// Verteilt Rollen und baut daraus die [`Scene`].
#[derive(Debug, Clone)]
pub struct SceneAssembler {
    settings: AnimationSettings,
    canvas: (u32, u32),
}

impl SceneAssembler {
    pub fn new(settings: AnimationSettings, canvas_width: u32, canvas_height: u32) -> Self {
        Self {
            settings,
            canvas: (canvas_width, canvas_height),
        }
    }

    pub fn from_config(config: &VitrailConfig) -> Self {
        Self::new(
            AnimationSettings::from(config),
            config.canvas_width,
            config.canvas_height,
        )
    }

    /// Rolle einer Zelle. Zieht genau einen Bernoulli-Versuch und bei
    /// animierten Zellen zusätzlich die Verzögerung.
    pub fn assign_role(&self, cell: &ClippedCell, seed_resource: &mut SeedResource) -> Role {
        if !next_random_ratio!(seed_resource, self.settings.probability) {
            return Role::Static;
        }
        let delay_secs = next_random_range!(seed_resource, 0.0, self.settings.max_delay_secs);
        let period_secs = self.settings.motion_period_secs;
        Role::Animated(Motion {
            delay_secs,
            scale: ScaleOscillation {
                peak: self.settings.breathing_scale,
                period_secs,
                delay_secs,
            },
            rotation: RotationOscillation {
                amplitude_deg: self.settings.tilt_angle_deg,
                period_secs,
                delay_secs,
                pivot: cell.polygon.lowest_vertex(),
            },
        })
    }

    /// Baut die Szene aus den geclippten Zellen und ihren Durchschnittsfarben
    /// (gleiche Reihenfolge, gleiche Länge).
    pub fn assemble(
        &self,
        frame: &Frame,
        cells: Vec<ClippedCell>,
        colors: &[Rgb],
        seed_resource: &mut SeedResource,
    ) -> Scene {
        if cells.len() != colors.len() {
            warn!(
                "SceneAssembler: {} cells but {} colours, surplus entries are ignored",
                cells.len(),
                colors.len()
            );
        }

        let mut shadows = Vec::with_capacity(cells.len());
        let mut static_cells = Vec::new();
        let mut animated_cells = Vec::new();

        for (cell, &fill) in cells.into_iter().zip(colors) {
            let role = self.assign_role(&cell, seed_resource);
            shadows.push(Shadow::new(cell.polygon.clone(), self.settings.shadow_offset));
            let scene_cell = SceneCell {
                seed_index: cell.seed_index,
                sub_index: cell.sub_index,
                polygon: cell.polygon,
                fill,
                hue_cycle: HueCycle {
                    period_secs: self.settings.hue_cycle_period_secs,
                    values: hue_cycle(fill, HUE_STEP_DEG),
                },
                role,
            };
            if role.is_animated() {
                animated_cells.push(scene_cell);
            } else {
                static_cells.push(scene_cell);
            }
        }

        debug!(
            "SceneAssembler: {} static, {} animated cells (p = {})",
            static_cells.len(),
            animated_cells.len(),
            self.settings.probability
        );

        Scene {
            width: self.canvas.0,
            height: self.canvas.1,
            background: BACKGROUND,
            shadows,
            static_cells,
            animated_cells,
            frame: FrameOutline::golden(frame.outline()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::geometry::Polygon;
    use crate::math::types::Point;

    fn unit_cell(index: usize, x: f64) -> ClippedCell {
        let polygon = Polygon::new(vec![
            Point::new(x, 5.0),
            Point::new(x + 1.0, 3.0),
            Point::new(x + 2.0, 3.0),
            Point::new(x + 2.0, 6.0),
        ])
        .unwrap();
        ClippedCell {
            seed_index: index,
            sub_index: 0,
            bounds: polygon.bounds(),
            polygon,
        }
    }

    fn assembler(probability: f64) -> SceneAssembler {
        SceneAssembler::from_config(&VitrailConfig::new().with_animation_probability(probability))
    }

    #[test]
    fn test_animation_share_matches_probability() {
        let assembler = assembler(0.08);
        let cell = unit_cell(0, 0.0);
        let mut seed_resource = SeedResource::from_seed(42);
        let animated = (0..2000)
            .filter(|_| assembler.assign_role(&cell, &mut seed_resource).is_animated())
            .count();
        assert!((120..=200).contains(&animated), "animated = {}", animated);
    }

    #[test]
    fn test_pivot_is_lowest_vertex_and_delay_in_range() {
        let assembler = assembler(1.0);
        let cell = unit_cell(0, 10.0);
        let mut seed_resource = SeedResource::from_seed(7);
        for _ in 0..50 {
            let Role::Animated(motion) = assembler.assign_role(&cell, &mut seed_resource) else {
                panic!("p = 1 must always animate");
            };
            // Minimales y, bei Gleichstand der erste Eckpunkt
            assert_eq!(motion.pivot(), Point::new(11.0, 3.0));
            assert!((0.0..=4.0).contains(&motion.delay_secs));
            assert_eq!(motion.scale.keyframes(), [1.0, 1.004, 1.0]);
            assert_eq!(motion.rotation.keyframes(), [0.0, 8.0, -2.0, 0.0, 0.0]);
        }
    }

    #[test]
    fn test_scene_layers() {
        let frame = Frame::arched(0.0, 0.0, 40.0, 60.0).unwrap();
        let cells: Vec<ClippedCell> = (0..20).map(|i| unit_cell(i, 5.0)).collect();
        let colors = vec![Rgb::new(10, 200, 30); cells.len()];
        let mut seed_resource = SeedResource::from_seed(3);

        let scene = assembler(0.5).assemble(&frame, cells, &colors, &mut seed_resource);

        assert_eq!(scene.cell_count(), 20);
        assert_eq!(scene.shadows.len(), 20);
        assert!(scene.static_cells.iter().all(|c| c.role == Role::Static));
        assert!(scene.animated_cells.iter().all(|c| c.role.is_animated()));
        assert_eq!(scene.background, BACKGROUND);
        assert_eq!(scene.frame.gradient[0].color, "gold");
        assert_eq!(scene.frame.stroke_width, 8.0);

        let shadow = &scene.shadows[0];
        assert_eq!(shadow.translated_polygon().vertices()[0], Point::new(7.0, 7.0));
        assert_eq!(shadow.opacity, 0.5);

        let cell = scene.cells().next().unwrap();
        assert_eq!(cell.hue_cycle.values.len(), 7);
        assert_eq!(cell.hue_cycle.period_secs, 6.0);
    }

    #[test]
    fn test_zero_probability_is_fully_static() {
        let frame = Frame::arched(0.0, 0.0, 40.0, 60.0).unwrap();
        let cells: Vec<ClippedCell> = (0..30).map(|i| unit_cell(i, 5.0)).collect();
        let colors = vec![Rgb::BLACK; cells.len()];
        let scene =
            assembler(0.0).assemble(&frame, cells, &colors, &mut SeedResource::from_seed(1));
        assert!(scene.animated_cells.is_empty());
        assert_eq!(scene.static_cells.len(), 30);
    }
}
