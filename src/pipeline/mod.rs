// src/pipeline/mod.rs

//! Ablauf eines Laufs: Rahmen → Seeds → Voronoi → Clipping → Farben → Szene.

pub mod cancellation;
pub mod error;

pub use cancellation::{CancellationToken, Cancelled};
pub use error::{PipelineError, PipelineResult};

use crate::config::VitrailConfig;
use crate::math::{
    algorithms::{ClippedCell, FrameClipper},
    error::MathResult,
    geometry::{Frame, GeometryKernel, SpadeGeoKernel},
    point_distribution::SeedGenerator,
    probability::SeedResource,
};
use crate::raster::{ColorSampler, RasterSource, load_and_process_image};
use crate::render::write_svg;
use crate::scene::{Scene, SceneAssembler};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

pub struct VitrailPipeline<K: GeometryKernel = SpadeGeoKernel> {
    config: VitrailConfig,
    kernel: K,
}

impl VitrailPipeline<SpadeGeoKernel> {
    pub fn new(config: VitrailConfig) -> PipelineResult<Self> {
        Self::with_kernel(config, SpadeGeoKernel::new())
    }
}

impl<K: GeometryKernel> VitrailPipeline<K> {
    /// Prüft die Konfiguration; ein ungültiger Wert ist ein Konstruktionsfehler.
    pub fn with_kernel(config: VitrailConfig, kernel: K) -> PipelineResult<Self> {
        config.validate()?;
        Ok(Self { config, kernel })
    }

    pub fn config(&self) -> &VitrailConfig {
        &self.config
    }

    /// Zufallsquelle gemäß `config.seed`, sonst zufällig geseedet.
    pub fn seed_resource(&self) -> SeedResource {
        match self.config.seed {
            Some(seed) => SeedResource::from_seed(seed),
            None => SeedResource::default(),
        }
    }

    /// Token mit dem konfigurierten Zeitlimit (falls gesetzt).
    pub fn cancellation_token(&self) -> CancellationToken {
        let token = CancellationToken::new();
        // validate() hat die Darstellbarkeit bereits geprüft
        match self
            .config
            .sampling_timeout_secs
            .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
        {
            Some(timeout) => token.with_timeout(timeout),
            None => token,
        }
    }

    pub fn build_frame(&self) -> MathResult<Frame> {
        let (x, y) = self.config.frame_origin();
        Frame::arched(x, y, self.config.frame_width, self.config.frame_height)
    }

    /// Seeds erzeugen, tessellieren und auf den Rahmen clippen.
    pub fn tessellate(
        &self,
        frame: &Frame,
        seed_resource: &mut SeedResource,
    ) -> MathResult<Vec<ClippedCell>> {
        let step_description =
            |step_name: &str| format!("VitrailPipeline::tessellate - Step: {}", step_name);

        let seeds = SeedGenerator::new(self.config.anchors_per_edge, self.config.anchor_inset)
            .generate(&frame.bounds(), self.config.target_cell_count, seed_resource)?;
        debug!(
            "{}: {} seeds ({} interior)",
            step_description("SeedGeneration"),
            seeds.len(),
            seeds.interior.len()
        );

        let raw_cells = self.kernel.bounded_regions(&seeds.all_points())?;
        debug!(
            "{}: {} bounded regions",
            step_description("Tessellation"),
            raw_cells.len()
        );

        let cells = FrameClipper::new(self.config.min_cell_area).clip_all(
            &self.kernel,
            frame,
            &raw_cells,
        );
        debug!("{}: {} cells", step_description("Clipping"), cells.len());
        Ok(cells)
    }

    /// Kompletter Lauf auf einem bereits vorbereiteten Raster.
    pub fn run<R: RasterSource + ?Sized>(
        &self,
        raster: &R,
        seed_resource: &mut SeedResource,
        token: &CancellationToken,
    ) -> PipelineResult<Scene> {
        let step_description =
            |step_name: &str| format!("VitrailPipeline::run - Step: {}", step_name);

        let frame = self.build_frame()?;
        debug!(
            "{}: frame {} (area {:.1})",
            step_description("FrameConstruction"),
            frame.bounds(),
            frame.area()
        );

        let cells = self.tessellate(&frame, seed_resource)?;

        let colors = ColorSampler::new().sample_all(&self.kernel, raster, &cells, token)?;
        debug!(
            "{}: {} colours",
            step_description("ColorSampling"),
            colors.len()
        );

        let scene = SceneAssembler::from_config(&self.config).assemble(
            &frame,
            cells,
            &colors,
            seed_resource,
        );
        info!(
            "{}: {} cells ({} animated, seed {})",
            step_description("SceneAssembly"),
            scene.cell_count(),
            scene.animated_cells.len(),
            seed_resource.seed
        );
        Ok(scene)
    }

    /// Bild laden, Szene bauen, SVG schreiben.
    pub fn render_file(&self, input: &Path, output: &Path) -> PipelineResult<Scene> {
        let raster = load_and_process_image(input, &self.config)?;
        let mut seed_resource = self.seed_resource();
        let token = self.cancellation_token();
        let scene = self.run(&raster, &mut seed_resource, &token)?;
        write_svg(&scene, output)?;
        Ok(scene)
    }
}
