// src/render/svg.rs
use crate::math::{geometry::Polygon, types::Point};
use crate::pipeline::error::{PipelineError, PipelineResult};
use crate::scene::{
    FrameOutline, HueCycle, Motion, Role, RotationOscillation, Scene, SceneCell, Shadow,
};
use std::path::Path;
use svg::Document;
use svg::node::element::{
    Animate, AnimateTransform, Definitions, Group, LinearGradient, Path as SvgPath,
    Polygon as SvgPolygon, Rectangle, Stop,
};
use tracing::info;

const FRAME_GRADIENT_ID: &str = "frame-gradient";
const CELL_STROKE: &str = "black";
const CELL_STROKE_WIDTH: f64 = 2.0;
/// Easing für den Atem-Zyklus (zwei Segmente).
const SCALE_KEY_SPLINES: &str = "0.25 0.1 0.25 1;0.25 0.1 0.25 1";
/// Easing für das Kippen (vier Segmente, beschleunigend).
const ROTATE_KEY_SPLINES: &str = "0.8 0 1 1;0.8 0 1 1;0.8 0 1 1;0.8 0 1 1";

// ===================================================================================
// HILFS-STRUCT für die SVG-Erstellung
// ===================================================================================
/// Sammelt die Ebenen der Szene in einem SVG-Dokument.
struct SvgBuilder {
    document: Document,
}

impl SvgBuilder {
    /// Leinwandgroßes Dokument mit Hintergrundrechteck.
    fn new(scene: &Scene) -> Self {
        let background = Rectangle::new()
            .set("x", 0)
            .set("y", 0)
            .set("width", scene.width)
            .set("height", scene.height)
            .set(
                "fill",
                format!(
                    "#{:02X}{:02X}{:02X}",
                    scene.background.r, scene.background.g, scene.background.b
                ),
            );

        let document = Document::new()
            .set("width", scene.width)
            .set("height", scene.height)
            .set("viewBox", (0, 0, scene.width, scene.height))
            .add(background);

        Self { document }
    }

    fn add_layer(mut self, layer: Group) -> Self {
        self.document = self.document.add(layer);
        self
    }

    /// Rahmenpfad mit Verlauf; die Verlaufsdefinition kommt in `<defs>`.
    fn add_frame(mut self, frame: &FrameOutline) -> Self {
        let mut gradient = LinearGradient::new()
            .set("id", FRAME_GRADIENT_ID)
            .set("x1", 0)
            .set("y1", 0)
            .set("x2", 1)
            .set("y2", 0)
            .set("gradientUnits", "objectBoundingBox");
        for stop in &frame.gradient {
            gradient = gradient.add(
                Stop::new()
                    .set("offset", stop.offset)
                    .set("stop-color", stop.color.as_str()),
            );
        }

        let path = SvgPath::new()
            .set("d", path_data(&frame.path))
            .set("fill", "none")
            .set("stroke", format!("url(#{})", FRAME_GRADIENT_ID))
            .set("stroke-width", frame.stroke_width);

        self.document = self
            .document
            .add(Definitions::new().add(gradient))
            .add(path);
        self
    }

    /// Speichert die SVG-Datei.
    fn save(self, path: &Path) -> PipelineResult<()> {
        svg::save(path, &self.document).map_err(|source| PipelineError::Output {
            path: path.to_path_buf(),
            source,
        })?;
        info!("SVG '{}' wurde erstellt.", path.display());
        Ok(())
    }
}

fn format_points(polygon: &Polygon) -> String {
    polygon
        .vertices()
        .iter()
        .map(|p| format!("{:.3},{:.3}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

fn path_data(points: &[Point]) -> String {
    let mut segments = points.iter().enumerate().map(|(i, p)| {
        let command = if i == 0 { 'M' } else { 'L' };
        format!("{} {:.3} {:.3}", command, p.x, p.y)
    });
    let mut data = segments.next().unwrap_or_default();
    for segment in segments {
        data.push(' ');
        data.push_str(&segment);
    }
    data.push_str(" Z");
    data
}

fn begin(delay_secs: f64) -> String {
    format!("{:.2}s", delay_secs)
}

fn duration(period_secs: f64) -> String {
    format!("{}s", period_secs)
}

fn hue_animation(cycle: &HueCycle) -> Animate {
    let values = cycle
        .values
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(";");
    Animate::new()
        .set("attributeName", "fill")
        .set("dur", duration(cycle.period_secs))
        .set("values", values)
        .set("calcMode", "linear")
        .set("repeatCount", "indefinite")
}

fn scale_animation(motion: &Motion) -> AnimateTransform {
    let values = motion
        .scale
        .keyframes()
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(";");
    AnimateTransform::new()
        .set("attributeName", "transform")
        .set("attributeType", "XML")
        .set("type", "scale")
        .set("dur", duration(motion.scale.period_secs))
        .set("values", values)
        .set("begin", begin(motion.scale.delay_secs))
        .set("calcMode", "spline")
        .set("keySplines", SCALE_KEY_SPLINES)
        .set("repeatCount", "indefinite")
}

fn rotate_animation(motion: &Motion) -> AnimateTransform {
    let rotation = &motion.rotation;
    let pivot = rotation.pivot;
    let values = rotation
        .keyframes()
        .iter()
        .map(|angle| format!("{} {:.3} {:.3}", angle, pivot.x, pivot.y))
        .collect::<Vec<_>>()
        .join(";");
    let key_times = RotationOscillation::KEY_TIMES
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(";");
    AnimateTransform::new()
        .set("attributeName", "transform")
        .set("attributeType", "XML")
        .set("type", "rotate")
        .set("dur", duration(rotation.period_secs))
        .set("values", values)
        .set("begin", begin(rotation.delay_secs))
        .set("calcMode", "spline")
        .set("keyTimes", key_times)
        .set("keySplines", ROTATE_KEY_SPLINES)
        .set("additive", "sum")
        .set("repeatCount", "indefinite")
}

fn shadow_element(shadow: &Shadow) -> SvgPolygon {
    SvgPolygon::new()
        .set("points", format_points(&shadow.translated_polygon()))
        .set(
            "fill",
            format!(
                "rgba({}, {}, {}, {})",
                shadow.color.r, shadow.color.g, shadow.color.b, shadow.opacity
            ),
        )
        .set("stroke", "none")
}

fn cell_element(cell: &SceneCell) -> SvgPolygon {
    let mut element = SvgPolygon::new()
        .set("points", format_points(&cell.polygon))
        .set("fill", cell.fill.to_string())
        .set("stroke", CELL_STROKE)
        .set("stroke-width", CELL_STROKE_WIDTH)
        .add(hue_animation(&cell.hue_cycle));
    if let Role::Animated(motion) = &cell.role {
        element = element
            .add(scale_animation(motion))
            .add(rotate_animation(motion));
    }
    element
}

/// Baut alle Ebenen: Hintergrund, `static-layer` (Schatten, dann statische
/// Zellen), `animated-layer`, Rahmen.
fn build(scene: &Scene) -> SvgBuilder {
    let mut static_layer = Group::new().set("id", "static-layer");
    for shadow in &scene.shadows {
        static_layer = static_layer.add(shadow_element(shadow));
    }
    for cell in &scene.static_cells {
        static_layer = static_layer.add(cell_element(cell));
    }

    let mut animated_layer = Group::new().set("id", "animated-layer");
    for cell in &scene.animated_cells {
        animated_layer = animated_layer.add(cell_element(cell));
    }

    SvgBuilder::new(scene)
        .add_layer(static_layer)
        .add_layer(animated_layer)
        .add_frame(&scene.frame)
}

pub fn scene_to_document(scene: &Scene) -> Document {
    build(scene).document
}

/// Schreibt die Szene als SVG nach `path`.
pub fn write_svg(scene: &Scene, path: &Path) -> PipelineResult<()> {
    build(scene).save(path)
}
