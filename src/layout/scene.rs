//! Scene composition - one full calculation cycle
//!
//! `compose` runs the whole pipeline for a single frame:
//!
//! 1. measure the shape (and reference body)
//! 2. pick a scale from both footprints and the viewport
//! 3. place the reference body at the viewport center and the shape by
//!    alignment mode
//! 4. render both, plus overlays, into one z-sorted instruction list
//! 5. test the two bounding boxes for overlap
//!
//! Nothing is cached between calls. An animation re-runs `compose` with an
//! advanced orbit phase every tick.

use nalgebra::{Point2, Vector2};
use serde::Serialize;

use super::alignment::{
    self, AlignmentMode, PlacementInput, DEFAULT_MARGIN, DEFAULT_ORBIT_PHASE,
};
use super::overlap::BoundingBox;
use super::scale::{self, ScaleRegime, ScaleRequest, Viewport};
use crate::render::{sort_by_z, z, Color, RenderInstruction};
use crate::shapes::{self, Measured, MetricsReport, ReferenceBody, Shape, ShapeStyle};

/// Size of the center cross markers, in pixels
const MARKER_SIZE: f64 = 8.0;
/// Gap between the shape and its label, in pixels
const LABEL_GAP: f64 = 12.0;

/// Inputs of one calculation cycle
#[derive(Clone, Debug, PartialEq)]
pub struct SceneRequest {
    pub shape: Shape,
    pub reference: Option<ReferenceBody>,
    pub alignment: AlignmentMode,
    pub viewport: Viewport,
    /// Enable the logarithmic scale fallback
    pub use_log: bool,
    /// External zoom control
    pub multiplier: f64,
    /// Gap between body and shape for the adjacent modes, in pixels
    pub margin: f64,
    /// Orbit angle in radians; `None` gives the static 45° snapshot
    pub phase: Option<f64>,
    /// Orbit angular speed in radians per second
    pub orbit_speed: f64,
    /// Seed for `Random` alignment
    pub seed: Option<u64>,
    /// Fill color override
    pub fill: Option<Color>,
    /// Fill opacity, 0-100
    pub opacity: u8,
    /// Draw center markers and the shape label
    pub overlays: bool,
}

impl SceneRequest {
    pub fn new(shape: Shape, viewport: Viewport) -> Self {
        Self {
            shape,
            reference: None,
            alignment: AlignmentMode::Center,
            viewport,
            use_log: false,
            multiplier: 1.0,
            margin: DEFAULT_MARGIN,
            phase: None,
            orbit_speed: 1.0,
            seed: None,
            fill: None,
            opacity: 100,
            overlays: true,
        }
    }

    pub fn with_reference(mut self, reference: ReferenceBody) -> Self {
        self.reference = Some(reference);
        self
    }

    pub fn with_alignment(mut self, alignment: AlignmentMode) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn with_phase(mut self, phase: f64) -> Self {
        self.phase = Some(phase);
        self
    }

    /// The same request with the orbit phase moved on by `dt` seconds
    pub fn advanced(&self, dt: f64) -> Self {
        let phase = self.phase.unwrap_or(DEFAULT_ORBIT_PHASE);
        self.clone()
            .with_phase(alignment::advance_phase(phase, self.orbit_speed, dt))
    }
}

/// Derived placement of one frame; never stored
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PlacementResult {
    /// Pixels per native unit
    pub scale: f64,
    /// Which scale branch was taken
    pub regime: ScaleRegime,
    /// `None` when there is no reference body
    pub reference_center: Option<Point2<f64>>,
    pub shape_center: Point2<f64>,
    /// Bounding-box overlap between shape and reference body
    pub overlap: bool,
}

/// Everything the caller needs to draw and report one frame
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Scene {
    pub placement: PlacementResult,
    pub report: MetricsReport,
    /// Sorted by z-order, lowest first
    pub instructions: Vec<RenderInstruction>,
}

/// Run one full calculation cycle
pub fn compose(request: &SceneRequest) -> Scene {
    let shape = &request.shape;
    let footprint = shape.footprint();

    let mut scale_request = ScaleRequest::new(footprint, request.viewport)
        .with_log(request.use_log)
        .with_multiplier(request.multiplier);
    if let Some(body) = &request.reference {
        scale_request = scale_request.with_reference(body.footprint());
    }
    let selection = scale::select(&scale_request);
    let scale = selection.scale;

    let viewport_center = Point2::new(request.viewport.width / 2.0, request.viewport.height / 2.0);
    let shape_size = Vector2::new(footprint.width * scale, footprint.height * scale);
    let body_radius = request.reference.as_ref().map(|b| b.radius() * scale);

    // Without a reference body only Random moves the shape off-center
    let anchor_radius = body_radius.unwrap_or(0.0);
    let mode = match body_radius {
        Some(_) => request.alignment,
        None if request.alignment == AlignmentMode::Random => AlignmentMode::Random,
        None => AlignmentMode::Center,
    };
    let mut input =
        PlacementInput::new(viewport_center, anchor_radius, shape_size, request.viewport)
            .with_margin(request.margin);
    input.phase = request.phase;
    let shape_center = alignment::place(mode, &input, request.seed);

    let shape_box = BoundingBox::from_center_size(shape_center, shape_size.x, shape_size.y);
    let overlap = body_radius.is_some_and(|r| {
        let body_box = BoundingBox::from_center_size(viewport_center, 2.0 * r, 2.0 * r);
        body_box.intersects(&shape_box)
    });

    log::debug!(
        "{} at ({:.1}, {:.1}), scale {:e} ({:?}), overlap {}",
        shape.kind(),
        shape_center.x,
        shape_center.y,
        scale,
        selection.regime,
        overlap
    );

    let mut style = ShapeStyle::for_kind(shape.kind());
    if let Some(fill) = request.fill {
        style = style.with_fill(fill);
    }
    let style = style.with_opacity(request.opacity);

    let mut instructions = Vec::new();
    if let Some(body) = &request.reference {
        instructions.extend(shapes::render_body(body, viewport_center, scale));
        if mode == AlignmentMode::Orbit {
            let radius = anchor_radius + shape_size.x / 2.0 + request.margin;
            instructions.push(shapes::orbit_path(viewport_center, radius));
        }
        if request.overlays {
            instructions.extend(shapes::center_marker(viewport_center, MARKER_SIZE, Color::BLACK));
        }
    }
    instructions.extend(shapes::render_at(shape, shape_center, scale, &style));
    if request.overlays {
        instructions.extend(shapes::center_marker(shape_center, MARKER_SIZE, style.stroke));
        instructions.push(RenderInstruction::text(
            Point2::new(shape_center.x, shape_box.max_y + LABEL_GAP),
            shape.kind().name(),
            z::LABELS,
            Color::BLACK,
        ));
    }
    sort_by_z(&mut instructions);

    Scene {
        placement: PlacementResult {
            scale,
            regime: selection.regime,
            reference_center: request.reference.as_ref().map(|_| viewport_center),
            shape_center,
            overlap,
        },
        report: MetricsReport::of(shape).with_scale(scale),
        instructions,
    }
}
