//! Scale selection - one pixels-per-unit factor for the whole scene
//!
//! A plain fit-to-viewport scale breaks down when the shape and the
//! reference body differ by many orders of magnitude (a 1 m square next to a
//! planet). Two policy branches keep the result usable:
//!
//! - **Dominance**: when the reference body is more than 100x larger than the
//!   shape, only the body is fitted (to 40% of the viewport). The shape may
//!   end up a few pixels wide, or smaller.
//! - **Logarithmic fallback**: when enabled, a huge shape that would collapse
//!   below 0.01 px/unit gets a crude log10-compressed scale instead.
//!
//! The result is then multiplied by the caller's zoom and clamped.

use serde::{Deserialize, Serialize};

use crate::shapes::Footprint;

/// Smallest scale ever returned
pub const MIN_SCALE: f64 = 0.0001;
/// Largest scale ever returned
pub const MAX_SCALE: f64 = 10_000.0;

/// Fraction of the viewport a lone shape (or the larger of two objects) fills
const FIT_FRACTION: f64 = 0.8;
/// Fraction of the viewport a dominant reference body fills
const DOMINANT_FIT_FRACTION: f64 = 0.4;
/// Size ratio above which the reference body is considered dominant
const DOMINANCE_RATIO: f64 = 100.0;
/// Guard against dividing by a vanishing shape dimension
const EPSILON: f64 = 0.001;
/// Scale below which the logarithmic fallback may kick in
const LOG_TRIGGER_SCALE: f64 = 0.01;
/// Shape extent above which the logarithmic fallback may kick in
const LOG_TRIGGER_EXTENT: f64 = 1000.0;

/// Viewport size in pixels
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Zero, negative or non-finite in either dimension
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

/// Inputs of a scale computation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleRequest {
    pub shape: Footprint,
    pub reference: Option<Footprint>,
    pub viewport: Viewport,
    /// Enable the logarithmic fallback for huge shapes
    pub use_log: bool,
    /// External zoom control
    pub multiplier: f64,
}

impl ScaleRequest {
    pub fn new(shape: Footprint, viewport: Viewport) -> Self {
        Self {
            shape,
            reference: None,
            viewport,
            use_log: false,
            multiplier: 1.0,
        }
    }

    pub fn with_reference(mut self, reference: Footprint) -> Self {
        self.reference = Some(reference);
        self
    }

    pub fn with_log(mut self, use_log: bool) -> Self {
        self.use_log = use_log;
        self
    }

    pub fn with_multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = multiplier;
        self
    }
}

/// Which branch produced the base scale, for diagnostics
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ScaleRegime {
    /// Shape alone fitted to the viewport
    ShapeOnly,
    /// Larger of shape and reference fitted to the viewport
    Combined,
    /// Reference body dominates and is fitted alone
    ReferenceDominant,
    /// Logarithmic compression of a huge shape
    Logarithmic,
    /// Viewport had no usable size
    DegenerateViewport,
}

/// Resolved scale and the branch it came from
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ScaleSelection {
    pub scale: f64,
    pub regime: ScaleRegime,
}

/// Compute the scene scale; always within `[MIN_SCALE, MAX_SCALE]`
pub fn select_scale(request: &ScaleRequest) -> f64 {
    select(request).scale
}

/// Compute the scene scale together with the branch taken
pub fn select(request: &ScaleRequest) -> ScaleSelection {
    let (base, mut regime) = base_scale(request);

    let mut scale = base;
    let extent = request.shape.max_extent();
    if request.use_log
        && regime != ScaleRegime::DegenerateViewport
        && base < LOG_TRIGGER_SCALE
        && extent > LOG_TRIGGER_EXTENT
    {
        scale = FIT_FRACTION * request.viewport.width / (extent.log10() * 100.0);
        regime = ScaleRegime::Logarithmic;
        log::debug!("log scale fallback: {base:e} -> {scale:e} (extent {extent:e})");
    }

    let multiplier = if request.multiplier.is_finite() && request.multiplier > 0.0 {
        request.multiplier
    } else {
        log::warn!("ignoring invalid scale multiplier {}", request.multiplier);
        1.0
    };
    scale *= multiplier;

    // NaN cannot survive clamp's comparisons, so map it to the floor explicitly
    let scale = if scale.is_nan() {
        MIN_SCALE
    } else {
        scale.clamp(MIN_SCALE, MAX_SCALE)
    };

    ScaleSelection { scale, regime }
}

fn base_scale(request: &ScaleRequest) -> (f64, ScaleRegime) {
    let viewport = request.viewport;
    if viewport.is_degenerate() {
        log::warn!(
            "degenerate viewport {}x{}, falling back to unit scale",
            viewport.width,
            viewport.height
        );
        return (1.0, ScaleRegime::DegenerateViewport);
    }

    let shape = request.shape;
    let (scale_x, scale_y, regime) = match request.reference {
        None => (
            FIT_FRACTION * viewport.width / shape.width,
            FIT_FRACTION * viewport.height / shape.height,
            ScaleRegime::ShapeOnly,
        ),
        Some(reference) => {
            let size_ratio = (reference.width / shape.width.max(EPSILON))
                .max(reference.height / shape.height.max(EPSILON));

            if size_ratio > DOMINANCE_RATIO {
                log::debug!("reference body dominates (ratio {size_ratio:e})");
                (
                    DOMINANT_FIT_FRACTION * viewport.width / reference.width,
                    DOMINANT_FIT_FRACTION * viewport.height / reference.height,
                    ScaleRegime::ReferenceDominant,
                )
            } else {
                (
                    FIT_FRACTION * viewport.width / shape.width.max(reference.width),
                    FIT_FRACTION * viewport.height / shape.height.max(reference.height),
                    ScaleRegime::Combined,
                )
            }
        }
    };

    (scale_x.min(scale_y), regime)
}
