//! Alignment - where the shape goes relative to the reference body
//!
//! Every mode is a pure function of its inputs. Orbit mode is animated by
//! the caller: it owns the phase angle, advances it (see `advance_phase`)
//! and asks for a new placement each tick. Random mode is reproducible only
//! when a seed is supplied.

use std::f64::consts::{FRAC_PI_4, TAU};
use std::fmt;
use std::str::FromStr;

use nalgebra::{Point2, Vector2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::scale::Viewport;
use crate::error::GeometryError;

/// Gap in pixels between the reference body and an adjacent shape
pub const DEFAULT_MARGIN: f64 = 10.0;

/// Orbit angle used when the caller supplies no phase (a static snapshot)
pub const DEFAULT_ORBIT_PHASE: f64 = FRAC_PI_4;

/// Fractions of the body radius used by `Overlap` mode
const OVERLAP_OFFSET: (f64, f64) = (0.15, 0.10);

/// Placement rule for the shape
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum AlignmentMode {
    /// Concentric with the reference body
    #[default]
    Center,
    /// Just above the body
    Top,
    /// Just below the body
    Bottom,
    /// Just left of the body
    Left,
    /// Just right of the body
    Right,
    /// Small fixed offset so the boxes partly overlap
    Overlap,
    /// On a circle around the body, at the caller's phase angle
    Orbit,
    /// Anywhere inside the viewport
    Random,
}

impl AlignmentMode {
    pub fn all() -> &'static [AlignmentMode] {
        &[
            AlignmentMode::Center,
            AlignmentMode::Top,
            AlignmentMode::Bottom,
            AlignmentMode::Left,
            AlignmentMode::Right,
            AlignmentMode::Overlap,
            AlignmentMode::Orbit,
            AlignmentMode::Random,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            AlignmentMode::Center => "Center",
            AlignmentMode::Top => "Top",
            AlignmentMode::Bottom => "Bottom",
            AlignmentMode::Left => "Left",
            AlignmentMode::Right => "Right",
            AlignmentMode::Overlap => "Overlap",
            AlignmentMode::Orbit => "Orbit",
            AlignmentMode::Random => "Random",
        }
    }
}

impl fmt::Display for AlignmentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AlignmentMode {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        AlignmentMode::all()
            .iter()
            .copied()
            .find(|mode| mode.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| GeometryError::UnknownVariant {
                kind: "alignment",
                name: s.to_string(),
            })
    }
}

/// Everything a placement depends on, in pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacementInput {
    /// Center of the reference body
    pub anchor: Point2<f64>,
    /// Reference body radius
    pub anchor_radius: f64,
    /// Shape footprint width and height
    pub shape_size: Vector2<f64>,
    pub margin: f64,
    /// Orbit angle in radians, any range
    pub phase: Option<f64>,
    /// Bounds for `Random` mode
    pub viewport: Viewport,
}

impl PlacementInput {
    pub fn new(
        anchor: Point2<f64>,
        anchor_radius: f64,
        shape_size: Vector2<f64>,
        viewport: Viewport,
    ) -> Self {
        Self {
            anchor,
            anchor_radius,
            shape_size,
            margin: DEFAULT_MARGIN,
            phase: None,
            viewport,
        }
    }

    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_phase(mut self, phase: f64) -> Self {
        self.phase = Some(phase);
        self
    }
}

/// Wrap an angle into `[0, 2π)`
pub fn wrap_phase(phase: f64) -> f64 {
    let wrapped = phase.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Advance an orbit phase by `angular_speed` (rad/s) over `dt` seconds
pub fn advance_phase(phase: f64, angular_speed: f64, dt: f64) -> f64 {
    wrap_phase(phase + angular_speed * dt)
}

/// Compute the shape's center for the given mode
///
/// `Random` draws from a generator seeded with `seed`, or from OS entropy
/// when no seed is given.
pub fn place(mode: AlignmentMode, input: &PlacementInput, seed: Option<u64>) -> Point2<f64> {
    match (mode, seed) {
        (AlignmentMode::Random, Some(seed)) => {
            place_with_rng(mode, input, &mut StdRng::seed_from_u64(seed))
        }
        (AlignmentMode::Random, None) => place_with_rng(mode, input, &mut StdRng::from_entropy()),
        _ => place_fixed(mode, input).unwrap_or(input.anchor),
    }
}

/// Like `place`, drawing `Random` positions from the given generator
pub fn place_with_rng<R: Rng + ?Sized>(
    mode: AlignmentMode,
    input: &PlacementInput,
    rng: &mut R,
) -> Point2<f64> {
    match place_fixed(mode, input) {
        Some(center) => center,
        None => random_center(input, rng),
    }
}

/// All modes except `Random`
fn place_fixed(mode: AlignmentMode, input: &PlacementInput) -> Option<Point2<f64>> {
    let c = input.anchor;
    let r = input.anchor_radius;
    let (w, h) = (input.shape_size.x, input.shape_size.y);
    let vertical = r + h / 2.0 + input.margin;
    let horizontal = r + w / 2.0 + input.margin;

    let center = match mode {
        AlignmentMode::Center => c,
        AlignmentMode::Top => c - Vector2::new(0.0, vertical),
        AlignmentMode::Bottom => c + Vector2::new(0.0, vertical),
        AlignmentMode::Left => c - Vector2::new(horizontal, 0.0),
        AlignmentMode::Right => c + Vector2::new(horizontal, 0.0),
        AlignmentMode::Overlap => c + Vector2::new(OVERLAP_OFFSET.0 * r, OVERLAP_OFFSET.1 * r),
        AlignmentMode::Orbit => {
            let theta = match input.phase {
                Some(phase) if phase.is_finite() => wrap_phase(phase),
                Some(phase) => {
                    log::warn!("non-finite orbit phase {phase}, using static snapshot");
                    DEFAULT_ORBIT_PHASE
                }
                None => DEFAULT_ORBIT_PHASE,
            };
            c + horizontal * Vector2::new(theta.cos(), theta.sin())
        }
        AlignmentMode::Random => return None,
    };
    Some(center)
}

/// Uniform position keeping the whole footprint inside the viewport
///
/// On an axis where the shape is larger than the viewport, the shape is
/// centered instead.
fn random_center<R: Rng + ?Sized>(input: &PlacementInput, rng: &mut R) -> Point2<f64> {
    let mut axis = |extent: f64, size: f64| {
        let lo = size / 2.0;
        let hi = extent - size / 2.0;
        if lo < hi {
            rng.gen_range(lo..=hi)
        } else {
            extent / 2.0
        }
    };
    let x = axis(input.viewport.width, input.shape_size.x);
    let y = axis(input.viewport.height, input.shape_size.y);
    Point2::new(x, y)
}
