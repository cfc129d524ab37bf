//! Layout module - placing a shape next to a reference body
//!
//! This module provides:
//! - Scale selection across extreme size ratios
//! - Alignment modes, including the caller-driven orbit
//! - Axis-aligned bounding-box overlap detection
//! - `compose`, which runs a whole calculation cycle

mod alignment;
mod overlap;
mod scale;
mod scene;

pub use alignment::{
    advance_phase, place, place_with_rng, wrap_phase, AlignmentMode, PlacementInput,
    DEFAULT_MARGIN, DEFAULT_ORBIT_PHASE,
};
pub use overlap::{intersects, BoundingBox};
pub use scale::{
    select, select_scale, ScaleRegime, ScaleRequest, ScaleSelection, Viewport, MAX_SCALE,
    MIN_SCALE,
};
pub use scene::{compose, PlacementResult, Scene, SceneRequest};
