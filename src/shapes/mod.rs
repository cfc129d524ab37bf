//! Shapes module - the shape model, its metrics and its geometry
//!
//! This module provides:
//! - `ShapeKind`, the closed set of shape tags, with input labels
//! - `Shape`, a validated immutable shape value
//! - `Measured` trait with closed-form area/perimeter/volume/footprint
//! - `ReferenceBody`, the optional anchor a shape is placed next to
//! - Render instruction production for shapes and bodies

mod body;
mod geometry;
mod kind;
mod metrics;
mod primitives;
mod traits;

pub use body::ReferenceBody;
pub use geometry::{
    center_marker, orbit_path, regular_polygon, render_at, render_body, star_polygon, ShapeStyle,
    STROKE_WIDTH,
};
pub use kind::ShapeKind;
pub use metrics::{Footprint, MetricsReport};
pub use primitives::{Dimensions, Shape};
pub use traits::Measured;
