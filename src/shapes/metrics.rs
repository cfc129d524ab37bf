//! Shape metrics - closed-form area, perimeter, volume and footprint
//!
//! Every formula here is evaluated directly from the shape's dimensions.
//! Nothing is sampled or approximated numerically, with one exception: the
//! ellipse perimeter uses Ramanujan's second approximation.

use std::f64::consts::{PI, SQRT_2};
use std::fmt;

use serde::Serialize;

use super::primitives::{Dimensions, Shape};
use super::traits::Measured;

/// Half-height factor used for the pentagon footprint
const PENTAGON_EXTENT: f64 = 1.539;

/// Footprint width of a parallelogram relative to its base (sheared top edge)
pub const PARALLELOGRAM_SHEAR_EXTENT: f64 = 1.2;

/// Unscaled bounding width, height and depth, in the shape's native units
///
/// Depth is zero for planar shapes.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Footprint {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

impl Footprint {
    /// A planar footprint
    pub fn flat(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            depth: 0.0,
        }
    }

    pub fn solid(width: f64, height: f64, depth: f64) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    /// Larger of width and height
    pub fn max_extent(&self) -> f64 {
        self.width.max(self.height)
    }
}

impl Measured for Shape {
    fn name(&self) -> &str {
        self.kind().name()
    }

    fn area(&self) -> f64 {
        match *self.dimensions() {
            Dimensions::Circle { radius } => PI * radius * radius,
            Dimensions::Rectangle { width, height } => width * height,
            Dimensions::Triangle { base, height } => 0.5 * base * height,
            Dimensions::Square { side } => side * side,
            Dimensions::Ellipse {
                semi_major,
                semi_minor,
            } => PI * semi_major * semi_minor,
            Dimensions::Parallelogram { base, height, .. } => base * height,
            Dimensions::Rhombus { d1, d2 } => d1 * d2 / 2.0,
            Dimensions::Pentagon { side } => 5.0 * side * side / (4.0 * (PI / 5.0).tan()),
            Dimensions::Hexagon { side } => 3.0 * 3.0_f64.sqrt() * side * side / 2.0,
            Dimensions::Octagon { side } => 2.0 * (1.0 + SQRT_2) * side * side,
            Dimensions::Star {
                outer_radius,
                inner_radius,
            } => {
                5.0 * outer_radius * inner_radius * (PI / 5.0).sin() * (3.0 * PI / 10.0).sin()
                    / (7.0 * PI / 10.0).sin()
            }
            Dimensions::Sphere { radius } => 4.0 * PI * radius * radius,
            Dimensions::Cube { side } => 6.0 * side * side,
            Dimensions::Cylinder { radius, height } => 2.0 * PI * radius * (radius + height),
            Dimensions::Cone { radius, height } => {
                PI * radius * (radius + (radius * radius + height * height).sqrt())
            }
            Dimensions::Pyramid { base_side, height } => {
                let half = base_side / 2.0;
                let slant = (half * half + height * height).sqrt();
                base_side * base_side + 2.0 * base_side * slant
            }
        }
    }

    fn perimeter(&self) -> f64 {
        match *self.dimensions() {
            Dimensions::Circle { radius } => 2.0 * PI * radius,
            Dimensions::Rectangle { width, height } => 2.0 * (width + height),
            Dimensions::Triangle { base, height } => {
                base + height + (base * base + height * height).sqrt()
            }
            Dimensions::Square { side } => 4.0 * side,
            Dimensions::Ellipse {
                semi_major: a,
                semi_minor: b,
            } => {
                let h = ((a - b) / (a + b)).powi(2);
                PI * (a + b) * (1.0 + 3.0 * h / (10.0 + (4.0 - 3.0 * h).sqrt()))
            }
            Dimensions::Parallelogram { base, side, .. } => 2.0 * (base + side),
            Dimensions::Rhombus { d1, d2 } => {
                4.0 * ((d1 / 2.0).powi(2) + (d2 / 2.0).powi(2)).sqrt()
            }
            Dimensions::Pentagon { side } => 5.0 * side,
            Dimensions::Hexagon { side } => 6.0 * side,
            Dimensions::Octagon { side } => 8.0 * side,
            Dimensions::Star {
                outer_radius,
                inner_radius,
            } => 10.0 * (outer_radius + inner_radius) / 2.0,
            Dimensions::Sphere { .. }
            | Dimensions::Cube { .. }
            | Dimensions::Cylinder { .. }
            | Dimensions::Cone { .. }
            | Dimensions::Pyramid { .. } => 0.0,
        }
    }

    fn volume(&self) -> f64 {
        match *self.dimensions() {
            Dimensions::Sphere { radius } => 4.0 / 3.0 * PI * radius.powi(3),
            Dimensions::Cube { side } => side.powi(3),
            Dimensions::Cylinder { radius, height } => PI * radius * radius * height,
            Dimensions::Cone { radius, height } => PI * radius * radius * height / 3.0,
            Dimensions::Pyramid { base_side, height } => base_side * base_side * height / 3.0,
            _ => 0.0,
        }
    }

    fn footprint(&self) -> Footprint {
        match *self.dimensions() {
            Dimensions::Circle { radius } => Footprint::flat(2.0 * radius, 2.0 * radius),
            Dimensions::Rectangle { width, height } => Footprint::flat(width, height),
            Dimensions::Triangle { base, height } => Footprint::flat(base, height),
            Dimensions::Square { side } => Footprint::flat(side, side),
            Dimensions::Ellipse {
                semi_major,
                semi_minor,
            } => Footprint::flat(2.0 * semi_major, 2.0 * semi_minor),
            Dimensions::Parallelogram { base, height, .. } => {
                Footprint::flat(PARALLELOGRAM_SHEAR_EXTENT * base, height)
            }
            Dimensions::Rhombus { d1, d2 } => Footprint::flat(d1, d2),
            Dimensions::Pentagon { side } => {
                let extent = 2.0 * PENTAGON_EXTENT * side;
                Footprint::flat(extent, extent)
            }
            Dimensions::Hexagon { side } => Footprint::flat(2.0 * side, 3.0_f64.sqrt() * side),
            Dimensions::Octagon { side } => {
                let extent = side * (1.0 + SQRT_2);
                Footprint::flat(extent, extent)
            }
            Dimensions::Star { outer_radius, .. } => {
                Footprint::flat(2.0 * outer_radius, 2.0 * outer_radius)
            }
            Dimensions::Sphere { radius } => {
                Footprint::solid(2.0 * radius, 2.0 * radius, 2.0 * radius)
            }
            Dimensions::Cube { side } => Footprint::solid(side, side, side),
            Dimensions::Cylinder { radius, height } | Dimensions::Cone { radius, height } => {
                Footprint::solid(2.0 * radius, height, 2.0 * radius)
            }
            Dimensions::Pyramid { base_side, height } => {
                Footprint::solid(base_side, height, base_side)
            }
        }
    }

    fn is_solid(&self) -> bool {
        self.kind().is_solid()
    }
}

/// The results record handed back to the caller after a calculation
///
/// `Display` formats it the way it is shown to the user: two decimals, one
/// quantity per line, volume only for solids.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MetricsReport {
    pub shape: String,
    pub area: f64,
    pub perimeter: f64,
    /// Zero for planar shapes
    pub volume: f64,
    pub footprint: Footprint,
    pub solid: bool,
    /// Resolved pixels-per-unit scale, if the shape has been placed
    pub scale: Option<f64>,
}

impl MetricsReport {
    pub fn of<M: Measured + ?Sized>(object: &M) -> Self {
        Self {
            shape: object.name().to_string(),
            area: object.area(),
            perimeter: object.perimeter(),
            volume: object.volume(),
            footprint: object.footprint(),
            solid: object.is_solid(),
            scale: None,
        }
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = Some(scale);
        self
    }
}

impl fmt::Display for MetricsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.solid {
            writeln!(f, "Surface area = {:.2}", self.area)?;
            write!(f, "Volume = {:.2}", self.volume)?;
        } else {
            writeln!(f, "Area = {:.2}", self.area)?;
            write!(f, "Perimeter = {:.2}", self.perimeter)?;
        }
        if let Some(scale) = self.scale {
            write!(f, "\nScale = {:.4} px/unit", scale)?;
        }
        Ok(())
    }
}
