//! Primitive shapes - the sixteen parametrized variants
//!
//! A `Shape` can only be obtained through a validating constructor, so every
//! value in circulation has strictly positive, finite dimensions. The raw
//! variant data is exposed read-only through `Shape::dimensions` for pattern
//! matching.

use serde::Serialize;

use super::kind::ShapeKind;
use crate::error::{require_positive, GeometryError, Result};

/// Raw dimensions of each shape variant, in the shape's native units
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum Dimensions {
    Circle { radius: f64 },
    Rectangle { width: f64, height: f64 },
    /// Right triangle with legs `base` and `height`
    Triangle { base: f64, height: f64 },
    Square { side: f64 },
    Ellipse { semi_major: f64, semi_minor: f64 },
    Parallelogram { base: f64, side: f64, height: f64 },
    Rhombus { d1: f64, d2: f64 },
    Pentagon { side: f64 },
    Hexagon { side: f64 },
    Octagon { side: f64 },
    /// Five-pointed star
    Star { outer_radius: f64, inner_radius: f64 },
    Sphere { radius: f64 },
    Cube { side: f64 },
    Cylinder { radius: f64, height: f64 },
    Cone { radius: f64, height: f64 },
    /// Square-based pyramid
    Pyramid { base_side: f64, height: f64 },
}

impl Dimensions {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Dimensions::Circle { .. } => ShapeKind::Circle,
            Dimensions::Rectangle { .. } => ShapeKind::Rectangle,
            Dimensions::Triangle { .. } => ShapeKind::Triangle,
            Dimensions::Square { .. } => ShapeKind::Square,
            Dimensions::Ellipse { .. } => ShapeKind::Ellipse,
            Dimensions::Parallelogram { .. } => ShapeKind::Parallelogram,
            Dimensions::Rhombus { .. } => ShapeKind::Rhombus,
            Dimensions::Pentagon { .. } => ShapeKind::Pentagon,
            Dimensions::Hexagon { .. } => ShapeKind::Hexagon,
            Dimensions::Octagon { .. } => ShapeKind::Octagon,
            Dimensions::Star { .. } => ShapeKind::Star,
            Dimensions::Sphere { .. } => ShapeKind::Sphere,
            Dimensions::Cube { .. } => ShapeKind::Cube,
            Dimensions::Cylinder { .. } => ShapeKind::Cylinder,
            Dimensions::Cone { .. } => ShapeKind::Cone,
            Dimensions::Pyramid { .. } => ShapeKind::Pyramid,
        }
    }

    /// Values in the same order as `ShapeKind::parameter_labels`
    fn values(&self) -> Vec<f64> {
        match *self {
            Dimensions::Circle { radius } | Dimensions::Sphere { radius } => vec![radius],
            Dimensions::Rectangle { width, height } => vec![width, height],
            Dimensions::Triangle { base, height } => vec![base, height],
            Dimensions::Square { side }
            | Dimensions::Pentagon { side }
            | Dimensions::Hexagon { side }
            | Dimensions::Octagon { side }
            | Dimensions::Cube { side } => vec![side],
            Dimensions::Ellipse {
                semi_major,
                semi_minor,
            } => vec![semi_major, semi_minor],
            Dimensions::Parallelogram { base, side, height } => vec![base, side, height],
            Dimensions::Rhombus { d1, d2 } => vec![d1, d2],
            Dimensions::Star {
                outer_radius,
                inner_radius,
            } => vec![outer_radius, inner_radius],
            Dimensions::Cylinder { radius, height } | Dimensions::Cone { radius, height } => {
                vec![radius, height]
            }
            Dimensions::Pyramid { base_side, height } => vec![base_side, height],
        }
    }
}

/// A validated, immutable shape
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Shape {
    dims: Dimensions,
}

impl Shape {
    /// Validate raw dimensions and wrap them
    ///
    /// Fails with `InvalidParameter` naming the first offending field.
    pub fn new(dims: Dimensions) -> Result<Self> {
        let labels = dims.kind().parameter_labels();
        for (label, value) in labels.iter().zip(dims.values()) {
            require_positive(label, value)?;
        }
        Ok(Self { dims })
    }

    /// Build a shape from a list of optional inputs, as typed into a form
    ///
    /// Values are matched to `kind.parameter_labels()` in order. A `None` or
    /// an absent trailing value is reported as a missing parameter.
    pub fn from_params(kind: ShapeKind, params: &[Option<f64>]) -> Result<Self> {
        let labels = kind.parameter_labels();
        let mut values = Vec::with_capacity(labels.len());
        for (i, label) in labels.iter().enumerate() {
            let value = params
                .get(i)
                .copied()
                .flatten()
                .ok_or_else(|| GeometryError::missing(label))?;
            values.push(require_positive(label, value)?);
        }

        let dims = match kind {
            ShapeKind::Circle => Dimensions::Circle { radius: values[0] },
            ShapeKind::Rectangle => Dimensions::Rectangle {
                width: values[0],
                height: values[1],
            },
            ShapeKind::Triangle => Dimensions::Triangle {
                base: values[0],
                height: values[1],
            },
            ShapeKind::Square => Dimensions::Square { side: values[0] },
            ShapeKind::Ellipse => Dimensions::Ellipse {
                semi_major: values[0],
                semi_minor: values[1],
            },
            ShapeKind::Parallelogram => Dimensions::Parallelogram {
                base: values[0],
                side: values[1],
                height: values[2],
            },
            ShapeKind::Rhombus => Dimensions::Rhombus {
                d1: values[0],
                d2: values[1],
            },
            ShapeKind::Pentagon => Dimensions::Pentagon { side: values[0] },
            ShapeKind::Hexagon => Dimensions::Hexagon { side: values[0] },
            ShapeKind::Octagon => Dimensions::Octagon { side: values[0] },
            ShapeKind::Star => Dimensions::Star {
                outer_radius: values[0],
                inner_radius: values[1],
            },
            ShapeKind::Sphere => Dimensions::Sphere { radius: values[0] },
            ShapeKind::Cube => Dimensions::Cube { side: values[0] },
            ShapeKind::Cylinder => Dimensions::Cylinder {
                radius: values[0],
                height: values[1],
            },
            ShapeKind::Cone => Dimensions::Cone {
                radius: values[0],
                height: values[1],
            },
            ShapeKind::Pyramid => Dimensions::Pyramid {
                base_side: values[0],
                height: values[1],
            },
        };
        Ok(Self { dims })
    }

    pub fn circle(radius: f64) -> Result<Self> {
        Self::new(Dimensions::Circle { radius })
    }

    pub fn rectangle(width: f64, height: f64) -> Result<Self> {
        Self::new(Dimensions::Rectangle { width, height })
    }

    pub fn triangle(base: f64, height: f64) -> Result<Self> {
        Self::new(Dimensions::Triangle { base, height })
    }

    pub fn square(side: f64) -> Result<Self> {
        Self::new(Dimensions::Square { side })
    }

    pub fn ellipse(semi_major: f64, semi_minor: f64) -> Result<Self> {
        Self::new(Dimensions::Ellipse {
            semi_major,
            semi_minor,
        })
    }

    pub fn parallelogram(base: f64, side: f64, height: f64) -> Result<Self> {
        Self::new(Dimensions::Parallelogram { base, side, height })
    }

    pub fn rhombus(d1: f64, d2: f64) -> Result<Self> {
        Self::new(Dimensions::Rhombus { d1, d2 })
    }

    pub fn pentagon(side: f64) -> Result<Self> {
        Self::new(Dimensions::Pentagon { side })
    }

    pub fn hexagon(side: f64) -> Result<Self> {
        Self::new(Dimensions::Hexagon { side })
    }

    pub fn octagon(side: f64) -> Result<Self> {
        Self::new(Dimensions::Octagon { side })
    }

    pub fn star(outer_radius: f64, inner_radius: f64) -> Result<Self> {
        Self::new(Dimensions::Star {
            outer_radius,
            inner_radius,
        })
    }

    pub fn sphere(radius: f64) -> Result<Self> {
        Self::new(Dimensions::Sphere { radius })
    }

    pub fn cube(side: f64) -> Result<Self> {
        Self::new(Dimensions::Cube { side })
    }

    pub fn cylinder(radius: f64, height: f64) -> Result<Self> {
        Self::new(Dimensions::Cylinder { radius, height })
    }

    pub fn cone(radius: f64, height: f64) -> Result<Self> {
        Self::new(Dimensions::Cone { radius, height })
    }

    pub fn pyramid(base_side: f64, height: f64) -> Result<Self> {
        Self::new(Dimensions::Pyramid { base_side, height })
    }

    pub fn dimensions(&self) -> &Dimensions {
        &self.dims
    }

    pub fn kind(&self) -> ShapeKind {
        self.dims.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_positive() {
        assert!(Shape::circle(0.0).is_err());
        assert!(Shape::rectangle(3.0, -1.0).is_err());
        assert!(Shape::parallelogram(1.0, 1.0, 0.0).is_err());
        assert!(Shape::cone(f64::NAN, 1.0).is_err());
    }

    #[test]
    fn test_error_names_field() {
        let err = Shape::ellipse(2.0, -3.0).unwrap_err();
        assert_eq!(err.to_string(), "Semi-minor axis (b) must be positive");
    }

    #[test]
    fn test_from_params() {
        let shape = Shape::from_params(ShapeKind::Parallelogram, &[Some(4.0), Some(2.0), Some(3.0)])
            .unwrap();
        assert_eq!(
            *shape.dimensions(),
            Dimensions::Parallelogram {
                base: 4.0,
                side: 2.0,
                height: 3.0
            }
        );
        assert_eq!(shape.kind(), ShapeKind::Parallelogram);
    }

    #[test]
    fn test_from_params_missing() {
        let err = Shape::from_params(ShapeKind::Rectangle, &[Some(4.0)]).unwrap_err();
        assert_eq!(err.to_string(), "Height is required");

        let err = Shape::from_params(ShapeKind::Circle, &[None]).unwrap_err();
        assert_eq!(err.to_string(), "Radius is required");
    }

    #[test]
    fn test_from_params_ignores_extra_values() {
        let shape = Shape::from_params(ShapeKind::Square, &[Some(2.0), Some(99.0)]).unwrap();
        assert_eq!(*shape.dimensions(), Dimensions::Square { side: 2.0 });
    }
}
