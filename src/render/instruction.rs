//! Render instructions - renderer-agnostic drawing directives
//!
//! The core never draws anything itself. It produces a flat list of
//! primitives in pixel space, each tagged with a z-order and a style, and
//! hands it to whatever renderer the application uses. The list is rebuilt
//! from scratch for every calculation or animation tick.
//!
//! ## Coordinate System
//!
//! - Pixel space, origin at the top-left of the viewport
//! - X grows to the right, Y grows downward

use nalgebra::Point2;
use serde::Serialize;

use super::color::Color;
use crate::layout::BoundingBox;

/// Drawing layers, lowest drawn first
pub mod z {
    /// Reference body disc
    pub const BODY: u8 = 0;
    /// Ring system and orbit path, above the body but behind the shape
    pub const BACKDROP: u8 = 1;
    /// Shape body (and the hidden faces of 3D proxies)
    pub const SHAPE: u8 = 2;
    /// Front faces of 3D proxies
    pub const SHAPE_FRONT: u8 = 3;
    /// Center markers
    pub const MARKERS: u8 = 4;
    /// Text labels
    pub const LABELS: u8 = 5;
}

/// Outline style
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
}

/// Fill and outline of a primitive; either may be absent
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize)]
pub struct Style {
    pub fill: Option<Color>,
    pub stroke: Option<Stroke>,
}

impl Style {
    pub fn filled(fill: Color, stroke: Color, width: f64) -> Self {
        Self {
            fill: Some(fill),
            stroke: Some(Stroke {
                color: stroke,
                width,
            }),
        }
    }

    pub fn outline(color: Color, width: f64) -> Self {
        Self {
            fill: None,
            stroke: Some(Stroke { color, width }),
        }
    }

    pub fn text(color: Color) -> Self {
        Self {
            fill: Some(color),
            stroke: None,
        }
    }
}

/// A single drawable primitive
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Primitive {
    /// Closed polygon
    Polygon { vertices: Vec<Point2<f64>> },
    /// Open polyline
    Polyline { points: Vec<Point2<f64>> },
    /// Ellipse inscribed in an axis-aligned rectangle
    Ellipse { bounds: BoundingBox },
    /// Text anchored at its center
    Text { anchor: Point2<f64>, text: String },
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RenderInstruction {
    pub primitive: Primitive,
    pub z_order: u8,
    pub style: Style,
}

impl RenderInstruction {
    pub fn polygon(vertices: Vec<Point2<f64>>, z_order: u8, style: Style) -> Self {
        Self {
            primitive: Primitive::Polygon { vertices },
            z_order,
            style,
        }
    }

    pub fn polyline(points: Vec<Point2<f64>>, z_order: u8, style: Style) -> Self {
        Self {
            primitive: Primitive::Polyline { points },
            z_order,
            style,
        }
    }

    pub fn ellipse(bounds: BoundingBox, z_order: u8, style: Style) -> Self {
        Self {
            primitive: Primitive::Ellipse { bounds },
            z_order,
            style,
        }
    }

    pub fn text(anchor: Point2<f64>, text: impl Into<String>, z_order: u8, color: Color) -> Self {
        Self {
            primitive: Primitive::Text {
                anchor,
                text: text.into(),
            },
            z_order,
            style: Style::text(color),
        }
    }

    /// Axis-aligned bounds of the primitive's geometry
    ///
    /// Text has no extent of its own and reports a zero-size box at its anchor.
    pub fn bounds(&self) -> Option<BoundingBox> {
        match &self.primitive {
            Primitive::Polygon { vertices } => BoundingBox::from_points(vertices.iter().copied()),
            Primitive::Polyline { points } => BoundingBox::from_points(points.iter().copied()),
            Primitive::Ellipse { bounds } => Some(*bounds),
            Primitive::Text { anchor, .. } => BoundingBox::from_points([*anchor]),
        }
    }
}

/// Order instructions for drawing: lowest z first, emission order kept within a layer
pub fn sort_by_z(instructions: &mut [RenderInstruction]) {
    instructions.sort_by_key(|instruction| instruction.z_order);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_is_stable_within_layer() {
        let mut list = vec![
            RenderInstruction::text(Point2::new(0.0, 0.0), "label", z::LABELS, Color::BLACK),
            RenderInstruction::polyline(vec![Point2::new(0.0, 0.0)], z::SHAPE, Style::default()),
            RenderInstruction::polygon(vec![Point2::new(1.0, 1.0)], z::SHAPE, Style::default()),
            RenderInstruction::ellipse(
                BoundingBox::new(0.0, 0.0, 1.0, 1.0),
                z::BODY,
                Style::default(),
            ),
        ];
        sort_by_z(&mut list);
        let order: Vec<u8> = list.iter().map(|i| i.z_order).collect();
        assert_eq!(order, vec![z::BODY, z::SHAPE, z::SHAPE, z::LABELS]);
        assert!(matches!(list[1].primitive, Primitive::Polyline { .. }));
    }

    #[test]
    fn test_polygon_bounds() {
        let instruction = RenderInstruction::polygon(
            vec![Point2::new(1.0, 5.0), Point2::new(4.0, -2.0), Point2::new(-3.0, 0.0)],
            z::SHAPE,
            Style::default(),
        );
        assert_eq!(
            instruction.bounds(),
            Some(BoundingBox::new(-3.0, -2.0, 4.0, 5.0))
        );
    }
}
