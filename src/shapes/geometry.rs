//! Shape geometry - turning shapes into render instructions
//!
//! Polygonal shapes are built from closed-form vertex formulas so their
//! orientation is fully deterministic:
//!
//! - Pentagon, Octagon and Star point their first vertex straight up
//!   (angle offset −π/2).
//! - Hexagon has no offset: vertex 0 sits at angle 0, giving a flat top.
//!   This differs from the other regular polygons and is kept as-is so the
//!   output stays comparable with earlier renders.
//! - Octagon is drawn vertex-up on its circumradius s/(2·sin(π/8)), so its
//!   drawn height is about 2.613·s while its footprint is s(1+√2) ≈ 2.414·s.
//!   Placement and overlap work on the footprint, so with a small margin the
//!   drawing can reach into the reference body without `overlap` being set.
//!
//! Solids are drawn as small fixed sets of 2D proxy faces with an oblique
//! depth offset. There is no real 3D projection.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use nalgebra::{Point2, Vector2};

use super::body::ReferenceBody;
use super::kind::ShapeKind;
use super::metrics::PARALLELOGRAM_SHEAR_EXTENT;
use super::primitives::{Dimensions, Shape};
use super::traits::Measured;
use crate::layout::BoundingBox;
use crate::render::{z, Color, RenderInstruction, Style};

/// Outline width in pixels
pub const STROKE_WIDTH: f64 = 3.0;

/// Oblique depth offset of 3D proxies, relative to the object's depth
const DEPTH_OFFSET: f64 = 0.3;
/// Height of the elliptical caps of cylinders and cones, relative to width
const CAP_RATIO: f64 = 0.25;
/// Height of the sphere's equator ellipse, relative to its diameter
const EQUATOR_RATIO: f64 = 0.3;
/// Shading applied to the hidden faces of 3D proxies
const SIDE_SHADE: f64 = 0.8;
/// Ring system extent relative to the body diameter
const RING_WIDTH: f64 = 2.2;
const RING_HEIGHT: f64 = 0.5;
/// Gap between a body and its label, in pixels
const LABEL_GAP: f64 = 12.0;

/// Fill and outline colors of a shape
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeStyle {
    pub fill: Color,
    pub stroke: Color,
    pub stroke_width: f64,
}

impl ShapeStyle {
    /// Default palette colors for a shape kind
    pub fn for_kind(kind: ShapeKind) -> Self {
        let (fill, stroke) = Color::palette(kind);
        Self {
            fill,
            stroke,
            stroke_width: STROKE_WIDTH,
        }
    }

    /// Style for a reference body
    pub fn body() -> Self {
        Self {
            fill: Color::SLATE_GRAY,
            stroke: Color::DARK_SLATE_GRAY,
            stroke_width: STROKE_WIDTH,
        }
    }

    /// Replace the fill color
    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = fill;
        self
    }

    /// Apply an opacity percentage (0-100) to the fill
    pub fn with_opacity(mut self, percent: u8) -> Self {
        self.fill = self.fill.with_opacity(percent);
        self
    }

    fn front(&self) -> Style {
        Style::filled(self.fill, self.stroke, self.stroke_width)
    }

    fn side(&self) -> Style {
        Style::filled(self.fill.shaded(SIDE_SHADE), self.stroke, self.stroke_width)
    }

    fn outline(&self) -> Style {
        Style::outline(self.stroke, self.stroke_width)
    }
}

/// Vertices of a regular n-gon with circumradius `radius`
///
/// Vertex `i` sits at angle `2π·i/n + offset`.
pub fn regular_polygon(
    center: Point2<f64>,
    radius: f64,
    n: usize,
    offset: f64,
) -> Vec<Point2<f64>> {
    (0..n)
        .map(|i| {
            let angle = TAU * i as f64 / n as f64 + offset;
            center + radius * Vector2::new(angle.cos(), angle.sin())
        })
        .collect()
}

/// Vertices of an n-pointed star, alternating outer and inner radius, apex up
pub fn star_polygon(
    center: Point2<f64>,
    outer: f64,
    inner: f64,
    points: usize,
) -> Vec<Point2<f64>> {
    let total = points * 2;
    (0..total)
        .map(|i| {
            let angle = TAU * i as f64 / total as f64 - FRAC_PI_2;
            let radius = if i % 2 == 0 { outer } else { inner };
            center + radius * Vector2::new(angle.cos(), angle.sin())
        })
        .collect()
}

/// Corners of an axis-aligned rectangle, clockwise from top-left
fn rect_corners(center: Point2<f64>, width: f64, height: f64) -> Vec<Point2<f64>> {
    let (hw, hh) = (width / 2.0, height / 2.0);
    vec![
        Point2::new(center.x - hw, center.y - hh),
        Point2::new(center.x + hw, center.y - hh),
        Point2::new(center.x + hw, center.y + hh),
        Point2::new(center.x - hw, center.y + hh),
    ]
}

/// Circumradius of a regular n-gon with the given side length
fn circumradius(side: f64, n: usize) -> f64 {
    side / (2.0 * (PI / n as f64).sin())
}

/// Produce render instructions for a shape centered at `center`
///
/// `scale` is in pixels per native unit. The output is a pure function of
/// the inputs.
pub fn render_at(
    shape: &Shape,
    center: Point2<f64>,
    scale: f64,
    style: &ShapeStyle,
) -> Vec<RenderInstruction> {
    let front = style.front();
    let polygon = |vertices| vec![RenderInstruction::polygon(vertices, z::SHAPE, front)];

    match *shape.dimensions() {
        Dimensions::Circle { radius } => {
            let d = 2.0 * radius * scale;
            vec![RenderInstruction::ellipse(
                BoundingBox::from_center_size(center, d, d),
                z::SHAPE,
                front,
            )]
        }
        Dimensions::Rectangle { width, height } => {
            polygon(rect_corners(center, width * scale, height * scale))
        }
        Dimensions::Square { side } => polygon(rect_corners(center, side * scale, side * scale)),
        Dimensions::Triangle { base, height } => {
            let (hb, hh) = (base * scale / 2.0, height * scale / 2.0);
            polygon(vec![
                Point2::new(center.x, center.y - hh),
                Point2::new(center.x - hb, center.y + hh),
                Point2::new(center.x + hb, center.y + hh),
            ])
        }
        Dimensions::Ellipse {
            semi_major,
            semi_minor,
        } => vec![RenderInstruction::ellipse(
            BoundingBox::from_center_size(
                center,
                2.0 * semi_major * scale,
                2.0 * semi_minor * scale,
            ),
            z::SHAPE,
            front,
        )],
        Dimensions::Parallelogram { base, height, .. } => {
            let b = base * scale;
            let h = height * scale;
            let shear = (PARALLELOGRAM_SHEAR_EXTENT - 1.0) * b;
            let left = center.x - PARALLELOGRAM_SHEAR_EXTENT * b / 2.0;
            let (top, bottom) = (center.y - h / 2.0, center.y + h / 2.0);
            polygon(vec![
                Point2::new(left, top),
                Point2::new(left + b, top),
                Point2::new(left + b + shear, bottom),
                Point2::new(left + shear, bottom),
            ])
        }
        Dimensions::Rhombus { d1, d2 } => {
            let (h1, h2) = (d1 * scale / 2.0, d2 * scale / 2.0);
            polygon(vec![
                Point2::new(center.x, center.y - h2),
                Point2::new(center.x + h1, center.y),
                Point2::new(center.x, center.y + h2),
                Point2::new(center.x - h1, center.y),
            ])
        }
        Dimensions::Pentagon { side } => {
            polygon(regular_polygon(center, circumradius(side * scale, 5), 5, -FRAC_PI_2))
        }
        Dimensions::Hexagon { side } => polygon(regular_polygon(center, side * scale, 6, 0.0)),
        Dimensions::Octagon { side } => {
            polygon(regular_polygon(center, circumradius(side * scale, 8), 8, -FRAC_PI_2))
        }
        Dimensions::Star {
            outer_radius,
            inner_radius,
        } => polygon(star_polygon(center, outer_radius * scale, inner_radius * scale, 5)),
        Dimensions::Sphere { radius } => sphere_proxy(center, radius * scale, style),
        Dimensions::Cube { side } => cube_proxy(center, side * scale, style),
        Dimensions::Cylinder { radius, height } => {
            cylinder_proxy(center, 2.0 * radius * scale, height * scale, style)
        }
        Dimensions::Cone { radius, height } => {
            cone_proxy(center, 2.0 * radius * scale, height * scale, style)
        }
        Dimensions::Pyramid { base_side, height } => {
            pyramid_proxy(center, base_side * scale, height * scale, style)
        }
    }
}

/// Disc plus a flattened equator
fn sphere_proxy(center: Point2<f64>, radius: f64, style: &ShapeStyle) -> Vec<RenderInstruction> {
    let d = 2.0 * radius;
    vec![
        RenderInstruction::ellipse(
            BoundingBox::from_center_size(center, d, d),
            z::SHAPE,
            style.front(),
        ),
        RenderInstruction::ellipse(
            BoundingBox::from_center_size(center, d, d * EQUATOR_RATIO),
            z::SHAPE_FRONT,
            style.outline(),
        ),
    ]
}

/// Front square with sheared top and right faces
fn cube_proxy(center: Point2<f64>, side: f64, style: &ShapeStyle) -> Vec<RenderInstruction> {
    let o = DEPTH_OFFSET * side;
    let depth = Vector2::new(o, -o);
    // Shift the front face so the whole proxy stays centered
    let front_center = center + Vector2::new(-o / 2.0, o / 2.0);
    let front = rect_corners(front_center, side, side);
    let (tl, tr, br) = (front[0], front[1], front[2]);

    vec![
        RenderInstruction::polygon(vec![tl, tr, tr + depth, tl + depth], z::SHAPE, style.side()),
        RenderInstruction::polygon(vec![tr, tr + depth, br + depth, br], z::SHAPE, style.side()),
        RenderInstruction::polygon(front, z::SHAPE_FRONT, style.front()),
    ]
}

/// Body rectangle between two elliptical caps
fn cylinder_proxy(
    center: Point2<f64>,
    width: f64,
    height: f64,
    style: &ShapeStyle,
) -> Vec<RenderInstruction> {
    let cap = width * CAP_RATIO;
    let top = Point2::new(center.x, center.y - height / 2.0);
    let bottom = Point2::new(center.x, center.y + height / 2.0);
    vec![
        RenderInstruction::ellipse(
            BoundingBox::from_center_size(bottom, width, cap),
            z::SHAPE,
            style.side(),
        ),
        RenderInstruction::polygon(rect_corners(center, width, height), z::SHAPE, style.front()),
        RenderInstruction::ellipse(
            BoundingBox::from_center_size(top, width, cap),
            z::SHAPE_FRONT,
            style.side(),
        ),
    ]
}

/// Base ellipse with a triangular silhouette on top
fn cone_proxy(
    center: Point2<f64>,
    width: f64,
    height: f64,
    style: &ShapeStyle,
) -> Vec<RenderInstruction> {
    let base = Point2::new(center.x, center.y + height / 2.0);
    vec![
        RenderInstruction::ellipse(
            BoundingBox::from_center_size(base, width, width * CAP_RATIO),
            z::SHAPE,
            style.side(),
        ),
        RenderInstruction::polygon(
            vec![
                Point2::new(center.x, center.y - height / 2.0),
                Point2::new(center.x - width / 2.0, base.y),
                Point2::new(center.x + width / 2.0, base.y),
            ],
            z::SHAPE_FRONT,
            style.front(),
        ),
    ]
}

/// Front and right triangular faces over an oblique base
fn pyramid_proxy(
    center: Point2<f64>,
    base: f64,
    height: f64,
    style: &ShapeStyle,
) -> Vec<RenderInstruction> {
    let o = DEPTH_OFFSET * base;
    let depth = Vector2::new(o, -o);
    let apex = Point2::new(center.x, center.y - height / 2.0);
    let front_left = Point2::new(center.x - base / 2.0 - o / 2.0, center.y + height / 2.0);
    let front_right = front_left + Vector2::new(base, 0.0);
    let back_right = front_right + depth;

    vec![
        RenderInstruction::polygon(vec![front_right, back_right, apex], z::SHAPE, style.side()),
        RenderInstruction::polygon(
            vec![front_left, front_right, apex],
            z::SHAPE_FRONT,
            style.front(),
        ),
    ]
}

/// Produce render instructions for a reference body: disc, rings and name
pub fn render_body(
    body: &ReferenceBody,
    center: Point2<f64>,
    scale: f64,
) -> Vec<RenderInstruction> {
    let style = ShapeStyle::body();
    let radius = body.radius() * scale;
    let d = 2.0 * radius;

    let mut out = vec![RenderInstruction::ellipse(
        BoundingBox::from_center_size(center, d, d),
        z::BODY,
        style.front(),
    )];
    if body.has_rings() {
        out.push(RenderInstruction::ellipse(
            BoundingBox::from_center_size(center, d * RING_WIDTH, d * RING_HEIGHT),
            z::BACKDROP,
            Style::outline(Color::TAN, STROKE_WIDTH),
        ));
    }
    if !body.name().is_empty() {
        out.push(RenderInstruction::text(
            Point2::new(center.x, center.y - radius - LABEL_GAP),
            body.name(),
            z::LABELS,
            Color::BLACK,
        ));
    }
    out
}

/// Small cross marking a center point
pub fn center_marker(center: Point2<f64>, size: f64, color: Color) -> Vec<RenderInstruction> {
    let h = size / 2.0;
    let style = Style::outline(color, 1.0);
    vec![
        RenderInstruction::polyline(
            vec![Point2::new(center.x - h, center.y), Point2::new(center.x + h, center.y)],
            z::MARKERS,
            style,
        ),
        RenderInstruction::polyline(
            vec![Point2::new(center.x, center.y - h), Point2::new(center.x, center.y + h)],
            z::MARKERS,
            style,
        ),
    ]
}

/// Circle traced by the shape's center in orbit mode
pub fn orbit_path(center: Point2<f64>, radius: f64) -> RenderInstruction {
    let d = 2.0 * radius;
    RenderInstruction::ellipse(
        BoundingBox::from_center_size(center, d, d),
        z::BACKDROP,
        Style::outline(Color::GRAY, 1.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Primitive;

    fn origin() -> Point2<f64> {
        Point2::new(100.0, 100.0)
    }

    fn vertices(instruction: &RenderInstruction) -> &[Point2<f64>] {
        match &instruction.primitive {
            Primitive::Polygon { vertices } => vertices,
            other => panic!("expected polygon, got {other:?}"),
        }
    }

    #[test]
    fn test_circle_is_ellipse() {
        let shape = Shape::circle(10.0).unwrap();
        let out = render_at(&shape, origin(), 2.0, &ShapeStyle::for_kind(ShapeKind::Circle));
        assert_eq!(out.len(), 1);
        assert_eq!(
            out[0].primitive,
            Primitive::Ellipse {
                bounds: BoundingBox::new(80.0, 80.0, 120.0, 120.0)
            }
        );
        assert_eq!(out[0].z_order, z::SHAPE);
    }

    #[test]
    fn test_pentagon_apex_up() {
        let shape = Shape::pentagon(10.0).unwrap();
        let out = render_at(&shape, origin(), 1.0, &ShapeStyle::for_kind(ShapeKind::Pentagon));
        let v = vertices(&out[0]);
        assert_eq!(v.len(), 5);
        let r = 10.0 / (2.0 * (PI / 5.0).sin());
        assert!((v[0].x - 100.0).abs() < 1e-9);
        assert!((v[0].y - (100.0 - r)).abs() < 1e-9);
        // Side length is preserved
        assert!(((v[1] - v[0]).norm() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_hexagon_has_no_apex_offset() {
        let shape = Shape::hexagon(10.0).unwrap();
        let out = render_at(&shape, origin(), 1.0, &ShapeStyle::for_kind(ShapeKind::Hexagon));
        let v = vertices(&out[0]);
        assert_eq!(v.len(), 6);
        assert!((v[0].x - 110.0).abs() < 1e-9);
        assert!((v[0].y - 100.0).abs() < 1e-9);
        let bounds = out[0].bounds().unwrap();
        assert!((bounds.width() - 20.0).abs() < 1e-9);
        assert!((bounds.height() - 10.0 * 3.0_f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_star_alternates_radii() {
        let shape = Shape::star(10.0, 4.0).unwrap();
        let out = render_at(&shape, origin(), 1.0, &ShapeStyle::for_kind(ShapeKind::Star));
        let v = vertices(&out[0]);
        assert_eq!(v.len(), 10);
        for (i, p) in v.iter().enumerate() {
            let expected = if i % 2 == 0 { 10.0 } else { 4.0 };
            assert!(((p - origin()).norm() - expected).abs() < 1e-9);
        }
        assert!((v[0].y - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_parallelogram_matches_footprint() {
        let shape = Shape::parallelogram(10.0, 4.0, 5.0).unwrap();
        let out = render_at(&shape, origin(), 2.0, &ShapeStyle::for_kind(ShapeKind::Parallelogram));
        let bounds = out[0].bounds().unwrap();
        let fp = shape.footprint();
        assert!((bounds.width() - fp.width * 2.0).abs() < 1e-9);
        assert!((bounds.height() - fp.height * 2.0).abs() < 1e-9);
        assert!((bounds.center() - origin()).norm() < 1e-9);
    }

    #[test]
    fn test_cube_proxy_faces() {
        let shape = Shape::cube(10.0).unwrap();
        let out = render_at(&shape, origin(), 1.0, &ShapeStyle::for_kind(ShapeKind::Cube));
        assert_eq!(out.len(), 3);
        assert_eq!(out[2].z_order, z::SHAPE_FRONT);
        assert!(out[..2].iter().all(|i| i.z_order == z::SHAPE));
    }

    #[test]
    fn test_solids_render_centered() {
        let solids = [
            Shape::sphere(5.0).unwrap(),
            Shape::cube(10.0).unwrap(),
            Shape::cylinder(5.0, 10.0).unwrap(),
            Shape::cone(5.0, 10.0).unwrap(),
            Shape::pyramid(10.0, 10.0).unwrap(),
        ];
        for shape in &solids {
            let out = render_at(shape, origin(), 1.0, &ShapeStyle::for_kind(shape.kind()));
            let bounds = out
                .iter()
                .filter_map(|i| i.bounds())
                .reduce(|a, b| {
                    BoundingBox::new(
                        a.min_x.min(b.min_x),
                        a.min_y.min(b.min_y),
                        a.max_x.max(b.max_x),
                        a.max_y.max(b.max_y),
                    )
                })
                .unwrap();
            // Proxies stay roughly around the requested center
            assert!((bounds.center() - origin()).norm() < 5.0, "{:?}", shape.kind());
        }
    }

    #[test]
    fn test_octagon_drawing_exceeds_footprint() {
        let shape = Shape::octagon(2.0).unwrap();
        let out = render_at(&shape, origin(), 1.0, &ShapeStyle::for_kind(ShapeKind::Octagon));
        let bounds = out[0].bounds().unwrap();
        let drawn = 2.0 / (PI / 8.0).sin();
        assert!((bounds.height() - drawn).abs() < 1e-9);
        assert!((bounds.width() - drawn).abs() < 1e-9);
        assert!(bounds.height() > shape.footprint().height);
    }

    #[test]
    fn test_render_is_pure() {
        let shape = Shape::octagon(3.0).unwrap();
        let style = ShapeStyle::for_kind(ShapeKind::Octagon);
        assert_eq!(
            render_at(&shape, origin(), 1.5, &style),
            render_at(&shape, origin(), 1.5, &style)
        );
    }

    #[test]
    fn test_custom_fill_and_opacity() {
        let style = ShapeStyle::for_kind(ShapeKind::Square)
            .with_fill(Color::rgb(1, 2, 3))
            .with_opacity(50);
        let out = render_at(&Shape::square(1.0).unwrap(), origin(), 1.0, &style);
        assert_eq!(out[0].style.fill, Some(Color::rgb(1, 2, 3).with_opacity(50)));
    }

    #[test]
    fn test_body_with_rings_and_label() {
        let body = ReferenceBody::new(10.0, "Saturn", true).unwrap();
        let out = render_body(&body, origin(), 2.0);
        assert_eq!(out.len(), 3);
        assert_eq!(out[0].z_order, z::BODY);
        assert_eq!(out[1].z_order, z::BACKDROP);
        assert!(matches!(
            &out[2].primitive,
            Primitive::Text { text, .. } if text == "Saturn"
        ));
    }

    #[test]
    fn test_body_without_rings() {
        let body = ReferenceBody::new(10.0, "", false).unwrap();
        assert_eq!(render_body(&body, origin(), 1.0).len(), 1);
    }
}
