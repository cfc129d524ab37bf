//! End-to-end scenarios through the public API

use nalgebra::{Point2, Vector2};
use shapescope::layout::{
    compose, intersects, place, AlignmentMode, BoundingBox, PlacementInput, SceneRequest,
    ScaleRegime, Viewport,
};
use shapescope::render::{z, Primitive};
use shapescope::shapes::{Measured, ReferenceBody, Shape, ShapeKind};
use shapescope::GeometryError;

#[test]
fn test_lone_circle() {
    let circle = Shape::circle(50.0).unwrap();
    let scene = compose(&SceneRequest::new(circle, Viewport::new(300.0, 200.0)));

    assert!((scene.placement.scale - 1.6).abs() < 1e-9);
    assert_eq!(scene.placement.regime, ScaleRegime::ShapeOnly);
    assert!((scene.report.area - 7853.98).abs() < 0.01);
    assert!((scene.report.perimeter - 314.16).abs() < 0.01);
    assert!(scene.report.to_string().starts_with("Area = 7853.98\nPerimeter = 314.16"));
}

#[test]
fn test_small_square_next_to_large_body() {
    let square = Shape::square(10.0).unwrap();
    let body = ReferenceBody::new(1000.0, "Planet", false).unwrap();
    let scene = compose(
        &SceneRequest::new(square, Viewport::new(800.0, 600.0))
            .with_reference(body)
            .with_alignment(AlignmentMode::Center),
    );

    assert_eq!(scene.placement.regime, ScaleRegime::ReferenceDominant);
    assert!((scene.placement.scale - 0.12).abs() < 1e-9);
    assert_eq!(scene.placement.reference_center, Some(scene.placement.shape_center));
    assert!(scene.placement.overlap);
}

#[test]
fn test_rectangle_right_of_body() {
    let rect = Shape::rectangle(4.0, 3.0).unwrap();
    let body = ReferenceBody::new(10.0, "Moon", false).unwrap();
    let scale = 5.0;
    let fp = rect.footprint();

    let anchor = Point2::new(400.0, 300.0);
    let input = PlacementInput::new(
        anchor,
        body.radius() * scale,
        Vector2::new(fp.width * scale, fp.height * scale),
        Viewport::new(800.0, 600.0),
    )
    .with_margin(10.0);
    let center = place(AlignmentMode::Right, &input, None);

    assert!((center.x - (anchor.x + 70.0)).abs() < 1e-9);
    assert_eq!(center.y, anchor.y);
}

#[test]
fn test_bounding_box_pairs() {
    let a = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
    assert!(!intersects(&a, &BoundingBox::new(20.0, 20.0, 30.0, 30.0)));
    assert!(intersects(&a, &BoundingBox::new(5.0, 5.0, 15.0, 15.0)));
}

#[test]
fn test_orbit_animation_ticks() {
    let body = ReferenceBody::new(10.0, "Earth", false).unwrap();
    let base = SceneRequest::new(Shape::circle(1.0).unwrap(), Viewport::new(800.0, 600.0))
        .with_reference(body)
        .with_alignment(AlignmentMode::Orbit);

    let mut phase = 0.0;
    let mut centers = Vec::new();
    for _ in 0..4 {
        let scene = compose(&base.clone().with_phase(phase));
        centers.push(scene.placement.shape_center);
        phase = shapescope::layout::advance_phase(phase, std::f64::consts::FRAC_PI_2, 1.0);
    }
    let reference = Point2::new(400.0, 300.0);
    let radii: Vec<f64> = centers.iter().map(|c| (c - reference).norm()).collect();
    for r in &radii {
        assert!((r - radii[0]).abs() < 1e-9);
    }
    // Quarter turns: right, below, left, above (pixel y grows downward)
    assert!(centers[0].x > reference.x);
    assert!(centers[1].y > reference.y);
    assert!(centers[2].x < reference.x);
    assert!(centers[3].y < reference.y);
}

#[test]
fn test_every_kind_renders() {
    let viewport = Viewport::new(640.0, 480.0);
    for kind in ShapeKind::all() {
        let params = vec![Some(2.0); kind.parameter_count()];
        let shape = Shape::from_params(*kind, &params).unwrap();
        let scene = compose(&SceneRequest::new(shape, viewport));
        assert!(
            scene
                .instructions
                .iter()
                .any(|i| (z::SHAPE..=z::SHAPE_FRONT).contains(&i.z_order)
                    && !matches!(i.primitive, Primitive::Text { .. })),
            "{kind} produced no shape primitives"
        );
        assert_eq!(scene.report.solid, kind.is_solid());
    }
}

#[test]
fn test_huge_shape_with_log_scale() {
    let mut request = SceneRequest::new(Shape::square(1e9).unwrap(), Viewport::new(800.0, 600.0));
    request.use_log = true;
    let scene = compose(&request);
    assert_eq!(scene.placement.regime, ScaleRegime::Logarithmic);
    assert!((scene.placement.scale - 640.0 / 900.0).abs() < 1e-9);
}

#[test]
fn test_invalid_input_surfaces_single_message() {
    let err = Shape::from_params(ShapeKind::Triangle, &[Some(3.0), Some(0.0)]).unwrap_err();
    assert_eq!(err.to_string(), "Height must be positive");

    let err = "Trapezoid".parse::<ShapeKind>().unwrap_err();
    assert!(matches!(err, GeometryError::UnknownVariant { .. }));
}

#[test]
fn test_random_alignment_with_seed() {
    let body = ReferenceBody::new(10.0, "Mars", false).unwrap();
    let mut request = SceneRequest::new(Shape::hexagon(1.0).unwrap(), Viewport::new(800.0, 600.0))
        .with_reference(body)
        .with_alignment(AlignmentMode::Random);
    request.seed = Some(2024);
    let a = compose(&request);
    let b = compose(&request);
    assert_eq!(a.placement.shape_center, b.placement.shape_center);
}

#[test]
fn test_scene_serializes() {
    let star = Shape::star(3.0, 1.0).unwrap();
    let scene = compose(&SceneRequest::new(star, Viewport::new(300.0, 300.0)));
    let json = serde_json::to_value(&scene).unwrap();
    assert!(json["instructions"].as_array().is_some_and(|a| !a.is_empty()));
    assert_eq!(json["report"]["shape"], "Star");
}
