//! Shape kinds - the closed set of shape tags
//!
//! A `ShapeKind` is what the surrounding application selects from a list
//! before any numbers are entered. It knows how many parameters the shape
//! takes and what each one is called.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GeometryError;

/// Every shape the crate can measure and draw
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum ShapeKind {
    Circle,
    Rectangle,
    Triangle,
    Square,
    Ellipse,
    Parallelogram,
    Rhombus,
    Pentagon,
    Hexagon,
    Octagon,
    Star,
    Sphere,
    Cube,
    Cylinder,
    Cone,
    Pyramid,
}

impl ShapeKind {
    pub fn all() -> &'static [ShapeKind] {
        &[
            ShapeKind::Circle,
            ShapeKind::Rectangle,
            ShapeKind::Triangle,
            ShapeKind::Square,
            ShapeKind::Ellipse,
            ShapeKind::Parallelogram,
            ShapeKind::Rhombus,
            ShapeKind::Pentagon,
            ShapeKind::Hexagon,
            ShapeKind::Octagon,
            ShapeKind::Star,
            ShapeKind::Sphere,
            ShapeKind::Cube,
            ShapeKind::Cylinder,
            ShapeKind::Cone,
            ShapeKind::Pyramid,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Circle => "Circle",
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Triangle => "Triangle",
            ShapeKind::Square => "Square",
            ShapeKind::Ellipse => "Ellipse",
            ShapeKind::Parallelogram => "Parallelogram",
            ShapeKind::Rhombus => "Rhombus",
            ShapeKind::Pentagon => "Pentagon",
            ShapeKind::Hexagon => "Hexagon",
            ShapeKind::Octagon => "Octagon",
            ShapeKind::Star => "Star",
            ShapeKind::Sphere => "Sphere",
            ShapeKind::Cube => "Cube",
            ShapeKind::Cylinder => "Cylinder",
            ShapeKind::Cone => "Cone",
            ShapeKind::Pyramid => "Pyramid",
        }
    }

    /// Whether this kind is a solid (has volume, reports surface area)
    pub fn is_solid(&self) -> bool {
        matches!(
            self,
            ShapeKind::Sphere
                | ShapeKind::Cube
                | ShapeKind::Cylinder
                | ShapeKind::Cone
                | ShapeKind::Pyramid
        )
    }

    /// Input labels, in the order `Shape::from_params` expects the values
    pub fn parameter_labels(&self) -> &'static [&'static str] {
        match self {
            ShapeKind::Circle | ShapeKind::Sphere => &["Radius"],
            ShapeKind::Rectangle => &["Width", "Height"],
            ShapeKind::Triangle => &["Base", "Height"],
            ShapeKind::Square
            | ShapeKind::Pentagon
            | ShapeKind::Hexagon
            | ShapeKind::Octagon
            | ShapeKind::Cube => &["Side"],
            ShapeKind::Ellipse => &["Semi-major axis (a)", "Semi-minor axis (b)"],
            ShapeKind::Parallelogram => &["Base", "Side", "Height"],
            ShapeKind::Rhombus => &["Diagonal 1", "Diagonal 2"],
            ShapeKind::Star => &["Outer radius", "Inner radius"],
            ShapeKind::Cylinder | ShapeKind::Cone => &["Radius", "Height"],
            ShapeKind::Pyramid => &["Base side", "Height"],
        }
    }

    pub fn parameter_count(&self) -> usize {
        self.parameter_labels().len()
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ShapeKind::all()
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| GeometryError::UnknownVariant {
                kind: "shape",
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("circle".parse::<ShapeKind>(), Ok(ShapeKind::Circle));
        assert_eq!(" PYRAMID ".parse::<ShapeKind>(), Ok(ShapeKind::Pyramid));
    }

    #[test]
    fn test_parse_unknown() {
        let err = "dodecahedron".parse::<ShapeKind>().unwrap_err();
        assert!(matches!(err, GeometryError::UnknownVariant { kind: "shape", .. }));
    }

    #[test]
    fn test_all_kinds_round_trip_names() {
        assert_eq!(ShapeKind::all().len(), 16);
        for kind in ShapeKind::all() {
            assert_eq!(kind.name().parse::<ShapeKind>(), Ok(*kind));
            assert!(kind.parameter_count() >= 1);
        }
    }

    #[test]
    fn test_solids() {
        let solids: Vec<_> = ShapeKind::all().iter().filter(|k| k.is_solid()).collect();
        assert_eq!(solids.len(), 5);
        assert!(!ShapeKind::Hexagon.is_solid());
    }
}
