//! Colors and the default per-shape palette

use serde::{Deserialize, Serialize};

use crate::shapes::ShapeKind;

/// An 8-bit RGBA color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const GRAY: Color = Color::rgb(128, 128, 128);
    pub const SLATE_GRAY: Color = Color::rgb(112, 128, 144);
    pub const DARK_SLATE_GRAY: Color = Color::rgb(47, 79, 79);
    pub const TAN: Color = Color::rgb(210, 180, 140);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Apply an opacity percentage (0-100, clamped), mapped linearly onto 0-255
    pub fn with_opacity(self, percent: u8) -> Self {
        let percent = u32::from(percent.min(100));
        Self {
            a: ((percent * 255 + 50) / 100) as u8,
            ..self
        }
    }

    /// Darken (factor < 1) or lighten (factor > 1) the RGB channels
    pub fn shaded(self, factor: f64) -> Self {
        let scale = |c: u8| (f64::from(c) * factor).round().clamp(0.0, 255.0) as u8;
        Self {
            r: scale(self.r),
            g: scale(self.g),
            b: scale(self.b),
            a: self.a,
        }
    }

    /// Default (fill, stroke) pair for a shape kind
    pub fn palette(kind: ShapeKind) -> (Color, Color) {
        match kind {
            ShapeKind::Circle => (Color::rgb(173, 216, 230), Color::rgb(0, 0, 255)),
            ShapeKind::Rectangle => (Color::rgb(144, 238, 144), Color::rgb(0, 128, 0)),
            ShapeKind::Triangle => (Color::rgb(255, 255, 0), Color::rgb(255, 165, 0)),
            ShapeKind::Square => (Color::rgb(255, 192, 203), Color::rgb(255, 0, 0)),
            ShapeKind::Ellipse => (Color::rgb(255, 255, 224), Color::rgb(165, 42, 42)),
            ShapeKind::Parallelogram => (Color::rgb(0, 255, 255), Color::rgb(0, 0, 139)),
            ShapeKind::Rhombus => (Color::rgb(238, 130, 238), Color::rgb(128, 0, 128)),
            ShapeKind::Pentagon => (Color::rgb(255, 165, 0), Color::rgb(139, 0, 0)),
            ShapeKind::Hexagon => (Color::rgb(175, 238, 238), Color::rgb(0, 128, 128)),
            ShapeKind::Octagon => (Color::rgb(240, 128, 128), Color::rgb(178, 34, 34)),
            ShapeKind::Star => (Color::rgb(255, 215, 0), Color::rgb(255, 140, 0)),
            ShapeKind::Sphere => (Color::rgb(176, 196, 222), Color::rgb(70, 130, 180)),
            ShapeKind::Cube => (Color::rgb(211, 211, 211), Color::rgb(105, 105, 105)),
            ShapeKind::Cylinder => (Color::rgb(245, 222, 179), Color::rgb(160, 82, 45)),
            ShapeKind::Cone => (Color::rgb(255, 218, 185), Color::rgb(210, 105, 30)),
            ShapeKind::Pyramid => (Color::rgb(240, 230, 140), Color::rgb(128, 128, 0)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opacity_mapping() {
        let c = Color::rgb(10, 20, 30);
        assert_eq!(c.with_opacity(100).a, 255);
        assert_eq!(c.with_opacity(0).a, 0);
        assert_eq!(c.with_opacity(50).a, 128);
        assert_eq!(c.with_opacity(200).a, 255);
        assert_eq!(c.with_opacity(40).r, 10);
    }

    #[test]
    fn test_shaded() {
        let c = Color::rgb(200, 100, 0).with_opacity(50);
        let dark = c.shaded(0.5);
        assert_eq!((dark.r, dark.g, dark.b, dark.a), (100, 50, 0, 128));
        let light = c.shaded(2.0);
        assert_eq!(light.r, 255);
    }

    #[test]
    fn test_palette_matches_classic_colors() {
        let (fill, stroke) = Color::palette(ShapeKind::Circle);
        assert_eq!(fill, Color::rgb(173, 216, 230));
        assert_eq!(stroke, Color::rgb(0, 0, 255));
    }
}
