//! Overlap detection between placed objects
//!
//! This is a bounding-box approximation: two objects "overlap" when their
//! axis-aligned boxes do. Non-rectangular shapes whose boxes touch can be
//! reported as overlapping while their actual outlines are apart.

use nalgebra::Point2;
use serde::Serialize;

/// Axis-aligned rectangle in pixel space
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        debug_assert!(min_x <= max_x && min_y <= max_y, "inverted bounding box");
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Box of the given size centered on a point
    pub fn from_center_size(center: Point2<f64>, width: f64, height: f64) -> Self {
        let (hw, hh) = (width / 2.0, height / 2.0);
        Self {
            min_x: center.x - hw,
            min_y: center.y - hh,
            max_x: center.x + hw,
            max_y: center.y + hh,
        }
    }

    /// Smallest box containing every point, `None` for an empty iterator
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point2<f64>>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bounds = Self::new(first.x, first.y, first.x, first.y);
        for p in iter {
            bounds.min_x = bounds.min_x.min(p.x);
            bounds.min_y = bounds.min_y.min(p.y);
            bounds.max_x = bounds.max_x.max(p.x);
            bounds.max_y = bounds.max_y.max(p.y);
        }
        Some(bounds)
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn center(&self) -> Point2<f64> {
        Point2::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    pub fn intersects(&self, other: &BoundingBox) -> bool {
        intersects(self, other)
    }
}

/// Separating-axis test for two axis-aligned boxes
///
/// The boxes are apart only if one box's max is strictly less than the
/// other's min on some axis, so boxes that merely touch count as overlapping.
pub fn intersects(a: &BoundingBox, b: &BoundingBox) -> bool {
    let separated =
        a.max_x < b.min_x || b.max_x < a.min_x || a.max_y < b.min_y || b.max_y < a.min_y;
    !separated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disjoint_boxes() {
        let a = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        let b = BoundingBox::new(20.0, 20.0, 30.0, 30.0);
        assert!(!intersects(&a, &b));
    }

    #[test]
    fn test_overlapping_boxes() {
        let a = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        let b = BoundingBox::new(5.0, 5.0, 15.0, 15.0);
        assert!(intersects(&a, &b));
    }

    #[test]
    fn test_touching_edges_overlap() {
        let a = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        let b = BoundingBox::new(10.0, 0.0, 20.0, 10.0);
        assert!(intersects(&a, &b));
    }

    #[test]
    fn test_separated_on_one_axis_only() {
        // Overlap in x, apart in y
        let a = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        let b = BoundingBox::new(2.0, 10.5, 8.0, 20.0);
        assert!(!intersects(&a, &b));
    }

    #[test]
    fn test_containment() {
        let outer = BoundingBox::new(0.0, 0.0, 100.0, 100.0);
        let inner = BoundingBox::new(40.0, 40.0, 60.0, 60.0);
        assert!(intersects(&outer, &inner));
    }

    #[test]
    fn test_symmetry() {
        let boxes = [
            BoundingBox::new(0.0, 0.0, 10.0, 10.0),
            BoundingBox::new(5.0, 5.0, 15.0, 15.0),
            BoundingBox::new(20.0, 20.0, 30.0, 30.0),
            BoundingBox::new(-5.0, 9.0, 0.0, 12.0),
            BoundingBox::new(10.0, -10.0, 10.0, 40.0),
        ];
        for a in &boxes {
            for b in &boxes {
                assert_eq!(intersects(a, b), intersects(b, a));
            }
        }
    }

    #[test]
    fn test_from_center_size() {
        let b = BoundingBox::from_center_size(Point2::new(50.0, 40.0), 20.0, 10.0);
        assert_eq!(b, BoundingBox::new(40.0, 35.0, 60.0, 45.0));
        assert_eq!(b.center(), Point2::new(50.0, 40.0));
        assert_eq!((b.width(), b.height()), (20.0, 10.0));
    }

    #[test]
    fn test_from_points_empty() {
        assert_eq!(BoundingBox::from_points(Vec::new()), None);
    }
}
