//! Measured trait definition
//!
//! `Measured` is the common view of anything that has metric properties and
//! occupies space in a scene: every `Shape`, and the `ReferenceBody` it is
//! placed next to. The scale selector only needs footprints, so it works on
//! anything implementing this trait.

use super::metrics::Footprint;

/// An object with closed-form metric properties
///
/// ## Conventions
///
/// - Planar shapes report `volume() == 0.0`.
/// - Solids report surface area from `area()` and `perimeter() == 0.0`.
/// - The footprint is the unscaled bounding box in native units.
pub trait Measured: Send + Sync {
    /// Display name (for labels and reports)
    fn name(&self) -> &str;

    /// Area for planar shapes, total surface area for solids
    fn area(&self) -> f64;

    fn perimeter(&self) -> f64;

    fn volume(&self) -> f64 {
        0.0
    }

    fn footprint(&self) -> Footprint;

    /// Whether this object is a solid
    fn is_solid(&self) -> bool {
        self.footprint().depth > 0.0
    }
}
