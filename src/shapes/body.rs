//! Reference body - the optional anchor a shape is placed next to
//!
//! Always modeled as a sphere seen edge-on: a disc in the scene, with an
//! optional ring system drawn around it.

use std::f64::consts::PI;

use serde::Serialize;

use super::metrics::Footprint;
use super::traits::Measured;
use crate::error::{require_positive, Result};

/// An "astronomical object" used as a spatial anchor
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReferenceBody {
    radius: f64,
    name: String,
    has_rings: bool,
}

impl ReferenceBody {
    pub fn new(radius: f64, name: impl Into<String>, has_rings: bool) -> Result<Self> {
        require_positive("Reference radius", radius)?;
        Ok(Self {
            radius,
            name: name.into(),
            has_rings,
        })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn has_rings(&self) -> bool {
        self.has_rings
    }
}

impl Measured for ReferenceBody {
    fn name(&self) -> &str {
        &self.name
    }

    fn area(&self) -> f64 {
        4.0 * PI * self.radius * self.radius
    }

    fn perimeter(&self) -> f64 {
        0.0
    }

    fn volume(&self) -> f64 {
        4.0 / 3.0 * PI * self.radius.powi(3)
    }

    fn footprint(&self) -> Footprint {
        let d = 2.0 * self.radius;
        Footprint::solid(d, d, d)
    }
}
