//! shapescope - shape metrics and scene placement at any size ratio
//!
//! Measure a 2D or 3D shape, then place it in a 2D scene next to an optional
//! reference body (a planet, a moon) with a scale that keeps both visible no
//! matter how different their sizes are.
//!
//! ```
//! use shapescope::layout::{compose, AlignmentMode, SceneRequest, Viewport};
//! use shapescope::shapes::{ReferenceBody, Shape};
//!
//! let shape = Shape::rectangle(4.0, 3.0)?;
//! let moon = ReferenceBody::new(10.0, "Moon", false)?;
//! let scene = compose(
//!     &SceneRequest::new(shape, Viewport::new(800.0, 600.0))
//!         .with_reference(moon)
//!         .with_alignment(AlignmentMode::Right),
//! );
//! assert!(!scene.placement.overlap);
//! println!("{}", scene.report);
//! # Ok::<(), shapescope::GeometryError>(())
//! ```
//!
//! The core is synchronous and stateless. Everything that changes over time
//! (the orbit phase, the zoom) is passed in by the caller.

pub mod error;
pub mod layout;
pub mod render;
pub mod settings;
pub mod shapes;

pub use error::{GeometryError, Result};
