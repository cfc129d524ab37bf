//! Render module - renderer-agnostic drawing output
//!
//! This module provides:
//! - `RenderInstruction` and its primitives, styles and z-order layers
//! - `Color` with opacity mapping and the default per-shape palette

mod color;
mod instruction;

pub use color::Color;
pub use instruction::{sort_by_z, z, Primitive, RenderInstruction, Stroke, Style};
