//! SVG renderer for serializing generated curves
//!
//! This module takes a sampled curve, scales it into the canvas, and
//! produces a self-contained SVG document string.

pub mod config;
pub mod svg;

pub use config::SvgConfig;
pub use svg::{render_svg, RenderError};
