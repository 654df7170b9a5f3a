//! Spirograph - deterministic trochoid curves rendered as SVG
//!
//! This library samples hypotrochoid/epitrochoid curves from a small set of
//! numeric knobs and serializes them as self-contained SVG documents. Both
//! stages are pure functions: all randomness happens up front, when a
//! configuration is built from a seeded design number.
//!
//! # Example
//!
//! ```rust
//! use spirograph::{render, SpiroConfig};
//!
//! let svg = render(&SpiroConfig::default(), 1).unwrap();
//! assert!(svg.contains("<svg"));
//! ```

pub mod config;
pub mod curve;
pub mod geometry;
pub mod palette;
pub mod renderer;

pub use config::{ConfigError, SpiroConfig, SpiroType};
pub use curve::{generate, Curve, CurveError};
pub use geometry::{BoundingBox, Point};
pub use palette::{Palette, PaletteError};
pub use renderer::{render_svg, RenderError, SvgConfig};

use thiserror::Error;

/// Errors that can occur during the render pipeline
#[derive(Debug, Error)]
pub enum SpiroError {
    /// A configuration knob is outside its domain
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// Error while sampling the curve
    #[error("curve error: {0}")]
    Curve(#[from] CurveError),

    /// Error while rendering the document
    #[error("render error: {0}")]
    Render(#[from] RenderError),
}

/// Render a configuration to an SVG document with default output settings.
///
/// This is the main entry point for the library. It validates the
/// configuration, samples the curve, and serializes the scaled result.
///
/// # Example
///
/// ```rust
/// use spirograph::{render, SpiroConfig, SpiroType};
///
/// let config = SpiroConfig {
///     spiro_type: SpiroType::Epitrochoid,
///     ..SpiroConfig::default()
/// };
/// let svg = render(&config, 7).unwrap();
/// assert!(svg.contains("epitrochoid"));
/// ```
pub fn render(config: &SpiroConfig, design_number: u64) -> Result<String, SpiroError> {
    render_with_config(config, design_number, &SvgConfig::default())
}

/// Render a configuration to an SVG document with custom output settings.
///
/// # Example
///
/// ```rust
/// use spirograph::{render_with_config, SpiroConfig, SvgConfig};
///
/// let svg_config = SvgConfig::default().with_margin_fraction(0.8).with_precision(2);
/// let svg = render_with_config(&SpiroConfig::default(), 1, &svg_config).unwrap();
/// assert!(svg.contains("<path"));
/// ```
pub fn render_with_config(
    config: &SpiroConfig,
    design_number: u64,
    svg_config: &SvgConfig,
) -> Result<String, SpiroError> {
    config.validate()?;
    let curve = curve::generate(config)?;
    let svg = renderer::render_svg(&curve, config, design_number, svg_config)?;
    Ok(svg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_default_config() {
        let svg = render(&SpiroConfig::default(), 1).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("</svg>"));
        assert!(svg.contains("<path"));
    }

    #[test]
    fn test_render_validates_first() {
        let config = SpiroConfig {
            theta_step: 0.0,
            ..SpiroConfig::default()
        };
        let err = render(&config, 1).unwrap_err();
        assert!(matches!(err, SpiroError::Config(_)));
    }

    #[test]
    fn test_render_surfaces_geometry_errors() {
        let config = SpiroConfig {
            inner_radius: 0.0,
            ..SpiroConfig::default()
        };
        let err = render(&config, 1).unwrap_err();
        assert!(matches!(err, SpiroError::Curve(CurveError::InvalidGeometry(_))));
    }

    #[test]
    fn test_render_surfaces_degenerate_curve() {
        let config = SpiroConfig {
            outer_radius: 75.0,
            inner_radius: 75.0,
            pen_offset: 0.0,
            ..SpiroConfig::default()
        };
        let err = render(&config, 1).unwrap_err();
        assert!(matches!(err, SpiroError::Render(RenderError::DegenerateCurve)));
    }

    #[test]
    fn test_render_randomized_config() {
        let config = SpiroConfig::randomized(99);
        let svg = render(&config, 99).unwrap();
        assert!(svg.contains("design 99"));
    }
}
