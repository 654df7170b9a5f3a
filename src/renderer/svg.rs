//! SVG generation from sampled curves

use thiserror::Error;

use crate::config::SpiroConfig;
use crate::curve::Curve;
use crate::geometry::Point;

use super::SvgConfig;

/// Errors that can occur while rendering a curve to SVG
#[derive(Debug, Error)]
pub enum RenderError {
    /// Every point coincides, so there is no extent to scale into the canvas
    #[error("degenerate curve: all points coincide, nothing to scale")]
    DegenerateCurve,
}

/// Build the SVG document incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    elements: Vec<String>,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            elements: vec![],
        }
    }

    /// Add the document title
    pub fn add_title(&mut self, design_number: u64) {
        self.elements
            .push(format!("  <title>Spirograph Design {design_number}</title>"));
    }

    /// Add a description carrying the full parameter set, so the design can
    /// be reproduced from the artifact alone
    pub fn add_desc(&mut self, config: &SpiroConfig, design_number: u64) {
        self.elements.push(format!(
            "  <desc>{} design {}: R={} r={} d={} step={} cycles={} stroke={} width={} canvas={}</desc>",
            config.spiro_type,
            design_number,
            config.outer_radius,
            config.inner_radius,
            config.pen_offset,
            config.theta_step,
            config.cycles,
            config.stroke_color,
            config.stroke_width,
            config.canvas_size,
        ));
    }

    /// Add the background rect covering the canvas
    pub fn add_background(&mut self, size: u32, fill: &str) {
        self.elements.push(format!(
            r#"  <rect x="0" y="0" width="{size}" height="{size}" fill="{fill}"/>"#
        ));
    }

    /// Add the curve as a single stroked path
    pub fn add_curve_path(&mut self, points: &[Point], stroke_color: &str, stroke_width: f64) {
        let d = path_data(points, self.config.precision);
        self.elements.push(format!(
            r#"  <path d="{d}" fill="none" stroke="{stroke_color}" stroke-width="{stroke_width}" stroke-linecap="round" stroke-linejoin="round"/>"#
        ));
    }

    /// Build the final SVG string
    pub fn build(self, canvas_size: u32) -> String {
        let mut svg = String::new();

        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push('\n');
        }

        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">"#,
            size = canvas_size
        ));
        svg.push('\n');

        for elem in &self.elements {
            svg.push_str(elem);
            svg.push('\n');
        }

        svg.push_str("</svg>\n");

        svg
    }
}

/// Serialize points into an SVG path `d` attribute: `M x y L x y ...`
fn path_data(points: &[Point], precision: usize) -> String {
    let mut d = String::new();
    for (index, point) in points.iter().enumerate() {
        let command = if index == 0 { 'M' } else { 'L' };
        if index > 0 {
            d.push(' ');
        }
        d.push_str(&format!(
            "{command} {x:.prec$} {y:.prec$}",
            x = point.x,
            y = point.y,
            prec = precision
        ));
    }
    d
}

/// Uniformly scale and translate raw points so the curve's bounding box is
/// centered on the canvas with a margin border.
///
/// Both axes share one scale factor; non-uniform scaling would distort the
/// curve's proportions.
fn scale_points(curve: &Curve, canvas_size: u32, margin_fraction: f64) -> Vec<Point> {
    let extent = curve.bounds.width().max(curve.bounds.height());
    let scale = f64::from(canvas_size) * margin_fraction / extent;
    let center = curve.bounds.center();
    let half_canvas = f64::from(canvas_size) / 2.0;

    curve
        .points
        .iter()
        .map(|p| {
            Point::new(
                half_canvas + (p.x - center.x) * scale,
                half_canvas + (p.y - center.y) * scale,
            )
        })
        .collect()
}

/// Render a sampled curve to a complete SVG document.
///
/// Fails with [`RenderError::DegenerateCurve`] when the curve has no spatial
/// extent (all points coincide).
pub fn render_svg(
    curve: &Curve,
    config: &SpiroConfig,
    design_number: u64,
    svg_config: &SvgConfig,
) -> Result<String, RenderError> {
    if curve.bounds.is_degenerate() {
        return Err(RenderError::DegenerateCurve);
    }

    let scaled = scale_points(curve, config.canvas_size, svg_config.margin_fraction);

    let mut builder = SvgBuilder::new(svg_config.clone());
    builder.add_title(design_number);
    builder.add_desc(config, design_number);
    if let Some(fill) = &svg_config.background {
        builder.add_background(config.canvas_size, fill);
    }
    builder.add_curve_path(&scaled, &config.stroke_color, config.stroke_width);

    Ok(builder.build(config.canvas_size))
}
