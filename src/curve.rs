//! Trochoid curve generation
//!
//! Pure sampling of the hypotrochoid/epitrochoid equations: a configuration
//! goes in, an ordered point sequence plus its raw bounding box comes out.
//! Scaling to the canvas happens later, in the renderer.

use std::f64::consts::PI;

use thiserror::Error;

use crate::config::{SpiroConfig, SpiroType};
use crate::geometry::{BoundingBox, Point};

/// Errors that can occur while sampling the curve
#[derive(Debug, Error)]
pub enum CurveError {
    /// The curve formula is undefined for this geometry
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    /// The angular step is too coarse for the requested range
    #[error(
        "theta step {theta_step} over {cycles} cycle(s) yields {points} sample(s); \
         at least 2 are required"
    )]
    InsufficientSamples {
        theta_step: f64,
        cycles: u32,
        points: usize,
    },
}

/// A sampled curve: points in draw order plus the raw (unscaled) extent
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    pub points: Vec<Point>,
    pub bounds: BoundingBox,
}

/// Sample the configured curve over `0 ..= cycles * 2π`.
///
/// The sample count is `floor(cycles * 2π / theta_step) + 1`; identical
/// configurations always produce bit-identical point sequences.
pub fn generate(config: &SpiroConfig) -> Result<Curve, CurveError> {
    if config.inner_radius == 0.0 {
        return Err(CurveError::InvalidGeometry(
            "inner radius is zero, so the rolling-circle ratio divides by zero".to_string(),
        ));
    }

    let total_angle = 2.0 * PI * f64::from(config.cycles);
    let steps = (total_angle / config.theta_step).floor() as usize;
    if steps < 1 {
        return Err(CurveError::InsufficientSamples {
            theta_step: config.theta_step,
            cycles: config.cycles,
            points: steps + 1,
        });
    }

    let mut points = Vec::with_capacity(steps + 1);
    for index in 0..=steps {
        let theta = index as f64 * config.theta_step;
        let point = match config.spiro_type {
            SpiroType::Hypotrochoid => hypotrochoid_point(theta, config),
            SpiroType::Epitrochoid => epitrochoid_point(theta, config),
        };
        if !point.is_finite() {
            return Err(CurveError::InvalidGeometry(format!(
                "non-finite sample at theta = {theta}"
            )));
        }
        points.push(point);
    }

    let bounds = BoundingBox::of_points(&points).ok_or(CurveError::InsufficientSamples {
        theta_step: config.theta_step,
        cycles: config.cycles,
        points: 0,
    })?;

    Ok(Curve { points, bounds })
}

fn hypotrochoid_point(theta: f64, config: &SpiroConfig) -> Point {
    let (r, d) = (config.inner_radius, config.pen_offset);
    let k = config.outer_radius - r;
    let ratio = k / r;
    Point::new(
        k * theta.cos() + d * (ratio * theta).cos(),
        k * theta.sin() - d * (ratio * theta).sin(),
    )
}

fn epitrochoid_point(theta: f64, config: &SpiroConfig) -> Point {
    let (r, d) = (config.inner_radius, config.pen_offset);
    let k = config.outer_radius + r;
    let ratio = k / r;
    Point::new(
        k * theta.cos() - d * (ratio * theta).cos(),
        k * theta.sin() - d * (ratio * theta).sin(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_count_formula() {
        let config = SpiroConfig::default();
        let curve = generate(&config).unwrap();
        let expected =
            (2.0 * PI * f64::from(config.cycles) / config.theta_step).floor() as usize + 1;
        assert_eq!(curve.points.len(), expected);
        // floor(20 * 2π / 0.02) + 1
        assert_eq!(curve.points.len(), 6284);
    }

    #[test]
    fn test_hypotrochoid_start_point() {
        // At theta = 0: x = (R - r) + d, y = 0
        let config = SpiroConfig::default();
        let curve = generate(&config).unwrap();
        let first = curve.points[0];
        assert_eq!(first.x, config.outer_radius - config.inner_radius + config.pen_offset);
        assert_eq!(first.y, 0.0);
    }

    #[test]
    fn test_epitrochoid_start_point() {
        // At theta = 0: x = (R + r) - d, y = 0
        let config = SpiroConfig {
            spiro_type: SpiroType::Epitrochoid,
            ..SpiroConfig::default()
        };
        let curve = generate(&config).unwrap();
        let first = curve.points[0];
        assert_eq!(first.x, config.outer_radius + config.inner_radius - config.pen_offset);
        assert_eq!(first.y, 0.0);
    }

    #[test]
    fn test_zero_inner_radius_is_invalid_geometry() {
        let config = SpiroConfig {
            inner_radius: 0.0,
            ..SpiroConfig::default()
        };
        let err = generate(&config).unwrap_err();
        assert!(matches!(err, CurveError::InvalidGeometry(_)));
    }

    #[test]
    fn test_coarse_theta_step_is_insufficient_samples() {
        // One cycle spans 2π; a step of 10 radians leaves a single sample
        let config = SpiroConfig {
            theta_step: 10.0,
            cycles: 1,
            ..SpiroConfig::default()
        };
        let err = generate(&config).unwrap_err();
        assert!(matches!(err, CurveError::InsufficientSamples { .. }));
    }

    #[test]
    fn test_generation_is_deterministic() {
        let config = SpiroConfig::default();
        let a = generate(&config).unwrap();
        let b = generate(&config).unwrap();
        assert_eq!(a.points, b.points);
        assert_eq!(a.bounds, b.bounds);
    }

    #[test]
    fn test_equal_radii_zero_offset_collapses_to_origin() {
        // k = R - r = 0 and d = 0 puts every sample at the origin
        let config = SpiroConfig {
            outer_radius: 75.0,
            inner_radius: 75.0,
            pen_offset: 0.0,
            ..SpiroConfig::default()
        };
        let curve = generate(&config).unwrap();
        assert!(curve.points.iter().all(|p| p.x == 0.0 && p.y == 0.0));
        assert!(curve.bounds.is_degenerate());
    }

    #[test]
    fn test_bounds_cover_all_points() {
        let curve = generate(&SpiroConfig::default()).unwrap();
        for point in &curve.points {
            assert!(point.x >= curve.bounds.min_x && point.x <= curve.bounds.max_x);
            assert!(point.y >= curve.bounds.min_y && point.y <= curve.bounds.max_y);
        }
    }
}
