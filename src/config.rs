//! Configuration model for spirograph designs
//!
//! A [`SpiroConfig`] is an immutable bag of knobs built once per run, either
//! from explicit values or from a PRNG seeded by the design number. The curve
//! generator and renderer only ever read it.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg64;
use thiserror::Error;

/// Errors produced while building or validating a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A knob holds a value outside its mathematical domain
    #[error("invalid value for {knob}: {reason}")]
    InvalidValue { knob: &'static str, reason: String },

    /// A knob falls outside its accepted range
    #[error("{knob} must be between {min} and {max}, got {value}")]
    OutOfRange {
        knob: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Unrecognized curve family name
    #[error("unknown spirograph type '{0}' (expected 'hypotrochoid' or 'epitrochoid')")]
    UnknownType(String),

    /// Stroke color that is not a hex value
    #[error("stroke color must be a hex value like #ff00aa, got '{0}'")]
    InvalidColor(String),
}

/// The two supported curve families
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpiroType {
    /// Pen on a circle rolling inside the fixed circle
    Hypotrochoid,
    /// Pen on a circle rolling outside the fixed circle
    Epitrochoid,
}

impl SpiroType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpiroType::Hypotrochoid => "hypotrochoid",
            SpiroType::Epitrochoid => "epitrochoid",
        }
    }
}

impl fmt::Display for SpiroType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpiroType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hypotrochoid" => Ok(SpiroType::Hypotrochoid),
            "epitrochoid" => Ok(SpiroType::Epitrochoid),
            other => Err(ConfigError::UnknownType(other.to_string())),
        }
    }
}

/// Metadata describing a numeric knob: prompt text plus the accepted range.
///
/// Ranges bound both interactive input and random mode; they are deliberately
/// tighter than what the math tolerates so random designs stay printable.
#[derive(Debug, Clone, Copy)]
pub struct Knob {
    pub name: &'static str,
    pub prompt: &'static str,
    pub min: f64,
    pub max: f64,
}

impl Knob {
    /// Reject values outside the knob's accepted range
    pub fn check(&self, value: f64) -> Result<f64, ConfigError> {
        if value < self.min || value > self.max {
            return Err(ConfigError::OutOfRange {
                knob: self.name,
                value,
                min: self.min,
                max: self.max,
            });
        }
        Ok(value)
    }
}

pub const OUTER_RADIUS: Knob = Knob {
    name: "outer_radius",
    prompt: "Outer radius of the fixed circle",
    min: 10.0,
    max: 400.0,
};

pub const INNER_RADIUS: Knob = Knob {
    name: "inner_radius",
    prompt: "Inner radius of the rolling circle",
    min: 5.0,
    max: 250.0,
};

pub const PEN_OFFSET: Knob = Knob {
    name: "pen_offset",
    prompt: "Distance of the pen from the rolling circle center",
    min: 1.0,
    max: 250.0,
};

pub const THETA_STEP: Knob = Knob {
    name: "theta_step",
    prompt: "Angle step between points (smaller = smoother)",
    min: 0.001,
    max: 0.2,
};

pub const CYCLES: Knob = Knob {
    name: "cycles",
    prompt: "Number of rotations to complete",
    min: 1.0,
    max: 60.0,
};

pub const STROKE_WIDTH: Knob = Knob {
    name: "stroke_width",
    prompt: "Stroke width of the curve",
    min: 0.1,
    max: 10.0,
};

pub const CANVAS_SIZE: Knob = Knob {
    name: "canvas_size",
    prompt: "Canvas size in pixels",
    min: 200.0,
    max: 3000.0,
};

/// All knobs that control a spirograph design
#[derive(Debug, Clone, PartialEq)]
pub struct SpiroConfig {
    pub spiro_type: SpiroType,
    pub outer_radius: f64,
    pub inner_radius: f64,
    pub pen_offset: f64,
    /// Angular increment per sample, in radians
    pub theta_step: f64,
    /// Full revolutions of the rolling circle
    pub cycles: u32,
    pub stroke_width: f64,
    /// Lowercase hex color, `#rgb` or `#rrggbb`
    pub stroke_color: String,
    /// Square canvas side length in pixels
    pub canvas_size: u32,
}

impl Default for SpiroConfig {
    fn default() -> Self {
        Self {
            spiro_type: SpiroType::Hypotrochoid,
            outer_radius: 180.0,
            inner_radius: 75.0,
            pen_offset: 40.0,
            theta_step: 0.02,
            cycles: 20,
            stroke_width: 2.0,
            stroke_color: "#1f77b4".to_string(),
            canvas_size: 900,
        }
    }
}

impl SpiroConfig {
    /// Build a configuration with every knob drawn from a PRNG seeded by the
    /// design number.
    ///
    /// The same design number always produces the same configuration; no
    /// ambient randomness is consulted.
    pub fn randomized(design_number: u64) -> Self {
        let mut rng = Pcg64::seed_from_u64(design_number);
        // Knob order is fixed so a seed always maps to the same design.
        let outer_radius = random_knob(&mut rng, OUTER_RADIUS);
        let inner_radius = random_knob(&mut rng, INNER_RADIUS);
        let pen_offset = random_knob(&mut rng, PEN_OFFSET);
        let theta_step = random_knob(&mut rng, THETA_STEP);
        let cycles = rng.gen_range(CYCLES.min as u32..=CYCLES.max as u32);
        let stroke_width = random_knob(&mut rng, STROKE_WIDTH);
        let canvas_size = rng.gen_range(CANVAS_SIZE.min as u32..=CANVAS_SIZE.max as u32);
        let stroke_color = format!("#{:06x}", rng.gen_range(0u32..=0xFF_FFFF));
        let spiro_type = if rng.gen_bool(0.5) {
            SpiroType::Hypotrochoid
        } else {
            SpiroType::Epitrochoid
        };

        Self {
            spiro_type,
            outer_radius,
            inner_radius,
            pen_offset,
            theta_step,
            cycles,
            stroke_width,
            stroke_color,
            canvas_size,
        }
    }

    /// Check every knob against its mathematical domain.
    ///
    /// `inner_radius == 0` passes here: a zero rolling circle is rejected by
    /// the curve generator as invalid geometry, since it is the curve formula
    /// (not the configuration shape) that divides by it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.outer_radius.is_finite() || self.outer_radius <= 0.0 {
            return Err(invalid("outer_radius", "must be a positive number"));
        }
        if !self.inner_radius.is_finite() || self.inner_radius < 0.0 {
            return Err(invalid("inner_radius", "must not be negative"));
        }
        if !self.pen_offset.is_finite() || self.pen_offset < 0.0 {
            return Err(invalid("pen_offset", "must not be negative"));
        }
        if !self.theta_step.is_finite() || self.theta_step <= 0.0 {
            return Err(invalid("theta_step", "must be a positive number"));
        }
        if self.cycles == 0 {
            return Err(invalid("cycles", "must be at least 1"));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(invalid("stroke_width", "must be a positive number"));
        }
        if self.canvas_size == 0 {
            return Err(invalid("canvas_size", "must be a positive number"));
        }
        Ok(())
    }
}

fn invalid(knob: &'static str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        knob,
        reason: reason.to_string(),
    }
}

/// Draw a uniform value from the knob's range, rounded to 4 decimals so
/// printed summaries stay short.
fn random_knob(rng: &mut Pcg64, knob: Knob) -> f64 {
    (rng.gen_range(knob.min..=knob.max) * 10_000.0).round() / 10_000.0
}

/// Normalize a stroke color to lowercase `#rgb` or `#rrggbb` hex.
pub fn normalize_color(value: &str) -> Result<String, ConfigError> {
    let text = value.trim();
    let valid = text.starts_with('#')
        && matches!(text.len(), 4 | 7)
        && text[1..].chars().all(|c| c.is_ascii_hexdigit());
    if !valid {
        return Err(ConfigError::InvalidColor(value.to_string()));
    }
    Ok(text.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(SpiroConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_theta_step_rejected() {
        let config = SpiroConfig {
            theta_step: 0.0,
            ..SpiroConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { knob: "theta_step", .. }));
    }

    #[test]
    fn test_zero_cycles_rejected() {
        let config = SpiroConfig {
            cycles: 0,
            ..SpiroConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { knob: "cycles", .. }));
    }

    #[test]
    fn test_zero_inner_radius_passes_validation() {
        // Rejected later by the curve generator, not by field validation
        let config = SpiroConfig {
            inner_radius: 0.0,
            ..SpiroConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_negative_radius_rejected() {
        let config = SpiroConfig {
            outer_radius: -5.0,
            ..SpiroConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_canvas_rejected() {
        let config = SpiroConfig {
            canvas_size: 0,
            ..SpiroConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_randomized_is_deterministic() {
        let a = SpiroConfig::randomized(42);
        let b = SpiroConfig::randomized(42);
        assert_eq!(a, b);
    }

    #[test]
    fn test_randomized_differs_across_seeds() {
        let a = SpiroConfig::randomized(1);
        let b = SpiroConfig::randomized(2);
        assert_ne!(a, b);
    }

    #[test]
    fn test_randomized_within_ranges() {
        for seed in 0..32 {
            let config = SpiroConfig::randomized(seed);
            assert!(config.validate().is_ok());
            assert!(OUTER_RADIUS.check(config.outer_radius).is_ok());
            assert!(INNER_RADIUS.check(config.inner_radius).is_ok());
            assert!(PEN_OFFSET.check(config.pen_offset).is_ok());
            assert!(THETA_STEP.check(config.theta_step).is_ok());
            assert!(STROKE_WIDTH.check(config.stroke_width).is_ok());
            assert!(normalize_color(&config.stroke_color).is_ok());
        }
    }

    #[test]
    fn test_spiro_type_round_trip() {
        for ty in [SpiroType::Hypotrochoid, SpiroType::Epitrochoid] {
            assert_eq!(ty.as_str().parse::<SpiroType>().unwrap(), ty);
        }
        assert!("circle".parse::<SpiroType>().is_err());
    }

    #[test]
    fn test_normalize_color() {
        assert_eq!(normalize_color("#FF00AA").unwrap(), "#ff00aa");
        assert_eq!(normalize_color("#f0a").unwrap(), "#f0a");
        assert!(normalize_color("red").is_err());
        assert!(normalize_color("#12345").is_err());
        assert!(normalize_color("#gggggg").is_err());
    }

    #[test]
    fn test_knob_range_check() {
        assert!(OUTER_RADIUS.check(180.0).is_ok());
        assert!(matches!(
            OUTER_RADIUS.check(5.0),
            Err(ConfigError::OutOfRange { knob: "outer_radius", .. })
        ));
        assert!(OUTER_RADIUS.check(500.0).is_err());
    }
}
