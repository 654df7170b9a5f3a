//! Configuration for SVG output

/// Configuration options for the rendered document
#[derive(Debug, Clone)]
pub struct SvgConfig {
    /// Fraction of the canvas the curve may occupy; the rest is border
    pub margin_fraction: f64,

    /// Decimal places used for path coordinates
    pub precision: usize,

    /// Background fill for the canvas rect, or None for no background
    pub background: Option<String>,

    /// Whether to include the XML declaration
    pub standalone: bool,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            margin_fraction: 0.9,
            precision: 3,
            background: Some("white".to_string()),
            standalone: true,
        }
    }
}

impl SvgConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fraction of the canvas the curve may occupy
    pub fn with_margin_fraction(mut self, fraction: f64) -> Self {
        self.margin_fraction = fraction;
        self
    }

    /// Set the number of decimal places for path coordinates
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Set the background fill color
    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.background = Some(color.into());
        self
    }

    /// Render with a transparent background
    pub fn without_background(mut self) -> Self {
        self.background = None;
        self
    }

    /// Set whether output includes the XML declaration
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SvgConfig::default();
        assert_eq!(config.margin_fraction, 0.9);
        assert_eq!(config.precision, 3);
        assert_eq!(config.background.as_deref(), Some("white"));
        assert!(config.standalone);
    }

    #[test]
    fn test_builder_pattern() {
        let config = SvgConfig::new()
            .with_margin_fraction(0.8)
            .with_precision(2)
            .without_background()
            .with_standalone(false);

        assert_eq!(config.margin_fraction, 0.8);
        assert_eq!(config.precision, 2);
        assert_eq!(config.background, None);
        assert!(!config.standalone);
    }
}
