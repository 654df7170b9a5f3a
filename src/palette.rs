//! Stroke color palettes
//!
//! Stroke colors can be given either as literal hex values or as symbolic
//! tokens resolved through a palette. Palettes are TOML files, so a set of
//! designs can share a color scheme without repeating hex codes.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::config::{normalize_color, ConfigError};

/// Errors that can occur when loading or parsing palettes
#[derive(Error, Debug)]
pub enum PaletteError {
    #[error("failed to read palette file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse palette TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error(transparent)]
    Color(#[from] ConfigError),
}

/// A palette mapping symbolic color tokens to hex values
#[derive(Debug, Clone)]
pub struct Palette {
    /// Optional name for the palette
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// Color mappings: token name -> hex color
    pub colors: HashMap<String, String>,
}

/// TOML structure for deserializing palettes
#[derive(Deserialize)]
struct TomlPalette {
    metadata: Option<TomlMetadata>,
    colors: HashMap<String, String>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

/// Built-in palette: the tab10 plotting hues, led by the default stroke blue
const DEFAULT_PALETTE: &str = r##"
[colors]
ink-1 = "#1f77b4"
ink-2 = "#ff7f0e"
ink-3 = "#2ca02c"
ink-4 = "#d62728"
ink-5 = "#9467bd"
ink-6 = "#8c564b"
ink-7 = "#e377c2"
ink-8 = "#7f7f7f"
ink-9 = "#bcbd22"
ink-10 = "#17becf"
"##;

impl Palette {
    /// Load a palette from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, PaletteError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a palette from a TOML string
    pub fn from_str(content: &str) -> Result<Self, PaletteError> {
        let parsed: TomlPalette = toml::from_str(content)?;

        Ok(Palette {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            colors: parsed.colors,
        })
    }

    /// Resolve a symbolic token to a hex value.
    ///
    /// Returns None if the token is not defined in this palette.
    pub fn resolve(&self, token: &str) -> Option<&str> {
        self.colors.get(token).map(|s| s.as_str())
    }

    /// Resolve a stroke color to a normalized hex value.
    ///
    /// Literal hex values pass through (normalized to lowercase). Tokens are
    /// looked up in this palette, then in the built-in palette; unknown
    /// tokens fall back to the default stroke blue.
    pub fn resolve_stroke(&self, value: &str) -> Result<String, PaletteError> {
        if value.trim().starts_with('#') {
            return Ok(normalize_color(value)?);
        }

        if let Some(color) = self.resolve(value) {
            return Ok(normalize_color(color)?);
        }

        let builtin = Self::default();
        if let Some(color) = builtin.resolve(value) {
            return Ok(normalize_color(color)?);
        }

        Ok("#1f77b4".to_string())
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::from_str(DEFAULT_PALETTE).expect("built-in palette should be valid TOML")
    }
}
