//! Typed configuration model for the three pattern families
//!
//! Configs are a sum type keyed by [`PatternKind`]; dispatch matches on the
//! tag rather than probing field shapes. Colors are typed RGB triples that
//! serialize as `"#rrggbb"` strings so malformed hex can never reach a
//! renderer.

use crate::io::configuration::{DEFAULT_PATTERN_NAME, MAX_NAME_LENGTH};
use crate::io::error::{Result, invalid_parameter};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Identifies which pattern family a configuration describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternKind {
    /// Rotated grid of polygon shapes
    Geometric,
    /// Dot field in grid or scattered layout
    Dots,
    /// Blocky random grain texture
    Noise,
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Geometric => write!(f, "geometric"),
            Self::Dots => write!(f, "dots"),
            Self::Noise => write!(f, "noise"),
        }
    }
}

/// Shape drawn in each cell of a geometric pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// Disk with diameter equal to the cell size
    Circle,
    /// Axis-aligned square (before rotation)
    Square,
    /// Equilateral triangle, apex up
    Triangle,
    /// Regular hexagon, first vertex at the top
    Hexagon,
    /// Five-point star with inner radius at half the outer radius
    Star,
    /// Square rotated 45 degrees
    Diamond,
    /// Regular pentagon, first vertex at the top
    Pentagon,
}

/// Layout style for dot patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DotsStyle {
    /// Dots centered in a regular grid
    Grid,
    /// Dots scattered at uniform random positions
    Random,
}

/// Opaque RGB color
///
/// Serializes to and from `"#rrggbb"` hex strings to match the share-token
/// wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Color {
    /// Create a color from RGB channel values
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `"#rrggbb"` or `"rrggbb"` hex string
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(digits.get(0..2)?, 16).ok()?;
        let g = u8::from_str_radix(digits.get(2..4)?, 16).ok()?;
        let b = u8::from_str_radix(digits.get(4..6)?, 16).ok()?;
        Some(Self { r, g, b })
    }

    /// Format as a lowercase `"#rrggbb"` hex string
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Self::from_hex(&hex)
            .ok_or_else(|| D::Error::custom(format!("'{hex}' is not a #rrggbb color")))
    }
}

/// Configuration for a rotated grid of polygon shapes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeometricConfig {
    /// Shape drawn in each grid cell
    pub shape: ShapeKind,
    /// Shape size in pixels, must be positive
    pub size: f64,
    /// Gap between cells in pixels, must be non-negative
    pub spacing: f64,
    /// Per-shape rotation in degrees
    pub rotation: f64,
    /// Fill color for shapes
    pub shape_color: Color,
    /// Background fill color
    pub background_color: Color,
    /// Percent size jitter per instance (0-100)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_variation: Option<f64>,
    /// Enables per-instance random RGB jitter of the shape color
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_variation: Option<bool>,
    /// Uniform alpha over the whole draw pass (0-100, default 100)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

/// Configuration for a dot field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DotsConfig {
    /// Dot diameter in pixels, must be positive
    pub dot_size: f64,
    /// Fill fraction in (0, 1], drives spacing and count
    pub density: f64,
    /// Percent size jitter per dot (0-100)
    pub size_variation: f64,
    /// Grid or random layout
    pub style: DotsStyle,
    /// Primary dot color
    pub dot_color: Color,
    /// Secondary color used by a deterministic subset of dots
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<Color>,
    /// Background fill color
    pub background_color: Color,
}

/// Configuration for a blocky grain texture
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoiseConfig {
    /// Blend strength as a percentage (0-100)
    pub intensity: f64,
    /// Side length in pixels of each noise block, at least 1
    pub scale: u32,
    /// Color cast applied with the noise
    pub color_tint: Color,
    /// Background fill color
    pub background_color: Color,
}

/// Tagged union over the three pattern configurations
///
/// Untagged on the wire: the share-token JSON carries the kind separately,
/// and the per-kind required fields are disjoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatternConfig {
    /// Rotated grid of polygon shapes
    Geometric(GeometricConfig),
    /// Dot field in grid or scattered layout
    Dots(DotsConfig),
    /// Blocky random grain texture
    Noise(NoiseConfig),
}

impl PatternConfig {
    /// The pattern family this configuration belongs to
    pub const fn kind(&self) -> PatternKind {
        match self {
            Self::Geometric(_) => PatternKind::Geometric,
            Self::Dots(_) => PatternKind::Dots,
            Self::Noise(_) => PatternKind::Noise,
        }
    }

    /// The background fill color of the configuration
    pub const fn background_color(&self) -> Color {
        match self {
            Self::Geometric(c) => c.background_color,
            Self::Dots(c) => c.background_color,
            Self::Noise(c) => c.background_color,
        }
    }

    /// Validate all numeric parameters against their allowed ranges
    ///
    /// # Errors
    ///
    /// Returns [`crate::PatternError::InvalidParameter`] naming the first
    /// field that is out of range or not finite.
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Geometric(c) => c.validate(),
            Self::Dots(c) => c.validate(),
            Self::Noise(c) => c.validate(),
        }
    }
}

fn check_finite(parameter: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(invalid_parameter(parameter, &value, &"must be finite"))
    }
}

fn check_percent(parameter: &'static str, value: f64) -> Result<()> {
    check_finite(parameter, value)?;
    if (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(invalid_parameter(
            parameter,
            &value,
            &"must be between 0 and 100",
        ))
    }
}

impl GeometricConfig {
    /// Validate sizes, spacing, and optional jitter ranges
    ///
    /// # Errors
    ///
    /// Returns an error naming the first out-of-range field.
    pub fn validate(&self) -> Result<()> {
        check_finite("size", self.size)?;
        if self.size <= 0.0 {
            return Err(invalid_parameter("size", &self.size, &"must be positive"));
        }
        check_finite("spacing", self.spacing)?;
        if self.spacing < 0.0 {
            return Err(invalid_parameter(
                "spacing",
                &self.spacing,
                &"must be non-negative",
            ));
        }
        check_finite("rotation", self.rotation)?;
        if let Some(variation) = self.size_variation {
            check_percent("sizeVariation", variation)?;
        }
        if let Some(opacity) = self.opacity {
            check_percent("opacity", opacity)?;
        }
        Ok(())
    }
}

impl DotsConfig {
    /// Validate dot size, density, and jitter ranges
    ///
    /// # Errors
    ///
    /// Returns an error naming the first out-of-range field.
    pub fn validate(&self) -> Result<()> {
        check_finite("dotSize", self.dot_size)?;
        if self.dot_size <= 0.0 {
            return Err(invalid_parameter(
                "dotSize",
                &self.dot_size,
                &"must be positive",
            ));
        }
        check_finite("density", self.density)?;
        if !(self.density > 0.0 && self.density <= 1.0) {
            return Err(invalid_parameter(
                "density",
                &self.density,
                &"must be in (0, 1]",
            ));
        }
        check_percent("sizeVariation", self.size_variation)
    }
}

impl NoiseConfig {
    /// Validate intensity and block scale
    ///
    /// # Errors
    ///
    /// Returns an error naming the first out-of-range field.
    pub fn validate(&self) -> Result<()> {
        check_percent("intensity", self.intensity)?;
        if self.scale < 1 {
            return Err(invalid_parameter(
                "scale",
                &self.scale,
                &"must be at least 1",
            ));
        }
        Ok(())
    }
}

/// A named pattern configuration, the unit of history and sharing
#[derive(Debug, Clone, PartialEq)]
pub struct PatternState {
    /// The active pattern configuration
    pub config: PatternConfig,
    /// Display name, trimmed and bounded in length
    pub name: String,
}

impl PatternState {
    /// Create a state with a normalized name
    ///
    /// The name is trimmed, truncated to [`MAX_NAME_LENGTH`] characters, and
    /// replaced with [`DEFAULT_PATTERN_NAME`] when blank.
    pub fn new(config: PatternConfig, name: &str) -> Self {
        let trimmed = name.trim();
        let name = if trimmed.is_empty() {
            DEFAULT_PATTERN_NAME.to_string()
        } else {
            trimmed.chars().take(MAX_NAME_LENGTH).collect()
        };
        Self { config, name }
    }

    /// The pattern family of the held configuration
    pub const fn kind(&self) -> PatternKind {
        self.config.kind()
    }
}
