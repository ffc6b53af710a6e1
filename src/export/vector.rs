//! Scalable vector markup export for deterministic patterns
//!
//! Geometric grids and grid-layout dot fields have exact vector
//! equivalents; jitter and accent variation are intentionally dropped so the
//! vector output is always the clean deterministic grid. Noise textures and
//! randomly scattered dots are raster-only.

use crate::io::error::{PatternError, Result};
use crate::model::config::{DotsConfig, DotsStyle, GeometricConfig, PatternConfig, ShapeKind};
use crate::render::geometric::shape_vertices;
use std::fmt::Write as _;

/// Whether a pattern has a vector representation
///
/// Callers should check this before offering vector export; [`to_svg`] also
/// rejects unsupported patterns with an explicit error.
pub const fn supports(config: &PatternConfig) -> bool {
    match config {
        PatternConfig::Geometric(_) => true,
        PatternConfig::Dots(c) => matches!(c.style, DotsStyle::Grid),
        PatternConfig::Noise(_) => false,
    }
}

/// Produce a complete SVG document for the pattern
///
/// # Errors
///
/// Returns [`PatternError::VectorUnavailable`] for noise textures and
/// randomly scattered dots, and [`PatternError::InvalidParameter`] when the
/// config fails validation.
pub fn to_svg(width: u32, height: u32, config: &PatternConfig) -> Result<String> {
    config.validate()?;
    let body = match config {
        PatternConfig::Geometric(c) => geometric_markup(width, height, c),
        PatternConfig::Dots(c) if matches!(c.style, DotsStyle::Grid) => {
            dots_markup(width, height, c)
        }
        PatternConfig::Dots(_) => {
            return Err(PatternError::VectorUnavailable {
                reason: "randomly scattered dots are raster-only",
            });
        }
        PatternConfig::Noise(_) => {
            return Err(PatternError::VectorUnavailable {
                reason: "noise textures are raster-only",
            });
        }
    };
    Ok(format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <svg width=\"{width}\" height=\"{height}\" xmlns=\"http://www.w3.org/2000/svg\">\n\
         {body}</svg>\n"
    ))
}

fn background_rect(width: u32, height: u32, fill: &str) -> String {
    format!("  <rect width=\"{width}\" height=\"{height}\" fill=\"{fill}\"/>\n")
}

/// One shape per grid cell, same pitch and over-tiling as the raster pass,
/// jitter fields ignored
fn geometric_markup(width: u32, height: u32, config: &GeometricConfig) -> String {
    let mut body = background_rect(width, height, &config.background_color.to_hex());
    let pitch = config.size + config.spacing;
    if pitch <= 0.0 {
        return body;
    }
    let cols = (f64::from(width) / pitch).ceil() as u32 + 1;
    let rows = (f64::from(height) / pitch).ceil() as u32 + 1;
    let fill = config.shape_color.to_hex();
    let half = config.size / 2.0;

    for row in 0..rows {
        for col in 0..cols {
            let cx = f64::from(col).mul_add(pitch, half);
            let cy = f64::from(row).mul_add(pitch, half);
            let rotate = format!("rotate({} {cx} {cy})", config.rotation);
            match config.shape {
                ShapeKind::Circle => {
                    let _ = writeln!(
                        body,
                        "  <circle cx=\"{cx}\" cy=\"{cy}\" r=\"{half}\" fill=\"{fill}\" transform=\"{rotate}\"/>"
                    );
                }
                ShapeKind::Square => {
                    let _ = writeln!(
                        body,
                        "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{fill}\" transform=\"{rotate}\"/>",
                        cx - half,
                        cy - half,
                        config.size,
                        config.size
                    );
                }
                shape => {
                    let points = shape_vertices(shape, config.size)
                        .iter()
                        .map(|&(x, y)| format!("{},{}", x + cx, y + cy))
                        .collect::<Vec<_>>()
                        .join(" ");
                    let _ = writeln!(
                        body,
                        "  <polygon points=\"{points}\" fill=\"{fill}\" transform=\"{rotate}\"/>"
                    );
                }
            }
        }
    }
    body
}

/// One circle per grid cell with flat color and size
fn dots_markup(width: u32, height: u32, config: &DotsConfig) -> String {
    let mut body = background_rect(width, height, &config.background_color.to_hex());
    let spacing = (config.dot_size * 2.0).max(config.dot_size / config.density);
    if spacing <= 0.0 {
        return body;
    }
    let cols = (f64::from(width) / spacing).ceil() as u32;
    let rows = (f64::from(height) / spacing).ceil() as u32;
    let fill = config.dot_color.to_hex();
    let radius = config.dot_size / 2.0;

    for row in 0..rows {
        for col in 0..cols {
            let cx = f64::from(col).mul_add(spacing, spacing / 2.0);
            let cy = f64::from(row).mul_add(spacing, spacing / 2.0);
            let _ = writeln!(
                body,
                "  <circle cx=\"{cx}\" cy=\"{cy}\" r=\"{radius}\" fill=\"{fill}\"/>"
            );
        }
    }
    body
}
