//! Raster (PNG) and vector (SVG) export of rendered patterns
//!
//! Exports render against independent off-screen surfaces so they can never
//! race with or corrupt a live preview surface.

/// PNG encoding of rendered pixel surfaces
pub mod raster;
/// Scalable vector markup export
pub mod vector;

use crate::io::configuration::MAX_EXPORT_DIMENSION;
use crate::io::error::{PatternError, Result};
use crate::model::config::PatternConfig;
use crate::render::surface::PixelSurface;
use rand::SeedableRng as _;
use rand::rngs::StdRng;

/// Render a pattern into a freshly allocated off-screen surface
///
/// The surface is sized to the requested export resolution and rendered
/// with a seeded random source, so jittered exports are reproducible.
///
/// # Errors
///
/// Returns [`PatternError::InvalidSurface`] when either dimension is zero
/// or exceeds the maximum export resolution, or a validation error from the
/// renderer.
pub fn render_offscreen(config: &PatternConfig, width: u32, height: u32, seed: u64) -> Result<PixelSurface> {
    if width == 0 || height == 0 || width > MAX_EXPORT_DIMENSION || height > MAX_EXPORT_DIMENSION {
        return Err(PatternError::InvalidSurface { width, height });
    }
    let mut surface = PixelSurface::new(width, height);
    let mut rng = StdRng::seed_from_u64(seed);
    crate::render::render(&mut surface, config, &mut rng)?;
    Ok(surface)
}
