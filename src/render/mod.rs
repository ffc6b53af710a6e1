//! Pixel surface and the three pattern renderers
//!
//! Rendering is synchronous and runs to completion on the calling thread;
//! the surface is the renderer's only side effect. The random source is
//! injected by the caller, so seeded sources make jittered renders
//! reproducible.

/// Dot field renderer with grid and random layouts
pub mod dots;
/// Rotated grid renderer for polygon shapes
pub mod geometric;
/// Blocky grain texture renderer
pub mod noise;
/// Caller-owned RGBA pixel surface
pub mod surface;

use crate::io::error::Result;
use crate::model::config::PatternConfig;
use crate::render::surface::PixelSurface;
use rand::Rng;

/// Render a pattern into the surface, dispatching on the config's kind
///
/// The config is validated first; the matching renderer then fills the
/// surface in place. Kind and config cannot disagree because the tag
/// travels with the config itself.
///
/// # Errors
///
/// Returns [`crate::PatternError::InvalidParameter`] when a config field is
/// out of range; the surface is untouched in that case.
pub fn render<R: Rng>(
    surface: &mut PixelSurface,
    config: &PatternConfig,
    rng: &mut R,
) -> Result<()> {
    config.validate()?;
    match config {
        PatternConfig::Geometric(c) => geometric::draw(surface, c, rng),
        PatternConfig::Dots(c) => dots::draw(surface, c, rng),
        PatternConfig::Noise(c) => noise::draw(surface, c, rng),
    }
    Ok(())
}

/// Sample a jittered size in `[size * (1 - variation/100), size]`
///
/// Draws from the random source only when variation is positive, so
/// jitter-free configs render identically regardless of the source's state.
pub(crate) fn jittered_size<R: Rng>(size: f64, variation: f64, rng: &mut R) -> f64 {
    if variation <= 0.0 {
        return size;
    }
    let fraction = variation / 100.0;
    size * (1.0 - fraction + rng.random::<f64>() * fraction)
}
