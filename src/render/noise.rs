//! Blocky grain texture renderer
//!
//! The surface is partitioned into scale-by-scale blocks; all pixels in a
//! block share one noise draw, so grain coarseness equals the block scale.
//! Intensity controls the blend strength and the tint controls the color
//! cast. Zero intensity leaves the background untouched.

use crate::model::config::NoiseConfig;
use crate::render::surface::PixelSurface;
use rand::Rng;

/// Fill the surface with background color perturbed by blocky noise
pub fn draw<R: Rng>(surface: &mut PixelSurface, config: &NoiseConfig, rng: &mut R) {
    surface.fill(config.background_color);

    let intensity = (config.intensity / 100.0).clamp(0.0, 1.0);
    if intensity <= 0.0 {
        return;
    }
    let scale = config.scale.max(1);
    let tint = config.color_tint;
    let (width, height) = (surface.width(), surface.height());

    let mut y = 0;
    while y < height {
        let mut x = 0;
        while x < width {
            let noise = rng.random::<f64>();
            let noise_value = noise * intensity * 255.0;
            for dy in 0..scale.min(height - y) {
                for dx in 0..scale.min(width - x) {
                    let (px, py) = (x + dx, y + dy);
                    if let Some([r, g, b, _]) = surface.pixel(px, py) {
                        surface.set_pixel(
                            px,
                            py,
                            [
                                perturb(r, tint.r, noise, noise_value),
                                perturb(g, tint.g, noise, noise_value),
                                perturb(b, tint.b, noise, noise_value),
                                255,
                            ],
                        );
                    }
                }
            }
            x += scale;
        }
        y += scale;
    }
}

/// Blend one channel: base plus tint cast plus recentered noise, clamped
fn perturb(base: u8, tint: u8, noise: f64, noise_value: f64) -> u8 {
    f64::from(tint)
        .mul_add(noise, f64::from(base) + noise_value - 128.0)
        .clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perturb_clamps_both_ends() {
        assert_eq!(perturb(10, 0, 0.0, 0.0), 0);
        assert_eq!(perturb(250, 255, 1.0, 255.0), 255);
    }
}
