//! Dot field renderer with grid and random layouts
//!
//! Grid layout spaces dots so they never touch at high density and stripes
//! the accent color along every third diagonal. Random layout deliberately
//! under-fills relative to naive area coverage; the divisor is an empirical
//! tuning constant, not a geometric identity.

use crate::io::configuration::{ACCENT_INTERVAL, ACCENT_PROBABILITY, RANDOM_DOT_DIVISOR};
use crate::model::config::{DotsConfig, DotsStyle};
use crate::render::jittered_size;
use crate::render::surface::PixelSurface;
use rand::Rng;
use std::f64::consts::PI;

/// Fill the surface with a dot field
pub fn draw<R: Rng>(surface: &mut PixelSurface, config: &DotsConfig, rng: &mut R) {
    surface.fill(config.background_color);
    match config.style {
        DotsStyle::Grid => draw_grid(surface, config, rng),
        DotsStyle::Random => draw_random(surface, config, rng),
    }
}

/// Center-to-center spacing for grid dots
///
/// The `dot_size * 2` floor guarantees dots never touch when density is
/// high; lower densities spread them further apart.
fn grid_spacing(config: &DotsConfig) -> f64 {
    (config.dot_size * 2.0).max(config.dot_size / config.density)
}

fn draw_grid<R: Rng>(surface: &mut PixelSurface, config: &DotsConfig, rng: &mut R) {
    let spacing = grid_spacing(config);
    if spacing <= 0.0 {
        return;
    }
    let cols = (f64::from(surface.width()) / spacing).ceil() as u32;
    let rows = (f64::from(surface.height()) / spacing).ceil() as u32;

    for row in 0..rows {
        for col in 0..cols {
            let x = f64::from(col).mul_add(spacing, spacing / 2.0);
            let y = f64::from(row).mul_add(spacing, spacing / 2.0);
            let dot_size = jittered_size(config.dot_size, config.size_variation, rng);
            let color = match config.accent_color {
                Some(accent) if (row + col) % ACCENT_INTERVAL == 0 => accent,
                _ => config.dot_color,
            };
            surface.fill_disk(x, y, dot_size / 2.0, color, 1.0);
        }
    }
}

struct ScatteredDot {
    x: f64,
    y: f64,
    size: f64,
    accent: bool,
}

fn draw_random<R: Rng>(surface: &mut PixelSurface, config: &DotsConfig, rng: &mut R) {
    let width = f64::from(surface.width());
    let height = f64::from(surface.height());
    let dot_area = PI * (config.dot_size / 2.0).powi(2);
    if dot_area <= 0.0 {
        return;
    }
    let count = (width * height * config.density / dot_area / RANDOM_DOT_DIVISOR).floor() as usize;

    let mut dots = Vec::with_capacity(count);
    for _ in 0..count {
        dots.push(ScatteredDot {
            x: rng.random::<f64>() * width,
            y: rng.random::<f64>() * height,
            size: jittered_size(config.dot_size, config.size_variation, rng),
            accent: config.accent_color.is_some() && rng.random::<f64>() < ACCENT_PROBABILITY,
        });
    }

    // Generation order doubles as draw order; overlap in dense scatter
    // resolves to the later dot.
    for dot in dots {
        let color = match config.accent_color {
            Some(accent) if dot.accent => accent,
            _ => config.dot_color,
        };
        surface.fill_disk(dot.x, dot.y, dot.size / 2.0, color, 1.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::config::Color;

    fn grid_config(dot_size: f64, density: f64) -> DotsConfig {
        DotsConfig {
            dot_size,
            density,
            size_variation: 0.0,
            style: DotsStyle::Grid,
            dot_color: Color::new(0, 0, 0),
            accent_color: None,
            background_color: Color::new(255, 255, 255),
        }
    }

    #[test]
    fn test_spacing_floors_at_twice_dot_size() {
        // High density: the 2x floor wins
        assert_eq!(grid_spacing(&grid_config(20.0, 0.9)), 40.0);
        // Low density: dots spread out
        assert_eq!(grid_spacing(&grid_config(20.0, 0.25)), 80.0);
    }
}
