//! Rotated grid renderer for the seven polygon shapes
//!
//! Tiles one extra row and column beyond the surface so partially clipped
//! shapes cover the edges with no visible seams. Size and color jitter are
//! sampled per instance from the injected random source; jitter-free configs
//! are pixel-deterministic regardless of that source's state.

use crate::io::configuration::COLOR_JITTER_RANGE;
use crate::model::config::{Color, GeometricConfig, ShapeKind};
use crate::render::jittered_size;
use crate::render::surface::PixelSurface;
use rand::Rng;
use std::f64::consts::{PI, TAU};

/// Fill the surface with a rotated grid of shapes
pub fn draw<R: Rng>(surface: &mut PixelSurface, config: &GeometricConfig, rng: &mut R) {
    surface.fill(config.background_color);

    let pitch = config.size + config.spacing;
    if pitch <= 0.0 {
        return;
    }
    let cols = (f64::from(surface.width()) / pitch).ceil() as u32 + 1;
    let rows = (f64::from(surface.height()) / pitch).ceil() as u32 + 1;

    let alpha = (config.opacity.unwrap_or(100.0) / 100.0).clamp(0.0, 1.0);
    let rotation = config.rotation.to_radians();
    let variation = config.size_variation.unwrap_or(0.0);
    let vary_color = config.color_variation == Some(true);

    for row in 0..rows {
        for col in 0..cols {
            let cx = f64::from(col).mul_add(pitch, config.size / 2.0);
            let cy = f64::from(row).mul_add(pitch, config.size / 2.0);
            let actual_size = jittered_size(config.size, variation, rng);
            let color = if vary_color {
                jitter_color(config.shape_color, rng)
            } else {
                config.shape_color
            };
            draw_shape(
                surface,
                config.shape,
                cx,
                cy,
                actual_size,
                rotation,
                color,
                alpha,
            );
        }
    }
}

/// Perturb each channel by a uniform offset within the jitter range
fn jitter_color<R: Rng>(color: Color, rng: &mut R) -> Color {
    let mut channel = |base: u8| -> u8 {
        let offset = rng.random_range(-COLOR_JITTER_RANGE..=COLOR_JITTER_RANGE);
        (i32::from(base) + offset).clamp(0, 255) as u8
    };
    Color::new(channel(color.r), channel(color.g), channel(color.b))
}

fn draw_shape(
    surface: &mut PixelSurface,
    shape: ShapeKind,
    cx: f64,
    cy: f64,
    size: f64,
    rotation: f64,
    color: Color,
    alpha: f64,
) {
    if let ShapeKind::Circle = shape {
        surface.fill_disk(cx, cy, size / 2.0, color, alpha);
        return;
    }
    let (sin, cos) = rotation.sin_cos();
    let placed: Vec<(f64, f64)> = shape_vertices(shape, size)
        .iter()
        .map(|&(x, y)| (x.mul_add(cos, -(y * sin)) + cx, x.mul_add(sin, y * cos) + cy))
        .collect();
    surface.fill_polygon(&placed, color, alpha);
}

/// Vertices of a shape centered at the origin, before rotation
///
/// Circles have no vertex form and return an empty list.
pub(crate) fn shape_vertices(shape: ShapeKind, size: f64) -> Vec<(f64, f64)> {
    let half = size / 2.0;
    match shape {
        ShapeKind::Circle => Vec::new(),
        ShapeKind::Square => vec![(-half, -half), (half, -half), (half, half), (-half, half)],
        ShapeKind::Triangle => {
            let height = size * 3.0_f64.sqrt() / 2.0;
            vec![
                (0.0, -height / 2.0),
                (-half, height / 2.0),
                (half, height / 2.0),
            ]
        }
        ShapeKind::Hexagon => regular_polygon(6, half),
        ShapeKind::Pentagon => regular_polygon(5, half),
        ShapeKind::Star => {
            // Outer and inner vertices alternate every pi/5 radians
            (0..10)
                .map(|i| {
                    let radius = if i % 2 == 0 { half } else { size / 4.0 };
                    let angle = f64::from(i).mul_add(PI / 5.0, -PI / 2.0);
                    (radius * angle.cos(), radius * angle.sin())
                })
                .collect()
        }
        ShapeKind::Diamond => vec![(0.0, -half), (half, 0.0), (0.0, half), (-half, 0.0)],
    }
}

fn regular_polygon(sides: u32, radius: f64) -> Vec<(f64, f64)> {
    (0..sides)
        .map(|i| {
            let angle = (f64::from(i) / f64::from(sides)).mul_add(TAU, -PI / 2.0);
            (radius * angle.cos(), radius * angle.sin())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_vertex_counts() {
        assert_eq!(shape_vertices(ShapeKind::Circle, 10.0).len(), 0);
        assert_eq!(shape_vertices(ShapeKind::Square, 10.0).len(), 4);
        assert_eq!(shape_vertices(ShapeKind::Triangle, 10.0).len(), 3);
        assert_eq!(shape_vertices(ShapeKind::Hexagon, 10.0).len(), 6);
        assert_eq!(shape_vertices(ShapeKind::Pentagon, 10.0).len(), 5);
        assert_eq!(shape_vertices(ShapeKind::Star, 10.0).len(), 10);
        assert_eq!(shape_vertices(ShapeKind::Diamond, 10.0).len(), 4);
    }

    #[test]
    fn test_polygons_start_at_top() {
        for shape in [ShapeKind::Hexagon, ShapeKind::Pentagon, ShapeKind::Star] {
            let vertices = shape_vertices(shape, 10.0);
            let first = vertices.first().copied().unwrap_or_default();
            assert!(first.0.abs() < 1e-9, "{shape:?} first vertex x: {}", first.0);
            assert!(
                (first.1 + 5.0).abs() < 1e-9,
                "{shape:?} first vertex y: {}",
                first.1
            );
        }
    }
}
