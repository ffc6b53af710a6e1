//! Caller-owned RGBA pixel surface with primitive fill operations
//!
//! The surface is a plain byte buffer passed into renderers as a capability;
//! renderers mutate pixels and nothing else. Draw operations clip silently at
//! the surface bounds, and zero-sized surfaces are legal no-op targets.

use crate::model::config::Color;

/// An RGBA8 pixel buffer of fixed dimensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelSurface {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelSurface {
    /// Allocate a surface of the given dimensions, initially all zero
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize * 4;
        Self {
            width,
            height,
            data: vec![0; len],
        }
    }

    /// Surface width in pixels
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Surface height in pixels
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// The raw RGBA byte buffer, row-major
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Fill the entire surface with an opaque color
    pub fn fill(&mut self, color: Color) {
        for pixel in self.data.chunks_exact_mut(4) {
            pixel.copy_from_slice(&[color.r, color.g, color.b, 255]);
        }
    }

    /// Read one pixel, or `None` outside the surface bounds
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let offset = self.offset(x, y)?;
        let bytes = self.data.get(offset..offset + 4)?;
        bytes.try_into().ok()
    }

    /// Write one pixel, ignoring coordinates outside the surface bounds
    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        if let Some(offset) = self.offset(x, y) {
            if let Some(bytes) = self.data.get_mut(offset..offset + 4) {
                bytes.copy_from_slice(&rgba);
            }
        }
    }

    fn offset(&self, x: u32, y: u32) -> Option<usize> {
        if x < self.width && y < self.height {
            Some((y as usize * self.width as usize + x as usize) * 4)
        } else {
            None
        }
    }

    /// Blend a color over one pixel with the given alpha in [0, 1]
    ///
    /// The surface stays fully opaque; alpha only weights the source color
    /// against the existing pixel value.
    pub fn blend_pixel(&mut self, x: i64, y: i64, color: Color, alpha: f64) {
        let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
            return;
        };
        if alpha >= 1.0 {
            self.set_pixel(x, y, [color.r, color.g, color.b, 255]);
            return;
        }
        if let Some([dr, dg, db, _]) = self.pixel(x, y) {
            let mix = |src: u8, dst: u8| -> u8 {
                f64::from(src)
                    .mul_add(alpha, f64::from(dst) * (1.0 - alpha))
                    .round() as u8
            };
            self.set_pixel(
                x,
                y,
                [
                    mix(color.r, dr),
                    mix(color.g, dg),
                    mix(color.b, db),
                    255,
                ],
            );
        }
    }

    /// Fill a disk centered at (`cx`, `cy`) with the given radius
    ///
    /// Coverage is decided at pixel centers; the disk clips at the surface
    /// bounds.
    pub fn fill_disk(&mut self, cx: f64, cy: f64, radius: f64, color: Color, alpha: f64) {
        if radius <= 0.0 || alpha <= 0.0 {
            return;
        }
        let r_sq = radius * radius;
        // Clamp the bounding box to the surface so work is proportional to
        // the covered pixels, not the disk extent
        let y_min = ((cy - radius).floor() as i64).max(0);
        let y_max = ((cy + radius).ceil() as i64).min(i64::from(self.height) - 1);
        let x_min = ((cx - radius).floor() as i64).max(0);
        let x_max = ((cx + radius).ceil() as i64).min(i64::from(self.width) - 1);
        for y in y_min..=y_max {
            let dy = y as f64 + 0.5 - cy;
            for x in x_min..=x_max {
                let dx = x as f64 + 0.5 - cx;
                if dx.mul_add(dx, dy * dy) <= r_sq {
                    self.blend_pixel(x, y, color, alpha);
                }
            }
        }
    }

    /// Fill a simple polygon with an even-odd scanline pass
    ///
    /// Vertices are in surface coordinates; a pixel is covered when its
    /// center falls inside the polygon.
    pub fn fill_polygon(&mut self, vertices: &[(f64, f64)], color: Color, alpha: f64) {
        if vertices.len() < 3 || alpha <= 0.0 {
            return;
        }
        let y_min = (vertices
            .iter()
            .map(|v| v.1)
            .fold(f64::INFINITY, f64::min)
            .floor() as i64)
            .max(0);
        let y_max = (vertices
            .iter()
            .map(|v| v.1)
            .fold(f64::NEG_INFINITY, f64::max)
            .ceil() as i64)
            .min(i64::from(self.height) - 1);

        let mut crossings: Vec<f64> = Vec::with_capacity(vertices.len());
        for y in y_min..=y_max {
            let scan_y = y as f64 + 0.5;
            crossings.clear();
            for (i, &(x0, y0)) in vertices.iter().enumerate() {
                let &(x1, y1) = vertices
                    .get((i + 1) % vertices.len())
                    .unwrap_or(&(x0, y0));
                let spans = (y0 <= scan_y && y1 > scan_y) || (y1 <= scan_y && y0 > scan_y);
                if spans {
                    let t = (scan_y - y0) / (y1 - y0);
                    crossings.push(t.mul_add(x1 - x0, x0));
                }
            }
            crossings.sort_by(f64::total_cmp);
            for pair in crossings.chunks_exact(2) {
                if let [start, end] = pair {
                    let first = ((start - 0.5).ceil() as i64).max(0);
                    let last = ((end - 0.5).floor() as i64).min(i64::from(self.width) - 1);
                    for x in first..=last {
                        self.blend_pixel(x, y, color, alpha);
                    }
                }
            }
        }
    }
}
