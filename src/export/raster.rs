//! PNG encoding of rendered pixel surfaces
//!
//! The core hands finished byte buffers to external save collaborators; the
//! disk variant exists for the CLI and creates parent directories the way a
//! save dialog would.

use crate::io::error::{PatternError, Result};
use crate::render::surface::PixelSurface;
use image::{ImageBuffer, Rgba, RgbaImage};
use std::io::Cursor;
use std::path::Path;

fn to_image(surface: &PixelSurface) -> Result<RgbaImage> {
    let (width, height) = (surface.width(), surface.height());
    ImageBuffer::<Rgba<u8>, _>::from_raw(width, height, surface.data().to_vec()).ok_or(
        PatternError::InvalidSurface { width, height },
    )
}

/// Encode the surface as an in-memory PNG byte stream
///
/// # Errors
///
/// Returns [`PatternError::InvalidSurface`] for zero-sized surfaces and
/// [`PatternError::ImageEncode`] if PNG encoding fails.
pub fn encode_png(surface: &PixelSurface) -> Result<Vec<u8>> {
    if surface.width() == 0 || surface.height() == 0 {
        return Err(PatternError::InvalidSurface {
            width: surface.width(),
            height: surface.height(),
        });
    }
    let img = to_image(surface)?;
    let mut bytes = Cursor::new(Vec::new());
    img.write_to(&mut bytes, image::ImageFormat::Png)
        .map_err(|e| PatternError::ImageEncode { source: e })?;
    Ok(bytes.into_inner())
}

/// Save the surface as a PNG file, creating parent directories
///
/// # Errors
///
/// Returns an error if the surface is zero-sized, the parent directory
/// cannot be created, or the image cannot be written.
pub fn save_png(surface: &PixelSurface, path: &Path) -> Result<()> {
    if surface.width() == 0 || surface.height() == 0 {
        return Err(PatternError::InvalidSurface {
            width: surface.width(),
            height: surface.height(),
        });
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| PatternError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }
    let img = to_image(surface)?;
    img.save(path).map_err(|e| PatternError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })
}
